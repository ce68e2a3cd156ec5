use crate::config::DEFAULT_SRID;
use crate::error::Result;
use crate::geometry::{
    check_min_len, downcast_all, Geometry, GeometryType, GeometryVariant, Point, Position,
};

/// An ordered sequence of at least two points.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    points: Vec<Point>,
    srid: u32,
}

impl LineString {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        Self::new_with_srid(points, DEFAULT_SRID)
    }

    pub fn new_with_srid(points: Vec<Point>, srid: u32) -> Result<Self> {
        check_min_len(GeometryType::LineString, points.len(), 2)?;
        Ok(Self { points, srid }.with_srid(srid))
    }

    /// Tag this geometry and every nested member with `srid`.
    pub fn with_srid(self, srid: u32) -> Self {
        let points = self
            .points
            .into_iter()
            .map(|member| Point::with_srid(member, srid))
            .collect();
        Self { points, srid }
    }

    /// Build from generic geometries, each of which must be a [`Point`].
    pub fn try_from_geometries(geometries: Vec<Geometry>, srid: u32) -> Result<Self> {
        let points = downcast_all(GeometryType::LineString, geometries)?;
        Self::new_with_srid(points, srid)
    }

    pub fn srid(&self) -> u32 {
        self.srid
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::LineString
    }

    /// The number of points in this line.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a line holds at least two points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Point> {
        self.points.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// True when the first and last points coincide.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first.coordinates() == last.coordinates(),
            _ => false,
        }
    }

    pub fn coordinates(&self) -> Vec<Position> {
        self.points.iter().map(Point::coordinates).collect()
    }

    pub fn points(&self) -> Vec<Point> {
        self.points.clone()
    }
}

impl<'a> IntoIterator for &'a LineString {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl GeometryVariant for LineString {
    const GEOMETRY_TYPE: GeometryType = GeometryType::LineString;
}
