use crate::config::DEFAULT_SRID;
use crate::error::Result;
use crate::geometry::{
    check_min_len, downcast_all, Geometry, GeometryType, GeometryVariant, Point, Position,
};

/// A non-empty collection of points.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    points: Vec<Point>,
    srid: u32,
}

impl MultiPoint {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        Self::new_with_srid(points, DEFAULT_SRID)
    }

    pub fn new_with_srid(points: Vec<Point>, srid: u32) -> Result<Self> {
        check_min_len(GeometryType::MultiPoint, points.len(), 1)?;
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
        let points = downcast_all(GeometryType::MultiPoint, geometries)?;
        Self::new_with_srid(points, srid)
    }

    pub fn srid(&self) -> u32 {
        self.srid
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPoint
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn coordinates(&self) -> Vec<Position> {
        self.points.iter().map(Point::coordinates).collect()
    }

    pub fn points(&self) -> Vec<Point> {
        self.points.clone()
    }
}

impl GeometryVariant for MultiPoint {
    const GEOMETRY_TYPE: GeometryType = GeometryType::MultiPoint;
}
