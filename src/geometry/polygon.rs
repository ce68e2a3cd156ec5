use crate::config::DEFAULT_SRID;
use crate::error::Result;
use crate::geometry::{
    check_min_len, downcast_all, Geometry, GeometryType, GeometryVariant, LineString, Point,
    Position,
};

/// An ordered sequence of one or more rings.
///
/// The first ring is the exterior, any further rings are holes. Ring closedness is a convention
/// and is not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    rings: Vec<LineString>,
    srid: u32,
}

impl Polygon {
    pub fn new(rings: Vec<LineString>) -> Result<Self> {
        Self::new_with_srid(rings, DEFAULT_SRID)
    }

    pub fn new_with_srid(rings: Vec<LineString>, srid: u32) -> Result<Self> {
        check_min_len(GeometryType::Polygon, rings.len(), 1)?;
        Ok(Self { rings, srid }.with_srid(srid))
    }

    /// Tag this geometry and every nested member with `srid`.
    pub fn with_srid(self, srid: u32) -> Self {
        let rings = self
            .rings
            .into_iter()
            .map(|member| LineString::with_srid(member, srid))
            .collect();
        Self { rings, srid }
    }

    /// Build from generic geometries, each of which must be a [`LineString`].
    pub fn try_from_geometries(geometries: Vec<Geometry>, srid: u32) -> Result<Self> {
        let rings = downcast_all(GeometryType::Polygon, geometries)?;
        Self::new_with_srid(rings, srid)
    }

    pub fn srid(&self) -> u32 {
        self.srid
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::Polygon
    }

    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    pub fn exterior(&self) -> &LineString {
        &self.rings[0]
    }

    pub fn interiors(&self) -> &[LineString] {
        &self.rings[1..]
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn coordinates(&self) -> Vec<Vec<Position>> {
        self.rings.iter().map(LineString::coordinates).collect()
    }

    pub fn points(&self) -> Vec<Point> {
        self.rings.iter().flat_map(LineString::iter).copied().collect()
    }
}

impl GeometryVariant for Polygon {
    const GEOMETRY_TYPE: GeometryType = GeometryType::Polygon;
}
