use crate::config::DEFAULT_SRID;
use crate::error::Result;
use crate::geometry::{
    check_min_len, downcast_all, Geometry, GeometryType, GeometryVariant, Point, Polygon,
    Position,
};

/// A non-empty collection of polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    srid: u32,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Result<Self> {
        Self::new_with_srid(polygons, DEFAULT_SRID)
    }

    pub fn new_with_srid(polygons: Vec<Polygon>, srid: u32) -> Result<Self> {
        check_min_len(GeometryType::MultiPolygon, polygons.len(), 1)?;
        Ok(Self { polygons, srid }.with_srid(srid))
    }

    /// Tag this geometry and every nested member with `srid`.
    pub fn with_srid(self, srid: u32) -> Self {
        let polygons = self
            .polygons
            .into_iter()
            .map(|member| Polygon::with_srid(member, srid))
            .collect();
        Self { polygons, srid }
    }

    /// Build from generic geometries, each of which must be a [`Polygon`].
    pub fn try_from_geometries(geometries: Vec<Geometry>, srid: u32) -> Result<Self> {
        let polygons = downcast_all(GeometryType::MultiPolygon, geometries)?;
        Self::new_with_srid(polygons, srid)
    }

    pub fn srid(&self) -> u32 {
        self.srid
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPolygon
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn coordinates(&self) -> Vec<Vec<Vec<Position>>> {
        self.polygons.iter().map(Polygon::coordinates).collect()
    }

    pub fn points(&self) -> Vec<Point> {
        self.polygons.iter().flat_map(Polygon::points).collect()
    }
}

impl GeometryVariant for MultiPolygon {
    const GEOMETRY_TYPE: GeometryType = GeometryType::MultiPolygon;
}
