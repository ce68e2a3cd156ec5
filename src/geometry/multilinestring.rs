use crate::config::DEFAULT_SRID;
use crate::error::Result;
use crate::geometry::{
    check_min_len, downcast_all, Geometry, GeometryType, GeometryVariant, LineString, Point,
    Position,
};

/// A non-empty collection of line strings.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
    srid: u32,
}

impl MultiLineString {
    pub fn new(line_strings: Vec<LineString>) -> Result<Self> {
        Self::new_with_srid(line_strings, DEFAULT_SRID)
    }

    pub fn new_with_srid(line_strings: Vec<LineString>, srid: u32) -> Result<Self> {
        check_min_len(GeometryType::MultiLineString, line_strings.len(), 1)?;
        Ok(Self { line_strings, srid }.with_srid(srid))
    }

    /// Tag this geometry and every nested member with `srid`.
    pub fn with_srid(self, srid: u32) -> Self {
        let line_strings = self
            .line_strings
            .into_iter()
            .map(|member| LineString::with_srid(member, srid))
            .collect();
        Self { line_strings, srid }
    }

    /// Build from generic geometries, each of which must be a [`LineString`].
    pub fn try_from_geometries(geometries: Vec<Geometry>, srid: u32) -> Result<Self> {
        let line_strings = downcast_all(GeometryType::MultiLineString, geometries)?;
        Self::new_with_srid(line_strings, srid)
    }

    pub fn srid(&self) -> u32 {
        self.srid
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiLineString
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    pub fn len(&self) -> usize {
        self.line_strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_strings.is_empty()
    }

    pub fn coordinates(&self) -> Vec<Vec<Position>> {
        self.line_strings
            .iter()
            .map(LineString::coordinates)
            .collect()
    }

    pub fn points(&self) -> Vec<Point> {
        self.line_strings
            .iter()
            .flat_map(LineString::iter)
            .copied()
            .collect()
    }
}

impl GeometryVariant for MultiLineString {
    const GEOMETRY_TYPE: GeometryType = GeometryType::MultiLineString;
}
