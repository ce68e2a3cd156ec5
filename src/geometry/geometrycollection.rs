use crate::config::DEFAULT_SRID;
use crate::geometry::{Coordinates, Geometry, GeometryType, GeometryVariant, Point};

/// An ordered, possibly empty, collection of geometries of any variant.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    srid: u32,
}

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self::new_with_srid(geometries, DEFAULT_SRID)
    }

    pub fn new_with_srid(geometries: Vec<Geometry>, srid: u32) -> Self {
        Self { geometries, srid }.with_srid(srid)
    }

    /// Tag this collection and every nested member with `srid`.
    pub fn with_srid(self, srid: u32) -> Self {
        let geometries = self
            .geometries
            .into_iter()
            .map(|member| member.with_srid(srid))
            .collect();
        Self { geometries, srid }
    }

    pub fn srid(&self) -> u32 {
        self.srid
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::GeometryCollection
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn get(&self, i: usize) -> Option<&Geometry> {
        self.geometries.get(i)
    }

    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Geometry> {
        self.geometries.iter()
    }

    pub fn coordinates(&self) -> Vec<Coordinates> {
        self.geometries.iter().map(Geometry::coordinates).collect()
    }

    /// Every leaf point of every member, descending into nested collections.
    pub fn points(&self) -> Vec<Point> {
        self.geometries.iter().flat_map(Geometry::points).collect()
    }
}

impl GeometryVariant for GeometryCollection {
    const GEOMETRY_TYPE: GeometryType = GeometryType::GeometryCollection;
}

impl FromIterator<Geometry> for GeometryCollection {
    fn from_iter<T: IntoIterator<Item = Geometry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
