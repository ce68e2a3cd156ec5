use crate::bounding_box::BoundingBox;
use crate::error::{GeoError, Result};
use crate::geometry::{
    Coordinates, GeometryCollection, GeometryType, GeometryVariant, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};

/// Any geometry value.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    pub fn srid(&self) -> u32 {
        match self {
            Geometry::Point(g) => g.srid(),
            Geometry::LineString(g) => g.srid(),
            Geometry::Polygon(g) => g.srid(),
            Geometry::MultiPoint(g) => g.srid(),
            Geometry::MultiLineString(g) => g.srid(),
            Geometry::MultiPolygon(g) => g.srid(),
            Geometry::GeometryCollection(g) => g.srid(),
        }
    }

    /// Tag this geometry and every nested member with `srid`.
    pub fn with_srid(self, srid: u32) -> Self {
        match self {
            Geometry::Point(g) => Geometry::Point(g.with_srid(srid)),
            Geometry::LineString(g) => Geometry::LineString(g.with_srid(srid)),
            Geometry::Polygon(g) => Geometry::Polygon(g.with_srid(srid)),
            Geometry::MultiPoint(g) => Geometry::MultiPoint(g.with_srid(srid)),
            Geometry::MultiLineString(g) => Geometry::MultiLineString(g.with_srid(srid)),
            Geometry::MultiPolygon(g) => Geometry::MultiPolygon(g.with_srid(srid)),
            Geometry::GeometryCollection(g) => Geometry::GeometryCollection(g.with_srid(srid)),
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        match self {
            Geometry::Point(g) => Coordinates::Point(g.coordinates()),
            Geometry::LineString(g) => Coordinates::LineString(g.coordinates()),
            Geometry::Polygon(g) => Coordinates::Polygon(g.coordinates()),
            Geometry::MultiPoint(g) => Coordinates::MultiPoint(g.coordinates()),
            Geometry::MultiLineString(g) => Coordinates::MultiLineString(g.coordinates()),
            Geometry::MultiPolygon(g) => Coordinates::MultiPolygon(g.coordinates()),
            Geometry::GeometryCollection(g) => Coordinates::GeometryCollection(g.coordinates()),
        }
    }

    /// The recursively flattened sequence of leaf points.
    pub fn points(&self) -> Vec<Point> {
        match self {
            Geometry::Point(g) => g.points(),
            Geometry::LineString(g) => g.points(),
            Geometry::Polygon(g) => g.points(),
            Geometry::MultiPoint(g) => g.points(),
            Geometry::MultiLineString(g) => g.points(),
            Geometry::MultiPolygon(g) => g.points(),
            Geometry::GeometryCollection(g) => g.points(),
        }
    }

    /// The minimal bounding box of this geometry, see [`BoundingBox::from_geometry`].
    pub fn bounding_box(&self, min_padding: f64) -> Result<BoundingBox> {
        BoundingBox::from_geometry(self, min_padding)
    }

    /// Downcast into a concrete variant.
    pub fn into_variant<G: GeometryVariant>(self) -> Result<G> {
        G::try_from(self)
    }
}

macro_rules! impl_variant_conversions {
    ($variant:ident) => {
        impl From<$variant> for Geometry {
            fn from(value: $variant) -> Self {
                Geometry::$variant(value)
            }
        }

        impl TryFrom<Geometry> for $variant {
            type Error = GeoError;

            fn try_from(value: Geometry) -> Result<Self> {
                match value {
                    Geometry::$variant(geom) => Ok(geom),
                    other => Err(GeoError::TypeMismatch {
                        expected: GeometryType::$variant,
                        found: other.geometry_type(),
                    }),
                }
            }
        }
    };
}

impl_variant_conversions!(Point);
impl_variant_conversions!(LineString);
impl_variant_conversions!(Polygon);
impl_variant_conversions!(MultiPoint);
impl_variant_conversions!(MultiLineString);
impl_variant_conversions!(MultiPolygon);
impl_variant_conversions!(GeometryCollection);
