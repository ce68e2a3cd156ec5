//! Conversion to [`geo`] types, so values can be handed to the `geo` algorithm ecosystem.
//!
//! SRIDs are dropped: `geo` geometries carry no coordinate reference system.

use geo::{coord, Rect};

use crate::bounding_box::BoundingBox;
use crate::error::{GeoError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

/// Convert a Point to a [`geo::Point`].
pub fn point_to_geo(point: &Point) -> geo::Point {
    geo::Point::new(point.longitude(), point.latitude())
}

/// Convert a LineString to a [`geo::LineString`].
pub fn line_string_to_geo(line_string: &LineString) -> geo::LineString {
    geo::LineString::new(
        line_string
            .iter()
            .map(|point| coord! { x: point.longitude(), y: point.latitude() })
            .collect(),
    )
}

/// Convert a Polygon to a [`geo::Polygon`].
///
/// The first ring becomes the exterior, the rest the interiors.
pub fn polygon_to_geo(polygon: &Polygon) -> geo::Polygon {
    let exterior = line_string_to_geo(polygon.exterior());
    let interiors = polygon.interiors().iter().map(line_string_to_geo).collect();
    geo::Polygon::new(exterior, interiors)
}

pub fn multi_point_to_geo(multi_point: &MultiPoint) -> geo::MultiPoint {
    geo::MultiPoint::new(multi_point.iter().map(point_to_geo).collect())
}

pub fn multi_line_string_to_geo(multi_line_string: &MultiLineString) -> geo::MultiLineString {
    geo::MultiLineString::new(
        multi_line_string
            .line_strings()
            .iter()
            .map(line_string_to_geo)
            .collect(),
    )
}

pub fn multi_polygon_to_geo(multi_polygon: &MultiPolygon) -> geo::MultiPolygon {
    geo::MultiPolygon::new(
        multi_polygon
            .polygons()
            .iter()
            .map(polygon_to_geo)
            .collect(),
    )
}

pub fn geometry_collection_to_geo(collection: &GeometryCollection) -> geo::GeometryCollection {
    geo::GeometryCollection::new_from(collection.iter().map(geometry_to_geo).collect())
}

/// Convert any Geometry to a [`geo::Geometry`].
pub fn geometry_to_geo(geometry: &Geometry) -> geo::Geometry {
    match geometry {
        Geometry::Point(geom) => geo::Geometry::Point(point_to_geo(geom)),
        Geometry::LineString(geom) => geo::Geometry::LineString(line_string_to_geo(geom)),
        Geometry::Polygon(geom) => geo::Geometry::Polygon(polygon_to_geo(geom)),
        Geometry::MultiPoint(geom) => geo::Geometry::MultiPoint(multi_point_to_geo(geom)),
        Geometry::MultiLineString(geom) => {
            geo::Geometry::MultiLineString(multi_line_string_to_geo(geom))
        }
        Geometry::MultiPolygon(geom) => geo::Geometry::MultiPolygon(multi_polygon_to_geo(geom)),
        Geometry::GeometryCollection(geom) => {
            geo::Geometry::GeometryCollection(geometry_collection_to_geo(geom))
        }
    }
}

macro_rules! impl_to_geo {
    ($variant:ident, $convert:ident) => {
        impl From<&$variant> for geo::$variant {
            fn from(value: &$variant) -> Self {
                $convert(value)
            }
        }
    };
}

impl_to_geo!(Point, point_to_geo);
impl_to_geo!(LineString, line_string_to_geo);
impl_to_geo!(Polygon, polygon_to_geo);
impl_to_geo!(MultiPoint, multi_point_to_geo);
impl_to_geo!(MultiLineString, multi_line_string_to_geo);
impl_to_geo!(MultiPolygon, multi_polygon_to_geo);
impl_to_geo!(GeometryCollection, geometry_collection_to_geo);
impl_to_geo!(Geometry, geometry_to_geo);

impl BoundingBox {
    /// This box as a [`geo::Rect`].
    ///
    /// A rectangle cannot wrap, so a box crossing the antimeridian fails with
    /// [`GeoError::InvalidArgument`].
    pub fn to_rect(&self) -> Result<Rect> {
        if self.crosses_antimeridian() {
            return Err(GeoError::InvalidArgument(
                "Cannot convert antimeridian-crossing bounding box to Rect".to_string(),
            ));
        }
        Ok(Rect::new(
            coord! { x: self.left(), y: self.bottom() },
            coord! { x: self.right(), y: self.top() },
        ))
    }
}
