//! Immutable [OGC Simple Features](https://www.ogc.org/standard/sfa/) geometry values for
//! longitude/latitude data, with codecs for WKT, WKB and GeoJSON, plus bounding boxes that
//! understand the antimeridian.
//!
//! ```
//! use geovalue::{Geometry, GeometryVariant, LineString, ToWkt};
//!
//! let line = LineString::from_wkt("LINESTRING(175 50, -175 55, 170 60)", Some(4326)).unwrap();
//! assert_eq!(line.srid(), 4326);
//!
//! let bbox = Geometry::from(line).bounding_box(0.).unwrap();
//! assert!(bbox.crosses_antimeridian());
//! assert_eq!(
//!     bbox.to_geometry().unwrap().to_wkt(),
//!     "MULTIPOLYGON(((170 50, 180 50, 180 60, 170 60, 170 50)), ((-180 50, -175 50, -175 60, -180 60, -180 50)))"
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use bounding_box::BoundingBox;
pub use config::{BoundingBoxValidation, SpatialConfig, DEFAULT_SRID};
pub use error::{GeoError, Result};
pub use geometry::{
    Coordinates, Geometry, GeometryCollection, GeometryType, GeometryVariant, LineString,
    MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Position,
};
pub use io::geojson::ToGeoJson;
pub use io::wkb::ToWkb;
pub use io::wkt::ToWkt;

pub mod bounding_box;
pub mod config;
pub mod coord;
pub mod error;
pub mod geometry;
pub mod io;
pub mod storage;
#[cfg(test)]
pub(crate) mod test;
