//! Immutable geometry values following the OGC Simple Features model.
//!
//! Each variant is its own struct and [`Geometry`] is the closed sum over all of them. Every
//! constructor validates the structural invariants of its variant, so a value that exists is
//! always well formed.

mod coordinates;
mod geometry;
mod geometry_type;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub use coordinates::{Coordinates, Position};
pub use geometry::Geometry;
pub use geometry_type::GeometryType;
pub use geometrycollection::GeometryCollection;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;

use log::debug;

use crate::error::{GeoError, Result};

/// A concrete geometry variant that can be requested from the codecs.
///
/// Decoding through one of these entry points fails with [`GeoError::TypeMismatch`] when the
/// payload holds a different variant.
pub trait GeometryVariant:
    Sized + Clone + Into<Geometry> + TryFrom<Geometry, Error = GeoError>
{
    /// The tag of this variant
    const GEOMETRY_TYPE: GeometryType;

    /// Parse WKT using the default configuration.
    fn from_wkt(wkt: &str, srid: Option<u32>) -> Result<Self> {
        crate::io::wkt::WktReader::default().read_as(wkt, srid)
    }

    /// Parse (E)WKB using the default configuration.
    fn from_wkb(buf: &[u8]) -> Result<Self> {
        crate::io::wkb::WkbReader::default().read_as(buf)
    }

    /// Parse GeoJSON text using the default configuration.
    fn from_json(json: &str, srid: Option<u32>) -> Result<Self> {
        crate::io::geojson::GeoJsonReader::default().read_str_as(json, srid)
    }

    /// Parse an already decoded GeoJSON value using the default configuration.
    fn from_array(value: &serde_json::Value, srid: Option<u32>) -> Result<Self> {
        crate::io::geojson::GeoJsonReader::default().read_value_as(value, srid)
    }
}

/// Fail with [`GeoError::InvalidGeometryStructure`] when `len` is below the minimum of `kind`.
pub(crate) fn check_min_len(kind: GeometryType, len: usize, min: usize) -> Result<()> {
    if len < min {
        debug!("{kind} built from {len} components, at least {min} required");
        return Err(GeoError::InvalidGeometryStructure(format!(
            "{kind} must contain at least {min} {}, {len} given",
            if min == 1 { "entry" } else { "entries" }
        )));
    }
    Ok(())
}

/// Downcast each member of `geometries` to `G`, rejecting any member of another variant.
pub(crate) fn downcast_all<G: GeometryVariant>(
    kind: GeometryType,
    geometries: Vec<Geometry>,
) -> Result<Vec<G>> {
    geometries
        .into_iter()
        .map(|geometry| {
            let found = geometry.geometry_type();
            G::try_from(geometry).map_err(|_| {
                GeoError::InvalidGeometryStructure(format!(
                    "{kind} must be a collection of {}, {found} given",
                    G::GEOMETRY_TYPE
                ))
            })
        })
        .collect()
}
