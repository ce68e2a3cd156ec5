//! Explicit configuration shared by the codecs and the bounding box engine.

use serde::{Deserialize, Serialize};

use crate::storage::StorageFormat;

/// The SRID used when neither the payload nor the caller supplies one.
pub const DEFAULT_SRID: u32 = 0;

/// How strictly [`BoundingBox`](crate::BoundingBox) corners are validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundingBoxValidation {
    /// Only the latitude ordering is checked. A left edge east of the right edge is read as a
    /// box crossing the antimeridian.
    #[default]
    AntimeridianAware,

    /// Both the latitude and the longitude ordering are checked, so boxes can never cross the
    /// antimeridian.
    Legacy,
}

/// Settings threaded through [`WktReader`](crate::io::wkt::WktReader),
/// [`WkbReader`](crate::io::wkb::WkbReader), [`GeoJsonReader`](crate::io::geojson::GeoJsonReader)
/// and [`GeometryStore`](crate::storage::GeometryStore).
///
/// A host is expected to build this once before parsing begins and share it by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpatialConfig {
    /// SRID assigned to geometries whose SRID is not given explicitly
    pub default_srid: u32,

    /// Validation mode used when constructing bounding boxes
    pub bounding_box_validation: BoundingBoxValidation,

    /// Storage format used by [`GeometryStore`](crate::storage::GeometryStore)
    pub storage_format: StorageFormat,
}

impl SpatialConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_srid(self, default_srid: u32) -> Self {
        Self {
            default_srid,
            ..self
        }
    }

    pub fn with_bounding_box_validation(self, validation: BoundingBoxValidation) -> Self {
        Self {
            bounding_box_validation: validation,
            ..self
        }
    }

    pub fn with_storage_format(self, storage_format: StorageFormat) -> Self {
        Self {
            storage_format,
            ..self
        }
    }

    /// Pick the explicit SRID if given, else the configured default.
    pub fn resolve_srid(&self, srid: Option<u32>) -> u32 {
        srid.unwrap_or(self.default_srid)
    }
}

impl Default for SpatialConfig {
    fn default() -> Self {
        Self {
            default_srid: DEFAULT_SRID,
            bounding_box_validation: BoundingBoxValidation::default(),
            storage_format: StorageFormat::default(),
        }
    }
}
