//! Defines [`GeoError`], representing all errors returned by this crate.

use std::fmt::Debug;

use thiserror::Error;

use crate::geometry::GeometryType;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoError {
    /// A longitude or latitude outside of its declared range
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Wrong component count or component type for a geometry variant
    #[error("Invalid geometry structure: {0}")]
    InvalidGeometryStructure(String),

    /// Corner points that do not describe a valid bounding box
    #[error("Invalid bounding box points: {0}")]
    InvalidBoundingBoxPoints(String),

    /// Malformed WKT, WKB or structured input
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The decoded geometry is not the variant that was requested
    #[error("Expected {expected}, {found} given")]
    TypeMismatch {
        expected: GeometryType,
        found: GeometryType,
    },

    /// Bounding box derivation was requested on a variant that does not support it
    #[error("Cannot create bounding box from {0}")]
    UnsupportedGeometryType(GeometryType),

    /// A caller supplied argument was rejected
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// [serde_json::Error]
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Whenever a component count does not fit in the 32-bit WKB count field.
    #[error("Overflow: {0} components do not fit in a u32 count")]
    Overflow(usize),
}

impl GeoError {
    /// Returns true if this error was caused by malformed external data rather than by the
    /// caller.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, GeoError::ParseError(_) | GeoError::Json(_))
    }
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoError>;
