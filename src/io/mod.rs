//! Readers and writers for the text, binary and structured encodings of geometries, plus
//! interoperability with the `geo` crate.

pub mod geo;
pub mod geojson;
pub mod wkb;
pub mod wkt;

/// Deepest nesting of geometry collections the readers accept, the same as the recursion limit
/// of `serde_json`.
pub(crate) const MAX_NESTING_DEPTH: usize = 128;
