//! Read and write geometries as Well-Known Text.
//!
//! The SRID is not part of plain WKT. It is supplied by the caller or taken from
//! [`SpatialConfig`](crate::SpatialConfig), unless the text starts with an EWKT `SRID=<n>;`
//! prefix.

mod reader;
mod writer;

pub use reader::{read_wkt, WktReader};
pub use writer::ToWkt;
