//! Read and write geometries in the structured GeoJSON form.
//!
//! `{"type": "<Name>", "coordinates": [...]}` maps to every variant except
//! [`GeometryCollection`](crate::GeometryCollection), which uses
//! `{"type": "GeometryCollection", "geometries": [...]}`. On read, a `FeatureCollection` is
//! unwrapped into a `GeometryCollection` of its features' geometries and their properties are
//! discarded.

mod reader;
mod writer;

pub use reader::{read_geojson, GeoJsonReader};
pub use writer::ToGeoJson;
