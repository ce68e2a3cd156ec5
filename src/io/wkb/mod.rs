//! Read and write geometries as Well-Known Binary.
//!
//! Both byte orders are accepted on read. The extended (EWKB) form, where the type code carries
//! [`EWKB_SRID_FLAG`] and is followed by a 4-byte SRID, is supported in both directions. Only
//! 2D geometries are supported.

mod common;
mod reader;
mod writer;

pub use common::{Endianness, WKBType, EWKB_M_FLAG, EWKB_SRID_FLAG, EWKB_Z_FLAG};
pub use reader::{read_wkb, WkbReader};
pub use writer::{ToWkb, WkbWriteOptions};
