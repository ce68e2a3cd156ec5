use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{GeoError, Result};
use crate::geometry::GeometryType;

/// Set on an EWKB type code when a 4-byte SRID follows the type code
pub const EWKB_SRID_FLAG: u32 = 0x2000_0000;
/// Set on an EWKB type code when coordinates carry a Z value
pub const EWKB_Z_FLAG: u32 = 0x8000_0000;
/// Set on an EWKB type code when coordinates carry an M value
pub const EWKB_M_FLAG: u32 = 0x4000_0000;

/// The 2D WKB types supported by this crate
#[derive(Clone, Copy, Debug, PartialEq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WKBType {
    /// A WKB Point
    Point = 1,
    /// A WKB LineString
    LineString = 2,
    /// A WKB Polygon
    Polygon = 3,
    /// A WKB MultiPoint
    MultiPoint = 4,
    /// A WKB MultiLineString
    MultiLineString = 5,
    /// A WKB MultiPolygon
    MultiPolygon = 6,
    /// A WKB GeometryCollection
    GeometryCollection = 7,
}

impl WKBType {
    /// Split a raw (E)WKB type code into its type and whether an SRID follows.
    pub fn from_code(code: u32) -> Result<(Self, bool)> {
        if code & (EWKB_Z_FLAG | EWKB_M_FLAG) != 0 {
            return Err(GeoError::ParseError(format!(
                "Unsupported WKB dimension in type code {code:#x}, only 2D geometries are supported"
            )));
        }
        let has_srid = code & EWKB_SRID_FLAG != 0;
        let base = code & !EWKB_SRID_FLAG;
        if base > 1000 {
            return Err(GeoError::ParseError(format!(
                "Unsupported WKB dimension in type code {base}, only 2D geometries are supported"
            )));
        }
        let wkb_type = Self::try_from_primitive(base)
            .map_err(|_| GeoError::ParseError(format!("Unknown WKB type code {base}")))?;
        Ok((wkb_type, has_srid))
    }

    /// The raw type code, with [`EWKB_SRID_FLAG`] set if `has_srid`.
    pub fn to_code(self, has_srid: bool) -> u32 {
        let code: u32 = self.into();
        if has_srid {
            code | EWKB_SRID_FLAG
        } else {
            code
        }
    }
}

impl From<GeometryType> for WKBType {
    fn from(value: GeometryType) -> Self {
        match value {
            GeometryType::Point => WKBType::Point,
            GeometryType::LineString => WKBType::LineString,
            GeometryType::Polygon => WKBType::Polygon,
            GeometryType::MultiPoint => WKBType::MultiPoint,
            GeometryType::MultiLineString => WKBType::MultiLineString,
            GeometryType::MultiPolygon => WKBType::MultiPolygon,
            GeometryType::GeometryCollection => WKBType::GeometryCollection,
        }
    }
}

impl From<WKBType> for GeometryType {
    fn from(value: WKBType) -> Self {
        match value {
            WKBType::Point => GeometryType::Point,
            WKBType::LineString => GeometryType::LineString,
            WKBType::Polygon => GeometryType::Polygon,
            WKBType::MultiPoint => GeometryType::MultiPoint,
            WKBType::MultiLineString => GeometryType::MultiLineString,
            WKBType::MultiPolygon => GeometryType::MultiPolygon,
            WKBType::GeometryCollection => GeometryType::GeometryCollection,
        }
    }
}

/// Endianness
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Endianness {
    BigEndian,
    #[default]
    LittleEndian,
}

impl TryFrom<u8> for Endianness {
    type Error = GeoError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            other => Err(GeoError::ParseError(format!(
                "Unexpected WKB byte order {other}"
            ))),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        use Endianness::*;
        match value {
            BigEndian => 0,
            LittleEndian => 1,
        }
    }
}
