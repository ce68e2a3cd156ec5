use std::io::Cursor;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use log::{debug, trace};

use crate::config::SpatialConfig;
use crate::error::{GeoError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, GeometryVariant, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::io::wkb::common::{Endianness, WKBType};
use crate::io::MAX_NESTING_DEPTH;

/// The smallest possible encoding of a nested geometry: byte order, type code and a count.
const MIN_NESTED_BYTES: usize = 1 + 4 + 4;
/// Two f64s
const COORD_BYTES: usize = 2 * 8;
/// A ring is at least its point count
const MIN_RING_BYTES: usize = 4;

/// Parse (E)WKB into a [`Geometry`] using the default configuration.
pub fn read_wkb(buf: &[u8]) -> Result<Geometry> {
    WkbReader::default().read(buf)
}

/// A WKB decoder that validates the buffer length at every step.
#[derive(Debug, Clone, Default)]
pub struct WkbReader {
    config: SpatialConfig,
}

impl WkbReader {
    pub fn new(config: SpatialConfig) -> Self {
        Self { config }
    }

    /// Decode `buf`. The SRID is taken from the EWKB header if present, else from the
    /// configured default.
    pub fn read(&self, buf: &[u8]) -> Result<Geometry> {
        trace!("decoding {} bytes of WKB", buf.len());
        let mut decoder = Decoder::new(buf);
        let geometry = decoder
            .geometry(None, self.config.default_srid)
            .and_then(|geometry| {
                if decoder.remaining() != 0 {
                    return Err(GeoError::ParseError(format!(
                        "{} unexpected trailing bytes after WKB geometry",
                        decoder.remaining()
                    )));
                }
                Ok(geometry)
            })
            .map_err(|err| {
                debug!("failed to decode WKB: {err}");
                err
            })?;
        Ok(geometry)
    }

    /// Decode `buf` and require the result to be of variant `G`.
    pub fn read_as<G: GeometryVariant>(&self, buf: &[u8]) -> Result<G> {
        G::try_from(self.read(buf)?)
    }
}

struct Decoder<'a> {
    reader: Cursor<&'a [u8]>,
    depth: usize,
}

fn truncated(err: std::io::Error) -> GeoError {
    GeoError::ParseError(format!("Truncated WKB: {err}"))
}

impl<'a> Decoder<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self {
            reader: Cursor::new(buf),
            depth: 0,
        }
    }

    fn remaining(&self) -> usize {
        let len = self.reader.get_ref().len() as u64;
        len.saturating_sub(self.reader.position()) as usize
    }

    fn read_u8(&mut self) -> Result<u8> {
        self.reader.read_u8().map_err(truncated)
    }

    fn read_u32(&mut self, byte_order: Endianness) -> Result<u32> {
        match byte_order {
            Endianness::BigEndian => self.reader.read_u32::<BigEndian>(),
            Endianness::LittleEndian => self.reader.read_u32::<LittleEndian>(),
        }
        .map_err(truncated)
    }

    fn read_f64(&mut self, byte_order: Endianness) -> Result<f64> {
        match byte_order {
            Endianness::BigEndian => self.reader.read_f64::<BigEndian>(),
            Endianness::LittleEndian => self.reader.read_f64::<LittleEndian>(),
        }
        .map_err(truncated)
    }

    /// Read an element count and check that `count` elements of at least `min_size` bytes each
    /// can still fit in the buffer.
    fn read_count(&mut self, byte_order: Endianness, min_size: usize) -> Result<usize> {
        let count = self.read_u32(byte_order)? as usize;
        let needed = count.saturating_mul(min_size);
        if needed > self.remaining() {
            return Err(GeoError::ParseError(format!(
                "WKB declares {count} elements needing at least {needed} bytes, {} remaining",
                self.remaining()
            )));
        }
        Ok(count)
    }

    /// Decode one geometry including its header.
    ///
    /// `inherited_srid` is the SRID of the enclosing geometry, if any; nested geometries do not
    /// carry their own.
    fn geometry(&mut self, inherited_srid: Option<u32>, default_srid: u32) -> Result<Geometry> {
        let byte_order = Endianness::try_from(self.read_u8()?)?;
        let (wkb_type, has_srid) = WKBType::from_code(self.read_u32(byte_order)?)?;
        let srid = if has_srid {
            self.read_u32(byte_order)?
        } else {
            inherited_srid.unwrap_or(default_srid)
        };
        trace!("decoding WKB {wkb_type:?} ({byte_order:?}, srid {srid})");

        let geometry = match wkb_type {
            WKBType::Point => self.point(byte_order, srid)?.into(),
            WKBType::LineString => self.line_string(byte_order, srid)?.into(),
            WKBType::Polygon => self.polygon(byte_order, srid)?.into(),
            WKBType::MultiPoint => {
                MultiPoint::try_from_geometries(self.members(byte_order, srid)?, srid)?.into()
            }
            WKBType::MultiLineString => {
                MultiLineString::try_from_geometries(self.members(byte_order, srid)?, srid)?
                    .into()
            }
            WKBType::MultiPolygon => {
                MultiPolygon::try_from_geometries(self.members(byte_order, srid)?, srid)?.into()
            }
            WKBType::GeometryCollection => {
                GeometryCollection::new_with_srid(self.members(byte_order, srid)?, srid).into()
            }
        };
        Ok(geometry)
    }

    fn point(&mut self, byte_order: Endianness, srid: u32) -> Result<Point> {
        let x = self.read_f64(byte_order)?;
        let y = self.read_f64(byte_order)?;
        Point::new_with_srid(x, y, srid)
    }

    /// Raw coordinates preceded by a count, without per-point headers.
    fn line_string(&mut self, byte_order: Endianness, srid: u32) -> Result<LineString> {
        let num_points = self.read_count(byte_order, COORD_BYTES)?;
        let points = (0..num_points)
            .map(|_| self.point(byte_order, srid))
            .collect::<Result<Vec<_>>>()?;
        LineString::new_with_srid(points, srid)
    }

    fn polygon(&mut self, byte_order: Endianness, srid: u32) -> Result<Polygon> {
        let num_rings = self.read_count(byte_order, MIN_RING_BYTES)?;
        let rings = (0..num_rings)
            .map(|_| self.line_string(byte_order, srid))
            .collect::<Result<Vec<_>>>()?;
        Polygon::new_with_srid(rings, srid)
    }

    /// A count followed by that many complete nested geometries, each with its own header.
    fn members(&mut self, byte_order: Endianness, srid: u32) -> Result<Vec<Geometry>> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(GeoError::ParseError(format!(
                "WKB geometries nested deeper than {MAX_NESTING_DEPTH} levels"
            )));
        }
        self.depth += 1;
        let members = self.nested_geometries(byte_order, srid);
        self.depth -= 1;
        members
    }

    fn nested_geometries(&mut self, byte_order: Endianness, srid: u32) -> Result<Vec<Geometry>> {
        let num_geometries = self.read_count(byte_order, MIN_NESTED_BYTES)?;
        (0..num_geometries)
            .map(|_| self.geometry(Some(srid), srid))
            .collect()
    }
}
