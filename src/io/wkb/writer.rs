use std::io::Write;

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

use crate::error::{GeoError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::io::wkb::common::{Endianness, WKBType};

/// Options for [`ToWkb::write_wkb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WkbWriteOptions {
    /// Byte order of every header and coordinate
    pub endianness: Endianness,

    /// Emit the extended (EWKB) SRID header when the geometry's SRID is non-zero
    pub include_srid: bool,
}

impl WkbWriteOptions {
    pub fn with_endianness(self, endianness: Endianness) -> Self {
        Self { endianness, ..self }
    }

    pub fn with_srid(self, include_srid: bool) -> Self {
        Self {
            include_srid,
            ..self
        }
    }
}

impl Default for WkbWriteOptions {
    fn default() -> Self {
        Self {
            endianness: Endianness::LittleEndian,
            include_srid: true,
        }
    }
}

/// Serialize a geometry as (E)WKB.
pub trait ToWkb {
    /// Write this geometry to `writer`.
    fn write_wkb<W: Write>(&self, writer: &mut W, options: WkbWriteOptions) -> Result<()>;

    /// The number of bytes [`Self::write_wkb`] emits without an SRID header.
    fn wkb_size(&self) -> usize;

    /// Little-endian WKB, extended with the SRID when it is non-zero.
    fn to_wkb(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.wkb_size() + 4);
        self.write_wkb(&mut buf, WkbWriteOptions::default())?;
        Ok(buf)
    }
}

/// The byte length of a WKB header (byte order and type code)
const HEADER_BYTES: usize = 1 + 4;

/// The byte length of a WKBPoint
pub fn point_wkb_size() -> usize {
    HEADER_BYTES + 2 * 8
}

/// The byte length of the body of a WKBLineString: the count and the raw coordinates
fn line_string_body_size(geom: &LineString) -> usize {
    4 + geom.len() * 2 * 8
}

/// The byte length of a WKBLineString
pub fn line_string_wkb_size(geom: &LineString) -> usize {
    HEADER_BYTES + line_string_body_size(geom)
}

/// The byte length of a WKBPolygon
pub fn polygon_wkb_size(geom: &Polygon) -> usize {
    HEADER_BYTES + 4 + geom.rings().iter().map(line_string_body_size).sum::<usize>()
}

/// The byte length of a WKBMultiPoint
pub fn multi_point_wkb_size(geom: &MultiPoint) -> usize {
    HEADER_BYTES + 4 + geom.len() * point_wkb_size()
}

/// The byte length of a WKBMultiLineString
pub fn multi_line_string_wkb_size(geom: &MultiLineString) -> usize {
    HEADER_BYTES
        + 4
        + geom
            .line_strings()
            .iter()
            .map(line_string_wkb_size)
            .sum::<usize>()
}

/// The byte length of a WKBMultiPolygon
pub fn multi_polygon_wkb_size(geom: &MultiPolygon) -> usize {
    HEADER_BYTES + 4 + geom.polygons().iter().map(polygon_wkb_size).sum::<usize>()
}

/// The byte length of a WKBGeometryCollection
pub fn geometry_collection_wkb_size(geom: &GeometryCollection) -> usize {
    HEADER_BYTES + 4 + geom.iter().map(geometry_wkb_size).sum::<usize>()
}

/// The byte length of any geometry
pub fn geometry_wkb_size(geom: &Geometry) -> usize {
    match geom {
        Geometry::Point(_) => point_wkb_size(),
        Geometry::LineString(g) => line_string_wkb_size(g),
        Geometry::Polygon(g) => polygon_wkb_size(g),
        Geometry::MultiPoint(g) => multi_point_wkb_size(g),
        Geometry::MultiLineString(g) => multi_line_string_wkb_size(g),
        Geometry::MultiPolygon(g) => multi_polygon_wkb_size(g),
        Geometry::GeometryCollection(g) => geometry_collection_wkb_size(g),
    }
}

struct Encoder<'w, W: Write> {
    writer: &'w mut W,
    endianness: Endianness,
}

impl<'w, W: Write> Encoder<'w, W> {
    fn u32(&mut self, value: u32) -> Result<()> {
        match self.endianness {
            Endianness::BigEndian => self.writer.write_u32::<BigEndian>(value)?,
            Endianness::LittleEndian => self.writer.write_u32::<LittleEndian>(value)?,
        }
        Ok(())
    }

    fn f64(&mut self, value: f64) -> Result<()> {
        match self.endianness {
            Endianness::BigEndian => self.writer.write_f64::<BigEndian>(value)?,
            Endianness::LittleEndian => self.writer.write_f64::<LittleEndian>(value)?,
        }
        Ok(())
    }

    fn count(&mut self, count: usize) -> Result<()> {
        let count = u32::try_from(count).map_err(|_| GeoError::Overflow(count))?;
        self.u32(count)
    }

    /// Byte order, type code and, when `srid` is given, the EWKB SRID.
    fn header(&mut self, wkb_type: WKBType, srid: Option<u32>) -> Result<()> {
        self.writer.write_u8(self.endianness.into())?;
        self.u32(wkb_type.to_code(srid.is_some()))?;
        if let Some(srid) = srid {
            self.u32(srid)?;
        }
        Ok(())
    }

    fn coords<'a>(&mut self, points: impl IntoIterator<Item = &'a Point>) -> Result<()> {
        for point in points {
            self.f64(point.x())?;
            self.f64(point.y())?;
        }
        Ok(())
    }

    fn point(&mut self, geom: &Point, srid: Option<u32>) -> Result<()> {
        self.header(WKBType::Point, srid)?;
        self.coords([geom])
    }

    fn line_string_body(&mut self, geom: &LineString) -> Result<()> {
        self.count(geom.len())?;
        self.coords(geom)
    }

    fn line_string(&mut self, geom: &LineString, srid: Option<u32>) -> Result<()> {
        self.header(WKBType::LineString, srid)?;
        self.line_string_body(geom)
    }

    fn polygon(&mut self, geom: &Polygon, srid: Option<u32>) -> Result<()> {
        self.header(WKBType::Polygon, srid)?;
        self.count(geom.len())?;
        for ring in geom.rings() {
            self.line_string_body(ring)?;
        }
        Ok(())
    }

    fn multi_point(&mut self, geom: &MultiPoint, srid: Option<u32>) -> Result<()> {
        self.header(WKBType::MultiPoint, srid)?;
        self.count(geom.len())?;
        for point in geom.iter() {
            self.point(point, None)?;
        }
        Ok(())
    }

    fn multi_line_string(&mut self, geom: &MultiLineString, srid: Option<u32>) -> Result<()> {
        self.header(WKBType::MultiLineString, srid)?;
        self.count(geom.len())?;
        for line_string in geom.line_strings() {
            self.line_string(line_string, None)?;
        }
        Ok(())
    }

    fn multi_polygon(&mut self, geom: &MultiPolygon, srid: Option<u32>) -> Result<()> {
        self.header(WKBType::MultiPolygon, srid)?;
        self.count(geom.len())?;
        for polygon in geom.polygons() {
            self.polygon(polygon, None)?;
        }
        Ok(())
    }

    fn geometry_collection(&mut self, geom: &GeometryCollection, srid: Option<u32>) -> Result<()> {
        self.header(WKBType::GeometryCollection, srid)?;
        self.count(geom.len())?;
        for member in geom.iter() {
            self.geometry(member, None)?;
        }
        Ok(())
    }

    fn geometry(&mut self, geom: &Geometry, srid: Option<u32>) -> Result<()> {
        match geom {
            Geometry::Point(g) => self.point(g, srid),
            Geometry::LineString(g) => self.line_string(g, srid),
            Geometry::Polygon(g) => self.polygon(g, srid),
            Geometry::MultiPoint(g) => self.multi_point(g, srid),
            Geometry::MultiLineString(g) => self.multi_line_string(g, srid),
            Geometry::MultiPolygon(g) => self.multi_polygon(g, srid),
            Geometry::GeometryCollection(g) => self.geometry_collection(g, srid),
        }
    }
}

/// The SRID to put in the top-level header, if any.
fn header_srid(srid: u32, options: WkbWriteOptions) -> Option<u32> {
    (options.include_srid && srid != 0).then_some(srid)
}

macro_rules! impl_to_wkb {
    ($geom:ty, $write:ident, $size:expr) => {
        impl ToWkb for $geom {
            fn write_wkb<W: Write>(&self, writer: &mut W, options: WkbWriteOptions) -> Result<()> {
                let mut encoder = Encoder {
                    writer,
                    endianness: options.endianness,
                };
                encoder.$write(self, header_srid(self.srid(), options))
            }

            fn wkb_size(&self) -> usize {
                ($size)(self)
            }
        }
    };
}

impl_to_wkb!(Point, point, |_: &Point| point_wkb_size());
impl_to_wkb!(LineString, line_string, line_string_wkb_size);
impl_to_wkb!(Polygon, polygon, polygon_wkb_size);
impl_to_wkb!(MultiPoint, multi_point, multi_point_wkb_size);
impl_to_wkb!(MultiLineString, multi_line_string, multi_line_string_wkb_size);
impl_to_wkb!(MultiPolygon, multi_polygon, multi_polygon_wkb_size);
impl_to_wkb!(
    GeometryCollection,
    geometry_collection,
    geometry_collection_wkb_size
);
impl_to_wkb!(Geometry, geometry, geometry_wkb_size);
