use log::{debug, trace};

use crate::config::SpatialConfig;
use crate::error::{GeoError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, GeometryType, GeometryVariant, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};
use crate::io::MAX_NESTING_DEPTH;

/// Parse WKT into a [`Geometry`] using the default configuration.
pub fn read_wkt(wkt: &str) -> Result<Geometry> {
    WktReader::default().read(wkt, None)
}

/// A recursive-descent WKT parser.
///
/// ```
/// use geovalue::io::wkt::WktReader;
/// use geovalue::{LineString, SpatialConfig};
///
/// let reader = WktReader::new(SpatialConfig::default().with_default_srid(4326));
/// let line: LineString = reader.read_as("LINESTRING(180 0, 179 1)", None).unwrap();
/// assert_eq!(line.srid(), 4326);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WktReader {
    config: SpatialConfig,
}

impl WktReader {
    pub fn new(config: SpatialConfig) -> Self {
        Self { config }
    }

    /// Parse `wkt`. The SRID of the result is taken from an EWKT prefix if present, else from
    /// `srid`, else from the configured default.
    pub fn read(&self, wkt: &str, srid: Option<u32>) -> Result<Geometry> {
        trace!("parsing {} bytes of WKT", wkt.len());
        let mut parser = Parser::new(wkt, self.config.resolve_srid(srid));
        let geometry = parser.parse().map_err(|err| {
            debug!("failed to parse WKT: {err}");
            err
        })?;
        Ok(geometry)
    }

    /// Parse `wkt` and require the result to be of variant `G`.
    pub fn read_as<G: GeometryVariant>(&self, wkt: &str, srid: Option<u32>) -> Result<G> {
        G::try_from(self.read(wkt, srid)?)
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    srid: u32,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, srid: u32) -> Self {
        Self {
            input,
            pos: 0,
            srid,
            depth: 0,
        }
    }

    fn parse(&mut self) -> Result<Geometry> {
        self.srid_prefix()?;
        let geometry = self.geometry()?;
        self.skip_whitespace();
        if self.pos != self.input.len() {
            return Err(self.error("unexpected trailing characters"));
        }
        Ok(geometry)
    }

    fn error(&self, msg: &str) -> GeoError {
        GeoError::ParseError(format!("Invalid WKT at position {}: {msg}", self.pos))
    }

    fn rest(&self) -> &'a [u8] {
        &self.input.as_bytes()[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        while self.rest().first().is_some_and(u8::is_ascii_whitespace) {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_whitespace();
        self.rest().first().copied()
    }

    fn consume(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, byte: u8) -> Result<()> {
        if self.consume(byte) {
            Ok(())
        } else {
            Err(self.error(&format!("expected '{}'", byte as char)))
        }
    }

    /// Consume the next run of ASCII letters.
    fn word(&mut self) -> &'a str {
        self.skip_whitespace();
        let start = self.pos;
        while self.rest().first().is_some_and(u8::is_ascii_alphabetic) {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    /// Consume the keyword `EMPTY` if it comes next.
    fn empty(&mut self) -> bool {
        let start = self.pos;
        if self.word().eq_ignore_ascii_case("EMPTY") {
            true
        } else {
            self.pos = start;
            false
        }
    }

    fn number_token(&mut self) -> &'a [u8] {
        self.skip_whitespace();
        let start = self.pos;
        while self
            .rest()
            .first()
            .is_some_and(|b| b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.' | b'e' | b'E'))
        {
            self.pos += 1;
        }
        &self.input.as_bytes()[start..self.pos]
    }

    fn number(&mut self) -> Result<f64> {
        let token = self.number_token();
        if token.is_empty() {
            return Err(self.error("expected a number"));
        }
        lexical_core::parse::<f64>(token)
            .map_err(|err| self.error(&format!("invalid number: {err}")))
    }

    /// Optional EWKT `SRID=<n>;` prefix.
    fn srid_prefix(&mut self) -> Result<()> {
        let start = self.pos;
        if !self.word().eq_ignore_ascii_case("SRID") {
            self.pos = start;
            return Ok(());
        }
        self.expect(b'=')?;
        let token = self.number_token();
        self.srid = lexical_core::parse::<u32>(token)
            .map_err(|err| self.error(&format!("invalid SRID: {err}")))?;
        self.expect(b';')
    }

    fn geometry(&mut self) -> Result<Geometry> {
        let keyword = self.word();
        if keyword.is_empty() {
            return Err(self.error("expected a geometry keyword"));
        }
        let geometry_type: GeometryType = keyword
            .parse()
            .map_err(|_| self.error(&format!("unknown geometry type '{keyword}'")))?;
        trace!("parsing WKT {geometry_type}");

        // Only 2D geometries are supported, so any dimension tag is rejected here.
        if matches!(self.peek(), Some(b) if b.is_ascii_alphabetic()) && !self.lookahead_empty() {
            return Err(self.error("only 2D geometries are supported"));
        }

        let srid = self.srid;
        let geometry = match geometry_type {
            GeometryType::Point => {
                if self.empty() {
                    return Err(GeoError::InvalidGeometryStructure(
                        "Point must have coordinates".to_string(),
                    ));
                }
                self.expect(b'(')?;
                let point = self.point()?;
                self.expect(b')')?;
                point.into()
            }
            GeometryType::LineString => {
                LineString::new_with_srid(self.maybe_empty(Self::point_list)?, srid)?.into()
            }
            GeometryType::Polygon => {
                Polygon::new_with_srid(self.maybe_empty(Self::ring_list)?, srid)?.into()
            }
            GeometryType::MultiPoint => {
                MultiPoint::new_with_srid(self.maybe_empty(Self::multi_point_list)?, srid)?.into()
            }
            GeometryType::MultiLineString => {
                MultiLineString::new_with_srid(self.maybe_empty(Self::ring_list)?, srid)?.into()
            }
            GeometryType::MultiPolygon => {
                MultiPolygon::new_with_srid(self.maybe_empty(Self::polygon_list)?, srid)?.into()
            }
            GeometryType::GeometryCollection => GeometryCollection::new_with_srid(
                self.maybe_empty(Self::geometry_list)?,
                srid,
            )
            .into(),
        };
        Ok(geometry)
    }

    fn lookahead_empty(&mut self) -> bool {
        let start = self.pos;
        let empty = self.empty();
        self.pos = start;
        empty
    }

    /// `EMPTY` yields no components; anything else is handed to `list`.
    fn maybe_empty<T>(&mut self, list: fn(&mut Self) -> Result<Vec<T>>) -> Result<Vec<T>> {
        if self.empty() {
            Ok(vec![])
        } else {
            list(self)
        }
    }

    /// `x y`
    fn point(&mut self) -> Result<Point> {
        let x = self.number()?;
        let y = self.number()?;
        Point::new_with_srid(x, y, self.srid)
    }

    /// `(item, item, ...)`
    fn delimited<T>(&mut self, item: fn(&mut Self) -> Result<T>) -> Result<Vec<T>> {
        self.expect(b'(')?;
        let mut items = vec![item(self)?];
        while self.consume(b',') {
            items.push(item(self)?);
        }
        self.expect(b')')?;
        Ok(items)
    }

    fn point_list(&mut self) -> Result<Vec<Point>> {
        self.delimited(Self::point)
    }

    fn ring(&mut self) -> Result<LineString> {
        LineString::new_with_srid(self.point_list()?, self.srid)
    }

    fn ring_list(&mut self) -> Result<Vec<LineString>> {
        self.delimited(Self::ring)
    }

    /// A member of a MULTIPOINT, either `(x y)` or bare `x y`.
    fn multi_point_member(&mut self) -> Result<Point> {
        if self.consume(b'(') {
            let point = self.point()?;
            self.expect(b')')?;
            Ok(point)
        } else {
            self.point()
        }
    }

    fn multi_point_list(&mut self) -> Result<Vec<Point>> {
        self.delimited(Self::multi_point_member)
    }

    fn polygon(&mut self) -> Result<Polygon> {
        Polygon::new_with_srid(self.ring_list()?, self.srid)
    }

    fn polygon_list(&mut self) -> Result<Vec<Polygon>> {
        self.delimited(Self::polygon)
    }

    fn geometry_list(&mut self) -> Result<Vec<Geometry>> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(&format!(
                "geometry collections nested deeper than {MAX_NESTING_DEPTH} levels"
            )));
        }
        self.depth += 1;
        let members = self.geometry_members();
        self.depth -= 1;
        members
    }

    fn geometry_members(&mut self) -> Result<Vec<Geometry>> {
        self.expect(b'(')?;
        if self.consume(b')') {
            return Ok(vec![]);
        }
        let mut items = vec![self.geometry()?];
        while self.consume(b',') {
            items.push(self.geometry()?);
        }
        self.expect(b')')?;
        Ok(items)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::wkt::ToWkt;
    use crate::test::geometrycollection::gc0;
    use crate::test::linestring::ls0;
    use crate::test::multilinestring::ml1;
    use crate::test::multipoint::mp0;
    use crate::test::multipolygon::mpoly1;
    use crate::test::point::{p0, p_precise};
    use crate::test::polygon::{poly0, poly1};

    #[test]
    fn round_trip() {
        let geometries: Vec<Geometry> = vec![
            p0().into(),
            ls0().into(),
            poly0().into(),
            poly1().into(),
            mp0().into(),
            ml1().into(),
            mpoly1().into(),
            gc0().into(),
            GeometryCollection::new(vec![]).into(),
        ];
        for geom in geometries {
            assert_eq!(read_wkt(&geom.to_wkt()).unwrap(), geom);
        }
    }

    #[test]
    fn high_precision_round_trip() {
        let point = p_precise();
        let parsed: Point = WktReader::default()
            .read_as(&point.to_wkt(), Some(4326))
            .unwrap();
        assert_eq!(parsed, point);
    }

    #[test]
    fn srid_side_channel() {
        let polygon = Point::from_wkt("POINT(180 0)", Some(4326)).unwrap();
        assert_eq!(polygon.srid(), 4326);

        let reader = WktReader::new(SpatialConfig::default().with_default_srid(3857));
        assert_eq!(reader.read("POINT(180 0)", None).unwrap().srid(), 3857);
        assert_eq!(reader.read("SRID=4326;POINT(180 0)", None).unwrap().srid(), 4326);
    }

    #[test]
    fn srid_applies_to_components() {
        let polygon: Polygon = WktReader::default()
            .read_as("POLYGON((180 0, 179 1, 178 2, 177 3, 180 0))", Some(4326))
            .unwrap();
        assert!(polygon.points().iter().all(|p| p.srid() == 4326));

        let tagged = Polygon::new_with_srid(poly1().rings().to_vec(), 4326).unwrap();
        assert_eq!(read_wkt(&tagged.to_ewkt()).unwrap(), tagged.into());
    }

    #[test]
    fn lenient_syntax() {
        let parsed = read_wkt("  multipoint ( 180 0 ,179 1 ) ").unwrap();
        assert_eq!(parsed, mp0().into());
        let parsed = read_wkt("GEOMETRYCOLLECTION()").unwrap();
        assert_eq!(parsed, GeometryCollection::new(vec![]).into());
        let parsed = read_wkt("GEOMCOLLECTION(POINT(180 0))").unwrap();
        assert_eq!(parsed.points(), vec![p0()]);
    }

    #[test]
    fn type_mismatch() {
        let err = LineString::from_wkt("POINT(180 0)", None).unwrap_err();
        assert!(matches!(err, GeoError::TypeMismatch { .. }));
    }

    #[test]
    fn malformed() {
        for wkt in [
            "POINT(abc def)",
            "POINT(",
            "POINT(180 0",
            "POINT 180 0)",
            "POINT(180 0))",
            "LINESTRING(180 0, 179)",
            "POLYGON((180 0, 179 1)",
            "POINT Z(1 2 3)",
            "POINT(1 2 3)",
            "CIRCLE(1 2)",
            "",
            "SRID=abc;POINT(1 2)",
        ] {
            let err = read_wkt(wkt).unwrap_err();
            assert!(err.is_parse_error(), "{wkt}: {err}");
        }
    }

    #[test]
    fn nesting_depth() {
        let nested = |depth: usize| {
            format!(
                "{}POINT(0 0){}",
                "GEOMETRYCOLLECTION(".repeat(depth),
                ")".repeat(depth)
            )
        };
        let parsed = read_wkt(&nested(MAX_NESTING_DEPTH)).unwrap();
        assert_eq!(parsed.points().len(), 1);

        assert!(read_wkt(&nested(MAX_NESTING_DEPTH + 1))
            .unwrap_err()
            .is_parse_error());
        assert!(read_wkt(&nested(200_000)).unwrap_err().is_parse_error());
    }

    #[test]
    fn structural_errors() {
        assert!(matches!(
            read_wkt("LINESTRING(180 0)"),
            Err(GeoError::InvalidGeometryStructure(_))
        ));
        assert!(matches!(
            read_wkt("MULTIPOLYGON EMPTY"),
            Err(GeoError::InvalidGeometryStructure(_))
        ));
        assert!(matches!(
            read_wkt("POINT(181 0)"),
            Err(GeoError::InvalidCoordinate(_))
        ));
    }
}
