use std::fmt::Display;
use std::str::FromStr;

use crate::error::GeoError;

/// The tag naming each geometry variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    /// The variant name as used in the `type` member of GeoJSON.
    pub fn name(&self) -> &'static str {
        use GeometryType::*;
        match self {
            Point => "Point",
            LineString => "LineString",
            Polygon => "Polygon",
            MultiPoint => "MultiPoint",
            MultiLineString => "MultiLineString",
            MultiPolygon => "MultiPolygon",
            GeometryCollection => "GeometryCollection",
        }
    }

    /// The upper case keyword that starts a WKT string of this variant.
    pub fn wkt_keyword(&self) -> &'static str {
        use GeometryType::*;
        match self {
            Point => "POINT",
            LineString => "LINESTRING",
            Polygon => "POLYGON",
            MultiPoint => "MULTIPOINT",
            MultiLineString => "MULTILINESTRING",
            MultiPolygon => "MULTIPOLYGON",
            GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeometryType {
    type Err = GeoError;

    /// Case-insensitive. `GEOMCOLLECTION` is accepted as an alias of `GEOMETRYCOLLECTION`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use GeometryType::*;
        match s.to_ascii_uppercase().as_str() {
            "POINT" => Ok(Point),
            "LINESTRING" => Ok(LineString),
            "POLYGON" => Ok(Polygon),
            "MULTIPOINT" => Ok(MultiPoint),
            "MULTILINESTRING" => Ok(MultiLineString),
            "MULTIPOLYGON" => Ok(MultiPolygon),
            "GEOMETRYCOLLECTION" | "GEOMCOLLECTION" => Ok(GeometryCollection),
            _ => Err(GeoError::ParseError(format!("Unknown geometry type: {s}"))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("point".parse::<GeometryType>().unwrap(), GeometryType::Point);
        assert_eq!(
            "MultiPolygon".parse::<GeometryType>().unwrap(),
            GeometryType::MultiPolygon
        );
        assert_eq!(
            "geomcollection".parse::<GeometryType>().unwrap(),
            GeometryType::GeometryCollection
        );
        assert!("InvalidGeometryType".parse::<GeometryType>().is_err());
    }

    #[test]
    fn keyword_round_trip() {
        for ty in [
            GeometryType::Point,
            GeometryType::LineString,
            GeometryType::Polygon,
            GeometryType::MultiPoint,
            GeometryType::MultiLineString,
            GeometryType::MultiPolygon,
            GeometryType::GeometryCollection,
        ] {
            assert_eq!(ty.wkt_keyword().parse::<GeometryType>().unwrap(), ty);
            assert_eq!(ty.name().parse::<GeometryType>().unwrap(), ty);
        }
    }
}
