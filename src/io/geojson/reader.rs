use log::{debug, trace};
use serde_json::{Map, Value};

use crate::config::SpatialConfig;
use crate::error::{GeoError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, GeometryType, GeometryVariant, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};

/// Parse GeoJSON text into a [`Geometry`] using the default configuration.
pub fn read_geojson(json: &str) -> Result<Geometry> {
    GeoJsonReader::default().read_str(json, None)
}

/// Builds geometries from GeoJSON text or from an already decoded [`serde_json::Value`].
#[derive(Debug, Clone, Default)]
pub struct GeoJsonReader {
    config: SpatialConfig,
}

impl GeoJsonReader {
    pub fn new(config: SpatialConfig) -> Self {
        Self { config }
    }

    pub fn read_str(&self, json: &str, srid: Option<u32>) -> Result<Geometry> {
        let value: Value = serde_json::from_str(json).map_err(|err| {
            debug!("rejecting non-JSON geometry input: {err}");
            GeoError::ParseError(format!("Invalid JSON: {err}"))
        })?;
        self.read_value(&value, srid)
    }

    pub fn read_value(&self, value: &Value, srid: Option<u32>) -> Result<Geometry> {
        let srid = self.config.resolve_srid(srid);
        read_object(value, srid).map_err(|err| {
            debug!("failed to read GeoJSON: {err}");
            err
        })
    }

    /// Parse `json` and require the result to be of variant `G`.
    pub fn read_str_as<G: GeometryVariant>(&self, json: &str, srid: Option<u32>) -> Result<G> {
        G::try_from(self.read_str(json, srid)?)
    }

    /// Read `value` and require the result to be of variant `G`.
    pub fn read_value_as<G: GeometryVariant>(&self, value: &Value, srid: Option<u32>) -> Result<G> {
        G::try_from(self.read_value(value, srid)?)
    }
}

fn as_object(value: &Value) -> Result<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| GeoError::ParseError(format!("Expected a GeoJSON object, got {value}")))
}

fn member<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    object
        .get(key)
        .ok_or_else(|| GeoError::ParseError(format!("GeoJSON object is missing '{key}'")))
}

fn as_array<'a>(value: &'a Value, what: &str) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| GeoError::ParseError(format!("Expected {what} to be an array, got {value}")))
}

/// Any top level object: a geometry, a `Feature` or a `FeatureCollection`.
fn read_object(value: &Value, srid: u32) -> Result<Geometry> {
    let object = as_object(value)?;
    let type_name = type_name(object)?;
    trace!("reading GeoJSON {type_name}");

    match type_name {
        "FeatureCollection" => {
            let features = as_array(member(object, "features")?, "features")?;
            let mut geometries = Vec::with_capacity(features.len());
            for feature in features {
                if let Some(geometry) = read_feature(as_object(feature)?, srid)? {
                    geometries.push(geometry);
                }
            }
            Ok(GeometryCollection::new_with_srid(geometries, srid).into())
        }
        "Feature" => read_feature(object, srid)?.ok_or_else(|| {
            GeoError::InvalidGeometryStructure("Feature has no geometry".to_string())
        }),
        _ => read_geometry(object, type_name, srid),
    }
}

/// The geometry of a `Feature`, or `None` if it is null.
fn read_feature(feature: &Map<String, Value>, srid: u32) -> Result<Option<Geometry>> {
    match member(feature, "geometry")? {
        Value::Null => {
            debug!("skipping feature with null geometry");
            Ok(None)
        }
        geometry => read_geometry_value(geometry, srid).map(Some),
    }
}

fn type_name(object: &Map<String, Value>) -> Result<&str> {
    member(object, "type")?
        .as_str()
        .ok_or_else(|| GeoError::ParseError("GeoJSON 'type' must be a string".to_string()))
}

/// A geometry object nested in a `Feature` or a `GeometryCollection`.
fn read_geometry_value(value: &Value, srid: u32) -> Result<Geometry> {
    let object = as_object(value)?;
    read_geometry(object, type_name(object)?, srid)
}

fn read_geometry(object: &Map<String, Value>, type_name: &str, srid: u32) -> Result<Geometry> {
    let geometry_type: GeometryType = type_name.parse()?;

    let geometry = match geometry_type {
        GeometryType::Point => point(coordinates(object, geometry_type)?, srid)?.into(),
        GeometryType::LineString => {
            line_string(coordinates(object, geometry_type)?, srid)?.into()
        }
        GeometryType::Polygon => polygon(coordinates(object, geometry_type)?, srid)?.into(),
        GeometryType::MultiPoint => MultiPoint::new_with_srid(
            point_list(coordinates(object, geometry_type)?, srid)?,
            srid,
        )?
        .into(),
        GeometryType::MultiLineString => MultiLineString::new_with_srid(
            nested(coordinates(object, geometry_type)?, srid, line_string)?,
            srid,
        )?
        .into(),
        GeometryType::MultiPolygon => MultiPolygon::new_with_srid(
            nested(coordinates(object, geometry_type)?, srid, polygon)?,
            srid,
        )?
        .into(),
        GeometryType::GeometryCollection => {
            let geometries = as_array(member(object, "geometries")?, "geometries")?
                .iter()
                .map(|geometry| read_geometry_value(geometry, srid))
                .collect::<Result<Vec<_>>>()?;
            GeometryCollection::new_with_srid(geometries, srid).into()
        }
    };
    Ok(geometry)
}

/// The non-empty `coordinates` member of a geometry object.
fn coordinates(object: &Map<String, Value>, geometry_type: GeometryType) -> Result<&[Value]> {
    match object.get("coordinates") {
        Some(Value::Array(coordinates)) if !coordinates.is_empty() => Ok(coordinates.as_slice()),
        Some(Value::Array(_)) | Some(Value::Null) | None => {
            Err(GeoError::InvalidGeometryStructure(format!(
                "{geometry_type} must have non-empty coordinates"
            )))
        }
        Some(other) => Err(GeoError::ParseError(format!(
            "Expected coordinates to be an array, got {other}"
        ))),
    }
}

/// `[x, y]`
fn point(position: &[Value], srid: u32) -> Result<Point> {
    match position {
        [x, y] => {
            let x = x
                .as_f64()
                .ok_or_else(|| GeoError::ParseError(format!("Invalid longitude {x}")))?;
            let y = y
                .as_f64()
                .ok_or_else(|| GeoError::ParseError(format!("Invalid latitude {y}")))?;
            Point::new_with_srid(x, y, srid)
        }
        [] | [_] => Err(GeoError::InvalidGeometryStructure(
            "A position needs a longitude and a latitude".to_string(),
        )),
        _ => Err(GeoError::ParseError(
            "Only 2D positions are supported".to_string(),
        )),
    }
}

fn point_list(positions: &[Value], srid: u32) -> Result<Vec<Point>> {
    nested(positions, srid, point)
}

/// Apply `item` to every element of `values`, each of which must itself be an array.
fn nested<T>(
    values: &[Value],
    srid: u32,
    item: fn(&[Value], u32) -> Result<T>,
) -> Result<Vec<T>> {
    values
        .iter()
        .map(|value| item(as_array(value, "coordinates")?, srid))
        .collect()
}

fn line_string(positions: &[Value], srid: u32) -> Result<LineString> {
    LineString::new_with_srid(point_list(positions, srid)?, srid)
}

fn polygon(rings: &[Value], srid: u32) -> Result<Polygon> {
    Polygon::new_with_srid(nested(rings, srid, line_string)?, srid)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::geojson::ToGeoJson;
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
            assert_eq!(read_geojson(&geom.to_json()).unwrap(), geom);
            assert_eq!(
                GeoJsonReader::default()
                    .read_value(&geom.to_array(), None)
                    .unwrap(),
                geom
            );
        }
    }

    #[test]
    fn high_precision_round_trip() {
        let point = p_precise();
        let parsed = Point::from_json(&point.to_json(), Some(point.srid())).unwrap();
        assert_eq!(parsed, point);
    }

    #[test]
    fn point_from_json() {
        let point = Point::from_json(r#"{"type":"Point","coordinates":[0,90]}"#, None).unwrap();
        assert_eq!(point.longitude(), 0.);
        assert_eq!(point.latitude(), 90.);
    }

    #[test]
    fn srid_from_argument_and_config() {
        let json = r#"{"type":"LineString","coordinates":[[180,0],[179,1]]}"#;
        let line = LineString::from_json(json, Some(4326)).unwrap();
        assert_eq!(line.srid(), 4326);

        let reader = GeoJsonReader::new(SpatialConfig::default().with_default_srid(3857));
        assert_eq!(reader.read_str(json, None).unwrap().srid(), 3857);
    }

    #[test]
    fn feature_collection() {
        let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":[],"geometry":{"type":"Polygon","coordinates":[[[0,90],[1,89],[2,88],[3,87],[0,90]]]}},{"type":"Feature","properties":{"name":"north pole"},"geometry":{"type":"Point","coordinates":[0,90]}}]}"#;
        let collection = GeometryCollection::from_json(json, None).unwrap();
        assert_eq!(collection.len(), 2);
        match &collection.geometries()[0] {
            Geometry::Polygon(polygon) => assert_eq!(
                polygon.coordinates(),
                vec![vec![[0., 90.], [1., 89.], [2., 88.], [3., 87.], [0., 90.]]]
            ),
            other => panic!("unexpected geometry {other:?}"),
        }
        assert_eq!(
            collection.geometries()[1],
            Point::new(0., 90.).unwrap().into()
        );
    }

    #[test]
    fn single_feature() {
        let json = r#"{"type":"Feature","properties":null,"geometry":{"type":"Point","coordinates":[180,0]}}"#;
        assert_eq!(read_geojson(json).unwrap(), p0().into());
    }

    #[test]
    fn type_mismatch() {
        let err =
            LineString::from_json(r#"{"type":"Point","coordinates":[180,0]}"#, None).unwrap_err();
        assert!(matches!(err, GeoError::TypeMismatch { .. }));
    }

    #[test]
    fn empty_coordinates() {
        for json in [
            r#"{"type":"Point","coordinates":[]}"#,
            r#"{"type":"LineString"}"#,
            r#"{"type":"Polygon","coordinates":[[]]}"#,
        ] {
            assert!(
                matches!(
                    read_geojson(json),
                    Err(GeoError::InvalidGeometryStructure(_))
                ),
                "{json}"
            );
        }
    }

    #[test]
    fn malformed() {
        for json in [
            "invalid-value",
            "{}",
            "[]",
            r#"{"type":"InvalidGeometryType","coordinates":[180,0]}"#,
            r#"{"type":"Point","coordinates":["a","b"]}"#,
            r#"{"type":"Point","coordinates":[1,2,3]}"#,
            r#"{"type":"Point","coordinates":{"x":1}}"#,
            r#"{"type":"GeometryCollection"}"#,
        ] {
            let err = read_geojson(json).unwrap_err();
            assert!(err.is_parse_error(), "{json}: {err}");
        }
    }
}
