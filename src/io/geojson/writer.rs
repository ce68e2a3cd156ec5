use serde_json::{json, Value};

use crate::geometry::{
    Coordinates, Geometry, GeometryCollection, GeometryType, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon, Position,
};

/// Serialize a geometry in the structured GeoJSON form.
pub trait ToGeoJson {
    /// The `{"type": ..., "coordinates": ...}` value of this geometry.
    fn to_array(&self) -> Value;

    /// [`Self::to_array`] rendered as compact JSON text.
    fn to_json(&self) -> String {
        self.to_array().to_string()
    }

    /// This geometry wrapped as the single feature of a `FeatureCollection`.
    ///
    /// A geometry collection contributes one feature per member instead.
    fn to_feature_collection(&self) -> Value {
        feature_collection(vec![self.to_array()])
    }

    fn to_feature_collection_json(&self) -> String {
        self.to_feature_collection().to_string()
    }
}

/// Integral values are written without a fractional part, e.g. `180` not `180.0`.
fn number(value: f64) -> Value {
    const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

fn position(position: &Position) -> Value {
    Value::Array(vec![number(position[0]), number(position[1])])
}

fn positions(positions: &[Position]) -> Value {
    positions.iter().map(position).collect()
}

fn rings(rings: &[Vec<Position>]) -> Value {
    rings.iter().map(|ring| positions(ring)).collect()
}

fn coordinates_value(coordinates: &Coordinates) -> Value {
    match coordinates {
        Coordinates::Point(coords) => position(coords),
        Coordinates::LineString(coords) | Coordinates::MultiPoint(coords) => positions(coords),
        Coordinates::Polygon(coords) | Coordinates::MultiLineString(coords) => rings(coords),
        Coordinates::MultiPolygon(coords) => coords.iter().map(|polygon| rings(polygon)).collect(),
        Coordinates::GeometryCollection(members) => members.iter().map(coordinates_value).collect(),
    }
}

fn geometry_value(geometry_type: GeometryType, coordinates: &Coordinates) -> Value {
    json!({
        "type": geometry_type.name(),
        "coordinates": coordinates_value(coordinates),
    })
}

fn feature_collection(geometries: Vec<Value>) -> Value {
    let features: Vec<Value> = geometries
        .into_iter()
        .map(|geometry| {
            json!({
                "type": "Feature",
                "properties": {},
                "geometry": geometry,
            })
        })
        .collect();
    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

macro_rules! impl_to_geojson {
    ($variant:ident) => {
        impl ToGeoJson for $variant {
            fn to_array(&self) -> Value {
                geometry_value(
                    GeometryType::$variant,
                    &Coordinates::$variant(self.coordinates()),
                )
            }
        }
    };
}

impl_to_geojson!(Point);
impl_to_geojson!(LineString);
impl_to_geojson!(Polygon);
impl_to_geojson!(MultiPoint);
impl_to_geojson!(MultiLineString);
impl_to_geojson!(MultiPolygon);

impl ToGeoJson for GeometryCollection {
    fn to_array(&self) -> Value {
        let geometries: Vec<Value> = self.iter().map(ToGeoJson::to_array).collect();
        json!({
            "type": GeometryType::GeometryCollection.name(),
            "geometries": geometries,
        })
    }

    fn to_feature_collection(&self) -> Value {
        feature_collection(self.iter().map(ToGeoJson::to_array).collect())
    }
}

impl ToGeoJson for Geometry {
    fn to_array(&self) -> Value {
        match self {
            Geometry::GeometryCollection(geom) => geom.to_array(),
            other => geometry_value(other.geometry_type(), &other.coordinates()),
        }
    }

    fn to_feature_collection(&self) -> Value {
        match self {
            Geometry::GeometryCollection(geom) => geom.to_feature_collection(),
            other => feature_collection(vec![other.to_array()]),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::geometrycollection::gc0;
    use crate::test::linestring::ls0;
    use crate::test::multilinestring::ml0;
    use crate::test::multipoint::mp0;
    use crate::test::multipolygon::mpoly0;
    use crate::test::point::{p0, p_precise};
    use crate::test::polygon::poly0;

    #[test]
    fn point_json() {
        assert_eq!(p0().to_json(), r#"{"type":"Point","coordinates":[180,0]}"#);
        assert_eq!(
            p_precise().to_json(),
            r#"{"type":"Point","coordinates":[-73.98765432101,40.74847891234]}"#
        );
    }

    #[test]
    fn variants_json() {
        assert_eq!(
            ls0().to_json(),
            r#"{"type":"LineString","coordinates":[[180,0],[179,1]]}"#
        );
        assert_eq!(
            poly0().to_json(),
            r#"{"type":"Polygon","coordinates":[[[180,0],[179,1],[178,2],[177,3],[180,0]]]}"#
        );
        assert_eq!(
            mp0().to_json(),
            r#"{"type":"MultiPoint","coordinates":[[180,0],[179,1]]}"#
        );
        assert_eq!(
            ml0().to_json(),
            r#"{"type":"MultiLineString","coordinates":[[[180,0],[179,1]]]}"#
        );
        assert_eq!(
            mpoly0().to_json(),
            r#"{"type":"MultiPolygon","coordinates":[[[[180,0],[179,1],[178,2],[177,3],[180,0]]]]}"#
        );
    }

    #[test]
    fn collection_json() {
        let expected = r#"{"type":"GeometryCollection","geometries":[{"type":"Polygon","coordinates":[[[180,0],[179,1],[178,2],[177,3],[180,0]]]},{"type":"Point","coordinates":[180,0]}]}"#;
        assert_eq!(gc0().to_json(), expected);
        assert_eq!(Geometry::from(gc0()).to_json(), expected);
        assert_eq!(
            GeometryCollection::new(vec![]).to_json(),
            r#"{"type":"GeometryCollection","geometries":[]}"#
        );
    }

    #[test]
    fn feature_collection_json() {
        assert_eq!(
            p0().to_feature_collection_json(),
            r#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[180,0]}}]}"#
        );

        let collection = gc0().to_feature_collection();
        let features = collection["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0]["geometry"]["type"], "Polygon");
        assert_eq!(features[1]["geometry"], p0().to_array());
        assert_eq!(Geometry::from(gc0()).to_feature_collection(), collection);
    }
}
