//! Encoding of geometries and bounding boxes for a persistence layer.
//!
//! A host that stores values in a database picks a [`StorageFormat`] and hands the resulting
//! [`StoredValue`] to its driver. The `geometry` format stores the native binary form (WKB) and
//! also accepts WKT text on the way back in; the `json` format stores the structured JSON text.

use std::fmt::Display;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::bounding_box::BoundingBox;
use crate::config::SpatialConfig;
use crate::error::{GeoError, Result};
use crate::geometry::{Geometry, GeometryVariant};
use crate::io::geojson::{GeoJsonReader, ToGeoJson};
use crate::io::wkb::{ToWkb, WkbReader};
use crate::io::wkt::WktReader;

/// How values are laid out in storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageFormat {
    /// Native spatial column: WKB
    #[default]
    Geometry,

    /// Text column holding JSON
    Json,
}

impl StorageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageFormat::Geometry => "geometry",
            StorageFormat::Json => "json",
        }
    }
}

impl Display for StorageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageFormat {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "geometry" => Ok(StorageFormat::Geometry),
            "json" => Ok(StorageFormat::Json),
            other => Err(GeoError::InvalidArgument(format!(
                "Invalid format \"{other}\". Supported formats: geometry, json"
            ))),
        }
    }
}

/// A value as exchanged with the storage driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredValue {
    Binary(Vec<u8>),
    Text(String),
}

impl StoredValue {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            StoredValue::Binary(bytes) => bytes,
            StoredValue::Text(text) => text.as_bytes(),
        }
    }
}

/// Converts geometries and bounding boxes to and from [`StoredValue`]s in the configured
/// [`StorageFormat`].
#[derive(Debug, Clone, Default)]
pub struct GeometryStore {
    config: SpatialConfig,
}

impl GeometryStore {
    pub fn new(config: SpatialConfig) -> Self {
        Self { config }
    }

    pub fn format(&self) -> StorageFormat {
        self.config.storage_format
    }

    pub fn encode_geometry(&self, geometry: &Geometry) -> Result<StoredValue> {
        match self.format() {
            StorageFormat::Geometry => Ok(StoredValue::Binary(geometry.to_wkb()?)),
            StorageFormat::Json => Ok(StoredValue::Text(geometry.to_json())),
        }
    }

    pub fn decode_geometry(&self, value: &StoredValue) -> Result<Geometry> {
        match (self.format(), value) {
            (StorageFormat::Geometry, StoredValue::Binary(bytes)) => {
                WkbReader::new(self.config).read(bytes)
            }
            (StorageFormat::Geometry, StoredValue::Text(wkt)) => {
                WktReader::new(self.config).read(wkt, None)
            }
            (StorageFormat::Json, StoredValue::Text(json)) => {
                GeoJsonReader::new(self.config).read_str(json, None)
            }
            (StorageFormat::Json, StoredValue::Binary(_)) => Err(GeoError::InvalidArgument(
                "JSON format expects a text value".to_string(),
            )),
        }
    }

    /// Decode `value` and require the result to be of variant `G`.
    pub fn decode_geometry_as<G: GeometryVariant>(&self, value: &StoredValue) -> Result<G> {
        G::try_from(self.decode_geometry(value)?)
    }

    /// Store a box as the WKB of [`BoundingBox::to_geometry`], or as its JSON text.
    pub fn encode_bounding_box(&self, bbox: &BoundingBox) -> Result<StoredValue> {
        match self.format() {
            StorageFormat::Geometry => Ok(StoredValue::Binary(bbox.to_geometry()?.to_wkb()?)),
            StorageFormat::Json => Ok(StoredValue::Text(bbox.to_json())),
        }
    }

    /// Read back a box written by [`Self::encode_bounding_box`].
    ///
    /// In the geometry format the stored value must be a Polygon or a MultiPolygon. The halves
    /// of a box split at the antimeridian are merged back into a single crossing box.
    pub fn decode_bounding_box(&self, value: &StoredValue) -> Result<BoundingBox> {
        match (self.format(), value) {
            (StorageFormat::Json, StoredValue::Text(json)) => {
                let value: serde_json::Value = serde_json::from_str(json).map_err(|err| {
                    debug!("stored bounding box is not JSON: {err}");
                    GeoError::InvalidArgument(format!("Invalid JSON for BoundingBox: {err}"))
                })?;
                BoundingBox::from_array_with_validation(
                    &value,
                    self.config.bounding_box_validation,
                )
            }
            _ => match self.decode_geometry(value)? {
                geometry @ (Geometry::Polygon(_) | Geometry::MultiPolygon(_)) => {
                    BoundingBox::from_geometry(&geometry, 0.0)
                }
                other => {
                    debug!(
                        "stored bounding box decoded to a {}",
                        other.geometry_type()
                    );
                    Err(GeoError::UnsupportedGeometryType(other.geometry_type()))
                }
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::BoundingBoxValidation;
    use crate::geometry::{LineString, Point, Polygon};
    use crate::io::wkt::ToWkt;
    use crate::test::linestring::ls0;
    use crate::test::polygon::poly1;

    fn store(format: StorageFormat) -> GeometryStore {
        GeometryStore::new(SpatialConfig::default().with_storage_format(format))
    }

    fn bbox(left: f64, bottom: f64, right: f64, top: f64) -> BoundingBox {
        BoundingBox::new(
            Point::new(left, bottom).unwrap(),
            Point::new(right, top).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn parse_format() {
        assert_eq!(
            "geometry".parse::<StorageFormat>().unwrap(),
            StorageFormat::Geometry
        );
        assert_eq!("json".parse::<StorageFormat>().unwrap(), StorageFormat::Json);
        assert!(matches!(
            "wkt".parse::<StorageFormat>(),
            Err(GeoError::InvalidArgument(_))
        ));
        assert_eq!(StorageFormat::Json.to_string(), "json");
    }

    #[test]
    fn bounding_box_as_geometry() {
        let store = store(StorageFormat::Geometry);
        for bbox in [
            bbox(-30.618423, -12.751244, 91.618423, 40.751244),
            bbox(170., 50., -170., 60.),
        ] {
            let stored = store.encode_bounding_box(&bbox).unwrap();
            assert!(matches!(stored, StoredValue::Binary(_)));
            assert_eq!(store.decode_bounding_box(&stored).unwrap(), bbox);
        }
    }

    #[test]
    fn bounding_box_as_json() {
        let store = store(StorageFormat::Json);
        let bbox = bbox(170., 50., -170., 60.);
        let stored = store.encode_bounding_box(&bbox).unwrap();
        assert_eq!(stored, StoredValue::Text(bbox.to_json()));
        assert_eq!(store.decode_bounding_box(&stored).unwrap(), bbox);

        let err = store
            .decode_bounding_box(&StoredValue::Text("{".to_string()))
            .unwrap_err();
        assert!(matches!(err, GeoError::InvalidArgument(_)));
    }

    #[test]
    fn bounding_box_legacy_validation() {
        let store = GeometryStore::new(
            SpatialConfig::default()
                .with_storage_format(StorageFormat::Json)
                .with_bounding_box_validation(BoundingBoxValidation::Legacy),
        );
        let stored = StoredValue::Text(bbox(170., 50., -170., 60.).to_json());
        assert!(matches!(
            store.decode_bounding_box(&stored),
            Err(GeoError::InvalidBoundingBoxPoints(_))
        ));
    }

    #[test]
    fn bounding_box_from_wkt() {
        let store = store(StorageFormat::Geometry);
        let polygon = bbox(-10., -20., 30., 40.).to_polygon().unwrap();
        let stored = StoredValue::Text(polygon.to_ewkt());
        assert_eq!(
            store.decode_bounding_box(&stored).unwrap(),
            bbox(-10., -20., 30., 40.)
        );
    }

    #[test]
    fn bounding_box_from_other_geometry() {
        let store = store(StorageFormat::Geometry);
        let stored = store.encode_geometry(&ls0().into()).unwrap();
        assert!(matches!(
            store.decode_bounding_box(&stored),
            Err(GeoError::UnsupportedGeometryType(_))
        ));
    }

    #[test]
    fn geometry_round_trip() {
        // rings built with the default SRID
        let geometry: Geometry = Polygon::new_with_srid(poly1().rings().to_vec(), 4326)
            .unwrap()
            .into();

        let stored = store(StorageFormat::Geometry)
            .encode_geometry(&geometry)
            .unwrap();
        assert_eq!(
            store(StorageFormat::Geometry)
                .decode_geometry(&stored)
                .unwrap(),
            geometry
        );

        let json_store = store(StorageFormat::Json);
        let stored = json_store.encode_geometry(&geometry).unwrap();
        let decoded: Polygon = GeometryStore::new(
            SpatialConfig::default()
                .with_storage_format(StorageFormat::Json)
                .with_default_srid(4326),
        )
        .decode_geometry_as(&stored)
        .unwrap();
        assert_eq!(Geometry::from(decoded), geometry);

        assert!(matches!(
            json_store.decode_geometry_as::<LineString>(&stored),
            Err(GeoError::TypeMismatch { .. })
        ));
        assert!(matches!(
            json_store.decode_geometry(&StoredValue::Binary(vec![1])),
            Err(GeoError::InvalidArgument(_))
        ));
    }
}
