//! Antimeridian-aware bounding boxes.
//!
//! A [`BoundingBox`] is stored as its south-west and north-east corners. The latitude of the
//! north-east corner must be strictly greater than that of the south-west corner, but the
//! longitudes are free: a left edge east of the right edge describes a box that wraps across
//! the ±180° meridian.

use std::fmt::Display;

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::BoundingBoxValidation;
use crate::coord::{MAX_LONGITUDE, MIN_LONGITUDE};
use crate::error::{GeoError, Result};
use crate::geometry::{Geometry, LineString, MultiPolygon, Point, Polygon};

mod arc;

use arc::{pad_latitudes, pad_longitudes, shortest_longitude_arc, LatitudeExtent};

/// The minimal longitude/latitude extent of a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoundingBoxRepr", into = "BoundingBoxRepr")]
pub struct BoundingBox {
    left_bottom: Point,
    right_top: Point,
}

/// `{"left": .., "bottom": .., "right": .., "top": ..}`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct BoundingBoxRepr {
    left: f64,
    bottom: f64,
    right: f64,
    top: f64,
}

impl TryFrom<BoundingBoxRepr> for BoundingBox {
    type Error = GeoError;

    fn try_from(value: BoundingBoxRepr) -> Result<Self> {
        BoundingBox::new(
            Point::new(value.left, value.bottom)?,
            Point::new(value.right, value.top)?,
        )
    }
}

impl From<BoundingBox> for BoundingBoxRepr {
    fn from(value: BoundingBox) -> Self {
        BoundingBoxRepr {
            left: value.left(),
            bottom: value.bottom(),
            right: value.right(),
            top: value.top(),
        }
    }
}

impl BoundingBoxValidation {
    /// Check that `left_bottom` and `right_top` may be the corners of a box.
    pub fn check(&self, left_bottom: &Point, right_top: &Point) -> Result<()> {
        if *self == BoundingBoxValidation::Legacy
            && right_top.longitude() <= left_bottom.longitude()
        {
            return Err(GeoError::InvalidBoundingBoxPoints(
                "The longitude of the left point must be less than the longitude of the right point"
                    .to_string(),
            ));
        }
        if right_top.latitude() <= left_bottom.latitude() {
            return Err(GeoError::InvalidBoundingBoxPoints(
                "The latitude of the bottom point must be less than the latitude of the top point"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

impl BoundingBox {
    /// Create a box from its south-west and north-east corners.
    ///
    /// Fails with [`GeoError::InvalidBoundingBoxPoints`] unless `right_top` is strictly north
    /// of `left_bottom`.
    pub fn new(left_bottom: Point, right_top: Point) -> Result<Self> {
        Self::new_with_validation(left_bottom, right_top, BoundingBoxValidation::default())
    }

    pub fn new_with_validation(
        left_bottom: Point,
        right_top: Point,
        validation: BoundingBoxValidation,
    ) -> Result<Self> {
        validation.check(&left_bottom, &right_top).map_err(|err| {
            debug!("rejecting bounding box corners {left_bottom:?} {right_top:?}: {err}");
            err
        })?;
        Ok(Self {
            left_bottom,
            right_top,
        })
    }

    pub fn left_bottom(&self) -> Point {
        self.left_bottom
    }

    pub fn right_top(&self) -> Point {
        self.right_top
    }

    pub fn left(&self) -> f64 {
        self.left_bottom.longitude()
    }

    pub fn bottom(&self) -> f64 {
        self.left_bottom.latitude()
    }

    pub fn right(&self) -> f64 {
        self.right_top.longitude()
    }

    pub fn top(&self) -> f64 {
        self.right_top.latitude()
    }

    /// Returns true if the box wraps across the ±180° meridian.
    pub fn crosses_antimeridian(&self) -> bool {
        self.left() > self.right()
    }

    /// The bounding box of every point of `geometry`.
    ///
    /// See [`Self::from_points`] for the meaning of `min_padding`.
    pub fn from_geometry(geometry: &Geometry, min_padding: f64) -> Result<Self> {
        match geometry {
            Geometry::Point(point) => Self::from_points(&[*point], min_padding),
            other => Self::from_points(&other.points(), min_padding),
        }
    }

    /// The smallest box containing all of `points`.
    ///
    /// Longitudes are treated as points on a circle, so a cluster straddling the antimeridian
    /// yields a box with `left > right` rather than one spanning the whole globe. If the box is
    /// narrower or shorter than `min_padding` degrees it is widened symmetrically: longitudes
    /// wrap around the antimeridian, latitudes are clamped at the poles.
    ///
    /// ```
    /// use geovalue::{BoundingBox, Point};
    ///
    /// let points = [
    ///     Point::new(175., 50.).unwrap(),
    ///     Point::new(-175., 55.).unwrap(),
    ///     Point::new(170., 60.).unwrap(),
    /// ];
    /// let bbox = BoundingBox::from_points(&points, 0.).unwrap();
    /// assert!(bbox.crosses_antimeridian());
    /// assert_eq!((bbox.left(), bbox.right()), (170., -175.));
    /// ```
    pub fn from_points(points: &[Point], min_padding: f64) -> Result<Self> {
        if min_padding.is_nan() || min_padding < 0.0 {
            debug!("rejecting negative bounding box padding {min_padding}");
            return Err(GeoError::InvalidArgument(format!(
                "min_padding must be non-negative, got {min_padding}"
            )));
        }

        let mut latitudes = LatitudeExtent::new();
        for point in points {
            latitudes.update(point.latitude());
        }
        let arc = shortest_longitude_arc(points.iter().map(Point::longitude));
        let ((left, right), (bottom, top)) = match (arc, latitudes.bounds()) {
            (Some(arc), Some(latitudes)) => (arc, latitudes),
            _ => {
                debug!("rejecting bounding box of empty point set");
                return Err(GeoError::InvalidArgument(
                    "cannot create bounding box from empty points".to_string(),
                ));
            }
        };
        trace!(
            "shortest arc over {} points: left={left} right={right}",
            points.len()
        );

        let (left, right) = pad_longitudes(left, right, min_padding);
        let (bottom, top) = pad_latitudes(bottom, top, min_padding);

        Self::new(Point::new(left, bottom)?, Point::new(right, top)?)
    }

    /// This box as a single polygon.
    ///
    /// Fails with [`GeoError::InvalidArgument`] if the box crosses the antimeridian, since no
    /// single ring can describe it. Use [`Self::to_geometry`] for those.
    pub fn to_polygon(&self) -> Result<Polygon> {
        if self.crosses_antimeridian() {
            return Err(GeoError::InvalidArgument(
                "Cannot convert antimeridian-crossing bounding box to single Polygon. Use to_geometry() instead."
                    .to_string(),
            ));
        }
        self.create_polygon(self.left(), self.right())
    }

    /// This box as a polygon, or as a multi polygon of its two halves when it crosses the
    /// antimeridian.
    pub fn to_geometry(&self) -> Result<Geometry> {
        if !self.crosses_antimeridian() {
            return Ok(self.create_polygon(self.left(), self.right())?.into());
        }
        let east = self.create_polygon(self.left(), MAX_LONGITUDE)?;
        let west = self.create_polygon(MIN_LONGITUDE, self.right())?;
        Ok(MultiPolygon::new(vec![east, west])?.into())
    }

    /// A counter-clockwise ring from `left` to `right` between this box's latitudes.
    fn create_polygon(&self, left: f64, right: f64) -> Result<Polygon> {
        let (bottom, top) = (self.bottom(), self.top());
        let ring = LineString::new(vec![
            Point::new(left, bottom)?,
            Point::new(right, bottom)?,
            Point::new(right, top)?,
            Point::new(left, top)?,
            Point::new(left, bottom)?,
        ])?;
        Polygon::new(vec![ring])
    }

    /// `{"left": .., "bottom": .., "right": .., "top": ..}`
    pub fn to_array(&self) -> Value {
        json!({
            "left": self.left(),
            "bottom": self.bottom(),
            "right": self.right(),
            "top": self.top(),
        })
    }

    pub fn to_json(&self) -> String {
        self.to_array().to_string()
    }

    /// Read a box from an object with numeric `left`, `bottom`, `right` and `top` members.
    pub fn from_array(value: &Value) -> Result<Self> {
        Self::from_array_with_validation(value, BoundingBoxValidation::default())
    }

    pub fn from_array_with_validation(
        value: &Value,
        validation: BoundingBoxValidation,
    ) -> Result<Self> {
        let edge = |key: &str| {
            value.get(key).and_then(Value::as_f64).ok_or_else(|| {
                debug!("bounding box array has no numeric '{key}'");
                GeoError::InvalidArgument(
                    "Array must contain numeric keys: left, bottom, right, top".to_string(),
                )
            })
        };
        let left_bottom = Point::new(edge("left")?, edge("bottom")?)?;
        let right_top = Point::new(edge("right")?, edge("top")?)?;
        Self::new_with_validation(left_bottom, right_top, validation)
    }

    /// Parse the JSON text produced by [`Self::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_array(&value)
    }
}

impl Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_json())
    }
}
