//! Range checks for geographic coordinates.
//!
//! Longitudes live on the closed interval `[-180, 180]` and latitudes on `[-90, 90]`. Both
//! checks reject `NaN`.

use log::debug;

use crate::error::{GeoError, Result};

/// Smallest valid longitude
pub const MIN_LONGITUDE: f64 = -180.0;
/// Largest valid longitude
pub const MAX_LONGITUDE: f64 = 180.0;
/// Smallest valid latitude
pub const MIN_LATITUDE: f64 = -90.0;
/// Largest valid latitude
pub const MAX_LATITUDE: f64 = 90.0;

/// Returns true if `longitude` lies within `[-180, 180]`.
pub fn is_valid_longitude(longitude: f64) -> bool {
    (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude)
}

/// Returns true if `latitude` lies within `[-90, 90]`.
pub fn is_valid_latitude(latitude: f64) -> bool {
    (MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude)
}

pub fn validate_longitude(longitude: f64) -> Result<f64> {
    if is_valid_longitude(longitude) {
        Ok(longitude)
    } else {
        debug!("rejecting longitude {longitude}");
        Err(GeoError::InvalidCoordinate(format!(
            "Longitude must be between -180 and 180, got: {longitude}"
        )))
    }
}

pub fn validate_latitude(latitude: f64) -> Result<f64> {
    if is_valid_latitude(latitude) {
        Ok(latitude)
    } else {
        debug!("rejecting latitude {latitude}");
        Err(GeoError::InvalidCoordinate(format!(
            "Latitude must be between -90 and 90, got: {latitude}"
        )))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert!(validate_longitude(-180.0).is_ok());
        assert!(validate_longitude(180.0).is_ok());
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_latitude(90.0).is_ok());
    }

    #[test]
    fn out_of_range() {
        assert!(matches!(
            validate_longitude(180.000001),
            Err(GeoError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            validate_latitude(-91.0),
            Err(GeoError::InvalidCoordinate(_))
        ));
        assert!(!is_valid_longitude(f64::NAN));
        assert!(!is_valid_latitude(f64::NAN));
    }
}
