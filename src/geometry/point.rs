use crate::config::DEFAULT_SRID;
use crate::coord::{validate_latitude, validate_longitude};
use crate::error::Result;
use crate::geometry::{GeometryType, GeometryVariant, Position};

/// A longitude/latitude pair tagged with an SRID.
///
/// Both coordinates are range checked at construction, see [`crate::coord`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    longitude: f64,
    latitude: f64,
    srid: u32,
}

impl Point {
    /// Create a point with the default SRID.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self> {
        Self::new_with_srid(longitude, latitude, DEFAULT_SRID)
    }

    pub fn new_with_srid(longitude: f64, latitude: f64, srid: u32) -> Result<Self> {
        Ok(Self {
            longitude: validate_longitude(longitude)?,
            latitude: validate_latitude(latitude)?,
            srid,
        })
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Alias of [`Self::longitude`]
    pub fn x(&self) -> f64 {
        self.longitude
    }

    /// Alias of [`Self::latitude`]
    pub fn y(&self) -> f64 {
        self.latitude
    }

    pub fn srid(&self) -> u32 {
        self.srid
    }

    /// This point tagged with `srid`.
    pub fn with_srid(self, srid: u32) -> Self {
        Self { srid, ..self }
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::Point
    }

    /// `[longitude, latitude]`
    pub fn coordinates(&self) -> Position {
        [self.longitude, self.latitude]
    }

    /// A point is its own only leaf point.
    pub fn points(&self) -> Vec<Point> {
        vec![*self]
    }
}

impl GeometryVariant for Point {
    const GEOMETRY_TYPE: GeometryType = GeometryType::Point;
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::GeoError;

    #[test]
    fn coordinates_are_exact() {
        let point = Point::new(-30.618423, 40.751244).unwrap();
        assert_eq!(point.coordinates(), [-30.618423, 40.751244]);
        assert_eq!(point.srid(), DEFAULT_SRID);
        assert_eq!(point.points(), vec![point]);
    }

    #[test]
    fn high_precision_is_kept() {
        let point = Point::new(12.34567891234, -45.67891234567).unwrap();
        assert_eq!(point.longitude(), 12.34567891234);
        assert_eq!(point.latitude(), -45.67891234567);
    }

    #[test]
    fn invalid_latitude() {
        let err = Point::new_with_srid(0., 91., 4326).unwrap_err();
        assert!(matches!(err, GeoError::InvalidCoordinate(_)));
        assert!(err.to_string().contains("Latitude must be between -90 and 90"));
    }

    #[test]
    fn invalid_longitude() {
        let err = Point::new_with_srid(181., 0., 4326).unwrap_err();
        assert!(matches!(err, GeoError::InvalidCoordinate(_)));
        assert!(err.to_string().contains("Longitude must be between -180 and 180"));
        assert!(Point::new(-181., 90.).is_err());
    }
}
