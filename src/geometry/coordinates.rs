/// A single `[longitude, latitude]` pair.
pub type Position = [f64; 2];

/// The nested coordinate arrays of a geometry, shaped like the `coordinates` member of GeoJSON.
///
/// A [`GeometryCollection`](super::GeometryCollection) has no coordinates of its own; its
/// variant holds the coordinates of each member instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Coordinates {
    Point(Position),
    LineString(Vec<Position>),
    Polygon(Vec<Vec<Position>>),
    MultiPoint(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
    GeometryCollection(Vec<Coordinates>),
}
