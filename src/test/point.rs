use crate::geometry::Point;

pub(crate) fn p0() -> Point {
    Point::new(180., 0.).unwrap()
}

pub(crate) fn p1() -> Point {
    Point::new(179., 1.).unwrap()
}

pub(crate) fn p2() -> Point {
    Point::new(178., 2.).unwrap()
}

pub(crate) fn p3() -> Point {
    Point::new(177., 3.).unwrap()
}

/// A point whose coordinates carry more than eleven significant digits.
pub(crate) fn p_precise() -> Point {
    Point::new_with_srid(-73.98765432101, 40.74847891234, 4326).unwrap()
}
