use crate::geometry::{LineString, Point, Polygon};
use crate::test::linestring::ls1;

/// `POLYGON((180 0, 179 1, 178 2, 177 3, 180 0))`
pub(crate) fn poly0() -> Polygon {
    Polygon::new(vec![ls1()]).unwrap()
}

/// A square with a square hole.
pub(crate) fn poly1() -> Polygon {
    let ring = |coords: &[(f64, f64)]| {
        LineString::new(
            coords
                .iter()
                .map(|(x, y)| Point::new(*x, *y).unwrap())
                .collect(),
        )
        .unwrap()
    };
    Polygon::new(vec![
        ring(&[(0., 0.), (10., 0.), (10., 10.), (0., 10.), (0., 0.)]),
        ring(&[(2., 2.), (2., 4.), (4., 4.), (4., 2.), (2., 2.)]),
    ])
    .unwrap()
}
