//! Longitude arcs on the circle of longitudes, which wraps at ±180°.

use itertools::Itertools;

use crate::coord::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};

const FULL_TURN: f64 = 360.0;

/// The `(left, right)` ends of the shortest arc covering every longitude.
///
/// The arc is the complement of the widest empty gap between neighbouring longitudes, so
/// `left > right` means the arc passes through the antimeridian. Returns `None` when
/// `longitudes` is empty.
pub(crate) fn shortest_longitude_arc(
    longitudes: impl IntoIterator<Item = f64>,
) -> Option<(f64, f64)> {
    let longitudes = longitudes
        .into_iter()
        .sorted_by(f64::total_cmp)
        .dedup()
        .collect_vec();

    match longitudes.as_slice() {
        [] => None,
        [only] => Some((*only, *only)),
        _ => {
            // Windows are (v0, v1), (v1, v2), ..., (vn, v0); only the last one wraps.
            let mut max_gap = 0.0;
            let mut max_gap_index = 0;
            for (i, (current, next)) in longitudes
                .iter()
                .copied()
                .circular_tuple_windows::<(f64, f64)>()
                .enumerate()
            {
                let gap = if next > current {
                    next - current
                } else {
                    next + FULL_TURN - current
                };
                if gap > max_gap {
                    max_gap = gap;
                    max_gap_index = i;
                }
            }

            let right = longitudes[max_gap_index];
            let left = longitudes[(max_gap_index + 1) % longitudes.len()];
            Some((left, right))
        }
    }
}

/// Width in degrees of the arc running east from `left` to `right`.
pub(crate) fn arc_span(left: f64, right: f64) -> f64 {
    if left > right {
        (MAX_LONGITUDE - left) + (right - MIN_LONGITUDE)
    } else {
        right - left
    }
}

/// Wrap a finite longitude back into `[-180, 180]`.
///
/// Values east of the antimeridian that land exactly on it stay at `180`.
pub(crate) fn normalize_longitude(longitude: f64) -> f64 {
    if (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
        return longitude;
    }
    let wrapped = (longitude - MIN_LONGITUDE).rem_euclid(FULL_TURN) + MIN_LONGITUDE;
    if wrapped == MIN_LONGITUDE && longitude > MAX_LONGITUDE {
        MAX_LONGITUDE
    } else {
        wrapped
    }
}

/// Widen `[left, right]` symmetrically until it spans at least `min_span` degrees.
///
/// A span of a full turn or more covers every longitude.
pub(crate) fn pad_longitudes(left: f64, right: f64, min_span: f64) -> (f64, f64) {
    let span = arc_span(left, right);
    if span >= min_span {
        return (left, right);
    }
    if min_span >= FULL_TURN {
        return (MIN_LONGITUDE, MAX_LONGITUDE);
    }
    let half = (min_span - span) / 2.0;
    (
        normalize_longitude(left - half),
        normalize_longitude(right + half),
    )
}

/// Widen `[bottom, top]` symmetrically until it spans at least `min_span` degrees, clamping at
/// the poles.
pub(crate) fn pad_latitudes(bottom: f64, top: f64, min_span: f64) -> (f64, f64) {
    let span = top - bottom;
    if span >= min_span {
        return (bottom, top);
    }
    let half = (min_span - span) / 2.0;
    (
        (bottom - half).max(MIN_LATITUDE),
        (top + half).min(MAX_LATITUDE),
    )
}

/// Running minimum and maximum of a set of latitudes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LatitudeExtent {
    bottom: f64,
    top: f64,
}

impl LatitudeExtent {
    pub fn new() -> Self {
        LatitudeExtent {
            bottom: f64::INFINITY,
            top: -f64::INFINITY,
        }
    }

    pub fn update(&mut self, latitude: f64) {
        if latitude < self.bottom {
            self.bottom = latitude;
        }
        if latitude > self.top {
            self.top = latitude;
        }
    }

    /// `(bottom, top)`, or `None` if no latitude was seen.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        (self.bottom <= self.top).then_some((self.bottom, self.top))
    }
}

impl Default for LatitudeExtent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use crate::coord::is_valid_longitude;

    #[test]
    fn arc_without_wrap() {
        assert_eq!(
            shortest_longitude_arc([-30.618423, -32.453251, -24.463204, 1.421546, -4.618423]),
            Some((-32.453251, 1.421546))
        );
    }

    #[test]
    fn arc_across_antimeridian() {
        assert_eq!(
            shortest_longitude_arc([175., -175., 170.]),
            Some((170., -175.))
        );
    }

    #[test]
    fn arc_edge_cases() {
        assert_eq!(shortest_longitude_arc([]), None);
        assert_eq!(shortest_longitude_arc([12.5, 12.5, 12.5]), Some((12.5, 12.5)));
        assert_eq!(shortest_longitude_arc([-10., 10.]), Some((-10., 10.)));
    }

    #[test]
    fn span() {
        assert_eq!(arc_span(-10., 10.), 20.);
        assert_eq!(arc_span(170., -175.), 15.);
        assert_eq!(arc_span(5., 5.), 0.);
    }

    #[test]
    fn normalize() {
        assert_eq!(normalize_longitude(181.), -179.);
        assert_eq!(normalize_longitude(-181.), 179.);
        assert_eq!(normalize_longitude(180.), 180.);
        assert_eq!(normalize_longitude(-180.), -180.);
        assert_eq!(normalize_longitude(900.), 180.);
        assert_eq!(normalize_longitude(-540.), -180.);
        assert_eq!(normalize_longitude(721.), 1.);
        assert!(is_valid_longitude(normalize_longitude(1e20)));
        assert!(is_valid_longitude(normalize_longitude(-1e300)));
    }

    #[test]
    fn padding_of_a_full_turn_covers_the_globe() {
        for min_span in [360., 1e20, f64::INFINITY] {
            assert_eq!(pad_longitudes(10., 10., min_span), (-180., 180.));
            assert_eq!(pad_longitudes(170., -175., min_span), (-180., 180.));
            assert_eq!(pad_latitudes(10., 10., min_span), (-90., 90.));
        }
        let (left, right) = pad_longitudes(179., 179., 359.9);
        assert_relative_eq!(arc_span(left, right), 359.9, epsilon = 1e-9);
    }

    #[test]
    fn padding_wraps_longitude() {
        let (left, right) = pad_longitudes(179., 179., 4.);
        assert_relative_eq!(left, 177.);
        assert_relative_eq!(right, -179.);
    }

    #[test]
    fn padding_clamps_latitude() {
        assert_eq!(pad_latitudes(89., 89., 5.), (86.5, 90.));
        assert_eq!(pad_latitudes(-89., -89., 5.), (-90., -86.5));
        assert_eq!(pad_latitudes(0., 10., 5.), (0., 10.));
    }

    #[test]
    fn latitude_extent() {
        let mut extent = LatitudeExtent::new();
        assert_eq!(extent.bounds(), None);
        for latitude in [40.751244, 52.435631, -12.575421] {
            extent.update(latitude);
        }
        assert_eq!(extent.bounds(), Some((-12.575421, 52.435631)));
    }
}
