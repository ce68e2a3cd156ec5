use std::fmt::Display;

use crate::geometry::{
    Geometry, GeometryCollection, GeometryType, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

/// Serialize a geometry as Well-Known Text.
pub trait ToWkt {
    /// Append the WKT of this geometry, without any SRID prefix, to `out`.
    fn write_wkt(&self, out: &mut String);

    /// The SRID emitted by [`Self::to_ewkt`].
    fn wkt_srid(&self) -> u32;

    /// For example `POINT(180 0)`.
    fn to_wkt(&self) -> String {
        let mut out = String::new();
        self.write_wkt(&mut out);
        out
    }

    /// WKT prefixed with `SRID=<n>;`.
    fn to_ewkt(&self) -> String {
        let mut out = format!("SRID={};", self.wkt_srid());
        self.write_wkt(&mut out);
        out
    }
}

fn write_position(out: &mut String, point: &Point) {
    // f64 Display is the shortest text that parses back to the same value
    out.push_str(&point.longitude().to_string());
    out.push(' ');
    out.push_str(&point.latitude().to_string());
}

/// `(x y, x y, ...)`
fn write_point_list<'a>(out: &mut String, points: impl IntoIterator<Item = &'a Point>) {
    out.push('(');
    for (i, point) in points.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_position(out, point);
    }
    out.push(')');
}

/// `((x y, ...), (x y, ...))`
fn write_ring_list<'a>(out: &mut String, rings: impl IntoIterator<Item = &'a LineString>) {
    out.push('(');
    for (i, ring) in rings.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_point_list(out, ring);
    }
    out.push(')');
}

fn write_point_body(out: &mut String, geom: &Point) {
    out.push('(');
    write_position(out, geom);
    out.push(')');
}

fn write_multi_point_body(out: &mut String, geom: &MultiPoint) {
    out.push('(');
    for (i, point) in geom.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_point_body(out, point);
    }
    out.push(')');
}

fn write_multi_polygon_body(out: &mut String, geom: &MultiPolygon) {
    out.push('(');
    for (i, polygon) in geom.polygons().iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_ring_list(out, polygon.rings());
    }
    out.push(')');
}

fn write_geometry_collection_body(out: &mut String, geom: &GeometryCollection) {
    if geom.is_empty() {
        out.push_str(" EMPTY");
        return;
    }
    out.push('(');
    for (i, member) in geom.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        member.write_wkt(out);
    }
    out.push(')');
}

macro_rules! impl_to_wkt {
    ($geom:ty, $type:expr, $body:expr) => {
        impl ToWkt for $geom {
            fn write_wkt(&self, out: &mut String) {
                out.push_str($type.wkt_keyword());
                ($body)(out, self);
            }

            fn wkt_srid(&self) -> u32 {
                self.srid()
            }
        }
    };
}

impl_to_wkt!(Point, GeometryType::Point, write_point_body);
impl_to_wkt!(
    LineString,
    GeometryType::LineString,
    |out: &mut String, geom: &LineString| write_point_list(out, geom)
);
impl_to_wkt!(
    Polygon,
    GeometryType::Polygon,
    |out: &mut String, geom: &Polygon| write_ring_list(out, geom.rings())
);
impl_to_wkt!(MultiPoint, GeometryType::MultiPoint, write_multi_point_body);
impl_to_wkt!(
    MultiLineString,
    GeometryType::MultiLineString,
    |out: &mut String, geom: &MultiLineString| write_ring_list(out, geom.line_strings())
);
impl_to_wkt!(
    MultiPolygon,
    GeometryType::MultiPolygon,
    write_multi_polygon_body
);
impl_to_wkt!(
    GeometryCollection,
    GeometryType::GeometryCollection,
    write_geometry_collection_body
);

impl ToWkt for Geometry {
    fn write_wkt(&self, out: &mut String) {
        match self {
            Geometry::Point(g) => g.write_wkt(out),
            Geometry::LineString(g) => g.write_wkt(out),
            Geometry::Polygon(g) => g.write_wkt(out),
            Geometry::MultiPoint(g) => g.write_wkt(out),
            Geometry::MultiLineString(g) => g.write_wkt(out),
            Geometry::MultiPolygon(g) => g.write_wkt(out),
            Geometry::GeometryCollection(g) => g.write_wkt(out),
        }
    }

    fn wkt_srid(&self) -> u32 {
        self.srid()
    }
}

impl Display for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_wkt())
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
    fn point() {
        assert_eq!(p0().to_wkt(), "POINT(180 0)");
        assert_eq!(
            p_precise().to_ewkt(),
            "SRID=4326;POINT(-73.98765432101 40.74847891234)"
        );
    }

    #[test]
    fn line_string() {
        assert_eq!(ls0().to_wkt(), "LINESTRING(180 0, 179 1)");
    }

    #[test]
    fn polygon() {
        assert_eq!(
            poly0().to_wkt(),
            "POLYGON((180 0, 179 1, 178 2, 177 3, 180 0))"
        );
    }

    #[test]
    fn multi() {
        assert_eq!(mp0().to_wkt(), "MULTIPOINT((180 0), (179 1))");
        assert_eq!(ml0().to_wkt(), "MULTILINESTRING((180 0, 179 1))");
        assert_eq!(
            mpoly0().to_wkt(),
            "MULTIPOLYGON(((180 0, 179 1, 178 2, 177 3, 180 0)))"
        );
    }

    #[test]
    fn geometry_collection() {
        assert_eq!(
            gc0().to_wkt(),
            "GEOMETRYCOLLECTION(POLYGON((180 0, 179 1, 178 2, 177 3, 180 0)), POINT(180 0))"
        );
        assert_eq!(
            GeometryCollection::new(vec![]).to_wkt(),
            "GEOMETRYCOLLECTION EMPTY"
        );
        assert_eq!(Geometry::from(gc0()).to_string(), gc0().to_wkt());
    }
}
