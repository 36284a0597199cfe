//! Conversions into [`geo_types`] geometries. Altitudes are dropped, since `geo_types` is 2d.

use ::geo_types as gt;

use crate::{
    Geometry, LineString, LinearRing, MultiLineString, MultiPoint, MultiPolygon, Polygon, Position,
};

impl From<&Position> for gt::Coord<f64> {
    fn from(value: &Position) -> Self {
        gt::Coord {
            x: value.lon(),
            y: value.lat(),
        }
    }
}

impl From<&Position> for gt::Point<f64> {
    fn from(value: &Position) -> Self {
        gt::Point(value.into())
    }
}

impl From<&LineString> for gt::LineString<f64> {
    fn from(value: &LineString) -> Self {
        value.iter_positions().map(gt::Coord::from).collect()
    }
}

impl From<&LinearRing> for gt::LineString<f64> {
    fn from(value: &LinearRing) -> Self {
        value.iter_positions().map(gt::Coord::from).collect()
    }
}

impl From<&Polygon> for gt::Polygon<f64> {
    fn from(value: &Polygon) -> Self {
        gt::Polygon::new(
            value.exterior().into(),
            value.holes().iter().map(gt::LineString::from).collect(),
        )
    }
}

impl From<&MultiPoint> for gt::MultiPoint<f64> {
    fn from(value: &MultiPoint) -> Self {
        gt::MultiPoint(value.iter_points().map(gt::Point::from).collect())
    }
}

impl From<&MultiLineString> for gt::MultiLineString<f64> {
    fn from(value: &MultiLineString) -> Self {
        gt::MultiLineString(value.lines().map(gt::LineString::from).collect())
    }
}

impl From<&MultiPolygon> for gt::MultiPolygon<f64> {
    fn from(value: &MultiPolygon) -> Self {
        gt::MultiPolygon(value.polygons().map(gt::Polygon::from).collect())
    }
}

impl From<&Geometry> for gt::Geometry<f64> {
    fn from(value: &Geometry) -> Self {
        match value {
            Geometry::Point(p) => gt::Geometry::Point(p.into()),
            Geometry::MultiPoint(v) => gt::Geometry::MultiPoint(v.into()),
            Geometry::LineString(v) => gt::Geometry::LineString(v.into()),
            Geometry::MultiLineString(v) => gt::Geometry::MultiLineString(v.into()),
            Geometry::Polygon(v) => gt::Geometry::Polygon(v.into()),
            Geometry::MultiPolygon(v) => gt::Geometry::MultiPolygon(v.into()),
            Geometry::GeometryCollection(members) => gt::Geometry::GeometryCollection(
                gt::GeometryCollection(members.iter().map(gt::Geometry::from).collect()),
            ),
        }
    }
}
