//! GeoJSON geometry objects.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{
    AltitudeReference, LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon, Position,
};

/// Any of the GeoJSON geometry objects.
///
/// Features and feature collections are not geometries, so a [`Feature`](crate::Feature) can never contain another
/// feature.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Geometry {
    /// Single position.
    Point(Position),
    /// Set of positions.
    MultiPoint(MultiPoint),
    /// Line of 2 or more positions.
    LineString(LineString),
    /// Set of lines.
    MultiLineString(MultiLineString),
    /// Polygon with optional holes.
    Polygon(Polygon),
    /// Set of polygons.
    MultiPolygon(MultiPolygon),
    /// Heterogeneous set of geometries.
    GeometryCollection(GeometryCollection),
}

/// Heterogeneous set of geometries, kept in document order.
pub type GeometryCollection = Vec<Geometry>;

impl Geometry {
    /// Kind of the geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }

    /// Iterates over all positions of the geometry in document order.
    pub fn iter_positions(&self) -> Box<dyn Iterator<Item = &'_ Position> + '_> {
        match self {
            Geometry::Point(p) => Box::new(std::iter::once(p)),
            Geometry::MultiPoint(v) => Box::new(v.iter_points()),
            Geometry::LineString(v) => Box::new(v.iter_positions()),
            Geometry::MultiLineString(v) => Box::new(v.iter_positions()),
            Geometry::Polygon(v) => Box::new(v.iter_positions()),
            Geometry::MultiPolygon(v) => Box::new(v.iter_positions()),
            Geometry::GeometryCollection(v) => Box::new(v.iter().flat_map(|g| g.iter_positions())),
        }
    }

    /// Altitude reference of the geometry. Collections have none, since each member has its own.
    pub fn altitude_reference(&self) -> Option<AltitudeReference> {
        match self {
            Geometry::GeometryCollection(_) => None,
            _ => Some(AltitudeReference::of(self.iter_positions())),
        }
    }

    /// Drops altitudes of geometries that are placed on the surface.
    ///
    /// After this call every non-collection geometry either has altitudes in all its positions or in none of them.
    pub fn into_normalized_altitudes(self) -> Self {
        match self {
            Geometry::GeometryCollection(members) => Geometry::GeometryCollection(
                members
                    .into_iter()
                    .map(Geometry::into_normalized_altitudes)
                    .collect(),
            ),
            geometry if geometry.altitude_reference() == Some(AltitudeReference::Ellipsoid) => {
                geometry
            }
            Geometry::Point(p) => Geometry::Point(p.at_surface()),
            Geometry::MultiPoint(v) => Geometry::MultiPoint(v.at_surface()),
            Geometry::LineString(v) => Geometry::LineString(v.at_surface()),
            Geometry::MultiLineString(v) => Geometry::MultiLineString(v.at_surface()),
            Geometry::Polygon(v) => Geometry::Polygon(v.at_surface()),
            Geometry::MultiPolygon(v) => Geometry::MultiPolygon(v.at_surface()),
        }
    }
}

impl From<Position> for Geometry {
    fn from(value: Position) -> Self {
        Self::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Self::MultiPolygon(value)
    }
}

/// Type names of GeoJSON geometry objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GeometryKind {
    /// `"Point"`
    Point,
    /// `"MultiPoint"`
    MultiPoint,
    /// `"LineString"`
    LineString,
    /// `"MultiLineString"`
    MultiLineString,
    /// `"Polygon"`
    Polygon,
    /// `"MultiPolygon"`
    MultiPolygon,
    /// `"GeometryCollection"`
    GeometryCollection,
}

impl GeometryKind {
    /// Looks up the kind by the value of the `"type"` member. Names are case-sensitive.
    pub fn from_type_name(name: &str) -> Option<Self> {
        Some(match name {
            "Point" => Self::Point,
            "MultiPoint" => Self::MultiPoint,
            "LineString" => Self::LineString,
            "MultiLineString" => Self::MultiLineString,
            "Polygon" => Self::Polygon,
            "MultiPolygon" => Self::MultiPolygon,
            "GeometryCollection" => Self::GeometryCollection,
            _ => return None,
        })
    }

    /// Value of the `"type"` member for this kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::MultiPoint => "MultiPoint",
            Self::LineString => "LineString",
            Self::MultiLineString => "MultiLineString",
            Self::Polygon => "Polygon",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
        }
    }

    /// Nesting depth of the `"coordinates"` array: 1 for a point, 2 for an array of positions etc.
    ///
    /// Geometry collections have no coordinates and return `None`.
    pub fn coordinates_depth(&self) -> Option<usize> {
        match self {
            Self::Point => Some(1),
            Self::MultiPoint | Self::LineString => Some(2),
            Self::MultiLineString | Self::Polygon => Some(3),
            Self::MultiPolygon => Some(4),
            Self::GeometryCollection => None,
        }
    }
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}
