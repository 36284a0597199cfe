//! Renderable map primitives produced from GeoJSON geometries.
//!
//! Primitives own copies of their positions and have their style resolved at creation. After that they are
//! independent of the document they were created from and of each other.

use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::style::StrokeStyle;
use crate::Color;

mod icon;
mod polygon;
mod polyline;

pub use icon::IconPrimitive;
pub use polygon::PolygonPrimitive;
pub use polyline::PolylinePrimitive;

/// Kind of a [`MapPrimitive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrimitiveKind {
    /// [`IconPrimitive`]
    Icon,
    /// [`PolylinePrimitive`]
    Polyline,
    /// [`PolygonPrimitive`]
    Polygon,
}

impl Display for PrimitiveKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PrimitiveKind::Icon => "icon",
            PrimitiveKind::Polyline => "polyline",
            PrimitiveKind::Polygon => "polygon",
        })
    }
}

/// Any of the renderable primitives.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MapPrimitive {
    /// Icon at a position.
    Icon(IconPrimitive),
    /// Line.
    Polyline(PolylinePrimitive),
    /// Polygon.
    Polygon(PolygonPrimitive),
}

impl MapPrimitive {
    /// Kind of the primitive.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            MapPrimitive::Icon(_) => PrimitiveKind::Icon,
            MapPrimitive::Polyline(_) => PrimitiveKind::Polyline,
            MapPrimitive::Polygon(_) => PrimitiveKind::Polygon,
        }
    }

    /// Whether the primitive is displayed.
    pub fn is_visible(&self) -> bool {
        match self {
            MapPrimitive::Icon(v) => v.visible,
            MapPrimitive::Polyline(v) => v.visible,
            MapPrimitive::Polygon(v) => v.visible,
        }
    }

    /// Shows or hides the primitive.
    pub fn set_visible(&mut self, visible: bool) {
        match self {
            MapPrimitive::Icon(v) => v.visible = visible,
            MapPrimitive::Polyline(v) => v.visible = visible,
            MapPrimitive::Polygon(v) => v.visible = visible,
        }
    }

    /// Stroke of the primitive. Icons have none.
    pub fn stroke(&self) -> Option<&StrokeStyle> {
        match self {
            MapPrimitive::Icon(_) => None,
            MapPrimitive::Polyline(v) => Some(&v.stroke),
            MapPrimitive::Polygon(v) => Some(&v.stroke),
        }
    }

    /// Mutable stroke of the primitive. Icons have none.
    pub fn stroke_mut(&mut self) -> Option<&mut StrokeStyle> {
        match self {
            MapPrimitive::Icon(_) => None,
            MapPrimitive::Polyline(v) => Some(&mut v.stroke),
            MapPrimitive::Polygon(v) => Some(&mut v.stroke),
        }
    }

    /// Mutable fill color. Only polygons have it.
    pub fn fill_color_mut(&mut self) -> Option<&mut Color> {
        match self {
            MapPrimitive::Polygon(v) => Some(&mut v.fill_color),
            _ => None,
        }
    }

    /// Returns the icon if the primitive is one.
    pub fn as_icon(&self) -> Option<&IconPrimitive> {
        match self {
            MapPrimitive::Icon(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the polyline if the primitive is one.
    pub fn as_polyline(&self) -> Option<&PolylinePrimitive> {
        match self {
            MapPrimitive::Polyline(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the polygon if the primitive is one.
    pub fn as_polygon(&self) -> Option<&PolygonPrimitive> {
        match self {
            MapPrimitive::Polygon(v) => Some(v),
            _ => None,
        }
    }
}

impl From<IconPrimitive> for MapPrimitive {
    fn from(value: IconPrimitive) -> Self {
        Self::Icon(value)
    }
}

impl From<PolylinePrimitive> for MapPrimitive {
    fn from(value: PolylinePrimitive) -> Self {
        Self::Polyline(value)
    }
}

impl From<PolygonPrimitive> for MapPrimitive {
    fn from(value: PolygonPrimitive) -> Self {
        Self::Polygon(value)
    }
}
