use geolayer_types::{AltitudeReference, Polygon, Position};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::style::StrokeStyle;
use crate::Color;

/// Filled polygon with an outline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolygonPrimitive {
    /// Exterior ring, the closing position included.
    pub exterior: Vec<Position>,
    /// Rings of the holes, the closing positions included.
    pub holes: Vec<Vec<Position>>,
    /// What the altitudes of the rings are measured against.
    pub altitude_reference: AltitudeReference,
    /// Color of the inner area of the polygon.
    pub fill_color: Color,
    /// Outline of all rings.
    pub stroke: StrokeStyle,
    /// Whether the polygon is displayed.
    pub visible: bool,
}

impl PolygonPrimitive {
    /// Creates a new visible polygon.
    pub fn new(polygon: &Polygon, fill_color: Color, stroke: StrokeStyle) -> Self {
        Self {
            exterior: polygon.exterior().positions().to_vec(),
            holes: polygon
                .holes()
                .iter()
                .map(|ring| ring.positions().to_vec())
                .collect(),
            altitude_reference: AltitudeReference::of(polygon.iter_positions()),
            fill_color,
            stroke,
            visible: true,
        }
    }

    /// Iterates over all rings, the exterior first.
    pub fn rings(&self) -> impl Iterator<Item = &'_ [Position]> {
        std::iter::once(self.exterior.as_slice()).chain(self.holes.iter().map(Vec::as_slice))
    }
}
