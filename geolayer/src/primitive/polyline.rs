use geolayer_types::{AltitudeReference, LineString, Position};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::style::StrokeStyle;

/// Line drawn through a sequence of positions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolylinePrimitive {
    /// Positions of the line.
    pub path: Vec<Position>,
    /// What the altitudes of the path are measured against.
    pub altitude_reference: AltitudeReference,
    /// Color, width and dash of the line.
    pub stroke: StrokeStyle,
    /// Whether the line is displayed.
    pub visible: bool,
}

impl PolylinePrimitive {
    /// Creates a new visible polyline from the line string.
    pub fn new(line: &LineString, stroke: StrokeStyle) -> Self {
        Self {
            path: line.positions().to_vec(),
            altitude_reference: AltitudeReference::of(line.iter_positions()),
            stroke,
            visible: true,
        }
    }
}
