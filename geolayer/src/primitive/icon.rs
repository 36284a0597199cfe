use geolayer_types::{AltitudeReference, Position};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Color;

/// Icon placed at a single position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IconPrimitive {
    /// Location of the icon.
    pub position: Position,
    /// What the altitude of the position is measured against.
    pub altitude_reference: AltitudeReference,
    /// Title shown next to the icon.
    pub title: Option<String>,
    /// Secondary text shown next to the icon.
    pub subtitle: Option<String>,
    /// Color of the icon.
    pub color: Color,
    /// Whether the icon is displayed.
    pub visible: bool,
}

impl IconPrimitive {
    /// Creates a new visible icon without texts.
    pub fn new(position: Position, color: Color) -> Self {
        Self {
            position,
            altitude_reference: AltitudeReference::of(std::iter::once(&position)),
            title: None,
            subtitle: None,
            color,
            visible: true,
        }
    }

    /// Creates a new instance from a copy of the current, but with the given title.
    pub fn with_title(self, title: Option<String>) -> Self {
        Self { title, ..self }
    }

    /// Creates a new instance from a copy of the current, but with the given subtitle.
    pub fn with_subtitle(self, subtitle: Option<String>) -> Self {
        Self { subtitle, ..self }
    }
}
