use serde::{Deserialize, Serialize};

use crate::contour::LineString;
use crate::Position;

/// A set of line strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiLineString(Vec<LineString>);

impl MultiLineString {
    /// Iterates over the lines.
    pub fn lines(&self) -> impl Iterator<Item = &'_ LineString> {
        self.0.iter()
    }

    /// Iterates over positions of all lines.
    pub fn iter_positions(&self) -> impl Iterator<Item = &'_ Position> {
        self.0.iter().flat_map(|line| line.iter_positions())
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no lines.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy with altitudes of all positions dropped.
    pub fn at_surface(&self) -> Self {
        Self(self.0.iter().map(LineString::at_surface).collect())
    }
}

impl From<Vec<LineString>> for MultiLineString {
    fn from(value: Vec<LineString>) -> Self {
        Self(value)
    }
}
