use serde::{Deserialize, Serialize};

use crate::Position;

/// A set of positions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiPoint(Vec<Position>);

impl MultiPoint {
    /// Iterates over the points.
    pub fn iter_points(&self) -> impl Iterator<Item = &'_ Position> {
        self.0.iter()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no points.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy with altitudes of all positions dropped.
    pub fn at_surface(&self) -> Self {
        Self(self.0.iter().map(Position::at_surface).collect())
    }
}

impl From<Vec<Position>> for MultiPoint {
    fn from(value: Vec<Position>) -> Self {
        Self(value)
    }
}
