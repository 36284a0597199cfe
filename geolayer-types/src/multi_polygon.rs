use serde::{Deserialize, Serialize};

use crate::polygon::Polygon;
use crate::Position;

/// A set of polygons.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiPolygon(Vec<Polygon>);

impl MultiPolygon {
    /// Iterates over the polygons.
    pub fn polygons(&self) -> impl Iterator<Item = &'_ Polygon> {
        self.0.iter()
    }

    /// Iterates over positions of all polygons.
    pub fn iter_positions(&self) -> impl Iterator<Item = &'_ Position> {
        self.0.iter().flat_map(|polygon| polygon.iter_positions())
    }

    /// Number of polygons.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no polygons.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy with altitudes of all positions dropped.
    pub fn at_surface(&self) -> Self {
        Self(self.0.iter().map(Polygon::at_surface).collect())
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(value: Vec<Polygon>) -> Self {
        Self(value)
    }
}
