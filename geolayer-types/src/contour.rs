//! Contours are sequences of positions.
//!
//! Contours can be:
//! * **open** - [`LineString`], the first and the last positions are not connected. For example, a road on the map
//!   is represented as a line string.
//! * **closed** - [`LinearRing`], the boundary of an area. A shoreline or the outline of a building are rings.
//!
//! Unlike contours in many rendering libraries, GeoJSON rings repeat their first position at the end, so a
//! triangle is a ring of 4 positions. [`LinearRing::new`] checks this and never repairs an unclosed ring.

use serde::{Deserialize, Serialize};

use crate::error::GeolayerTypesError;
use crate::Position;

/// Open sequence of at least 2 positions.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "Vec<Position>", into = "Vec<Position>")]
pub struct LineString {
    positions: Vec<Position>,
}

impl LineString {
    /// Minimum number of positions in a line string.
    pub const MIN_POSITIONS: usize = 2;

    /// Creates a new line string, checking that it has enough positions.
    pub fn new(positions: Vec<Position>) -> Result<Self, GeolayerTypesError> {
        if positions.len() < Self::MIN_POSITIONS {
            return Err(GeolayerTypesError::TooFewPositions {
                min: Self::MIN_POSITIONS,
                actual: positions.len(),
            });
        }

        Ok(Self { positions })
    }

    /// Positions of the line.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Iterates over positions of the line.
    pub fn iter_positions(&self) -> impl Iterator<Item = &'_ Position> {
        self.positions.iter()
    }

    /// Returns true if the first and the last positions are the same.
    pub fn is_closed(&self) -> bool {
        self.positions.first() == self.positions.last()
    }

    /// Converts the line into a [`LinearRing`], failing if it is not a valid ring.
    pub fn into_ring(self) -> Result<LinearRing, GeolayerTypesError> {
        LinearRing::new(self.positions)
    }

    /// Copy of the line with altitudes of all positions dropped.
    pub fn at_surface(&self) -> Self {
        Self {
            positions: self.positions.iter().map(Position::at_surface).collect(),
        }
    }
}

impl TryFrom<Vec<Position>> for LineString {
    type Error = GeolayerTypesError;

    fn try_from(value: Vec<Position>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LineString> for Vec<Position> {
    fn from(value: LineString) -> Self {
        value.positions
    }
}

/// Closed sequence of at least 4 positions, the first and the last being the same.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "Vec<Position>", into = "Vec<Position>")]
pub struct LinearRing {
    positions: Vec<Position>,
}

impl LinearRing {
    /// Minimum number of positions in a ring, including the closing one.
    pub const MIN_POSITIONS: usize = 4;

    /// Creates a new ring.
    ///
    /// The positions must include the closing position. Altitudes take part in the comparison, so a ring starting
    /// at `[30, 10, 5]` is not closed by `[30, 10]`.
    pub fn new(positions: Vec<Position>) -> Result<Self, GeolayerTypesError> {
        if positions.len() < Self::MIN_POSITIONS {
            return Err(GeolayerTypesError::TooFewPositions {
                min: Self::MIN_POSITIONS,
                actual: positions.len(),
            });
        }

        if positions.first() != positions.last() {
            return Err(GeolayerTypesError::RingNotClosed);
        }

        Ok(Self { positions })
    }

    /// Positions of the ring, including the closing one.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Iterates over positions of the ring, including the closing one.
    pub fn iter_positions(&self) -> impl Iterator<Item = &'_ Position> {
        self.positions.iter()
    }

    /// Iterates over distinct positions of the ring, i.e. without the closing one.
    pub fn iter_distinct(&self) -> impl Iterator<Item = &'_ Position> {
        self.positions[..self.positions.len() - 1].iter()
    }

    /// Copy of the ring with altitudes of all positions dropped.
    pub fn at_surface(&self) -> Self {
        Self {
            positions: self.positions.iter().map(Position::at_surface).collect(),
        }
    }
}

impl TryFrom<Vec<Position>> for LinearRing {
    type Error = GeolayerTypesError;

    fn try_from(value: Vec<Position>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LinearRing> for Vec<Position> {
    fn from(value: LinearRing) -> Self {
        value.positions
    }
}

impl From<LinearRing> for LineString {
    fn from(value: LinearRing) -> Self {
        Self {
            positions: value.positions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lonlat;
    use assert_matches::assert_matches;

    fn triangle() -> Vec<Position> {
        vec![
            lonlat!(0.0, 0.0),
            lonlat!(1.0, 0.0),
            lonlat!(0.0, 1.0),
            lonlat!(0.0, 0.0),
        ]
    }

    #[test]
    fn line_string_needs_two_positions() {
        assert_matches!(
            LineString::new(vec![lonlat!(0.0, 0.0)]),
            Err(GeolayerTypesError::TooFewPositions { min: 2, actual: 1 })
        );
        assert!(LineString::new(vec![lonlat!(0.0, 0.0), lonlat!(1.0, 1.0)]).is_ok());
    }

    #[test]
    fn triangle_is_minimal_ring() {
        let ring = LinearRing::new(triangle()).expect("valid ring");
        assert_eq!(ring.positions().len(), 4);
        assert_eq!(ring.iter_distinct().count(), 3);
    }

    #[test]
    fn short_ring_is_rejected() {
        let mut positions = triangle();
        positions.remove(2);
        assert_matches!(
            LinearRing::new(positions),
            Err(GeolayerTypesError::TooFewPositions { min: 4, actual: 3 })
        );
    }

    #[test]
    fn unclosed_ring_is_rejected() {
        let mut positions = triangle();
        positions[3] = lonlat!(0.5, 0.5);
        assert_matches!(
            LinearRing::new(positions),
            Err(GeolayerTypesError::RingNotClosed)
        );
    }

    #[test]
    fn ring_closure_compares_altitude() {
        let mut positions = triangle();
        positions[0] = lonlat!(0.0, 0.0, 5.0);
        assert_matches!(
            LinearRing::new(positions),
            Err(GeolayerTypesError::RingNotClosed)
        );
    }

    #[test]
    fn closed_line_converts_into_ring() {
        let line = LineString::new(triangle()).expect("valid line");
        assert!(line.is_closed());
        assert!(line.into_ring().is_ok());
    }
}
