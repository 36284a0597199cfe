use serde::{Deserialize, Serialize};

use crate::contour::LinearRing;
use crate::error::GeolayerTypesError;
use crate::Position;

/// Polygon with an exterior ring and any number of holes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Polygon {
    exterior: LinearRing,
    holes: Vec<LinearRing>,
}

impl Polygon {
    /// Creates a new polygon.
    pub fn new(exterior: LinearRing, holes: Vec<LinearRing>) -> Self {
        Self { exterior, holes }
    }

    /// Creates a polygon from GeoJSON ring order: the first ring is the exterior, the rest are holes.
    pub fn from_rings(rings: Vec<LinearRing>) -> Result<Self, GeolayerTypesError> {
        let mut rings = rings.into_iter();
        let exterior = rings.next().ok_or(GeolayerTypesError::EmptyPolygon)?;
        Ok(Self {
            exterior,
            holes: rings.collect(),
        })
    }

    /// Exterior ring.
    pub fn exterior(&self) -> &LinearRing {
        &self.exterior
    }

    /// Holes of the polygon.
    pub fn holes(&self) -> &[LinearRing] {
        &self.holes
    }

    /// Iterates over all rings, the exterior first.
    pub fn iter_rings(&self) -> impl Iterator<Item = &'_ LinearRing> {
        std::iter::once(&self.exterior).chain(self.holes.iter())
    }

    /// Iterates over positions of all rings.
    pub fn iter_positions(&self) -> impl Iterator<Item = &'_ Position> {
        self.iter_rings().flat_map(|ring| ring.iter_positions())
    }

    /// Copy of the polygon with altitudes of all positions dropped.
    pub fn at_surface(&self) -> Self {
        Self {
            exterior: self.exterior.at_surface(),
            holes: self.holes.iter().map(LinearRing::at_surface).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lonlat;
    use assert_matches::assert_matches;

    fn square(size: f64) -> LinearRing {
        LinearRing::new(vec![
            lonlat!(0.0, 0.0),
            lonlat!(size, 0.0),
            lonlat!(size, size),
            lonlat!(0.0, size),
            lonlat!(0.0, 0.0),
        ])
        .expect("valid ring")
    }

    #[test]
    fn first_ring_is_exterior() {
        let polygon = Polygon::from_rings(vec![square(10.0), square(1.0)]).expect("valid polygon");
        assert_eq!(polygon.exterior(), &square(10.0));
        assert_eq!(polygon.holes(), &[square(1.0)]);
        assert_eq!(polygon.iter_rings().count(), 2);
        assert_eq!(polygon.iter_positions().count(), 10);
    }

    #[test]
    fn polygon_without_rings_is_rejected() {
        assert_matches!(
            Polygon::from_rings(vec![]),
            Err(GeolayerTypesError::EmptyPolygon)
        );
    }
}
