use serde::{Deserialize, Serialize};

/// A single GeoJSON position: longitude and latitude in degrees with an optional altitude in meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Position {
    lon: f64,
    lat: f64,
    alt: Option<f64>,
}

impl Position {
    /// Creates a position on the surface.
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self {
            lon,
            lat,
            alt: None,
        }
    }

    /// Creates a position with the given altitude.
    pub const fn with_altitude(lon: f64, lat: f64, alt: f64) -> Self {
        Self {
            lon,
            lat,
            alt: Some(alt),
        }
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Altitude, if the position has one.
    pub fn alt(&self) -> Option<f64> {
        self.alt
    }

    /// Returns true if the position has the third (altitude) component.
    pub fn has_altitude(&self) -> bool {
        self.alt.is_some()
    }

    /// Returns a copy of the position with the altitude dropped.
    pub fn at_surface(&self) -> Self {
        Self { alt: None, ..*self }
    }
}

/// What the altitude values of a geometry are measured against.
///
/// A geometry is [`Ellipsoid`](AltitudeReference::Ellipsoid) only when every one of its positions has an altitude.
/// If at least one position lacks it, the whole geometry is placed on the [`Surface`](AltitudeReference::Surface)
/// and altitudes of all its positions are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum AltitudeReference {
    /// Positions are drawn on the surface of the map.
    #[default]
    Surface,
    /// Altitudes are heights above the reference ellipsoid.
    Ellipsoid,
}

impl AltitudeReference {
    /// Altitude reference for the given set of positions.
    pub fn of<'a>(mut positions: impl Iterator<Item = &'a Position>) -> Self {
        let mut has_any = false;
        let all_have_altitude = positions.all(|p| {
            has_any = true;
            p.has_altitude()
        });

        if has_any && all_have_altitude {
            Self::Ellipsoid
        } else {
            Self::Surface
        }
    }
}

/// Creates a new [`Position`] from longitude, latitude and optional altitude.
///
/// ```
/// use geolayer_types::lonlat;
///
/// let position = lonlat!(-122.33, 47.60);
/// assert_eq!(position.lat(), 47.60);
/// assert_eq!(lonlat!(10.0, 20.0, 5.0).alt(), Some(5.0));
/// ```
#[macro_export]
macro_rules! lonlat {
    ($lon:expr, $lat:expr) => {
        $crate::Position::new($lon, $lat)
    };
    ($lon:expr, $lat:expr, $alt:expr) => {
        $crate::Position::with_altitude($lon, $lat, $alt)
    };
}
