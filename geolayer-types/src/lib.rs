//! Typed representation of a GeoJSON (RFC 7946) document.
//!
//! The types in this crate are the output of a GeoJSON decoder and the input of anything that turns
//! geographic data into map primitives. All structural rules of the format that can be checked locally are
//! enforced at construction time:
//!
//! * a [`LineString`] has at least 2 positions,
//! * a [`LinearRing`] has at least 4 positions and its first and last positions are equal,
//! * a [`Polygon`] always has an exterior ring,
//! * a [`Feature`] can only contain a [`Geometry`], never another feature or collection.
//!
//! So once a value of these types exists, it can be consumed without re-validating it.

pub mod error;

mod position;
pub use position::*;

pub mod contour;
pub use contour::{LineString, LinearRing};

mod polygon;
pub use polygon::Polygon;

mod multi_point;
pub use multi_point::MultiPoint;

mod multi_contour;
pub use multi_contour::MultiLineString;

mod multi_polygon;
pub use multi_polygon::MultiPolygon;

pub mod geometry;
pub use geometry::{Geometry, GeometryCollection, GeometryKind};

pub mod feature;
pub use feature::{Feature, FeatureCollection, FeatureId, GeoJsonNode, Properties};

#[cfg(feature = "geo-types")]
mod geo_types;
