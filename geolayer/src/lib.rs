//! Geolayer turns GeoJSON documents into layers of styled map primitives that a map rendering surface can display.
//!
//! # Quick start
//!
//! ```no_run
//! use geolayer::Color;
//!
//! let text = r##"{
//!     "type": "Feature",
//!     "geometry": {"type": "Point", "coordinates": [-122.33, 47.60]},
//!     "properties": {"marker-color": "#ff0000", "title": "Seattle"}
//! }"##;
//!
//! let mut layer = geolayer::parse(text).expect("valid GeoJSON");
//! let icon = layer.icons().next().expect("one icon");
//! assert_eq!(icon.color, Color::RED);
//!
//! layer.set_stroke_width(3.0);
//! let icons = layer.remove_icons();
//! assert!(layer.is_empty());
//! assert_eq!(icons.len(), 1);
//! ```
//!
//! # Processing steps
//!
//! Text goes through a fixed chain of steps, none of which modifies the output of the previous one:
//!
//! * the text is parsed into a generic JSON tree by `serde_json`,
//! * the [`decoder`] validates the tree and converts it into the typed [`geolayer_types::GeoJsonNode`],
//! * the [`mapper`] walks the typed tree and creates [`primitive`]s, resolving their [`style`] from the
//!   simplestyle properties of every feature,
//! * the primitives are collected into a [`GeoJsonLayer`], which can restyle or remove them by kind.
//!
//! [`GeoJsonParser`] runs all of these steps. Any validation problem aborts the whole parse with a [`GeoJsonError`],
//! so a layer always contains the complete document.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

mod color;
pub mod decoder;
pub mod error;
pub mod layer;
pub mod legacy;
pub mod mapper;
mod parser;
pub mod primitive;
pub mod style;

#[cfg(test)]
pub(crate) mod tests;

pub use color::Color;
pub use error::{ErrorKind, GeoJsonError};
pub use layer::GeoJsonLayer;
pub use parser::{parse, GeoJsonParser, ParserOptions};
pub use primitive::{IconPrimitive, MapPrimitive, PolygonPrimitive, PolylinePrimitive, PrimitiveKind};

// Reexport geolayer_types
pub use geolayer_types;
