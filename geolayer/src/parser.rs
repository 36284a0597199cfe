use geolayer_types::Properties;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::decoder::{DecoderOptions, GeoJsonDecoder};
use crate::error::GeoJsonError;
use crate::layer::GeoJsonLayer;
use crate::mapper::PrimitiveMapper;
use crate::primitive::PrimitiveKind;
use crate::style::StyleDefaults;

/// Settings of a [`GeoJsonParser`].
///
/// With the `serde` feature the options can be loaded from any format `serde` supports. Missing fields take their
/// default values:
///
/// ```json
/// {"decoder": {"validate_ranges": false}, "style": {"stroke_width": 1.5, "fill_color": "#00ff0080"}}
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserOptions {
    /// Validation settings.
    pub decoder: DecoderOptions,
    /// Values of style attributes that features do not set.
    pub style: StyleDefaults,
}

impl ParserOptions {
    /// Returns the options with the given decoder settings.
    pub fn with_decoder(self, decoder: DecoderOptions) -> Self {
        Self { decoder, ..self }
    }

    /// Returns the options with the given style defaults.
    pub fn with_style(self, style: StyleDefaults) -> Self {
        Self { style, ..self }
    }
}

/// Creates [`GeoJsonLayer`]s from GeoJSON text.
///
/// Parsing either returns a layer with every primitive of the document or an error describing the first problem
/// found. A layer is never created from a part of a document.
#[derive(Debug, Clone, Default)]
pub struct GeoJsonParser {
    decoder: GeoJsonDecoder,
    mapper: PrimitiveMapper,
}

impl GeoJsonParser {
    /// Creates a new parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new parser.
    pub fn with_options(options: ParserOptions) -> Self {
        Self {
            decoder: GeoJsonDecoder::new(options.decoder),
            mapper: PrimitiveMapper::new(options.style),
        }
    }

    /// Options of the parser.
    pub fn options(&self) -> ParserOptions {
        ParserOptions {
            decoder: *self.decoder.options(),
            style: *self.mapper.defaults(),
        }
    }

    /// Parses a GeoJSON document.
    pub fn parse(&self, text: &str) -> Result<GeoJsonLayer, GeoJsonError> {
        let root: Value = serde_json::from_str(text)?;
        self.parse_value(&root)
    }

    /// Creates a layer from an already parsed JSON document.
    pub fn parse_value(&self, root: &Value) -> Result<GeoJsonLayer, GeoJsonError> {
        let node = self.decoder.decode(root)?;
        let layer = GeoJsonLayer::from(self.mapper.map_to_primitives(&node, &Properties::new()));

        log::debug!(
            "Created GeoJSON layer with {} icons, {} polylines and {} polygons",
            layer.count(PrimitiveKind::Icon),
            layer.count(PrimitiveKind::Polyline),
            layer.count(PrimitiveKind::Polygon),
        );

        Ok(layer)
    }
}

/// Parses a GeoJSON document with default options.
pub fn parse(text: &str) -> Result<GeoJsonLayer, GeoJsonError> {
    GeoJsonParser::new().parse(text)
}
