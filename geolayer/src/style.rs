//! Resolution of feature properties into visual attributes.
//!
//! Properties follow the [simplestyle](https://github.com/mapbox/simplestyle-spec) convention. Every recognized key
//! is optional. A missing key, a value of a wrong JSON type or a color string that cannot be parsed all fall back
//! to the configured [`StyleDefaults`], so style resolution never fails. Unrecognized keys are ignored.

use geolayer_types::Properties;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Color;

/// Property keys recognized by the style resolver.
pub mod keys {
    /// Color of icons.
    pub const MARKER_COLOR: &str = "marker-color";
    /// Color of lines and polygon outlines.
    pub const STROKE: &str = "stroke";
    /// Opacity of the stroke color in `[0, 1]`.
    pub const STROKE_OPACITY: &str = "stroke-opacity";
    /// Width of lines and polygon outlines.
    pub const STROKE_WIDTH: &str = "stroke-width";
    /// Presence of this key makes the stroke dashed.
    pub const STROKE_DASHARRAY: &str = "stroke-dasharray";
    /// Color of polygon areas.
    pub const FILL: &str = "fill";
    /// Opacity of the fill color in `[0, 1]`.
    pub const FILL_OPACITY: &str = "fill-opacity";
    /// Boolean visibility of the primitives of the feature.
    pub const VISIBLE: &str = "visible";
    /// Title of icons.
    pub const TITLE: &str = "title";
    /// Subtitle of icons.
    pub const DESCRIPTION: &str = "description";
}

/// Values used for style attributes that a feature does not set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleDefaults {
    /// Color of icons.
    pub marker_color: Color,
    /// Color of lines and polygon outlines, before stroke opacity is applied.
    pub stroke_color: Color,
    /// Color of polygon areas, before fill opacity is applied.
    pub fill_color: Color,
    /// Opacity of polygon areas.
    pub fill_opacity: f64,
    /// Opacity of lines and polygon outlines.
    pub stroke_opacity: f64,
    /// Width of lines and polygon outlines in device-independent units.
    pub stroke_width: f64,
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self {
            marker_color: Color::BLUE,
            stroke_color: Color::BLUE,
            fill_color: Color::BLUE,
            fill_opacity: 0.5,
            stroke_opacity: 1.0,
            stroke_width: 2.0,
        }
    }
}

impl StyleDefaults {
    /// Returns a copy with the given stroke color.
    pub fn with_stroke_color(&self, stroke_color: Color) -> Self {
        Self {
            stroke_color,
            ..*self
        }
    }

    /// Returns a copy with the given fill color.
    pub fn with_fill_color(&self, fill_color: Color) -> Self {
        Self {
            fill_color,
            ..*self
        }
    }

    /// Returns a copy with the given stroke width.
    pub fn with_stroke_width(&self, stroke_width: f64) -> Self {
        Self {
            stroke_width,
            ..*self
        }
    }

    /// Resolves visual attributes of a feature with the given properties.
    pub fn resolve(&self, properties: &Properties) -> StyleAttributes {
        let fill_opacity = number_property(properties, keys::FILL_OPACITY)
            .map(|v| v.clamp(0.0, 1.0))
            .unwrap_or(self.fill_opacity);
        let stroke_opacity = number_property(properties, keys::STROKE_OPACITY)
            .map(|v| v.clamp(0.0, 1.0))
            .unwrap_or(self.stroke_opacity);
        let stroke_width = number_property(properties, keys::STROKE_WIDTH)
            .map(|v| v.max(0.0))
            .unwrap_or(self.stroke_width);

        let fill_color = color_property(properties, keys::FILL).unwrap_or(self.fill_color);
        let stroke_color = color_property(properties, keys::STROKE).unwrap_or(self.stroke_color);

        StyleAttributes {
            marker_color: color_property(properties, keys::MARKER_COLOR)
                .unwrap_or(self.marker_color),
            stroke: StrokeStyle {
                color: stroke_color.with_opacity(stroke_opacity),
                width: stroke_width,
                dashed: properties
                    .get(keys::STROKE_DASHARRAY)
                    .is_some_and(|v| !v.is_null()),
            },
            fill_color: fill_color.with_opacity(fill_opacity),
            fill_opacity,
            stroke_opacity,
            visible: bool_property(properties, keys::VISIBLE).unwrap_or(true),
        }
    }
}

/// Resolves visual attributes of a feature using the default [`StyleDefaults`].
pub fn resolve_style(properties: &Properties) -> StyleAttributes {
    StyleDefaults::default().resolve(properties)
}

/// Outline of a polyline or a polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StrokeStyle {
    /// Color of the line, opacity included.
    pub color: Color,
    /// Width of the line in device-independent units.
    pub width: f64,
    /// Whether the line is dashed.
    pub dashed: bool,
}

/// Visual attributes resolved from the properties of a feature.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StyleAttributes {
    /// Color of icons.
    pub marker_color: Color,
    /// Stroke of lines and polygon outlines.
    pub stroke: StrokeStyle,
    /// Color of polygon areas, opacity included.
    pub fill_color: Color,
    /// Resolved fill opacity.
    pub fill_opacity: f64,
    /// Resolved stroke opacity.
    pub stroke_opacity: f64,
    /// Whether primitives of the feature are visible.
    pub visible: bool,
}

impl Default for StyleAttributes {
    fn default() -> Self {
        StyleDefaults::default().resolve(&Properties::new())
    }
}

fn color_property(properties: &Properties, key: &str) -> Option<Color> {
    let value = properties.get(key)?;
    let color = value.as_str().and_then(Color::parse);
    if color.is_none() {
        log::debug!("Ignoring \"{key}\" property: {value} is not a color");
    }

    color
}

fn number_property(properties: &Properties, key: &str) -> Option<f64> {
    let value = properties.get(key)?;
    let number = value.as_f64().filter(|v| v.is_finite());
    if number.is_none() {
        log::debug!("Ignoring \"{key}\" property: {value} is not a number");
    }

    number
}

fn bool_property(properties: &Properties, key: &str) -> Option<bool> {
    match properties.get(key)? {
        Value::Bool(value) => Some(*value),
        value => {
            log::debug!("Ignoring \"{key}\" property: {value} is not a boolean");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    fn properties(value: Value) -> Properties {
        match value {
            Value::Object(map) => map,
            _ => panic!("object expected"),
        }
    }

    #[test]
    fn empty_properties_resolve_to_defaults() {
        let style = resolve_style(&Properties::new());

        assert_relative_eq!(style.stroke.width, 2.0);
        assert_relative_eq!(style.fill_opacity, 0.5);
        assert_relative_eq!(style.stroke_opacity, 1.0);
        assert!(!style.stroke.dashed);
        assert!(style.visible);
        assert_eq!(style.marker_color, Color::BLUE);
        assert_eq!(style.stroke.color, Color::BLUE);
        assert_eq!(style.fill_color, Color::BLUE.with_alpha(128));
    }

    #[test]
    fn recognized_keys_override_defaults() {
        let style = resolve_style(&properties(json!({
            "marker-color": "#ff0000",
            "stroke": "#00ff00",
            "stroke-opacity": 0.5,
            "stroke-width": 4,
            "stroke-dasharray": "4 2",
            "fill": "white",
            "fill-opacity": 1,
            "visible": false
        })));

        assert_eq!(style.marker_color, Color::RED);
        assert_eq!(style.stroke.color, Color::GREEN.with_alpha(128));
        assert_relative_eq!(style.stroke.width, 4.0);
        assert!(style.stroke.dashed);
        assert_eq!(style.fill_color, Color::WHITE);
        assert!(!style.visible);
    }

    #[test]
    fn values_are_clamped() {
        let style = resolve_style(&properties(json!({
            "fill-opacity": 3.5,
            "stroke-opacity": -1,
            "stroke-width": -10
        })));

        assert_relative_eq!(style.fill_opacity, 1.0);
        assert_relative_eq!(style.stroke_opacity, 0.0);
        assert_relative_eq!(style.stroke.width, 0.0);
        assert!(style.stroke.color.is_transparent());
    }

    #[test]
    fn wrong_types_fall_back_to_defaults() {
        let style = resolve_style(&properties(json!({
            "marker-color": 255,
            "stroke": "not a color",
            "fill": "#12345",
            "fill-opacity": "0.1",
            "stroke-width": [3],
            "visible": "no"
        })));

        assert_eq!(style, StyleAttributes::default());
    }

    #[test]
    fn null_dasharray_is_not_dashed() {
        let style = resolve_style(&properties(json!({"stroke-dasharray": null})));
        assert!(!style.stroke.dashed);
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let style = resolve_style(&properties(json!({"name": "Dinagat", "marker-symbol": "bus"})));
        assert_eq!(style, StyleAttributes::default());
    }

    #[test]
    fn custom_defaults_are_used() {
        let defaults = StyleDefaults::default()
            .with_stroke_color(Color::BLACK)
            .with_fill_color(Color::RED)
            .with_stroke_width(1.0);
        let style = defaults.resolve(&Properties::new());

        assert_eq!(style.stroke.color, Color::BLACK);
        assert_eq!(style.fill_color, Color::RED.with_alpha(128));
        assert_relative_eq!(style.stroke.width, 1.0);
    }
}
