#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGBA color of a map primitive.
///
/// The layer only resolves colors; converting them into the host graphics system's color type is done with
/// [`Color::to_u8_array`], [`Color::to_f32_array`] or [`Color::to_hex`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid color: {value}"))
    }
}

impl From<Color> for String {
    fn from(val: Color) -> Self {
        val.to_hex()
    }
}

impl Color {
    /// Transparent color: `#00000000`
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    /// Red color: `#FF0000FF`
    pub const RED: Color = Color::rgba(255, 0, 0, 255);
    /// Green color: `#00FF00FF`, named `lime` in CSS.
    pub const GREEN: Color = Color::rgba(0, 255, 0, 255);
    /// Blue color: `#0000FFFF`
    pub const BLUE: Color = Color::rgba(0, 0, 255, 255);
    /// White color: `#FFFFFFFF`
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    /// Black color: `#000000FF`
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    /// Purple color: `#800080FF`
    pub const PURPLE: Color = Color::rgba(128, 0, 128, 255);

    /// Constructs color from its RGBA channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Converts the color into f32 array with channels in `[0, 1]`.
    pub fn to_f32_array(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Converts the color into u8 array (RGBA).
    pub fn to_u8_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Converts the color into HEX8 string: `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Parses a color either from a hex string (see [`Color::try_from_hex`]) or from a CSS basic color name
    /// (see [`Color::from_name`]). Surrounding whitespace is ignored.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with('#') {
            Self::try_from_hex(value)
        } else {
            Self::from_name(value)
        }
    }

    /// Parses a color from the hex string. Hex string can be HEX3 (`#RGB`), HEX6 (`#RRGGBB`) or HEX8 (`#RRGGBBAA`).
    pub fn try_from_hex(hex_string: &str) -> Option<Self> {
        let digits = hex_string.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match hex_string.len() {
            4 => {
                let mut channels = hex_string[1..]
                    .chars()
                    .map(|c| c.to_digit(16).map(|v| (v * 17) as u8));
                Some(Self {
                    r: channels.next()??,
                    g: channels.next()??,
                    b: channels.next()??,
                    a: 255,
                })
            }
            7 | 9 => {
                let r = u8::from_str_radix(&hex_string[1..3], 16).ok()?;
                let g = u8::from_str_radix(&hex_string[3..5], 16).ok()?;
                let b = u8::from_str_radix(&hex_string[5..7], 16).ok()?;
                let a = if hex_string.len() == 9 {
                    u8::from_str_radix(&hex_string[7..9], 16).ok()?
                } else {
                    255
                };

                Some(Self { r, g, b, a })
            }
            _ => None,
        }
    }

    /// Parses a color from the hex string. Hex string can be either HEX6 (`#RRGGBB`) or HEX8 (`#RRGGBBAA`).
    ///
    /// # Panics
    ///
    /// Panics if the parsing fails.
    pub const fn from_hex(hex_string: &'static str) -> Self {
        let bytes = hex_string.as_bytes();
        if bytes.len() != 7 && bytes.len() != 9 || bytes[0] != b'#' {
            panic!("Invalid color hex string");
        }

        let r = decode_byte(&[bytes[1], bytes[2]]);
        let g = decode_byte(&[bytes[3], bytes[4]]);
        let b = decode_byte(&[bytes[5], bytes[6]]);
        let a = if hex_string.len() == 9 {
            decode_byte(&[bytes[7], bytes[8]])
        } else {
            255
        };

        Self { r, g, b, a }
    }

    /// Looks up one of the CSS basic color names (plus `orange`). Names are case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "silver" => Self::from_hex("#C0C0C0"),
            "gray" | "grey" => Self::from_hex("#808080"),
            "white" => Self::WHITE,
            "maroon" => Self::from_hex("#800000"),
            "red" => Self::RED,
            "purple" => Self::PURPLE,
            "fuchsia" | "magenta" => Self::from_hex("#FF00FF"),
            "green" => Self::from_hex("#008000"),
            "lime" => Self::GREEN,
            "olive" => Self::from_hex("#808000"),
            "yellow" => Self::from_hex("#FFFF00"),
            "navy" => Self::from_hex("#000080"),
            "blue" => Self::BLUE,
            "teal" => Self::from_hex("#008080"),
            "aqua" | "cyan" => Self::from_hex("#00FFFF"),
            "orange" => Self::from_hex("#FFA500"),
            "transparent" => Self::TRANSPARENT,
            _ => return None,
        };

        Some(color)
    }

    /// Returns a new color instance, copied from the base one but with the given alpha channel.
    pub fn with_alpha(&self, a: u8) -> Self {
        Self { a, ..*self }
    }

    /// Returns a new color with the alpha channel multiplied by `opacity`, clamped to `[0, 1]`.
    pub fn with_opacity(&self, opacity: f64) -> Self {
        let opacity = if opacity.is_nan() {
            1.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
        self.with_alpha((self.a as f64 * opacity).round() as u8)
    }

    /// Returns true if the color is fully transparent (`a == 0`).
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Red component of the color in RGBA space.
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Green component of the color in RGBA space.
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Blue component of the color in RGBA space.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Opacity component of the color.
    pub fn a(&self) -> u8 {
        self.a
    }
}

const fn decode_byte(chars: &[u8]) -> u8 {
    debug_assert!(chars.len() == 2);
    let first = decode_char(chars[0]);
    let second = decode_char(chars[1]);

    first * 16 + second
}

const fn decode_char(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => panic!("Invalid hex character"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_serialization() {
        let hex = "#FF1000AA";
        let color = Color::try_from_hex(hex).unwrap();
        assert_eq!(&color.to_hex(), hex);

        assert_eq!(Color::from_hex(hex), color);
    }

    #[test]
    fn short_hex_expands_channels() {
        assert_eq!(Color::parse("#f00"), Some(Color::RED));
        assert_eq!(Color::parse("#ace"), Some(Color::rgba(0xAA, 0xCC, 0xEE, 255)));
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(Color::parse("Red"), Some(Color::RED));
        assert_eq!(Color::parse(" navy "), Some(Color::rgba(0, 0, 128, 255)));
    }

    #[test]
    fn named_colors_match_constants() {
        assert_eq!(Color::parse("black"), Some(Color::BLACK));
        assert_eq!(Color::parse("white"), Some(Color::WHITE));
        assert_eq!(Color::parse("red"), Some(Color::RED));
        assert_eq!(Color::parse("lime"), Some(Color::GREEN));
        assert_eq!(Color::parse("blue"), Some(Color::BLUE));
        assert_eq!(Color::parse("purple"), Some(Color::PURPLE));
        assert_eq!(Color::parse("transparent"), Some(Color::TRANSPARENT));
        assert_eq!(Color::parse("gray"), Some(Color::rgba(128, 128, 128, 255)));
        assert_eq!(Color::parse("grey"), Color::parse("gray"));
    }

    #[test]
    fn malformed_colors_are_rejected() {
        for value in ["", "#", "#ff00", "#gg0000", "ff0000", "#ff0000ff00", "notacolor", "#ÿÿ0"] {
            assert_eq!(Color::parse(value), None, "{value}");
        }
    }

    #[test]
    fn opacity_scales_alpha() {
        assert_eq!(Color::BLUE.with_opacity(0.5).a(), 128);
        assert_eq!(Color::BLUE.with_opacity(2.0).a(), 255);
        assert_eq!(Color::BLUE.with_opacity(-1.0).a(), 0);
        assert_eq!(Color::rgba(0, 0, 0, 100).with_opacity(0.5).a(), 50);
    }

    #[test]
    fn host_arrays() {
        assert_eq!(Color::PURPLE.to_u8_array(), [128, 0, 128, 255]);
        assert_eq!(Color::WHITE.to_f32_array(), [1.0, 1.0, 1.0, 1.0]);
    }
}
