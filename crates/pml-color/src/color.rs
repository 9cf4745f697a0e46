use core::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;
use crate::format::{to_css_hsl, to_hex};

/// An sRGB color with a floating point alpha.
///
/// Serialized as a `RRGGBB` (opaque) or `RRGGBBAA` hex string, the same form `a:srgbClr`
/// stores.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `0.0..=1.0`.
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0);
    pub const WHITE: Rgba = Rgba::new(0xFF, 0xFF, 0xFF);

    /// Opaque color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// `0xRRGGBB` packed value, ignoring alpha.
    pub const fn from_rgb24(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 1.0
    }
}

/// A color in hue/saturation/lightness space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsla {
    /// Hue in whole degrees, `0..=360`.
    pub h: u16,
    /// Saturation in `0.0..=1.0`.
    pub s: f64,
    /// Lightness in `0.0..=1.0`.
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    pub const fn new(h: u16, s: f64, l: f64) -> Self {
        Self { h, s, l, a: 1.0 }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 1.0
    }
}

/// The outcome of resolving a color reference.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorValue {
    Rgba(Rgba),
    Hsla(Hsla),
    /// "No color": the caller-supplied default (usually `transparent`), used when a reference
    /// legitimately has no concrete value.
    Fallback(String),
}

impl From<Rgba> for ColorValue {
    fn from(value: Rgba) -> Self {
        ColorValue::Rgba(value)
    }
}

impl From<Hsla> for ColorValue {
    fn from(value: Hsla) -> Self {
        ColorValue::Hsla(value)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_hex(*self))
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_css_hsl(*self))
    }
}

/// Parse a `RRGGBB` hex triplet (an optional leading `#` and surrounding whitespace are
/// tolerated). The result is opaque.
pub fn parse_hex_rgb(value: &str) -> Result<Rgba, ColorError> {
    let hex = value.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::MalformedReference(format!(
            "expected a RRGGBB hex color, got {value:?}"
        )));
    }
    let rgb = u32::from_str_radix(hex, 16)
        .map_err(|_| ColorError::MalformedReference(format!("invalid hex color {value:?}")))?;
    Ok(Rgba::from_rgb24(rgb))
}

impl Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_hex(*self))
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let hex = s.trim();
        match hex.len() {
            6 => parse_hex_rgb(hex).map_err(D::Error::custom),
            8 if hex.is_ascii() => {
                let mut rgba = parse_hex_rgb(&hex[..6]).map_err(D::Error::custom)?;
                let alpha = u8::from_str_radix(&hex[6..], 16)
                    .map_err(|_| D::Error::custom("invalid alpha byte"))?;
                rgba.a = alpha as f64 / 255.0;
                Ok(rgba)
            }
            _ => Err(D::Error::custom(
                "color must be a RRGGBB or RRGGBBAA hex string",
            )),
        }
    }
}
