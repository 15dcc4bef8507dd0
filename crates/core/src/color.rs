//! The canonical [`Color`] value.
//!
//! A `Color` carries every representation the widget displays at once:
//! RGB channels, integer HSV, alpha as a percentage, the 6-digit hex string,
//! and the `rgba(...)` display string. The constructors here are the only
//! way to build one, so a `Color` is fully consistent by construction.
//! Updates never mutate in place; the picker derives a new value from the
//! previous one on every edit.

use crate::convert;
use crate::error::ColorError;
use crate::named;
use serde::{Deserialize, Serialize};

/// A fully-populated color: RGB, HSV, alpha, hex, and display string.
///
/// Invariants (held by construction):
/// - `(r, g, b)` and `(h, s, v)` describe the same color up to rounding;
///   hue is 0 at achromatic points.
/// - `hex` is the lowercase `#rrggbb` encoding of `(r, g, b)`; it never
///   encodes alpha.
/// - `rgba` is `rgba(r, g, b, a/100)`, recomputed whenever any input
///   changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Hue in [0, 359].
    pub h: u16,
    /// Saturation in [0, 100].
    pub s: u8,
    /// Value in [0, 100].
    pub v: u8,
    /// Alpha in [0, 100].
    pub a: u8,
    pub hex: String,
    pub rgba: String,
}

impl Default for Color {
    /// Opaque black, the documented fallback for unparseable seeds.
    fn default() -> Self {
        Color::from_rgb(0, 0, 0)
    }
}

impl Color {
    /// Builds a fully-populated opaque color from an RGB triple.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let (h, s, v) = convert::rgb_to_hsv(r, g, b);
        Color {
            r,
            g,
            b,
            h,
            s,
            v,
            a: 100,
            hex: convert::rgb_to_hex(r, g, b),
            rgba: convert::rgba_string(r, g, b, 100),
        }
    }

    /// Builds a fully-populated opaque color from integer HSV.
    ///
    /// Out-of-domain inputs are clamped. The stored HSV is the clamped
    /// input, not a re-derivation from the produced RGB.
    pub fn from_hsv(h: i32, s: i32, v: i32) -> Self {
        let h = convert::clamp_hue(h);
        let s = convert::clamp_percent(s);
        let v = convert::clamp_percent(v);
        let (r, g, b) = convert::hsv_to_rgb(h, s, v);
        Color {
            r,
            g,
            b,
            h,
            s,
            v,
            a: 100,
            hex: convert::rgb_to_hex(r, g, b),
            rgba: convert::rgba_string(r, g, b, 100),
        }
    }

    /// Builds a fully-populated opaque color from a hex string.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let (r, g, b) = convert::hex_to_rgb(hex)?;
        Ok(Color::from_rgb(r, g, b))
    }

    /// Parses a seed string: hex (`#336699`, `fa3`), an `rgb(...)` or
    /// `rgba(...)` display string, or a basic CSS color keyword.
    ///
    /// Fails with [`ColorError::InvalidFormat`] on anything else; callers
    /// that must never be left without a color use
    /// [`Color::parse_or_default`].
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ColorError::InvalidFormat("empty seed string".into()));
        }
        if let Some((r, g, b)) = named::lookup(value) {
            return Ok(Color::from_rgb(r, g, b));
        }
        let lower = value.to_ascii_lowercase();
        if lower.starts_with("rgba(") || lower.starts_with("rgb(") {
            return parse_rgb_function(value);
        }
        Color::from_hex(value)
    }

    /// Parses a seed string, falling back to opaque black.
    pub fn parse_or_default(value: &str) -> Self {
        Color::parse(value).unwrap_or_default()
    }
}

/// Parses `rgb(r, g, b)` or `rgba(r, g, b, a)` with alpha in [0, 1].
///
/// Channel values are clamped to [0, 255] and alpha to [0, 1]; fractional
/// channels are rounded. A missing alpha means opaque.
fn parse_rgb_function(value: &str) -> Result<Color, ColorError> {
    let lower = value.to_ascii_lowercase();
    let inner = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| {
            ColorError::InvalidFormat(format!("unterminated rgb() string: '{value}'"))
        })?;

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ColorError::InvalidFormat(format!(
            "expected 3 or 4 components in '{value}', got {}",
            parts.len()
        )));
    }

    let component = |text: &str| -> Result<f64, ColorError> {
        text.parse::<f64>()
            .map_err(|_| ColorError::InvalidFormat(format!("bad component '{text}' in '{value}'")))
    };

    let r = component(parts[0])?.round().clamp(0.0, 255.0) as u8;
    let g = component(parts[1])?.round().clamp(0.0, 255.0) as u8;
    let b = component(parts[2])?.round().clamp(0.0, 255.0) as u8;

    let mut color = Color::from_rgb(r, g, b);
    if parts.len() == 4 {
        let a = (component(parts[3])?.clamp(0.0, 1.0) * 100.0).round() as u8;
        color.a = a;
        color.rgba = convert::rgba_string(r, g, b, a);
    }
    Ok(color)
}
