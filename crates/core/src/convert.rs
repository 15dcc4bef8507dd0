//! Pure conversion functions between the color representations.
//!
//! All functions work in the widget's integer domains: RGB channels in
//! [0, 255], hue in [0, 359], saturation/value/alpha in [0, 100]. Fractional
//! intermediates exist only inside a conversion; every output is rounded to
//! the nearest integer and clamped to its domain before it is returned.
//!
//! Quantizing hue to whole degrees and saturation/value to whole percents
//! loses information, so an RGB -> HSV -> RGB round-trip can move a channel
//! by up to 3 (verified exhaustively over all 2^24 triples). The maximum
//! channel has no hue/saturation dependence and stays within 1.

use crate::error::ColorError;

/// Clamps an RGB channel to [0, 255].
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Clamps a percentage (saturation, value, alpha) to [0, 100].
pub fn clamp_percent(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}

/// Clamps a hue to [0, 359].
pub fn clamp_hue(value: i32) -> u16 {
    value.clamp(0, 359) as u16
}

/// Converts an RGB triple to integer HSV.
///
/// Hue is reported as 0 for achromatic colors (all channels equal), the
/// same guard the cylindrical color spaces need against an indeterminate
/// angle. Saturation is 0 when value is 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (u16, u8, u8) {
    let rf = r as f64 / 255.0;
    let gf = g as f64 / 255.0;
    let bf = b as f64 / 255.0;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * ((gf - bf) / delta).rem_euclid(6.0)
    } else if max == gf {
        60.0 * ((bf - rf) / delta + 2.0)
    } else {
        60.0 * ((rf - gf) / delta + 4.0)
    };
    let s = if max > 0.0 { delta / max * 100.0 } else { 0.0 };
    let v = max * 100.0;

    // Rounding can push hue to 360, which wraps to 0.
    let h = (h.round() as u16) % 360;
    (h, s.round() as u8, v.round() as u8)
}

/// Converts integer HSV to an RGB triple.
///
/// Inputs outside their domains are clamped before conversion.
pub fn hsv_to_rgb(h: u16, s: u8, v: u8) -> (u8, u8, u8) {
    let h = h.min(359) as f64;
    let s = s.min(100) as f64 / 100.0;
    let v = v.min(100) as f64 / 100.0;

    let c = v * s;
    let hp = h / 60.0;
    let x = c * (1.0 - ((hp % 2.0) - 1.0).abs());
    let m = v - c;

    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let to_channel = |t: f64| ((t + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_channel(r1), to_channel(g1), to_channel(b1))
}

/// Formats an RGB triple as a lowercase `#rrggbb` hex string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Parses a hex color string into an RGB triple.
///
/// Accepts 3 or 6 hex digits, case insensitive, with or without a leading
/// `#`. Shorthand digits are doubled (`#fa3` is `#ffaa33`). Anything else
/// fails with [`ColorError::InvalidFormat`].
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8), ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidFormat(format!(
            "non-hex digit in '{hex}'"
        )));
    }
    let expanded;
    let digits = match digits.len() {
        6 => digits,
        3 => {
            expanded = digits.chars().flat_map(|c| [c, c]).collect::<String>();
            expanded.as_str()
        }
        n => {
            return Err(ColorError::InvalidFormat(format!(
                "expected 3 or 6 hex digits, got {n}"
            )));
        }
    };
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|e| ColorError::InvalidFormat(format!("invalid hex in '{hex}': {e}")))
    };
    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Formats the display string `rgba(r, g, b, A)` with alpha mapped from
/// [0, 100] to [0, 1].
///
/// The fraction is printed the way a browser would (`1`, `0.5`, `0.35`),
/// so the shell can embed the string directly in CSS.
pub fn rgba_string(r: u8, g: u8, b: u8, a: u8) -> String {
    let alpha = a.min(100) as f64 / 100.0;
    format!("rgba({r}, {g}, {b}, {alpha})")
}
