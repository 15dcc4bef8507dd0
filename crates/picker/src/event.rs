//! Input events and the pure state transition.
//!
//! Every edit the widget can receive is one [`InputEvent`], and [`apply`]
//! turns the previous [`Color`] plus one event into the next `Color`. Only
//! the fields causally dependent on the event are recomputed; everything
//! else is passed through from the previous value. In particular an alpha
//! edit copies r/g/b/h/s/v verbatim instead of re-running an RGB -> HSV
//! round-trip that could shift hue at achromatic points.

use input_color_core::{convert, Color, ColorError};
use serde::{Deserialize, Serialize};

/// One edit arriving through one of the five input channels.
///
/// Numeric payloads are `i32` because steppers and drags can briefly report
/// out-of-domain values; `apply` clamps them to the nearest boundary.
/// Serializes with a `channel` tag so replay scripts read naturally:
/// `{"channel": "hsv", "h": 210, "s": 67, "v": 60}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "channel", rename_all = "snake_case")]
pub enum InputEvent {
    /// Saturation/value pad or hue slider movement.
    Hsv { h: i32, s: i32, v: i32 },
    /// Numeric R/G/B field edit.
    Rgb { r: i32, g: i32, b: i32 },
    /// Alpha slider or numeric field edit, percentage in [0, 100].
    Alpha { a: i32 },
    /// Programmatic hex assignment.
    Hex { hex: String },
    /// Hex text field commit (the confirm keypress), raw text as typed.
    CommitHexText { text: String },
}

/// The pure state transition: previous color + event -> next color.
///
/// Out-of-range numeric input is clamped; a malformed hex string fails with
/// [`ColorError::InvalidFormat`] and the caller keeps the previous color.
pub fn apply(prev: &Color, event: &InputEvent) -> Result<Color, ColorError> {
    match event {
        InputEvent::Hsv { h, s, v } => {
            let h = convert::clamp_hue(*h);
            let s = convert::clamp_percent(*s);
            let v = convert::clamp_percent(*v);
            let (r, g, b) = convert::hsv_to_rgb(h, s, v);
            Ok(Color {
                r,
                g,
                b,
                h,
                s,
                v,
                a: prev.a,
                hex: convert::rgb_to_hex(r, g, b),
                rgba: convert::rgba_string(r, g, b, prev.a),
            })
        }
        InputEvent::Rgb { r, g, b } => {
            let r = convert::clamp_channel(*r);
            let g = convert::clamp_channel(*g);
            let b = convert::clamp_channel(*b);
            let (h, s, v) = convert::rgb_to_hsv(r, g, b);
            Ok(Color {
                r,
                g,
                b,
                h,
                s,
                v,
                a: prev.a,
                hex: convert::rgb_to_hex(r, g, b),
                rgba: convert::rgba_string(r, g, b, prev.a),
            })
        }
        InputEvent::Alpha { a } => {
            let a = convert::clamp_percent(*a);
            Ok(Color {
                a,
                rgba: convert::rgba_string(prev.r, prev.g, prev.b, a),
                ..prev.clone()
            })
        }
        InputEvent::Hex { hex } => from_hex_text(prev, hex),
        InputEvent::CommitHexText { text } => from_hex_text(prev, text.trim()),
    }
}

/// Shared path for `Hex` and `CommitHexText`: parse, then recompute every
/// RGB-dependent field while preserving alpha.
fn from_hex_text(prev: &Color, text: &str) -> Result<Color, ColorError> {
    let (r, g, b) = convert::hex_to_rgb(text)?;
    let (h, s, v) = convert::rgb_to_hsv(r, g, b);
    Ok(Color {
        r,
        g,
        b,
        h,
        s,
        v,
        a: prev.a,
        hex: convert::rgb_to_hex(r, g, b),
        rgba: convert::rgba_string(r, g, b, prev.a),
    })
}
