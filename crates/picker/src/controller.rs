//! The stateful [`ColorPicker`] controller.
//!
//! Owns the single current [`Color`] and a caller-supplied [`ColorSink`].
//! One method per input channel; each accepted edit runs the pure
//! [`apply`](crate::event::apply) transition, replaces the current color,
//! and notifies the sink exactly once. A failed edit (malformed hex) leaves
//! the current color untouched and emits nothing.

use crate::event::{apply, InputEvent};
use crate::geometry;
use input_color_core::{Color, ColorError};

/// Receiver for accepted color updates.
///
/// Object-safe so shells can register boxed sinks; closures work through
/// the blanket impl.
pub trait ColorSink {
    /// Called once per accepted update with the complete new color.
    fn color_changed(&mut self, color: &Color);
}

impl<F: FnMut(&Color)> ColorSink for F {
    fn color_changed(&mut self, color: &Color) {
        self(color)
    }
}

/// The color picker controller: current color plus update dispatch.
pub struct ColorPicker {
    current: Color,
    sink: Box<dyn ColorSink>,
}

impl ColorPicker {
    /// Creates a picker from a seed string, falling back to opaque black
    /// when the seed does not parse.
    ///
    /// The seed color is emitted to the sink immediately, so the shell can
    /// paint its initial state before any interaction.
    pub fn new(seed: &str, sink: Box<dyn ColorSink>) -> Self {
        let mut picker = ColorPicker {
            current: Color::parse_or_default(seed),
            sink,
        };
        let seed_color = picker.current.clone();
        picker.sink.color_changed(&seed_color);
        picker
    }

    /// The current color.
    pub fn color(&self) -> &Color {
        &self.current
    }

    /// HSV pad / hue slider edit. Out-of-range values clamp; never fails.
    pub fn set_hsv(&mut self, h: i32, s: i32, v: i32) {
        // Infallible events still go through dispatch for single-emit.
        let _ = self.dispatch(InputEvent::Hsv { h, s, v });
    }

    /// Numeric R/G/B field edit. Out-of-range values clamp; never fails.
    pub fn set_rgb(&mut self, r: i32, g: i32, b: i32) {
        let _ = self.dispatch(InputEvent::Rgb { r, g, b });
    }

    /// Alpha edit in [0, 100]. Out-of-range values clamp; never fails.
    pub fn set_alpha(&mut self, a: i32) {
        let _ = self.dispatch(InputEvent::Alpha { a });
    }

    /// Programmatic hex assignment.
    pub fn set_hex(&mut self, hex: &str) -> Result<(), ColorError> {
        self.dispatch(InputEvent::Hex { hex: hex.to_owned() })
    }

    /// Hex text field commit: fired on the confirm keypress, not on every
    /// keystroke. The error is returned for the shell's validation policy.
    pub fn commit_hex_text(&mut self, text: &str) -> Result<(), ColorError> {
        self.dispatch(InputEvent::CommitHexText { text: text.to_owned() })
    }

    /// Saturation/value pad position, both axes normalized to [0, 1] with
    /// y growing downward. Hue is carried over from the current color.
    pub fn set_pad(&mut self, x: f64, y: f64) {
        let (s, v) = geometry::pad_to_sv(x, y);
        self.set_hsv(self.current.h as i32, s as i32, v as i32);
    }

    /// Hue slider position, normalized to [0, 1].
    pub fn set_hue_axis(&mut self, x: f64) {
        let h = geometry::axis_to_hue(x);
        self.set_hsv(h as i32, self.current.s as i32, self.current.v as i32);
    }

    /// Alpha slider position, normalized to [0, 1].
    pub fn set_alpha_axis(&mut self, x: f64) {
        self.set_alpha(geometry::axis_to_alpha(x) as i32);
    }

    /// Applies one event, commits the result, and notifies the sink.
    ///
    /// On failure the previous color stays current and nothing is emitted.
    pub fn dispatch(&mut self, event: InputEvent) -> Result<(), ColorError> {
        let next = apply(&self.current, &event)?;
        self.current = next;
        self.sink.color_changed(&self.current);
        Ok(())
    }
}
