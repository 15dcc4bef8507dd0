#![deny(unsafe_code)]
//! WASM bindings for the input-color picker.
//!
//! Exposes the picker controller to a JavaScript shell. The shell wires its
//! pointer and keyboard callbacks to the channel methods here and receives
//! each accepted update through the `onChange` function, as the JSON
//! encoding of the full color object (`{r, g, b, h, s, v, a, hex, rgba}`).
//! All color math stays on the Rust side; the shell only renders.

use input_color_core::Color;
use input_color_picker::{geometry, ColorPicker, ColorSink};
use js_sys::Function;
use wasm_bindgen::prelude::*;

/// Sink that forwards each emitted color to a JS callback as JSON.
struct JsSink {
    on_change: Function,
}

impl ColorSink for JsSink {
    fn color_changed(&mut self, color: &Color) {
        if let Ok(json) = serde_json::to_string(color) {
            // A throwing callback must not poison the picker state.
            let _ = self.on_change.call1(&JsValue::NULL, &JsValue::from_str(&json));
        }
    }
}

/// JS-facing handle around the picker controller.
#[wasm_bindgen]
pub struct WasmColorPicker {
    inner: ColorPicker,
}

#[wasm_bindgen]
impl WasmColorPicker {
    /// Creates a picker from a seed string (hex, rgb()/rgba(), keyword).
    ///
    /// An unparseable seed falls back to opaque black; the seed color is
    /// delivered to `on_change` before this constructor returns.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: &str, on_change: Function) -> WasmColorPicker {
        WasmColorPicker {
            inner: ColorPicker::new(seed, Box::new(JsSink { on_change })),
        }
    }

    /// Saturation/value pad sample, both axes normalized to [0, 1].
    #[wasm_bindgen(js_name = setPad)]
    pub fn set_pad(&mut self, x: f64, y: f64) {
        self.inner.set_pad(x, y);
    }

    /// Hue slider sample, normalized to [0, 1].
    #[wasm_bindgen(js_name = setHueAxis)]
    pub fn set_hue_axis(&mut self, x: f64) {
        self.inner.set_hue_axis(x);
    }

    /// Alpha slider sample, normalized to [0, 1].
    #[wasm_bindgen(js_name = setAlphaAxis)]
    pub fn set_alpha_axis(&mut self, x: f64) {
        self.inner.set_alpha_axis(x);
    }

    /// Direct HSV edit (hue slider plus pad state).
    #[wasm_bindgen(js_name = setHsv)]
    pub fn set_hsv(&mut self, h: i32, s: i32, v: i32) {
        self.inner.set_hsv(h, s, v);
    }

    /// Numeric R/G/B field edit.
    #[wasm_bindgen(js_name = setRgb)]
    pub fn set_rgb(&mut self, r: i32, g: i32, b: i32) {
        self.inner.set_rgb(r, g, b);
    }

    /// Numeric alpha field edit in [0, 100].
    #[wasm_bindgen(js_name = setAlpha)]
    pub fn set_alpha(&mut self, a: i32) {
        self.inner.set_alpha(a);
    }

    /// Hex text field commit. Returns `false` when the text was rejected
    /// and the previous color kept, so the shell can mark the field.
    #[wasm_bindgen(js_name = commitHexText)]
    pub fn commit_hex_text(&mut self, text: &str) -> bool {
        self.inner.commit_hex_text(text).is_ok()
    }

    /// The current color as a JSON string.
    #[wasm_bindgen(js_name = colorJson)]
    pub fn color_json(&self) -> String {
        serde_json::to_string(self.inner.color()).unwrap_or_default()
    }

    /// Current hex string, for the text field.
    pub fn hex(&self) -> String {
        self.inner.color().hex.clone()
    }

    /// Current display string, for the swatch background.
    pub fn rgba(&self) -> String {
        self.inner.color().rgba.clone()
    }

    /// Pad thumb x position in [0, 1].
    #[wasm_bindgen(js_name = padX)]
    pub fn pad_x(&self) -> f64 {
        geometry::sv_to_pad(self.inner.color().s, self.inner.color().v).0
    }

    /// Pad thumb y position in [0, 1].
    #[wasm_bindgen(js_name = padY)]
    pub fn pad_y(&self) -> f64 {
        geometry::sv_to_pad(self.inner.color().s, self.inner.color().v).1
    }

    /// Hue slider thumb position in [0, 1].
    #[wasm_bindgen(js_name = hueAxis)]
    pub fn hue_axis(&self) -> f64 {
        geometry::hue_to_axis(self.inner.color().h)
    }

    /// Alpha slider thumb position in [0, 1].
    #[wasm_bindgen(js_name = alphaAxis)]
    pub fn alpha_axis(&self) -> f64 {
        geometry::alpha_to_axis(self.inner.color().a)
    }
}
