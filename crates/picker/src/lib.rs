#![deny(unsafe_code)]
//! Picker controller for the input-color widget.
//!
//! This crate sits between `input-color-core` (the pure color model) and the
//! UI shells (WASM bindings, CLI replay). It defines the per-channel
//! [`InputEvent`], the pure state transition [`apply`], the stateful
//! [`ColorPicker`] controller that owns the current color and emits each
//! accepted update to a [`ColorSink`], and the slider/pad geometry mappings.

pub mod controller;
pub mod event;
pub mod geometry;

pub use controller::{ColorPicker, ColorSink};
pub use event::{apply, InputEvent};
