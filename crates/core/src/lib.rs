#![deny(unsafe_code)]
//! Core color model for the input-color widget.
//!
//! Provides the canonical [`Color`] value (RGB, HSV, alpha, hex, and display
//! string kept consistent), the pure conversion functions between those
//! representations, seed-string parsing, and the [`ColorError`] type.
//!
//! Everything here is a pure data transformer: no I/O, no global state.

pub mod color;
pub mod convert;
pub mod error;
pub mod named;

pub use color::Color;
pub use error::ColorError;
