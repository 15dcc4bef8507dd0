//! Error types for the input-color core.
//!
//! Out-of-range numeric input is deliberately not an error: the clamping
//! helpers in [`crate::convert`] pull such values to the nearest boundary,
//! so only string parsing can fail.

use thiserror::Error;

/// Errors produced by color parsing and conversion operations.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A hex, rgb(a), or named color string could not be parsed.
    #[error("invalid color format: {0}")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_includes_message() {
        let err = ColorError::InvalidFormat("expected 3 or 6 hex digits".into());
        let msg = format!("{err}");
        assert!(
            msg.contains("expected 3 or 6 hex digits"),
            "missing detail in: {msg}"
        );
    }

    #[test]
    fn invalid_format_mentions_color() {
        let err = ColorError::InvalidFormat("zz".into());
        let msg = format!("{err}");
        assert!(
            msg.contains("invalid color format"),
            "expected prefix in: {msg}"
        );
    }

    #[test]
    fn color_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorError>();
    }

    #[test]
    fn color_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ColorError>();
    }
}
