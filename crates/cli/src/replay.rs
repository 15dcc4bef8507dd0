//! Script loading and replay for the `replay` subcommand.
//!
//! A script is a JSON array of picker [`InputEvent`]s. Replay applies them
//! strictly in order from a seed color, mirroring the widget's ordering
//! guarantee. Events the widget would reject (malformed hex) are skipped
//! with the previous color retained, exactly as the picker behaves; the
//! rejection is reported back so the caller can surface it.

use crate::error::CliError;
use input_color_core::Color;
use input_color_picker::{apply, InputEvent};
use std::path::Path;

/// Outcome of replaying one script.
pub struct Replay {
    /// Every color the picker would have emitted, in order (the seed is
    /// not included; the widget emits it before any interaction).
    pub emitted: Vec<Color>,
    /// The color after the last event (the seed if every event failed).
    pub final_color: Color,
    /// Rejected events as `(index, reason)` pairs.
    pub rejected: Vec<(usize, String)>,
}

/// Reads and parses a script file.
pub fn load_script(path: &Path) -> Result<Vec<InputEvent>, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("malformed script {}: {e}", path.display())))
}

/// Applies a script in order, starting from `seed`.
pub fn run_script(seed: Color, events: &[InputEvent]) -> Replay {
    let mut current = seed;
    let mut emitted = Vec::new();
    let mut rejected = Vec::new();
    for (i, event) in events.iter().enumerate() {
        match apply(&current, event) {
            Ok(next) => {
                current = next;
                emitted.push(current.clone());
            }
            Err(e) => rejected.push((i, e.to_string())),
        }
    }
    Replay {
        final_color: current,
        emitted,
        rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn script_file(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.json");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn load_script_parses_tagged_events() {
        let (_dir, path) = script_file(
            r#"[
                {"channel": "alpha", "a": 50},
                {"channel": "hsv", "h": 0, "s": 67, "v": 60}
            ]"#,
        );
        let events = load_script(&path).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], InputEvent::Alpha { a: 50 });
    }

    #[test]
    fn load_script_missing_file_is_io_error() {
        let err = load_script(Path::new("/nonexistent/script.json")).unwrap_err();
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn load_script_malformed_json_is_input_error() {
        let (_dir, path) = script_file("{not json");
        let err = load_script(&path).unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn run_script_applies_events_in_order() {
        let seed = Color::parse("#336699").unwrap();
        let events = vec![
            InputEvent::Alpha { a: 50 },
            InputEvent::Hsv { h: 0, s: 67, v: 60 },
        ];
        let replay = run_script(seed, &events);
        assert_eq!(replay.emitted.len(), 2);
        assert_eq!(replay.emitted[0].a, 50);
        assert_eq!(replay.final_color.hex, "#993232");
        assert_eq!(replay.final_color.a, 50);
        assert!(replay.rejected.is_empty());
    }

    #[test]
    fn run_script_skips_rejected_events_and_keeps_going() {
        let seed = Color::parse("red").unwrap();
        let events = vec![
            InputEvent::Hex { hex: "zzzzzz".into() },
            InputEvent::Alpha { a: 30 },
        ];
        let replay = run_script(seed, &events);
        assert_eq!(replay.emitted.len(), 1);
        assert_eq!(replay.rejected.len(), 1);
        assert_eq!(replay.rejected[0].0, 0);
        assert_eq!(replay.final_color.a, 30);
        assert_eq!(replay.final_color.hex, "#ff0000", "failed hex left RGB alone");
    }

    #[test]
    fn run_script_with_no_events_returns_the_seed() {
        let seed = Color::default();
        let replay = run_script(seed.clone(), &[]);
        assert!(replay.emitted.is_empty());
        assert_eq!(replay.final_color, seed);
    }
}
