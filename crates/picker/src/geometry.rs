//! Normalized slider/pad axis mappings.
//!
//! The shell reports pointer positions as normalized axes: `(x, y)` in
//! [0, 1] x [0, 1] for the saturation/value pad (y grows downward, so the
//! top edge is full value), and a single `x` in [0, 1] for the hue and
//! alpha sliders. These helpers map axes to the integer color domains and
//! back for thumb placement. Out-of-range positions clamp, matching the
//! widget's recovery policy for numeric overshoot.

/// Maps a pad position to (saturation, value).
///
/// `x` spans saturation left to right; `y` spans value top to bottom, so
/// `y = 0` is full value and `y = 1` is black.
pub fn pad_to_sv(x: f64, y: f64) -> (u8, u8) {
    let s = (x.clamp(0.0, 1.0) * 100.0).round() as u8;
    let v = ((1.0 - y.clamp(0.0, 1.0)) * 100.0).round() as u8;
    (s, v)
}

/// Maps (saturation, value) back to the pad thumb position.
pub fn sv_to_pad(s: u8, v: u8) -> (f64, f64) {
    let x = s.min(100) as f64 / 100.0;
    let y = 1.0 - v.min(100) as f64 / 100.0;
    (x, y)
}

/// Maps a hue slider position to a hue in [0, 359].
pub fn axis_to_hue(x: f64) -> u16 {
    (x.clamp(0.0, 1.0) * 359.0).round() as u16
}

/// Maps a hue to the slider thumb position.
pub fn hue_to_axis(h: u16) -> f64 {
    h.min(359) as f64 / 359.0
}

/// Maps an alpha slider position to a percentage in [0, 100].
pub fn axis_to_alpha(x: f64) -> u8 {
    (x.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Maps an alpha percentage to the slider thumb position.
pub fn alpha_to_axis(a: u8) -> f64 {
    a.min(100) as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_corners_map_to_sv_extremes() {
        assert_eq!(pad_to_sv(0.0, 0.0), (0, 100));
        assert_eq!(pad_to_sv(1.0, 0.0), (100, 100));
        assert_eq!(pad_to_sv(0.0, 1.0), (0, 0));
        assert_eq!(pad_to_sv(1.0, 1.0), (100, 0));
    }

    #[test]
    fn pad_center_maps_to_midpoint() {
        assert_eq!(pad_to_sv(0.5, 0.5), (50, 50));
    }

    #[test]
    fn pad_positions_outside_the_track_clamp() {
        assert_eq!(pad_to_sv(-0.2, 1.7), (0, 0));
        assert_eq!(pad_to_sv(1.3, -0.4), (100, 100));
    }

    #[test]
    fn sv_to_pad_inverts_pad_to_sv() {
        for s in [0u8, 25, 50, 75, 100] {
            for v in [0u8, 25, 50, 75, 100] {
                let (x, y) = sv_to_pad(s, v);
                assert_eq!(pad_to_sv(x, y), (s, v));
            }
        }
    }

    #[test]
    fn hue_axis_spans_the_full_wheel() {
        assert_eq!(axis_to_hue(0.0), 0);
        assert_eq!(axis_to_hue(1.0), 359);
        assert_eq!(axis_to_hue(-1.0), 0);
        assert_eq!(axis_to_hue(5.0), 359);
    }

    #[test]
    fn hue_to_axis_round_trips_every_degree() {
        for h in 0u16..360 {
            assert_eq!(axis_to_hue(hue_to_axis(h)), h, "hue {h}");
        }
    }

    #[test]
    fn alpha_axis_spans_the_percent_domain() {
        assert_eq!(axis_to_alpha(0.0), 0);
        assert_eq!(axis_to_alpha(0.5), 50);
        assert_eq!(axis_to_alpha(1.0), 100);
        assert_eq!(axis_to_alpha(9.9), 100);
    }

    #[test]
    fn alpha_to_axis_round_trips_every_percent() {
        for a in 0u8..=100 {
            assert_eq!(axis_to_alpha(alpha_to_axis(a)), a, "alpha {a}");
        }
    }
}
