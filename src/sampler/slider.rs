use crate::math::hsl_to_hex;
use crate::types::GradientStop;

pub const HUE_MAX: f64 = 360.0;
pub const OPACITY_MAX: f64 = 100.0;

/// Clamp a slider value into `[0, max]`. NaN snaps to 0.
pub fn clamp_slider(value: f64, max: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, max) }
}

/// A 1D track of `length` pixels mapping linearly onto `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderTrack {
    length: f64,
    max: f64,
}

impl SliderTrack {
    pub fn new(length: f64, max: f64) -> Self {
        Self { length: length.max(1.0), max }
    }

    pub fn hue(length: f64) -> Self {
        Self::new(length, HUE_MAX)
    }

    pub fn opacity(length: f64) -> Self {
        Self::new(length, OPACITY_MAX)
    }

    /// Value under a pointer at `position` along the track.
    pub fn value_at(&self, position: f64) -> f64 {
        clamp_slider(position / self.length * self.max, self.max)
    }

    /// Thumb position for `value`.
    pub fn position_of(&self, value: f64) -> f64 {
        clamp_slider(value, self.max) / self.max * self.length
    }
}

/// Background stops for the hue track, generated from the HSL model at full
/// saturation and 50% lightness. `count` is clamped to at least 2 so both
/// ends are present; 7 stops yield red, yellow, green, cyan, blue, magenta, red.
pub fn hue_gradient_stops(count: usize) -> Vec<GradientStop> {
    let count = count.max(2);
    let last = (count - 1) as f64;
    (0..count)
        .map(|i| {
            let t = i as f64 / last;
            GradientStop {
                offset: t * 100.0,
                hex: hsl_to_hex(t * HUE_MAX, 100.0, 50.0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_track_maps_ends() {
        let track = SliderTrack::hue(180.0);
        assert_eq!(track.value_at(0.0), 0.0);
        assert_eq!(track.value_at(90.0), 180.0);
        assert_eq!(track.value_at(180.0), 360.0);
        assert_eq!(track.value_at(500.0), 360.0);
        assert_eq!(track.value_at(-3.0), 0.0);
    }

    #[test]
    fn opacity_track_round_trips_position() {
        let track = SliderTrack::opacity(120.0);
        assert_eq!(track.position_of(50.0), 60.0);
        assert_eq!(track.value_at(track.position_of(25.0)), 25.0);
    }

    #[test]
    fn seven_stops_reproduce_classic_strip() {
        let hexes: Vec<String> = hue_gradient_stops(7).into_iter().map(|s| s.hex).collect();
        assert_eq!(
            hexes,
            vec!["#FF0000", "#FFFF00", "#00FF00", "#00FFFF", "#0000FF", "#FF00FF", "#FF0000"]
        );
    }

    #[test]
    fn stops_span_whole_track() {
        let stops = hue_gradient_stops(1);
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].offset, 0.0);
        assert_eq!(stops[1].offset, 100.0);
    }
}
