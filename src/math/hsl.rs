use serde::{Deserialize, Serialize};

use super::hex::{format_hex, parse_hex_rgb, Rgb};

/// Returned by `hex_to_hsl` for input that is not a valid 6-digit hex color.
pub const FALLBACK_HSL: Hsl = Hsl { h: 0.0, s: 100.0, l: 50.0 };

/// Hue in degrees `[0, 360)`, saturation and lightness as percentages `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Unrounded conversion from RGB. Feeding the result back through
    /// `hsl_to_rgb` reproduces the original channels exactly.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = rgb.r as f64 / 255.0;
        let g = rgb.g as f64 / 255.0;
        let b = rgb.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic
            return Self::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self::new(sector / 6.0 * 360.0, s * 100.0, l * 100.0)
    }

    /// Integer-rounded copy, hue wrapped into `[0, 360)`.
    pub fn rounded(self) -> Self {
        Self::new(self.h.round() % 360.0, self.s.round(), self.l.round())
    }

    /// Clamp external input into the valid ranges.
    pub fn clamped(self) -> Self {
        let h = if self.h.is_finite() { self.h.rem_euclid(360.0) } else { 0.0 };
        Self::new(h, clamp_percent(self.s), clamp_percent(self.l))
    }

    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h, self.s, self.l)
    }

    pub fn to_hex(self) -> String {
        hsl_to_hex(self.h, self.s, self.l)
    }
}

fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) }
}

/// Convert a hex color to integer-rounded HSL.
///
/// Never fails: malformed input (wrong length, non-hex characters, a partial
/// string mid-edit) yields `FALLBACK_HSL` so the UI always has a renderable
/// color.
pub fn hex_to_hsl(hex: &str) -> Hsl {
    match parse_hex_rgb(hex) {
        Ok(rgb) => Hsl::from_rgb(rgb).rounded(),
        Err(_) => FALLBACK_HSL,
    }
}

/// HSL → RGB channels. Inputs are not range-checked; the channel math is
/// clamped so the output is always a valid color.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let l = l / 100.0;
    let a = s * l.min(1.0 - l) / 100.0;

    let channel = |n: f64| -> u8 {
        let k = (n + h / 30.0) % 12.0;
        let v = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (v * 255.0).round().clamp(0.0, 255.0) as u8
    };

    Rgb::new(channel(0.0), channel(8.0), channel(4.0))
}

/// HSL → canonical `#RRGGBB`.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    format_hex(hsl_to_rgb(h, s, l))
}
