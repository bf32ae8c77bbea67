use napi_derive::napi;
use serde::{Deserialize, Serialize};

use crate::error::{ColorError, ColorResult};
use crate::math::Hsl;

pub const DEFAULT_CANVAS_WIDTH: u32 = 256;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 256;
/// Largest canvas side accepted from callers; bounds the RGBA buffer at 64 MiB.
pub const MAX_CANVAS_SIDE: u32 = 4096;

/// Reject empty canvases and sides above [`MAX_CANVAS_SIDE`].
pub fn validate_canvas_size(width: u32, height: u32) -> ColorResult<()> {
    if width == 0 || height == 0 {
        return Err(ColorError::InvalidConfig(format!(
            "canvas must be non-empty, got {width}x{height}"
        )));
    }
    if width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
        return Err(ColorError::InvalidConfig(format!(
            "canvas {width}x{height} exceeds {MAX_CANVAS_SIDE}px per side"
        )));
    }
    Ok(())
}

/// Picker configuration passed from JS (or loaded from a JSON settings blob).
/// Missing fields take their defaults.
#[napi(object)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PickerConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Opacity slider start value, 0-100
    pub initial_opacity: f64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            initial_opacity: 100.0,
        }
    }
}

impl PickerConfig {
    pub fn from_json(json: &str) -> ColorResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ColorError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ColorResult<()> {
        validate_canvas_size(self.canvas_width, self.canvas_height)
    }
}

/// JS view of an HSL triple
#[napi(object)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslValue {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl From<Hsl> for HslValue {
    fn from(hsl: Hsl) -> Self {
        Self { h: hsl.h, s: hsl.s, l: hsl.l }
    }
}

/// One stop of the hue slider's background gradient.
#[napi(object)]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    /// Position along the track, 0-100
    pub offset: f64,
    pub hex: String,
}

/// Everything the UI needs to render the picker after an interaction.
#[napi(object)]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerSnapshot {
    /// Committed color, canonical `#RRGGBB`
    pub hex: String,
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub opacity: f64,
    /// Raw contents of the hex text field (may be a partial edit)
    pub hex_text: String,
    pub dragging: bool,
    pub marker_x: f64,
    pub marker_y: f64,
}
