use napi::bindgen_prelude::Buffer;
use napi_derive::napi;

use crate::error::ColorResult;
use crate::math;
use crate::sampler::canvas::{paint_gradient, PixelBuffer};
use crate::sampler::listener::LatestCommit;
use crate::sampler::slider::{hue_gradient_stops, SliderTrack};
use crate::sampler::ColorPicker;
use crate::types::{validate_canvas_size, GradientStop, HslValue, PickerConfig, PickerSnapshot};

fn to_napi_error(err: crate::error::ColorError) -> napi::Error {
    napi::Error::from_reason(err.to_string())
}

fn resolve_config(config: Option<PickerConfig>) -> napi::Result<PickerConfig> {
    let config = config.unwrap_or_default();
    config.validate().map_err(to_napi_error)?;
    Ok(config)
}

#[napi]
pub fn hex_to_hsl(hex: String) -> HslValue {
    math::hex_to_hsl(&hex).into()
}

/// Out-of-range input from JS is clamped (hue wrapped) before conversion.
#[napi]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    math::Hsl::new(h, s, l).clamped().to_hex()
}

/// Canonical `#RRGGBB`, or null if `text` is not a complete 6-digit hex.
#[napi]
pub fn normalize_hex(text: String) -> Option<String> {
    math::normalize_hex(&text)
}

/// Whether the hex text field holds a complete `#RRGGBB` (`#` optional).
#[napi]
pub fn is_valid_hex(text: String) -> bool {
    math::is_valid_hex(&text)
}

#[napi]
pub fn css_to_hex(value: String) -> Option<String> {
    math::color_parse::to_hex(&value)
}

#[napi]
pub fn hue_gradient(stops: u32) -> Vec<GradientStop> {
    hue_gradient_stops(stops as usize)
}

/// Hue under a pointer at `position` along a hue track `length` px long.
#[napi]
pub fn hue_at(position: f64, length: f64) -> f64 {
    SliderTrack::hue(length).value_at(position)
}

#[napi]
pub fn opacity_at(position: f64, length: f64) -> f64 {
    SliderTrack::opacity(length).value_at(position)
}

/// Thumb offset for `hue` along a hue track `length` px long.
#[napi]
pub fn hue_thumb_position(hue: f64, length: f64) -> f64 {
    SliderTrack::hue(length).position_of(hue)
}

/// RGBA8 bytes of the saturation/lightness gradient for `hue`, ready for `ImageData`.
/// Throws when either side is 0 or larger than 4096.
#[napi]
pub fn render_gradient(hue: f64, width: u32, height: u32) -> napi::Result<Buffer> {
    let bytes = gradient_bytes(hue, width, height).map_err(to_napi_error)?;
    Ok(bytes.into())
}

fn gradient_bytes(hue: f64, width: u32, height: u32) -> ColorResult<Vec<u8>> {
    validate_canvas_size(width, height)?;
    let mut buffer = PixelBuffer::new(width, height);
    paint_gradient(&mut buffer, hue);
    Ok(buffer.into_bytes())
}

/// JS-facing picker. Interaction methods return the committed color, or null
/// when the event did not change it, so the caller can invoke its own callback.
#[napi(js_name = "ColorPicker")]
pub struct ColorPickerHandle {
    inner: ColorPicker<LatestCommit>,
    surface: PixelBuffer,
}

#[napi]
impl ColorPickerHandle {
    #[napi(constructor)]
    pub fn new(initial_hex: String, config: Option<PickerConfig>) -> napi::Result<Self> {
        let config = resolve_config(config)?;
        Ok(Self::wrap(ColorPicker::new(&initial_hex, &config, LatestCommit::default())))
    }

    #[napi(factory)]
    pub fn from_css(value: String, config: Option<PickerConfig>) -> napi::Result<Self> {
        let config = resolve_config(config)?;
        let inner = ColorPicker::from_css(&value, &config, LatestCommit::default()).map_err(to_napi_error)?;
        Ok(Self::wrap(inner))
    }

    fn wrap(inner: ColorPicker<LatestCommit>) -> Self {
        let surface = PixelBuffer::for_canvas(inner.canvas());
        Self { inner, surface }
    }

    fn take_commit(&mut self) -> Option<String> {
        self.inner.listener_mut().take()
    }

    #[napi]
    pub fn hex(&self) -> String {
        self.inner.hex().to_string()
    }

    #[napi]
    pub fn pointer_down(&mut self, x: f64, y: f64) -> Option<String> {
        self.inner.pointer_down(x, y);
        self.take_commit()
    }

    #[napi]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<String> {
        self.inner.pointer_move(x, y);
        self.take_commit()
    }

    #[napi]
    pub fn pointer_up(&mut self) -> bool {
        self.inner.pointer_up()
    }

    #[napi]
    pub fn pointer_leave(&mut self) -> bool {
        self.inner.pointer_leave()
    }

    #[napi]
    pub fn set_hue(&mut self, hue: f64) -> Option<String> {
        self.inner.set_hue(hue);
        self.take_commit()
    }

    /// Hue slider drag at `position` along a track `length` px long.
    #[napi]
    pub fn set_hue_at(&mut self, position: f64, length: f64) -> Option<String> {
        self.inner.set_hue_at(position, length);
        self.take_commit()
    }

    #[napi]
    pub fn hue_thumb(&self, length: f64) -> f64 {
        self.inner.hue_thumb(length)
    }

    #[napi]
    pub fn set_hex_text(&mut self, text: String) -> Option<String> {
        self.inner.set_hex_text(&text);
        self.take_commit()
    }

    #[napi]
    pub fn set_opacity(&mut self, opacity: f64) {
        self.inner.set_opacity(opacity);
    }

    #[napi]
    pub fn set_opacity_at(&mut self, position: f64, length: f64) {
        self.inner.set_opacity_at(position, length);
    }

    #[napi]
    pub fn preview_rgba(&self) -> String {
        self.inner.preview_rgba()
    }

    #[napi]
    pub fn snapshot(&self) -> PickerSnapshot {
        self.inner.snapshot()
    }

    #[napi]
    pub fn needs_repaint(&self) -> bool {
        self.inner.needs_repaint()
    }

    /// Canvas pixels for the current hue; repaints only when the hue changed.
    #[napi]
    pub fn render_canvas(&mut self) -> Buffer {
        self.inner.render(&mut self.surface);
        self.surface.as_bytes().to_vec().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(initial: &str) -> ColorPickerHandle {
        ColorPickerHandle::new(
            initial.to_string(),
            Some(PickerConfig {
                canvas_width: 100,
                canvas_height: 100,
                initial_opacity: 100.0,
            }),
        )
        .unwrap()
    }

    #[test]
    fn exported_conversions() {
        assert_eq!(hex_to_hsl("#FF0000".to_string()), HslValue { h: 0.0, s: 100.0, l: 50.0 });
        assert_eq!(hex_to_hsl("#FF".to_string()), HslValue { h: 0.0, s: 100.0, l: 50.0 });
        assert_eq!(hsl_to_hex(240.0, 100.0, 50.0), "#0000FF");
        assert_eq!(hsl_to_hex(480.0, 150.0, 50.0), "#00FF00");
        assert_eq!(normalize_hex("abcdef".to_string()), Some("#ABCDEF".to_string()));
        assert_eq!(css_to_hex("hsl(120, 100%, 50%)".to_string()), Some("#00FF00".to_string()));
        assert!(is_valid_hex("ff0000".to_string()));
        assert!(!is_valid_hex("#FF00".to_string()));
    }

    #[test]
    fn exported_track_mapping() {
        assert_eq!(hue_at(90.0, 180.0), 180.0);
        assert_eq!(hue_at(-10.0, 180.0), 0.0);
        assert_eq!(opacity_at(60.0, 120.0), 50.0);
        assert_eq!(hue_thumb_position(120.0, 180.0), 60.0);
        assert_eq!(hue_thumb_position(400.0, 180.0), 180.0);
    }

    #[test]
    fn gradient_size_is_bounded() {
        assert!(gradient_bytes(0.0, 0, 3).is_err());
        assert!(gradient_bytes(0.0, 4097, 1).is_err());
        assert!(gradient_bytes(0.0, 4_000_000_000, 4_000_000_000).is_err());
        assert!(render_gradient(0.0, 4_000_000_000, 1).is_err());
    }

    #[test]
    fn gradient_bytes_are_rgba() {
        let bytes = gradient_bytes(0.0, 4, 3).unwrap();
        assert_eq!(bytes.len(), 4 * 3 * 4);
        // bottom-right pixel: s = 75, l = 66.7
        let last = &bytes[bytes.len() - 4..];
        assert_eq!(last[3], 255);
        assert_eq!(
            math::format_hex(math::Rgb::new(last[0], last[1], last[2])),
            math::hsl_to_hex(0.0, 75.0, 2.0 / 3.0 * 100.0)
        );
    }

    #[test]
    fn handle_reports_commits_once() {
        let mut h = handle("#FF0000");
        assert_eq!(h.pointer_down(0.0, 0.0), Some("#000000".to_string()));
        assert_eq!(h.pointer_move(100.0, 100.0), Some("#FFFFFF".to_string()));
        assert!(h.pointer_up());
        assert_eq!(h.pointer_move(50.0, 50.0), None);
        assert_eq!(h.hex(), "#FFFFFF");
    }

    #[test]
    fn handle_ignores_partial_hex() {
        let mut h = handle("#000000");
        assert_eq!(h.set_hex_text("#FF".to_string()), None);
        assert_eq!(h.set_hex_text("#ff0000".to_string()), Some("#FF0000".to_string()));
        assert_eq!(h.snapshot().hex_text, "#ff0000");
    }

    #[test]
    fn handle_opacity_never_commits() {
        let mut h = handle("#00FF00");
        h.set_opacity(0.0);
        assert_eq!(h.preview_rgba(), "#00FF0000");
        assert_eq!(h.set_hue(240.0), Some("#0000FF".to_string()));
    }

    #[test]
    fn handle_opens_on_stored_alpha() {
        let mut h = handle("#0000ff80");
        assert_eq!(h.hex(), "#0000FF");
        assert_eq!(h.preview_rgba(), "#0000FF80");
        h.set_opacity_at(0.0, 100.0);
        assert_eq!(h.snapshot().opacity, 0.0);
    }

    #[test]
    fn handle_hue_track_commits() {
        let mut h = handle("#FF0000");
        assert_eq!(h.set_hue_at(120.0, 360.0), Some("#00FF00".to_string()));
        assert_eq!(h.hue_thumb(360.0), 120.0);
    }

    #[test]
    fn invalid_config_rejected() {
        let result = ColorPickerHandle::new(
            "#FF0000".to_string(),
            Some(PickerConfig {
                canvas_width: 0,
                ..PickerConfig::default()
            }),
        );
        assert!(result.is_err());

        let oversized = ColorPickerHandle::new(
            "#FF0000".to_string(),
            Some(PickerConfig {
                canvas_width: 5000,
                ..PickerConfig::default()
            }),
        );
        assert!(oversized.is_err());
    }
}
