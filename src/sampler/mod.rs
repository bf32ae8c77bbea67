pub mod canvas;
pub mod listener;
pub mod slider;

use log::{debug, trace, warn};

use crate::error::{ColorError, ColorResult};
use crate::math::color_parse::to_hex;
use crate::math::composite::composite_over;
use crate::math::hex::{split_alpha_hex, with_alpha};
use crate::math::{hex_to_hsl, hsl_to_hex, normalize_hex, Hsl, FALLBACK_HSL};
use crate::types::{PickerConfig, PickerSnapshot};
use canvas::{paint_gradient, Canvas, PixelSurface};
use listener::ColorListener;
use slider::{clamp_slider, SliderTrack, HUE_MAX, OPACITY_MAX};

/// Pointer interaction state on the saturation/lightness canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Selecting,
}

/// Interactive color picker: owns the current color and turns raw UI events
/// (canvas pointer, hue slider, hex text, opacity slider) into commits.
///
/// Every commit replaces the current color and synchronously calls
/// `ColorListener::on_color_change` with the canonical `#RRGGBB` value.
/// Opacity is display state only and never reaches the listener.
pub struct ColorPicker<L: ColorListener> {
    canvas: Canvas,
    hsl: Hsl,
    hex: String,
    /// Text field contents; may hold a partial edit
    hex_text: String,
    opacity: f64,
    drag: DragState,
    /// Hue the canvas was last painted for
    painted_hue: Option<f64>,
    listener: L,
}

impl<L: ColorListener> ColorPicker<L> {
    /// Open the picker on `initial_hex`. A stored `#RRGGBBAA` value opens on
    /// its RGB part with the opacity slider seeded from the alpha byte.
    /// Invalid input opens on the fallback color instead of failing.
    /// Construction does not notify the listener.
    pub fn new(initial_hex: &str, config: &PickerConfig, listener: L) -> Self {
        let (hex, stored_opacity) = split_alpha_hex(initial_hex).unwrap_or_else(|| {
            warn!("invalid initial color {initial_hex:?}, opening on fallback");
            (FALLBACK_HSL.to_hex(), None)
        });
        let opacity = stored_opacity.unwrap_or(config.initial_opacity);

        Self {
            canvas: Canvas::new(config.canvas_width, config.canvas_height),
            hsl: hex_to_hsl(&hex),
            hex_text: hex.clone(),
            hex,
            opacity: clamp_slider(opacity, OPACITY_MAX),
            drag: DragState::Idle,
            painted_hue: None,
            listener,
        }
    }

    /// Open the picker on any CSS color (`rgb()`, `hsl()`, named, short hex, ...).
    pub fn from_css(value: &str, config: &PickerConfig, listener: L) -> ColorResult<Self> {
        let hex = to_hex(value).ok_or_else(|| ColorError::UnsupportedCss(value.to_string()))?;
        Ok(Self::new(&hex, config, listener))
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    pub fn hex_text(&self) -> &str {
        &self.hex_text
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Selecting
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Selection marker position; encodes saturation/lightness only.
    pub fn marker_position(&self) -> (f64, f64) {
        self.canvas.marker_position(self.hsl.s, self.hsl.l)
    }

    // ── Canvas pointer ──

    /// Starts a selection if the pointer is on the canvas and commits the
    /// color under it (a plain click is a one-step drag).
    /// Returns false when the pointer missed the canvas.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        if !self.canvas.contains(x, y) {
            return false;
        }
        debug!("picker: selection started at ({x}, {y})");
        self.drag = DragState::Selecting;
        self.listener.on_drag_start();
        self.sample_at(x, y);
        true
    }

    /// Commits the color under the pointer while selecting. Positions outside
    /// the canvas are clamped to its edge. Ignored while idle.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.sample_at(x, y);
        true
    }

    /// Ends the selection, keeping the last committed color.
    pub fn pointer_up(&mut self) -> bool {
        self.end_selection("pointer up")
    }

    /// Leaving the canvas mid-drag ends the selection without reverting.
    pub fn pointer_leave(&mut self) -> bool {
        self.end_selection("pointer left canvas")
    }

    fn end_selection(&mut self, reason: &str) -> bool {
        if !self.is_dragging() {
            return false;
        }
        debug!("picker: selection ended ({reason}), color {}", self.hex);
        self.drag = DragState::Idle;
        self.listener.on_drag_end();
        true
    }

    fn sample_at(&mut self, x: f64, y: f64) {
        let (s, l) = self.canvas.sample(x, y);
        trace!("picker: sampled ({x}, {y}) -> s={s} l={l}");
        self.hsl.s = s;
        self.hsl.l = l;
        self.commit_with_text(hsl_to_hex(self.hsl.h, s, l));
    }

    // ── Sliders and text field ──

    /// Hue slider change. Saturation and lightness are held, so the marker
    /// stays put while the canvas needs a full repaint for the new hue.
    pub fn set_hue(&mut self, hue: f64) {
        let hue = clamp_slider(hue, HUE_MAX);
        debug!("picker: hue {} -> {hue}", self.hsl.h);
        self.hsl.h = hue;
        self.commit_with_text(hsl_to_hex(hue, self.hsl.s, self.hsl.l));
    }

    /// Hue slider drag: pointer at `position` along a track `length` px long.
    pub fn set_hue_at(&mut self, position: f64, length: f64) {
        self.set_hue(SliderTrack::hue(length).value_at(position));
    }

    /// Hue thumb offset along a track `length` px long.
    pub fn hue_thumb(&self, length: f64) -> f64 {
        SliderTrack::hue(length).position_of(self.hsl.h)
    }

    /// Hex text field keystroke. The text is always kept for display; only a
    /// complete 6-digit hex updates the color. Partial or malformed text is
    /// ignored without error. Returns whether a commit happened.
    pub fn set_hex_text(&mut self, text: &str) -> bool {
        self.hex_text = text.to_string();
        let Some(hex) = normalize_hex(text) else {
            return false;
        };
        self.hsl = hex_to_hsl(&hex);
        self.commit(hex);
        true
    }

    /// Opacity slider change (0-100). Display state only: no commit.
    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = clamp_slider(opacity, OPACITY_MAX);
    }

    /// Opacity slider drag along a track `length` px long. No commit.
    pub fn set_opacity_at(&mut self, position: f64, length: f64) {
        self.opacity = SliderTrack::opacity(length).value_at(position);
    }

    /// Current color with opacity as an alpha byte, for preview swatches.
    pub fn preview_rgba(&self) -> String {
        with_alpha(&self.hex, self.opacity)
    }

    /// Current color blended over `background_hex` at the current opacity.
    pub fn preview_over(&self, background_hex: &str) -> String {
        composite_over(&self.hex, background_hex, self.opacity / OPACITY_MAX)
    }

    /// Commit and mirror the new value into the text field.
    fn commit_with_text(&mut self, hex: String) {
        self.hex_text.clone_from(&hex);
        self.commit(hex);
    }

    fn commit(&mut self, hex: String) {
        self.hex = hex;
        self.listener.on_color_change(&self.hex);
    }

    // ── Rendering ──

    /// Whether the canvas gradient is stale for the current hue.
    pub fn needs_repaint(&self) -> bool {
        self.painted_hue != Some(self.hsl.h)
    }

    /// Repaint `surface` if the hue changed since the last paint.
    /// Returns whether a repaint happened.
    pub fn render<S: PixelSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.needs_repaint() {
            return false;
        }
        self.repaint(surface);
        true
    }

    /// Unconditional full repaint for the current hue.
    pub fn repaint<S: PixelSurface + ?Sized>(&mut self, surface: &mut S) {
        paint_gradient(surface, self.hsl.h);
        self.painted_hue = Some(self.hsl.h);
    }

    pub fn snapshot(&self) -> PickerSnapshot {
        let (marker_x, marker_y) = self.marker_position();
        PickerSnapshot {
            hex: self.hex.clone(),
            hue: self.hsl.h,
            saturation: self.hsl.s,
            lightness: self.hsl.l,
            opacity: self.opacity,
            hex_text: self.hex_text.clone(),
            dragging: self.is_dragging(),
            marker_x,
            marker_y,
        }
    }
}
