use rayon::prelude::*;

use crate::math::{hsl_to_rgb, Rgb};
use crate::types::MAX_CANVAS_SIDE;

const BYTES_PER_PIXEL: usize = 4;

/// Geometry of the saturation/lightness picker area.
///
/// x maps linearly to saturation, y to lightness, both 0-100.
/// Each side is kept within `1..=MAX_CANVAS_SIDE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {
    /// Zero dimensions are bumped to 1 so the mapping never divides by zero.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.clamp(1, MAX_CANVAS_SIDE),
            height: height.clamp(1, MAX_CANVAS_SIDE),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pointer-down hit test. Edges are inclusive: (W, H) is the 100/100 corner.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width as f64).contains(&x) && (0.0..=self.height as f64).contains(&y)
    }

    /// Map a pointer position to (saturation, lightness). Positions outside the
    /// canvas (a drag that left it) are clamped to the nearest edge first.
    pub fn sample(&self, x: f64, y: f64) -> (f64, f64) {
        let w = self.width as f64;
        let h = self.height as f64;
        let x = if x.is_nan() { 0.0 } else { x.clamp(0.0, w) };
        let y = if y.is_nan() { 0.0 } else { y.clamp(0.0, h) };
        (x / w * 100.0, y / h * 100.0)
    }

    /// Inverse of `sample`: where the selection marker sits for (s, l).
    pub fn marker_position(&self, saturation: f64, lightness: f64) -> (f64, f64) {
        (
            saturation.clamp(0.0, 100.0) / 100.0 * self.width as f64,
            lightness.clamp(0.0, 100.0) / 100.0 * self.height as f64,
        )
    }
}

/// A 2D drawable the picker paints its gradient onto.
pub trait PixelSurface {
    fn dimensions(&self) -> (u32, u32);

    /// Out-of-bounds writes are ignored.
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb);

    /// Repaint trigger, called once after a full gradient fill.
    fn present(&mut self) {}

    /// Fill every pixel with `hsl(hue, x/W*100, y/H*100)`.
    fn fill_gradient(&mut self, hue: f64) {
        let (width, height) = self.dimensions();
        let (w, h) = (width.max(1) as f64, height.max(1) as f64);
        for y in 0..height {
            let l = y as f64 / h * 100.0;
            for x in 0..width {
                self.set_pixel(x, y, hsl_to_rgb(hue, x as f64 / w * 100.0, l));
            }
        }
    }
}

/// Full repaint of `surface` for `hue`.
pub fn paint_gradient<S: PixelSurface + ?Sized>(surface: &mut S, hue: f64) {
    surface.fill_gradient(hue);
    surface.present();
    log::debug!("repainted {:?} canvas for hue {hue}", surface.dimensions());
}

/// Row-major RGBA8 pixel buffer, laid out like a browser `ImageData`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
    /// Number of completed repaints
    generation: u64,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
            generation: 0,
        }
    }

    pub fn for_canvas(canvas: &Canvas) -> Self {
        Self::new(canvas.width(), canvas.height())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        let i = self.offset(x, y)?;
        Some(Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

impl PixelSurface for PixelBuffer {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        if let Some(i) = self.offset(x, y) {
            self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&[color.r, color.g, color.b, 255]);
        }
    }

    fn present(&mut self) {
        self.generation += 1;
    }

    // Rows are disjoint slices, so they can be filled in parallel.
    fn fill_gradient(&mut self, hue: f64) {
        if self.data.is_empty() {
            return;
        }
        let (w, h) = (self.width as f64, self.height as f64);
        let stride = self.width as usize * BYTES_PER_PIXEL;

        self.data
            .par_chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| {
                let l = y as f64 / h * 100.0;
                for (x, px) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                    let c = hsl_to_rgb(hue, x as f64 / w * 100.0, l);
                    px.copy_from_slice(&[c.r, c.g, c.b, 255]);
                }
            });
    }
}
