use super::hex::{format_hex, parse_hex_rgb, Rgb};

/// Alpha-composite a foreground color over a background color.
/// formula per channel: result = fg * alpha + bg * (1 - alpha)
/// Returns canonical `#RRGGBB`. Malformed inputs are treated as black.
///
/// Used for the opacity preview swatch; the committed color is never composited.
pub fn composite_over(fg_hex: &str, bg_hex: &str, alpha: f64) -> String {
    let fg = parse_hex_rgb(fg_hex).unwrap_or_default();
    let bg = parse_hex_rgb(bg_hex).unwrap_or_default();
    let alpha = alpha.clamp(0.0, 1.0);

    let blend = |f: u8, b: u8| -> u8 {
        let result = f as f64 * alpha + b as f64 * (1.0 - alpha);
        result.round() as u8
    };

    format_hex(Rgb::new(blend(fg.r, bg.r), blend(fg.g, bg.g), blend(fg.b, bg.b)))
}
