use crate::error::{ColorError, ColorResult};

/// 24-bit sRGB color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn is_gray(&self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

/// Parse a 6-digit hex string (leading `#` optional, any case) to RGB channels.
pub fn parse_hex_rgb(hex: &str) -> ColorResult<Rgb> {
    let raw = hex.strip_prefix('#').unwrap_or(hex);
    if raw.is_empty() {
        return Err(ColorError::MissingDigits);
    }
    if let Some(bad) = raw.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit(bad));
    }
    if raw.len() != 6 {
        return Err(ColorError::InvalidLength(raw.len()));
    }

    let bytes = raw.as_bytes();
    let channel = |i: usize| hex_nibble(bytes[i]) << 4 | hex_nibble(bytes[i + 1]);
    Ok(Rgb::new(channel(0), channel(2), channel(4)))
}

// Caller guarantees `b` is an ASCII hex digit.
fn hex_nibble(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    }
}

/// Strict `#RRGGBB` check used by the hex text field. `#` optional, any case.
pub fn is_valid_hex(text: &str) -> bool {
    parse_hex_rgb(text).is_ok()
}

/// Canonical `#RRGGBB` (uppercase) form of a valid hex string.
pub fn normalize_hex(text: &str) -> Option<String> {
    parse_hex_rgb(text).ok().map(format_hex)
}

/// Format RGB channels as canonical `#RRGGBB`.
pub fn format_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Append an opacity percentage (0-100) as an alpha byte: `#RRGGBBAA`.
/// Display-only; committed colors never carry alpha.
pub fn with_alpha(hex: &str, opacity: f64) -> String {
    let rgb = parse_hex_rgb(hex).unwrap_or_default();
    let alpha = (opacity.clamp(0.0, 100.0) / 100.0 * 255.0).round() as u8;
    format!("{}{:02X}", format_hex(rgb), alpha)
}

/// Split a stored theme value that may carry alpha (`#RRGGBBAA`) into the
/// canonical `#RRGGBB` and an opacity percentage (0-100).
/// Plain 6-digit hex yields no opacity. Anything else is None.
pub fn split_alpha_hex(text: &str) -> Option<(String, Option<f64>)> {
    let raw = text.strip_prefix('#').unwrap_or(text);
    if raw.len() != 8 {
        return normalize_hex(text).map(|hex| (hex, None));
    }
    if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let rgb = parse_hex_rgb(raw.get(0..6)?).ok()?;
    let alpha = u8::from_str_radix(raw.get(6..8)?, 16).ok()?;
    let opacity = (alpha as f64 / 255.0 * 100.0).round();
    Some((format_hex(rgb), Some(opacity)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_6digit_hex() {
        assert_eq!(parse_hex_rgb("#ff0000"), Ok(Rgb::new(255, 0, 0)));
        assert_eq!(parse_hex_rgb("#00FF00"), Ok(Rgb::new(0, 255, 0)));
        assert_eq!(parse_hex_rgb("1e293b"), Ok(Rgb::new(30, 41, 59)));
    }

    #[test]
    fn parse_reports_failure_kind() {
        assert_eq!(parse_hex_rgb("#"), Err(ColorError::MissingDigits));
        assert_eq!(parse_hex_rgb("#FF"), Err(ColorError::InvalidLength(2)));
        assert_eq!(parse_hex_rgb("#FF000080"), Err(ColorError::InvalidLength(8)));
        assert_eq!(parse_hex_rgb("#GG0000"), Err(ColorError::InvalidDigit('G')));
    }

    #[test]
    fn partial_input_is_not_valid() {
        assert!(!is_valid_hex("#FF"));
        assert!(!is_valid_hex("#FF00"));
        assert!(!is_valid_hex("#FF00000"));
        assert!(is_valid_hex("#ff0000"));
        assert!(is_valid_hex("FF0000"));
    }

    #[test]
    fn normalize_uppercases_and_prefixes() {
        assert_eq!(normalize_hex("abcdef"), Some("#ABCDEF".to_string()));
        assert_eq!(normalize_hex("#1e293b"), Some("#1E293B".to_string()));
        assert_eq!(normalize_hex("#xyz"), None);
    }

    #[test]
    fn with_alpha_encodes_opacity() {
        assert_eq!(with_alpha("#FF0000", 100.0), "#FF0000FF");
        assert_eq!(with_alpha("#ff0000", 0.0), "#FF000000");
        assert_eq!(with_alpha("#FF0000", 50.0), "#FF000080");
    }

    #[test]
    fn split_alpha_reads_opacity_from_8digit() {
        assert_eq!(split_alpha_hex("#ff000080"), Some(("#FF0000".to_string(), Some(50.0))));
        assert_eq!(split_alpha_hex("1e293bff"), Some(("#1E293B".to_string(), Some(100.0))));
        assert_eq!(split_alpha_hex("#33669900"), Some(("#336699".to_string(), Some(0.0))));
    }

    #[test]
    fn split_alpha_passes_6digit_through() {
        assert_eq!(split_alpha_hex("#abcdef"), Some(("#ABCDEF".to_string(), None)));
    }

    #[test]
    fn split_alpha_rejects_malformed() {
        assert_eq!(split_alpha_hex("#ff0000zz"), None);
        assert_eq!(split_alpha_hex("#+f000080"), None);
        assert_eq!(split_alpha_hex("#ff0000+8"), None);
        assert_eq!(split_alpha_hex("#FF00"), None);
    }
}
