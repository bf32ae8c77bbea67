use csscolorparser::Color;

use super::hex::normalize_hex;

/// Convert any CSS color value to canonical `#RRGGBB`.
/// Handles: hex (3/4/6/8 digits), rgb, hsl, hwb, named colors.
/// Alpha is dropped; the picker tracks opacity separately.
/// Returns None for: transparent, inherit, currentColor, unrecognized.
pub fn to_hex(value: &str) -> Option<String> {
    let trimmed = value.trim();

    // Special values -> None
    match trimmed.to_lowercase().as_str() {
        "transparent" | "inherit" | "currentcolor" | "initial" | "unset" | "" => return None,
        _ => {}
    }

    // Fast path for the canonical form
    if trimmed.starts_with('#') {
        if let Some(hex) = normalize_hex(trimmed) {
            return Some(hex);
        }
    }

    // Use csscolorparser for everything else (short hex, rgb, hsl, named, etc.)
    match trimmed.parse::<Color>() {
        Ok(color) => {
            let [r, g, b, _] = color.to_rgba8();
            Some(format!("#{:02X}{:02X}{:02X}", r, g, b))
        }
        Err(_) => None,
    }
}
