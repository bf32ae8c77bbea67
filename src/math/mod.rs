pub mod color_parse;
pub mod composite;
pub mod hex;
pub mod hsl;

pub use hex::{format_hex, is_valid_hex, normalize_hex, parse_hex_rgb, Rgb};
pub use hsl::{hex_to_hsl, hsl_to_hex, hsl_to_rgb, Hsl, FALLBACK_HSL};
