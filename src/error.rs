use thiserror::Error;

/// Errors produced by the strict parsing paths.
///
/// The picker itself never surfaces these for color input: lenient wrappers
/// such as `hex_to_hsl` fall back to a renderable default instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("hex color is empty")]
    MissingDigits,
    #[error("expected 6 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
    #[error("unsupported CSS color: {0}")]
    UnsupportedCss(String),
    #[error("invalid picker config: {0}")]
    InvalidConfig(String),
}

pub type ColorResult<T> = Result<T, ColorError>;
