#[macro_use]
extern crate napi_derive;

pub mod engine;
pub mod error;
pub mod math;
pub mod sampler;
pub mod types;

pub use error::{ColorError, ColorResult};
pub use sampler::listener::ColorListener;
pub use sampler::{ColorPicker, DragState};

#[napi]
pub fn health_check() -> String {
    "swiftree-picker-native ok".to_string()
}
