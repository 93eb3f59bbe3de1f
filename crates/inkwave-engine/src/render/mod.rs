//! Rasterization of a [`Scene`](crate::scene::Scene).
//!
//! Responsibilities:
//! - walk the scene row-major and quantize every pixel to the palette,
//!   diffusing the quantization error ([`DitherRenderer`])
//! - pack the resulting pixel codes into panel frame bytes
//!   ([`CodePacker`])

mod dither;
pub mod pack;

pub use dither::DitherRenderer;
pub use pack::CodePacker;
