//! Color model for the quantization pipeline.
//!
//! Scope:
//! - a generic three-channel triple ([`Rgb`]) over [`Channel`] widths
//! - saturating arithmetic for display-facing colors
//! - unbounded arithmetic for error accumulation and blending
//! - the fixed panel palette and hardware code mapping ([`palette`])

mod channel;
mod color;
pub mod palette;

pub use channel::Channel;
pub use color::{Rgb, Rgb8, RgbF, RgbWide};
