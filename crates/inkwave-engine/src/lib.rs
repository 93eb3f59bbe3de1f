//! Inkwave engine crate.
//!
//! Scene model and software rendering pipeline for tri-color e-paper
//! panels: drawable elements are accumulated into an ordered scene,
//! composited per pixel (painter's algorithm), then quantized to the
//! black/white/yellow panel palette with row-streaming error diffusion.
//!
//! The display transport, font atlases, and image decoding live outside
//! this crate; they plug in through the [`text::FontSource`] and
//! [`image::ImageSource`] seams and the renderer's per-pixel emit callback.

pub mod coords;
pub mod image;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
