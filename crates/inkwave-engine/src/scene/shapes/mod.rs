//! Shape elements.
//!
//! Each file owns one element kind: the struct, its hit test, and the
//! `Scene` builder methods that append it. Builders take bare `i32`
//! coordinates to keep call sites short; the structs take `coords`
//! types.

mod circle;
mod glyph;
mod gradient;
mod line;
mod polygon;
mod rect;
mod sparse;
mod texture;
mod triangle;

pub use circle::CircleShape;
pub use glyph::Glyph;
pub use gradient::Gradient;
pub use line::LineShape;
pub use polygon::{PolygonVariation, regular_polygon_vertex};
pub use rect::RectShape;
pub use sparse::SparseTexture;
pub use texture::{Texture, TextureFn};
pub use triangle::TriangleShape;

/// Whether a closed shape paints only its border or its whole area.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DrawStyle {
    Outline,
    Filled,
}
