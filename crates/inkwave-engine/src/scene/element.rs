use crate::coords::Rect;
use crate::paint::Rgb8;

use super::shapes::{
    CircleShape, Glyph, Gradient, LineShape, RectShape, SparseTexture, Texture, TextureFn,
    TriangleShape,
};

/// A drawable scene element.
///
/// Closed sum type: every element exposes a bounding box and a per-pixel
/// color query, nothing else. `None` from [`pix_at`](Self::pix_at) means
/// transparent at that pixel and the compositor keeps looking below.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here and dispatch it below
/// - implement `Scene` builder helpers inside that shape module
#[derive(Debug)]
pub enum Element {
    Line(LineShape),
    Rect(RectShape),
    Triangle(TriangleShape),
    Circle(CircleShape),
    Gradient(Gradient),
    Texture(Texture),
    TextureFn(TextureFn),
    Glyph(Glyph),
    Sparse(SparseTexture),
}

impl Element {
    pub fn bounding_box(&self) -> Rect {
        match self {
            Element::Line(e) => e.bounding_box(),
            Element::Rect(e) => e.bounding_box(),
            Element::Triangle(e) => e.bounding_box(),
            Element::Circle(e) => e.bounding_box(),
            Element::Gradient(e) => e.bounding_box(),
            Element::Texture(e) => e.bounding_box(),
            Element::TextureFn(e) => e.bounding_box(),
            Element::Glyph(e) => e.bounding_box(),
            Element::Sparse(e) => e.bounding_box(),
        }
    }

    pub fn pix_at(&self, x: i32, y: i32) -> Option<Rgb8> {
        match self {
            Element::Line(e) => e.pix_at(x, y),
            Element::Rect(e) => e.pix_at(x, y),
            Element::Triangle(e) => e.pix_at(x, y),
            Element::Circle(e) => e.pix_at(x, y),
            Element::Gradient(e) => e.pix_at(x, y),
            Element::Texture(e) => e.pix_at(x, y),
            Element::TextureFn(e) => e.pix_at(x, y),
            Element::Glyph(e) => e.pix_at(x, y),
            Element::Sparse(e) => e.pix_at(x, y),
        }
    }
}
