use core::fmt;

use crate::coords::{Point, Rect};
use crate::paint::Rgb8;
use crate::scene::{Element, Scene};

/// Dense pixel grid sampled once at build time.
#[derive(Debug)]
pub struct Texture {
    rect: Rect,
    stride: i32,
    pixels: Vec<Rgb8>,
}

impl Texture {
    /// Samples `f` over local coordinates `(0..size.x, 0..size.y)`,
    /// row-major.
    pub fn from_fn(pos: Point, size: Point, mut f: impl FnMut(i32, i32) -> Rgb8) -> Self {
        let mut pixels = Vec::with_capacity((size.x * size.y).max(0) as usize);
        for y in 0..size.y {
            for x in 0..size.x {
                pixels.push(f(x, y));
            }
        }
        Self {
            rect: Rect::spanning(pos, size),
            stride: size.x,
            pixels,
        }
    }

    #[inline]
    pub fn bounding_box(&self) -> Rect {
        self.rect
    }

    pub fn pix_at(&self, x: i32, y: i32) -> Option<Rgb8> {
        let p = Point::new(x, y);
        if !self.rect.has(p) {
            return None;
        }
        let i = p - self.rect.tl;
        // In-rect coordinates always address inside the buffer; a miss
        // here is a construction bug and panics.
        Some(self.pixels[(i.x + self.stride * i.y) as usize])
    }
}

/// Pixel grid backed by a closure, evaluated per query in local
/// coordinates.
pub struct TextureFn {
    rect: Rect,
    func: Box<dyn Fn(i32, i32) -> Rgb8>,
}

impl TextureFn {
    pub fn new(pos: Point, size: Point, func: impl Fn(i32, i32) -> Rgb8 + 'static) -> Self {
        Self {
            rect: Rect::spanning(pos, size),
            func: Box::new(func),
        }
    }

    #[inline]
    pub fn bounding_box(&self) -> Rect {
        self.rect
    }

    pub fn pix_at(&self, x: i32, y: i32) -> Option<Rgb8> {
        let p = Point::new(x, y);
        if !self.rect.has(p) {
            return None;
        }
        let i = p - self.rect.tl;
        Some((self.func)(i.x, i.y))
    }
}

impl fmt::Debug for TextureFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureFn").field("rect", &self.rect).finish_non_exhaustive()
    }
}

impl Scene {
    /// Pre-sampled texture; `f` runs once per pixel now.
    pub fn texture(&mut self, pos: Point, size: Point, f: impl FnMut(i32, i32) -> Rgb8) {
        self.push(Element::Texture(Texture::from_fn(pos, size, f)));
    }

    /// Procedural texture; `f` runs on every pixel query.
    pub fn texture_fn(&mut self, pos: Point, size: Point, f: impl Fn(i32, i32) -> Rgb8 + 'static) {
        self.push(Element::TextureFn(TextureFn::new(pos, size, f)));
    }
}
