use crate::coords::{Point, Rect};
use crate::paint::{Rgb8, RgbF};
use crate::scene::{Element, Scene};

/// Horizontal linear gradient across a rectangle.
///
/// Interpolation runs over the corner-to-corner width, so the right
/// edge lands exactly on the end color. A zero-width rect has no
/// defined direction and is fully transparent.
#[derive(Debug)]
pub struct Gradient {
    rect: Rect,
    start: Rgb8,
    end: Rgb8,
}

impl Gradient {
    #[inline]
    pub fn new(rect: Rect, start: Rgb8, end: Rgb8) -> Self {
        Self { rect, start, end }
    }

    #[inline]
    pub fn bounding_box(&self) -> Rect {
        self.rect
    }

    pub fn pix_at(&self, x: i32, y: i32) -> Option<Rgb8> {
        if !self.rect.has(Point::new(x, y)) {
            return None;
        }
        let max_width = self.rect.width();
        if max_width == 0 {
            return None;
        }
        let t = (x - self.rect.tl.x) as f32 / max_width as f32;
        let start = RgbF::from(self.start);
        let end = RgbF::from(self.end);
        Some((start + (end - start) * t).to_rgb8())
    }
}

impl Scene {
    /// Gradient from `start` on the rect's left edge to `end` on its
    /// right edge.
    pub fn gradient(&mut self, rect: Rect, start: Rgb8, end: Rgb8) {
        self.push(Element::Gradient(Gradient::new(rect, start, end)));
    }
}

#[cfg(test)]
mod tests {
    use crate::paint::palette::{BLACK, WHITE, YELLOW};

    use super::*;

    fn grad(w: i32, start: Rgb8, end: Rgb8) -> Gradient {
        Gradient::new(
            Rect::new(Point::new(0, 0), Point::new(w, 3)),
            start,
            end,
        )
    }

    // ── interpolation ─────────────────────────────────────────────────────

    #[test]
    fn edges_hit_the_exact_colors() {
        let g = grad(10, BLACK, WHITE);
        assert_eq!(g.pix_at(0, 0), Some(BLACK));
        assert_eq!(g.pix_at(10, 3), Some(WHITE));
    }

    #[test]
    fn midpoint_truncates() {
        // t = 5/10, channels 127.5 → truncated to 127.
        let g = grad(10, BLACK, WHITE);
        assert_eq!(g.pix_at(5, 1), Some(Rgb8::new(127, 127, 127)));
    }

    #[test]
    fn descending_channels_interpolate_too() {
        let g = grad(4, YELLOW, BLACK);
        // t = 1/4: 220·0.75 = 165, 180·0.75 = 135.
        assert_eq!(g.pix_at(1, 0), Some(Rgb8::new(165, 135, 0)));
    }

    #[test]
    fn same_color_everywhere() {
        let g = grad(6, YELLOW, YELLOW);
        assert_eq!(g.pix_at(3, 2), Some(YELLOW));
    }

    // ── degenerate / outside ──────────────────────────────────────────────

    #[test]
    fn zero_width_is_transparent() {
        let g = grad(0, BLACK, WHITE);
        assert_eq!(g.pix_at(0, 0), None);
    }

    #[test]
    fn outside_rect_is_transparent() {
        let g = grad(10, BLACK, WHITE);
        assert_eq!(g.pix_at(11, 0), None);
        assert_eq!(g.pix_at(5, 4), None);
    }
}
