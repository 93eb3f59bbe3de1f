use crate::coords::{Point, Rect};
use crate::paint::Rgb8;
use crate::scene::{Element, Scene};

/// Axis-aligned rectangle with independent border and fill colors.
///
/// Either may be absent; an absent fill leaves the interior
/// transparent, and an absent border falls through to the fill on the
/// edge rows and columns.
#[derive(Debug)]
pub struct RectShape {
    rect: Rect,
    border: Option<Rgb8>,
    fill: Option<Rgb8>,
}

impl RectShape {
    #[inline]
    pub fn new(rect: Rect, border: Option<Rgb8>, fill: Option<Rgb8>) -> Self {
        Self { rect, border, fill }
    }

    #[inline]
    pub fn bounding_box(&self) -> Rect {
        self.rect
    }

    pub fn pix_at(&self, x: i32, y: i32) -> Option<Rgb8> {
        if !self.rect.has(Point::new(x, y)) {
            return None;
        }
        if self.border.is_some() {
            let on_edge = x == self.rect.tl.x
                || x == self.rect.br.x
                || y == self.rect.tl.y
                || y == self.rect.br.y;
            if on_edge {
                return self.border;
            }
        }
        self.fill
    }
}

impl Scene {
    /// Border-only rectangle covering `width` by `height` pixels.
    pub fn rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb8) {
        self.push(Element::Rect(RectShape::new(
            Rect::spanning(Point::new(x, y), Point::new(width, height)),
            Some(color),
            None,
        )));
    }

    /// Solid rectangle covering `width` by `height` pixels.
    pub fn filled_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb8) {
        self.push(Element::Rect(RectShape::new(
            Rect::spanning(Point::new(x, y), Point::new(width, height)),
            None,
            Some(color),
        )));
    }
}

#[cfg(test)]
mod tests {
    use crate::paint::palette::{BLACK, WHITE, YELLOW};

    use super::*;

    fn shape(border: Option<Rgb8>, fill: Option<Rgb8>) -> RectShape {
        RectShape::new(Rect::new(Point::new(0, 0), Point::new(4, 4)), border, fill)
    }

    // ── border / fill combinations ────────────────────────────────────────

    #[test]
    fn border_only_has_transparent_interior() {
        let r = shape(Some(BLACK), None);
        assert_eq!(r.pix_at(0, 2), Some(BLACK));
        assert_eq!(r.pix_at(4, 4), Some(BLACK));
        assert_eq!(r.pix_at(2, 2), None);
    }

    #[test]
    fn fill_only_paints_edges_too() {
        let r = shape(None, Some(YELLOW));
        assert_eq!(r.pix_at(0, 0), Some(YELLOW));
        assert_eq!(r.pix_at(2, 2), Some(YELLOW));
    }

    #[test]
    fn border_wins_over_fill_on_edges() {
        let r = shape(Some(BLACK), Some(WHITE));
        assert_eq!(r.pix_at(2, 0), Some(BLACK));
        assert_eq!(r.pix_at(2, 2), Some(WHITE));
    }

    #[test]
    fn outside_is_transparent() {
        let r = shape(Some(BLACK), Some(WHITE));
        assert_eq!(r.pix_at(5, 2), None);
        assert_eq!(r.pix_at(-1, 0), None);
    }

    // ── builders ──────────────────────────────────────────────────────────

    #[test]
    fn filled_rectangle_covers_exactly_width_by_height() {
        let mut scene = Scene::new();
        scene.fill(WHITE);
        scene.filled_rectangle(1, 1, 3, 2, BLACK);
        assert_eq!(scene.pix_at(1, 1), BLACK);
        assert_eq!(scene.pix_at(3, 2), BLACK);
        assert_eq!(scene.pix_at(4, 1), WHITE); // one past width
        assert_eq!(scene.pix_at(1, 3), WHITE); // one past height
    }
}
