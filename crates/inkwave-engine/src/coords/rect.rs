use super::Point;

/// Axis-aligned rectangle stored as its two extreme corners.
///
/// Invariant (assumed, not enforced): `tl` ≤ `br` componentwise.
/// An inverted rect silently fails every containment test, which is
/// what the empty/default value relies on.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Rect {
    pub tl: Point,
    pub br: Point,
}

impl Rect {
    #[inline]
    pub const fn new(tl: Point, br: Point) -> Self {
        Self { tl, br }
    }

    /// Rect covering `size.x` by `size.y` pixels starting at `pos`.
    ///
    /// Both corners are covered pixels, so `br = pos + size - (1, 1)`.
    #[inline]
    pub const fn spanning(pos: Point, size: Point) -> Self {
        Self {
            tl: pos,
            br: Point::new(pos.x + size.x - 1, pos.y + size.y - 1),
        }
    }

    /// Inclusive containment: both corners count as inside.
    #[inline]
    pub fn has(self, p: Point) -> bool {
        p.x >= self.tl.x && p.y >= self.tl.y && p.x <= self.br.x && p.y <= self.br.y
    }

    /// True when both corners of `other` are contained.
    #[inline]
    pub fn has_rect(self, other: Rect) -> bool {
        self.has(other.tl) && self.has(other.br)
    }

    /// Corner-to-corner extent, `br.x - tl.x`.
    ///
    /// Note this is one less than the covered pixel count; the gradient
    /// normalizer depends on this measure.
    #[inline]
    pub const fn width(self) -> i32 {
        self.br.x - self.tl.x
    }

    /// Corner-to-corner extent, `br.y - tl.y`.
    #[inline]
    pub const fn height(self) -> i32 {
        self.br.y - self.tl.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x0: i32, y0: i32, x1: i32, y1: i32) -> Rect {
        Rect::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    // ── has ───────────────────────────────────────────────────────────────

    #[test]
    fn has_interior_point() {
        assert!(r(0, 0, 10, 10).has(Point::new(5, 5)));
    }

    #[test]
    fn has_both_corners_inclusive() {
        let rect = r(2, 3, 8, 9);
        assert!(rect.has(Point::new(2, 3)));
        assert!(rect.has(Point::new(8, 9)));
    }

    #[test]
    fn has_outside() {
        assert!(!r(0, 0, 10, 10).has(Point::new(11, 5)));
        assert!(!r(0, 0, 10, 10).has(Point::new(5, -1)));
    }

    #[test]
    fn inverted_rect_contains_nothing() {
        let rect = r(5, 5, 2, 2);
        assert!(!rect.has(Point::new(3, 3)));
        assert!(!rect.has(Point::new(5, 5)));
    }

    // ── has_rect ──────────────────────────────────────────────────────────

    #[test]
    fn has_rect_contained() {
        assert!(r(0, 0, 10, 10).has_rect(r(2, 2, 8, 8)));
    }

    #[test]
    fn has_rect_overlapping_is_not_contained() {
        assert!(!r(0, 0, 10, 10).has_rect(r(5, 5, 15, 15)));
    }

    // ── spanning / extents ────────────────────────────────────────────────

    #[test]
    fn spanning_covers_size_pixels() {
        let rect = Rect::spanning(Point::new(3, 4), Point::new(5, 2));
        assert_eq!(rect.br, Point::new(7, 5));
        assert!(rect.has(Point::new(7, 5)));
        assert!(!rect.has(Point::new(8, 5)));
    }

    #[test]
    fn width_height_are_corner_deltas() {
        let rect = r(2, 2, 7, 5);
        assert_eq!(rect.width(), 5);
        assert_eq!(rect.height(), 3);
    }
}
