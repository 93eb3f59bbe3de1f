use super::{Point, Rect};

/// Triangle with a cached bounding box.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Triangle {
    v: [Point; 3],
    bb: Rect,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        let bb = Rect::new(
            Point::new(a.x.min(b.x).min(c.x), a.y.min(b.y).min(c.y)),
            Point::new(a.x.max(b.x).max(c.x), a.y.max(b.y).max(c.y)),
        );
        Self { v: [a, b, c], bb }
    }

    /// Containment via edge-sign tests, after a bounding-box reject.
    ///
    /// The point is inside iff the three signs do not mix, which makes
    /// both winding orders work and counts points exactly on an edge as
    /// inside.
    pub fn has(&self, p: Point) -> bool {
        if !self.bb.has(p) {
            return false;
        }

        let d1 = Self::edge_sign(p, self.v[0], self.v[1]);
        let d2 = Self::edge_sign(p, self.v[1], self.v[2]);
        let d3 = Self::edge_sign(p, self.v[2], self.v[0]);

        let has_neg = d1 < 0 || d2 < 0 || d3 < 0;
        let has_pos = d1 > 0 || d2 > 0 || d3 > 0;

        !(has_neg && has_pos)
    }

    #[inline]
    pub const fn bounding_box(&self) -> Rect {
        self.bb
    }

    #[inline]
    fn edge_sign(p: Point, a: Point, b: Point) -> i32 {
        (p - b).cross(a - b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn contains_interior() {
        let t = Triangle::new(p(0, 0), p(4, 0), p(0, 4));
        assert!(t.has(p(1, 1)));
    }

    #[test]
    fn edge_and_vertex_count_as_inside() {
        let t = Triangle::new(p(0, 0), p(4, 0), p(0, 4));
        assert!(t.has(p(2, 0)));
        assert!(t.has(p(0, 0)));
        assert!(t.has(p(2, 2))); // hypotenuse
    }

    #[test]
    fn outside_is_rejected() {
        let t = Triangle::new(p(0, 0), p(4, 0), p(0, 4));
        assert!(!t.has(p(3, 3)));
        assert!(!t.has(p(5, 0)));
    }

    #[test]
    fn both_windings_agree() {
        let cw = Triangle::new(p(0, 0), p(0, 4), p(4, 0));
        let ccw = Triangle::new(p(0, 0), p(4, 0), p(0, 4));
        for x in -1..6 {
            for y in -1..6 {
                assert_eq!(cw.has(p(x, y)), ccw.has(p(x, y)), "at ({x},{y})");
            }
        }
    }

    #[test]
    fn bounding_box_is_tight() {
        let t = Triangle::new(p(2, 7), p(-1, 3), p(4, 5));
        assert_eq!(t.bounding_box(), Rect::new(p(-1, 3), p(4, 7)));
    }
}
