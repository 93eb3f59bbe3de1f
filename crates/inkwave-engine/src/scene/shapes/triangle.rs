use crate::coords::{Point, Triangle};
use crate::paint::Rgb8;
use crate::scene::{Element, Scene};

/// Solid triangle. The outline variant is a closed polyline instead,
/// see [`Scene::triangle`].
#[derive(Debug)]
pub struct TriangleShape {
    tri: Triangle,
    fill: Rgb8,
}

impl TriangleShape {
    #[inline]
    pub fn new(tri: Triangle, fill: Rgb8) -> Self {
        Self { tri, fill }
    }

    #[inline]
    pub fn bounding_box(&self) -> crate::coords::Rect {
        self.tri.bounding_box()
    }

    #[inline]
    pub fn pix_at(&self, x: i32, y: i32) -> Option<Rgb8> {
        self.tri.has(Point::new(x, y)).then_some(self.fill)
    }
}

impl Scene {
    /// Triangle outline, drawn as a closed polyline.
    #[allow(clippy::too_many_arguments)]
    pub fn triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, color: Rgb8) {
        self.polyline(
            vec![
                Point::new(x1, y1),
                Point::new(x2, y2),
                Point::new(x3, y3),
                Point::new(x1, y1),
            ],
            color,
        );
    }

    #[allow(clippy::too_many_arguments)]
    pub fn filled_triangle(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        color: Rgb8,
    ) {
        self.push(Element::Triangle(TriangleShape::new(
            Triangle::new(Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3)),
            color,
        )));
    }
}

#[cfg(test)]
mod tests {
    use crate::paint::palette::{BLACK, WHITE};

    use super::*;

    #[test]
    fn filled_triangle_paints_interior() {
        let mut scene = Scene::new();
        scene.fill(WHITE);
        scene.filled_triangle(0, 0, 6, 0, 0, 6, BLACK);
        assert_eq!(scene.pix_at(1, 1), BLACK);
        assert_eq!(scene.pix_at(3, 0), BLACK);
        assert_eq!(scene.pix_at(5, 5), WHITE);
    }

    #[test]
    fn outline_triangle_leaves_interior_transparent() {
        let mut scene = Scene::new();
        scene.fill(WHITE);
        scene.triangle(0, 0, 8, 0, 0, 8, BLACK);
        assert_eq!(scene.pix_at(4, 0), BLACK); // bottom edge
        assert_eq!(scene.pix_at(0, 4), BLACK); // left edge
        assert_eq!(scene.pix_at(4, 4), BLACK); // hypotenuse, closed by the last vertex
        assert_eq!(scene.pix_at(2, 2), WHITE);
    }
}
