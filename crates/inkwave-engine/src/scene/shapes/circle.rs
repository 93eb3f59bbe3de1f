use crate::coords::{Circle, Containment, Point, Rect};
use crate::paint::Rgb8;
use crate::scene::{Element, Scene};

use super::DrawStyle;

/// Circle painted either as a one-pixel ring or solid.
#[derive(Debug)]
pub struct CircleShape {
    circle: Circle,
    color: Rgb8,
    style: DrawStyle,
}

impl CircleShape {
    #[inline]
    pub fn new(circle: Circle, color: Rgb8, style: DrawStyle) -> Self {
        Self { circle, color, style }
    }

    #[inline]
    pub fn bounding_box(&self) -> Rect {
        self.circle.bounding_box()
    }

    pub fn pix_at(&self, x: i32, y: i32) -> Option<Rgb8> {
        match self.circle.has(Point::new(x, y)) {
            Containment::Outside => None,
            Containment::OnBorder => Some(self.color),
            Containment::Inside => (self.style == DrawStyle::Filled).then_some(self.color),
        }
    }
}

impl Scene {
    pub fn circle(&mut self, center_x: i32, center_y: i32, radius: i32, color: Rgb8) {
        self.push(Element::Circle(CircleShape::new(
            Circle::new(Point::new(center_x, center_y), radius as f32),
            color,
            DrawStyle::Outline,
        )));
    }

    pub fn filled_circle(&mut self, center_x: i32, center_y: i32, radius: i32, color: Rgb8) {
        self.push(Element::Circle(CircleShape::new(
            Circle::new(Point::new(center_x, center_y), radius as f32),
            color,
            DrawStyle::Filled,
        )));
    }
}
