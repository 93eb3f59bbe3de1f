use super::{Point, Rect};

/// Ternary containment result for circles.
///
/// `OnBorder` covers points within half a pixel of the radius, so an
/// outline one pixel wide always closes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Containment {
    Outside,
    OnBorder,
    Inside,
}

/// Circle with an integer center and fractional radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    #[inline]
    pub const fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn has(self, p: Point) -> Containment {
        let dist = (self.center - p).len();
        if (dist - self.radius).abs() < 0.5 {
            return Containment::OnBorder;
        }
        if dist > self.radius {
            return Containment::Outside;
        }
        Containment::Inside
    }

    /// `center ± radius` with the radius truncated to whole pixels.
    pub fn bounding_box(self) -> Rect {
        let rad = Point::new(self.radius as i32, self.radius as i32);
        Rect::new(self.center - rad, self.center + rad)
    }
}
