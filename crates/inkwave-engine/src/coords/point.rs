use core::ops::{Add, AddAssign, Sub, SubAssign};

/// 2D point on the raster grid, in whole pixels.
///
/// The derived ordering is lexicographic (x-major, y-minor); sparse
/// pixel sets rely on it for their key order.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Euclidean length of the vector from the origin.
    #[inline]
    pub fn len(self) -> f32 {
        ((self.x as f32) * (self.x as f32) + (self.y as f32) * (self.y as f32)).sqrt()
    }

    /// 2D cross product (z component of the 3D cross).
    #[inline]
    pub const fn cross(self, other: Point) -> i32 {
        self.x * other.y - self.y * other.x
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Point) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub() {
        let p = Point::new(3, 4) + Point::new(1, -2);
        assert_eq!(p, Point::new(4, 2));
        assert_eq!(p - Point::new(4, 2), Point::zero());
    }

    #[test]
    fn len_is_euclidean() {
        assert_eq!(Point::new(3, 4).len(), 5.0);
        assert_eq!(Point::new(0, -7).len(), 7.0);
    }

    #[test]
    fn cross_sign_flips_with_order() {
        let a = Point::new(1, 0);
        let b = Point::new(0, 1);
        assert_eq!(a.cross(b), 1);
        assert_eq!(b.cross(a), -1);
    }

    #[test]
    fn ordering_is_x_major() {
        assert!(Point::new(2, 8) < Point::new(5, 5));
        assert!(Point::new(5, 4) < Point::new(5, 5));
    }
}
