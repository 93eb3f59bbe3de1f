use core::fmt::Debug;

/// Per-channel arithmetic behind [`Rgb`](super::Rgb).
///
/// Two operation families:
/// - `sat_*` clamp the result to the channel's legal range:
///   `[0, 255]` for `u8`, `[-255, 255]` for the signed widths.
/// - `raw_*` never clamp; over/underflow is the caller's to keep.
///
/// Division by zero in either family yields the signed-infinity
/// sentinel for the operand's sign (the saturating family then clamps
/// it to the range extreme).
pub trait Channel: Copy + Clone + Debug + Default + PartialEq + PartialOrd {
    const ZERO: Self;

    fn sat_add(self, rhs: Self) -> Self;
    fn sat_sub(self, rhs: Self) -> Self;
    fn sat_mul(self, rhs: Self) -> Self;
    fn sat_div(self, rhs: Self) -> Self;

    fn raw_add(self, rhs: Self) -> Self;
    fn raw_sub(self, rhs: Self) -> Self;
    fn raw_mul(self, rhs: Self) -> Self;
    fn raw_div(self, rhs: Self) -> Self;

    /// Max representable for a positive sign, min otherwise.
    fn infinity(sign: Self) -> Self;
}

impl Channel for u8 {
    const ZERO: Self = 0;

    #[inline]
    fn sat_add(self, rhs: Self) -> Self {
        (self as i32 + rhs as i32).clamp(0, 255) as u8
    }

    #[inline]
    fn sat_sub(self, rhs: Self) -> Self {
        (self as i32 - rhs as i32).clamp(0, 255) as u8
    }

    #[inline]
    fn sat_mul(self, rhs: Self) -> Self {
        (self as i32 * rhs as i32).clamp(0, 255) as u8
    }

    #[inline]
    fn sat_div(self, rhs: Self) -> Self {
        if rhs == 0 {
            return Self::infinity(self);
        }
        self / rhs
    }

    #[inline]
    fn raw_add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }

    #[inline]
    fn raw_sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }

    #[inline]
    fn raw_mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }

    #[inline]
    fn raw_div(self, rhs: Self) -> Self {
        if rhs == 0 {
            return Self::infinity(self);
        }
        self / rhs
    }

    #[inline]
    fn infinity(sign: Self) -> Self {
        if sign > 0 { u8::MAX } else { u8::MIN }
    }
}

impl Channel for i16 {
    const ZERO: Self = 0;

    #[inline]
    fn sat_add(self, rhs: Self) -> Self {
        (self as i32 + rhs as i32).clamp(-255, 255) as i16
    }

    #[inline]
    fn sat_sub(self, rhs: Self) -> Self {
        (self as i32 - rhs as i32).clamp(-255, 255) as i16
    }

    #[inline]
    fn sat_mul(self, rhs: Self) -> Self {
        (self as i32 * rhs as i32).clamp(-255, 255) as i16
    }

    #[inline]
    fn sat_div(self, rhs: Self) -> Self {
        if rhs == 0 {
            return (Self::infinity(self) as i32).clamp(-255, 255) as i16;
        }
        (self as i32 / rhs as i32).clamp(-255, 255) as i16
    }

    #[inline]
    fn raw_add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }

    #[inline]
    fn raw_sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }

    #[inline]
    fn raw_mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }

    #[inline]
    fn raw_div(self, rhs: Self) -> Self {
        if rhs == 0 {
            return Self::infinity(self);
        }
        self / rhs
    }

    #[inline]
    fn infinity(sign: Self) -> Self {
        if sign > 0 { i16::MAX } else { i16::MIN }
    }
}

impl Channel for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn sat_add(self, rhs: Self) -> Self {
        (self + rhs).clamp(-255.0, 255.0)
    }

    #[inline]
    fn sat_sub(self, rhs: Self) -> Self {
        (self - rhs).clamp(-255.0, 255.0)
    }

    #[inline]
    fn sat_mul(self, rhs: Self) -> Self {
        (self * rhs).clamp(-255.0, 255.0)
    }

    #[inline]
    fn sat_div(self, rhs: Self) -> Self {
        if rhs == 0.0 {
            return Self::infinity(self).clamp(-255.0, 255.0);
        }
        (self / rhs).clamp(-255.0, 255.0)
    }

    #[inline]
    fn raw_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn raw_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn raw_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn raw_div(self, rhs: Self) -> Self {
        if rhs == 0.0 {
            return Self::infinity(self);
        }
        self / rhs
    }

    #[inline]
    fn infinity(sign: Self) -> Self {
        if sign > 0.0 {
            f32::INFINITY
        } else {
            f32::NEG_INFINITY
        }
    }
}
