use core::ops::{Add, AddAssign, Div, Mul, Not, Sub, SubAssign};

use super::Channel;

/// Three-channel color triple generic over the channel width.
///
/// The operator impls are the *saturating* family (results clamped to
/// the channel's legal range); the `unbounded_*` methods never clamp
/// and exist for error accumulation and mid-blend math, where transient
/// out-of-range values must survive until the next step.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb<T: Channel> {
    pub r: T,
    pub g: T,
    pub b: T,
}

/// Display color: what elements return and the palette is made of.
pub type Rgb8 = Rgb<u8>;
/// Wide signed accumulator color used by the dithering rows.
pub type RgbWide = Rgb<i16>;
/// Unbounded float color for error and blend math.
pub type RgbF = Rgb<f32>;

impl<T: Channel> Rgb<T> {
    #[inline]
    pub const fn new(r: T, g: T, b: T) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn splat(v: T) -> Self {
        Self { r: v, g: v, b: v }
    }

    #[inline]
    fn zip(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        Self::new(f(self.r, rhs.r), f(self.g, rhs.g), f(self.b, rhs.b))
    }

    // ── unbounded family ──────────────────────────────────────────────────

    #[inline]
    pub fn unbounded_add(self, rhs: Self) -> Self {
        self.zip(rhs, T::raw_add)
    }

    #[inline]
    pub fn unbounded_sub(self, rhs: Self) -> Self {
        self.zip(rhs, T::raw_sub)
    }

    #[inline]
    pub fn unbounded_mul(self, scale: T) -> Self {
        self.zip(Self::splat(scale), T::raw_mul)
    }

    #[inline]
    pub fn unbounded_mul_each(self, rhs: Self) -> Self {
        self.zip(rhs, T::raw_mul)
    }

    #[inline]
    pub fn unbounded_div(self, scale: T) -> Self {
        self.zip(Self::splat(scale), T::raw_div)
    }

    #[inline]
    pub fn unbounded_div_each(self, rhs: Self) -> Self {
        self.zip(rhs, T::raw_div)
    }
}

// ── saturating operators ──────────────────────────────────────────────────

impl<T: Channel> Add for Rgb<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, T::sat_add)
    }
}

impl<T: Channel> AddAssign for Rgb<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Channel> Sub for Rgb<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, T::sat_sub)
    }
}

impl<T: Channel> SubAssign for Rgb<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Channel> Mul<T> for Rgb<T> {
    type Output = Self;
    #[inline]
    fn mul(self, scale: T) -> Self {
        self.zip(Self::splat(scale), T::sat_mul)
    }
}

impl<T: Channel> Mul for Rgb<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.zip(rhs, T::sat_mul)
    }
}

impl<T: Channel> Div<T> for Rgb<T> {
    type Output = Self;
    #[inline]
    fn div(self, scale: T) -> Self {
        self.zip(Self::splat(scale), T::sat_div)
    }
}

impl<T: Channel> Div for Rgb<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.zip(rhs, T::sat_div)
    }
}

/// Channel complement, `255 - c`.
impl Not for Rgb8 {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }
}

// ── widening conversions ──────────────────────────────────────────────────

impl From<Rgb8> for RgbWide {
    #[inline]
    fn from(c: Rgb8) -> Self {
        Self::new(c.r as i16, c.g as i16, c.b as i16)
    }
}

impl From<Rgb8> for RgbF {
    #[inline]
    fn from(c: Rgb8) -> Self {
        Self::new(c.r as f32, c.g as f32, c.b as f32)
    }
}

impl From<RgbWide> for RgbF {
    #[inline]
    fn from(c: RgbWide) -> Self {
        Self::new(c.r as f32, c.g as f32, c.b as f32)
    }
}

// ── narrowing conversions (explicit, `as`-cast semantics) ─────────────────

impl RgbF {
    /// Truncate toward zero into display range (negative → 0, > 255 → 255).
    #[inline]
    pub fn to_rgb8(self) -> Rgb8 {
        Rgb8::new(self.r as u8, self.g as u8, self.b as u8)
    }

    /// Truncate toward zero into the wide accumulator width.
    #[inline]
    pub fn to_wide(self) -> RgbWide {
        RgbWide::new(self.r as i16, self.g as i16, self.b as i16)
    }
}

impl RgbWide {
    #[inline]
    pub fn to_rgb8(self) -> Rgb8 {
        Rgb8::new(self.r as u8, self.g as u8, self.b as u8)
    }
}
