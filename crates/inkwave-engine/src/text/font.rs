use std::sync::Arc;

/// One rasterized glyph: cell placement plus a bit-packed alpha bitmap.
///
/// `bitmap` holds `width * height` samples of `bpp` bits each,
/// row-major, MSB-first, as one continuous bit stream with no row
/// padding. `offset_x`/`offset_y` place the inked box inside the glyph
/// cell, measured from the cell's top-left.
#[derive(Debug)]
pub struct GlyphData {
    pub width: i32,
    pub height: i32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub bpp: u8,
    pub bitmap: Box<[u8]>,
}

/// Provider of rasterized glyphs for one font face at one size.
pub trait FontSource {
    /// Line height in pixels; every glyph cell is this tall.
    fn height(&self) -> i32;

    /// Baseline offset from the top of the line, in pixels.
    fn baseline(&self) -> i32;

    fn glyph(&self, ch: char) -> Option<Arc<GlyphData>>;

    /// Advance applied for characters without a glyph.
    fn fallback_advance(&self) -> i32;
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VerticalAlign {
    Top,
    Center,
    Baseline,
    Bottom,
}

/// Which point of the laid-out run the anchor coordinates refer to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TextAlign {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
}

impl TextAlign {
    pub const TOP_LEFT: Self = Self::new(HorizontalAlign::Left, VerticalAlign::Top);
    pub const TOP_CENTER: Self = Self::new(HorizontalAlign::Center, VerticalAlign::Top);
    pub const TOP_RIGHT: Self = Self::new(HorizontalAlign::Right, VerticalAlign::Top);
    pub const CENTER_LEFT: Self = Self::new(HorizontalAlign::Left, VerticalAlign::Center);
    pub const CENTER: Self = Self::new(HorizontalAlign::Center, VerticalAlign::Center);
    pub const CENTER_RIGHT: Self = Self::new(HorizontalAlign::Right, VerticalAlign::Center);
    pub const BASELINE_LEFT: Self = Self::new(HorizontalAlign::Left, VerticalAlign::Baseline);
    pub const BASELINE_CENTER: Self = Self::new(HorizontalAlign::Center, VerticalAlign::Baseline);
    pub const BASELINE_RIGHT: Self = Self::new(HorizontalAlign::Right, VerticalAlign::Baseline);
    pub const BOTTOM_LEFT: Self = Self::new(HorizontalAlign::Left, VerticalAlign::Bottom);
    pub const BOTTOM_CENTER: Self = Self::new(HorizontalAlign::Center, VerticalAlign::Bottom);
    pub const BOTTOM_RIGHT: Self = Self::new(HorizontalAlign::Right, VerticalAlign::Bottom);

    #[inline]
    pub const fn new(horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        Self { horizontal, vertical }
    }
}
