use std::sync::Arc;

use crate::coords::{Point, Rect};
use crate::paint::{Rgb8, RgbF};
use crate::scene::{Element, Scene};
use crate::text::{
    BitReader, FontSource, GlyphData, HorizontalAlign, TextAlign, VerticalAlign, layout,
};

/// One glyph cell: a line-height-tall box with the inked bitmap placed
/// inside it by the glyph offsets.
///
/// Fully-covered samples paint the foreground, uncovered ones the
/// background (transparent when absent). Partial coverage blends
/// between the two, or stays transparent without a background since
/// there is nothing to blend against.
#[derive(Debug)]
pub struct Glyph {
    rect: Rect,
    data: Arc<GlyphData>,
    fg: Rgb8,
    bg: Option<Rgb8>,
    diff: Option<RgbF>,
    sample_max: u8,
}

impl Glyph {
    pub fn new(pos: Point, size: Point, data: Arc<GlyphData>, fg: Rgb8, bg: Option<Rgb8>) -> Self {
        Self {
            rect: Rect::spanning(pos, size),
            sample_max: ((1u16 << data.bpp) - 1) as u8,
            diff: bg.map(|bg| RgbF::from(fg) - RgbF::from(bg)),
            data,
            fg,
            bg,
        }
    }

    #[inline]
    pub fn bounding_box(&self) -> Rect {
        self.rect
    }

    pub fn pix_at(&self, x: i32, y: i32) -> Option<Rgb8> {
        let p = Point::new(x, y);
        if !self.rect.has(p) {
            return None;
        }
        let inked_tl = self.rect.tl + Point::new(self.data.offset_x, self.data.offset_y);
        let inked = Rect::spanning(inked_tl, Point::new(self.data.width, self.data.height));
        if !inked.has(p) {
            return self.bg;
        }

        let i = p - inked_tl;
        let bit_offset = ((i.x + i.y * self.data.width) * self.data.bpp as i32) as usize;
        let sample = BitReader::new(&self.data.bitmap, bit_offset).read(self.data.bpp);

        if sample == self.sample_max {
            Some(self.fg)
        } else if sample == 0 {
            self.bg
        } else if let (Some(bg), Some(diff)) = (self.bg, self.diff) {
            let coverage = sample as f32 / self.sample_max as f32;
            Some(
                diff.unbounded_mul(coverage)
                    .unbounded_add(RgbF::from(bg))
                    .to_rgb8(),
            )
        } else {
            None
        }
    }
}

impl Scene {
    /// Lays `text` out with `font` and appends one glyph element per
    /// character, anchored at `(x, y)` per `align`.
    #[allow(clippy::too_many_arguments)]
    pub fn text(
        &mut self,
        x: i32,
        y: i32,
        font: &dyn FontSource,
        color: Rgb8,
        align: TextAlign,
        text: &str,
        background: Option<Rgb8>,
    ) {
        let run = layout(font, text);

        let xp = x - match align.horizontal {
            HorizontalAlign::Left => 0,
            HorizontalAlign::Center => run.width / 2,
            HorizontalAlign::Right => run.width,
        };
        let yp = y - match align.vertical {
            VerticalAlign::Top => 0,
            VerticalAlign::Center => run.height / 2,
            VerticalAlign::Baseline => run.baseline,
            VerticalAlign::Bottom => run.height,
        };

        for placed in run.glyphs {
            let size = Point::new(placed.data.width, run.height);
            self.push(Element::Glyph(Glyph::new(
                Point::new(xp + placed.x, yp),
                size,
                placed.data,
                color,
                background,
            )));
        }
    }
}
