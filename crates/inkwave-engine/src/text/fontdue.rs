use core::fmt;
use std::sync::Arc;

use fontdue::{Font, FontSettings};

use super::{BitWriter, FontSource, GlyphData};

/// Font file could not be loaded or has unusable metrics.
#[derive(Debug)]
pub struct FontError {
    message: String,
}

impl FontError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font error: {}", self.message)
    }
}

impl std::error::Error for FontError {}

/// [`FontSource`] over a TTF/OTF face rasterized at a fixed pixel size.
///
/// Glyphs are rasterized on demand and quantized from fontdue's 8-bit
/// coverage down to `bpp` bits per sample.
pub struct BitmapFont {
    font: Font,
    px_size: f32,
    bpp: u8,
    height: i32,
    baseline: i32,
    fallback: i32,
}

impl BitmapFont {
    pub fn new(data: &[u8], px_size: f32, bpp: u8) -> Result<Self, FontError> {
        if !(1..=8).contains(&bpp) {
            return Err(FontError::new(format!("bpp must be 1..=8, got {bpp}")));
        }
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|e| FontError::new(format!("failed to parse font: {e}")))?;
        let metrics = font
            .horizontal_line_metrics(px_size)
            .ok_or_else(|| FontError::new("font has no horizontal line metrics"))?;

        let height = (metrics.ascent - metrics.descent).ceil() as i32;
        let baseline = metrics.ascent.ceil() as i32;
        let fallback = font.metrics(' ', px_size).advance_width.ceil() as i32;
        log::info!("loaded font at {px_size}px, line height {height}, {bpp} bpp");

        Ok(Self {
            font,
            px_size,
            bpp,
            height,
            baseline,
            fallback,
        })
    }
}

impl FontSource for BitmapFont {
    fn height(&self) -> i32 {
        self.height
    }

    fn baseline(&self) -> i32 {
        self.baseline
    }

    fn glyph(&self, ch: char) -> Option<Arc<GlyphData>> {
        if self.font.lookup_glyph_index(ch) == 0 {
            return None;
        }
        let (metrics, coverage) = self.font.rasterize(ch, self.px_size);
        // Whitespace rasterizes to an empty box, which would advance
        // the pen by zero; report no glyph so layout applies the
        // fallback advance instead.
        if coverage.is_empty() {
            return None;
        }

        let mut bits = BitWriter::new();
        for &alpha in &coverage {
            bits.write(alpha >> (8 - self.bpp), self.bpp);
        }

        let width = metrics.width as i32;
        let height = metrics.height as i32;
        Some(Arc::new(GlyphData {
            width,
            height,
            offset_x: metrics.xmin,
            // fontdue's ymin is from the baseline up; the cell wants the
            // inked box offset from the line top.
            offset_y: self.baseline - height - metrics.ymin,
            bpp: self.bpp,
            bitmap: bits.finish(),
        }))
    }

    fn fallback_advance(&self) -> i32 {
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use crate::text::layout;

    use super::*;

    fn system_font() -> Option<Vec<u8>> {
        [
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/noto/NotoSans-Regular.ttf",
            "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        ]
        .iter()
        .find_map(|p| std::fs::read(p).ok())
    }

    #[test]
    fn rejects_out_of_range_bpp() {
        assert!(BitmapFont::new(&[], 16.0, 0).is_err());
        assert!(BitmapFont::new(&[], 16.0, 9).is_err());
    }

    #[test]
    fn rejects_garbage_font_data() {
        let err = BitmapFont::new(&[0xDE, 0xAD], 16.0, 1).err().unwrap();
        assert!(err.to_string().contains("font"));
    }

    #[test]
    fn whitespace_takes_the_fallback_advance() {
        let Some(data) = system_font() else {
            return;
        };
        let font = BitmapFont::new(&data, 32.0, 2).ok().unwrap();

        // An empty-coverage character reports no glyph, so layout
        // advances by the fallback instead of standing still.
        assert!(font.glyph(' ').is_none());
        assert!(font.fallback_advance() > 0);

        let plain = layout(&font, "ab");
        let spaced = layout(&font, "a b");
        assert_eq!(spaced.glyphs.len(), 2);
        assert_eq!(
            spaced.glyphs[1].x,
            plain.glyphs[1].x + font.fallback_advance()
        );
    }

    #[test]
    fn visible_glyphs_still_resolve() {
        let Some(data) = system_font() else {
            return;
        };
        let font = BitmapFont::new(&data, 32.0, 2).ok().unwrap();
        let glyph = font.glyph('a').unwrap();
        assert!(glyph.width > 0);
        assert!(glyph.height > 0);
    }
}
