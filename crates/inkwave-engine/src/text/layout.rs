use std::sync::Arc;

use super::{FontSource, GlyphData};

/// One glyph of a laid-out run, at its pen offset from the run origin.
#[derive(Debug)]
pub struct PlacedGlyph {
    pub x: i32,
    pub data: Arc<GlyphData>,
}

/// A laid-out single line of text.
#[derive(Debug)]
pub struct TextRun {
    pub glyphs: Vec<PlacedGlyph>,
    pub width: i32,
    pub height: i32,
    pub baseline: i32,
}

/// Lays out `text` left to right.
///
/// The pen advances by `width + offset_x` per glyph, and the measured
/// width subtracts the leftmost inked offset so a leading bearing does
/// not count against alignment. Characters without a glyph advance the
/// pen by the font's fallback and are otherwise dropped.
pub fn layout(font: &dyn FontSource, text: &str) -> TextRun {
    let mut glyphs = Vec::new();
    let mut x = 0;
    let mut min_x = 0;
    let mut has_char = false;

    for ch in text.chars() {
        let Some(data) = font.glyph(ch) else {
            log::debug!("no glyph for {ch:?}, skipping");
            x += font.fallback_advance();
            continue;
        };
        min_x = if has_char {
            min_x.min(x + data.offset_x)
        } else {
            data.offset_x
        };
        let advance = data.width + data.offset_x;
        glyphs.push(PlacedGlyph { x, data });
        x += advance;
        has_char = true;
    }

    TextRun {
        glyphs,
        width: x - min_x,
        height: font.height(),
        baseline: font.baseline(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Fixed-metrics font for layout tests: every glyph is 4x6 with a
    /// 1px left bearing, except 'i' which is 2 wide with no bearing.
    pub(crate) struct StubFont;

    impl FontSource for StubFont {
        fn height(&self) -> i32 {
            6
        }

        fn baseline(&self) -> i32 {
            5
        }

        fn glyph(&self, ch: char) -> Option<Arc<GlyphData>> {
            if !ch.is_ascii_alphanumeric() {
                return None;
            }
            let (width, offset_x) = if ch == 'i' { (2, 0) } else { (4, 1) };
            Some(Arc::new(GlyphData {
                width,
                height: 5,
                offset_x,
                offset_y: 0,
                bpp: 1,
                bitmap: vec![0xFF; 2].into_boxed_slice(),
            }))
        }

        fn fallback_advance(&self) -> i32 {
            4
        }
    }

    #[test]
    fn pen_advances_by_width_plus_bearing() {
        let run = layout(&StubFont, "ab");
        assert_eq!(run.glyphs[0].x, 0);
        assert_eq!(run.glyphs[1].x, 5);
    }

    #[test]
    fn width_excludes_the_leading_bearing() {
        // Pen ends at 10; min_x is the first glyph's bearing of 1.
        let run = layout(&StubFont, "ab");
        assert_eq!(run.width, 9);
    }

    #[test]
    fn narrow_glyph_changes_the_advance() {
        let run = layout(&StubFont, "ia");
        assert_eq!(run.glyphs[1].x, 2);
        // min_x = min(0, 2 + 1) = 0; pen ends at 7.
        assert_eq!(run.width, 7);
    }

    #[test]
    fn missing_glyphs_advance_but_do_not_place() {
        let run = layout(&StubFont, "a a");
        assert_eq!(run.glyphs.len(), 2);
        assert_eq!(run.glyphs[1].x, 9); // 5 for 'a', 4 fallback
    }

    #[test]
    fn empty_text_is_an_empty_run() {
        let run = layout(&StubFont, "");
        assert!(run.glyphs.is_empty());
        assert_eq!(run.width, 0);
        assert_eq!(run.height, 6);
    }

    #[test]
    fn run_carries_the_font_metrics() {
        let run = layout(&StubFont, "x");
        assert_eq!(run.height, 6);
        assert_eq!(run.baseline, 5);
    }
}
