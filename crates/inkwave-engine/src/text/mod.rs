//! Text shaping for the scene.
//!
//! Responsibilities:
//! - define the bitmap-glyph contract scenes render from ([`FontSource`])
//! - lay out a string into positioned glyphs ([`layout`])
//! - adapt TTF/OTF files to that contract via fontdue ([`BitmapFont`])
//!
//! Scope: single-line, left-to-right runs. Wrapping and shaping beyond
//! per-char glyph lookup are out.

mod bitmap;
mod font;
mod fontdue;
mod layout;

pub use bitmap::{BitReader, BitWriter};
pub use font::{FontSource, GlyphData, HorizontalAlign, TextAlign, VerticalAlign};
pub use fontdue::{BitmapFont, FontError};
pub use layout::{PlacedGlyph, TextRun, layout};

#[cfg(test)]
pub(crate) use layout::tests as layout_tests;
