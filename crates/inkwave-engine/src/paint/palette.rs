//! The fixed three-swatch panel palette.
//!
//! Two distinct mappings share one nearest-swatch classification:
//! [`quantize`] snaps an accumulator color to a palette color during
//! dithering, and [`hardware_code`] turns a palette color into the code
//! the panel controller expects. They stay separate operations because
//! one consumes continuous composite values and the other
//! hardware-native ones.

use super::{Rgb8, RgbF};

pub const BLACK: Rgb8 = Rgb8 { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb8 = Rgb8 { r: 255, g: 255, b: 255 };
pub const YELLOW: Rgb8 = Rgb8 { r: 220, g: 180, b: 0 };

/// Per-pixel code understood by the panel controller, packed two per
/// byte on the wire (see [`render::pack`](crate::render::pack)).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum PixelCode {
    Black = 0x00,
    White = 0x03,
    Yellow = 0x04,
}

impl PixelCode {
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

#[derive(Copy, Clone, Eq, PartialEq)]
enum Swatch {
    Black,
    White,
    Yellow,
}

/// Euclidean RGB distance from `c` to a swatch.
#[inline]
fn distance(c: RgbF, swatch: Rgb8) -> f32 {
    let d = c.unbounded_sub(RgbF::from(swatch));
    (d.r * d.r + d.g * d.g + d.b * d.b).sqrt()
}

/// Nearest-swatch classification shared by both mappings.
///
/// Tie-break order is load-bearing for bit-identical output: black wins
/// over white at equal distance, and yellow wins over that winner.
fn nearest(c: RgbF) -> Swatch {
    let db = distance(c, BLACK);
    let dw = distance(c, WHITE);
    let dy = distance(c, YELLOW);

    let (bw, dbw) = if dw < db {
        (Swatch::White, dw)
    } else {
        (Swatch::Black, db)
    };
    if dbw < dy { bw } else { Swatch::Yellow }
}

/// Snaps a composite/accumulator color to the nearest palette color.
pub fn quantize(c: RgbF) -> Rgb8 {
    match nearest(c) {
        Swatch::Black => BLACK,
        Swatch::White => WHITE,
        Swatch::Yellow => YELLOW,
    }
}

/// Maps a palette color to its hardware pixel code.
pub fn hardware_code(c: Rgb8) -> PixelCode {
    match nearest(RgbF::from(c)) {
        Swatch::Black => PixelCode::Black,
        Swatch::White => PixelCode::White,
        Swatch::Yellow => PixelCode::Yellow,
    }
}
