//! Frame-byte packing for the panel wire format.

use crate::paint::palette::PixelCode;

/// Packs pixel codes two to a byte, first pixel in the high nibble.
#[derive(Debug, Default)]
pub struct CodePacker {
    pending: Option<u8>,
}

impl CodePacker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts one code; returns a finished byte on every second call.
    #[inline]
    pub fn push(&mut self, code: PixelCode) -> Option<u8> {
        match self.pending.take() {
            Some(high) => Some((high << 4) | code.bits()),
            None => {
                self.pending = Some(code.bits());
                None
            }
        }
    }

    /// Flushes an odd trailing pixel into the high nibble, low nibble
    /// zeroed.
    #[inline]
    pub fn flush(&mut self) -> Option<u8> {
        self.pending.take().map(|high| high << 4)
    }
}
