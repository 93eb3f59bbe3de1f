/// MSB-first reader over a continuous bit stream.
///
/// Reads past the end yield zero bits rather than panicking; glyph
/// bitmaps are trusted to be exactly sized, and a short one renders as
/// background instead of tearing down the caller.
pub struct BitReader<'a> {
    data: &'a [u8],
    index: usize,
    mask: u8,
    current: u8,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8], bit_offset: usize) -> Self {
        let index = bit_offset / 8;
        Self {
            data,
            index: index + 1,
            mask: 0x80 >> (bit_offset % 8),
            current: data.get(index).copied().unwrap_or(0),
        }
    }

    /// Reads `bits` (≤ 8) into the low end of the result.
    pub fn read(&mut self, bits: u8) -> u8 {
        let mut out = 0;
        for _ in 0..bits {
            if self.mask == 0 {
                self.current = self.data.get(self.index).copied().unwrap_or(0);
                self.index += 1;
                self.mask = 0x80;
            }
            out <<= 1;
            if self.current & self.mask != 0 {
                out |= 1;
            }
            self.mask >>= 1;
        }
        out
    }
}

/// MSB-first writer producing the stream [`BitReader`] consumes.
#[derive(Default)]
pub struct BitWriter {
    out: Vec<u8>,
    pending: u8,
    used: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the low `bits` of `value`, most significant first.
    pub fn write(&mut self, value: u8, bits: u8) {
        for i in (0..bits).rev() {
            self.pending = (self.pending << 1) | ((value >> i) & 1);
            self.used += 1;
            if self.used == 8 {
                self.out.push(self.pending);
                self.pending = 0;
                self.used = 0;
            }
        }
    }

    /// Flushes the partial tail byte (zero-padded on the right).
    pub fn finish(mut self) -> Box<[u8]> {
        if self.used > 0 {
            self.out.push(self.pending << (8 - self.used));
        }
        self.out.into_boxed_slice()
    }
}
