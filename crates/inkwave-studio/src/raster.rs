//! Bridges decoded raster images into the engine's image contract.

use anyhow::{Context, Result};
use image::RgbImage;
use inkwave_engine::image::ImageSource;
use inkwave_engine::paint::Rgb8;
use inkwave_engine::paint::palette::{BLACK, WHITE, YELLOW};
use std::path::Path;

/// Full-color image backed by an [`image`] crate buffer.
pub struct RasterImage {
    buffer: RgbImage,
}

impl RasterImage {
    pub fn open(path: &Path) -> Result<Self> {
        let buffer = image::open(path)
            .with_context(|| format!("failed to open image {}", path.display()))?
            .into_rgb8();
        log::info!(
            "loaded image {} ({}x{})",
            path.display(),
            buffer.width(),
            buffer.height()
        );
        Ok(Self { buffer })
    }

    /// Built-in pattern used when no input image is given: palette
    /// stripes over a left-to-right fade.
    pub fn test_card(width: u32, height: u32) -> Self {
        let stripes = [BLACK, WHITE, YELLOW];
        let buffer = RgbImage::from_fn(width, height, |x, y| {
            let stripe = (y * stripes.len() as u32 / height.max(1)) as usize;
            let base = stripes[stripe.min(stripes.len() - 1)];
            let fade = (x * 255 / width.max(1)) as i32;
            image::Rgb([
                fade_channel(base.r, fade),
                fade_channel(base.g, fade),
                fade_channel(base.b, fade),
            ])
        });
        Self { buffer }
    }
}

fn fade_channel(c: u8, fade: i32) -> u8 {
    (c as i32 * (255 - fade) / 255) as u8
}

impl ImageSource for RasterImage {
    fn width(&self) -> i32 {
        self.buffer.width() as i32
    }

    fn height(&self) -> i32 {
        self.buffer.height() as i32
    }

    fn pixel(&self, x: i32, y: i32, _on: Rgb8, _off: Rgb8) -> Rgb8 {
        let p = self.buffer.get_pixel(x as u32, y as u32);
        Rgb8::new(p.0[0], p.0[1], p.0[2])
    }
}
