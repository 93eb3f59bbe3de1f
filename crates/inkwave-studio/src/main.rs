//! Desktop workbench for the inkwave engine.
//!
//! Builds a demo scene (optionally around an image passed as the first
//! argument), dithers it at panel resolution, and writes two artifacts
//! next to the working directory: `preview.png` with the quantized
//! frame and `frame.bin` with the packed panel bytes.

mod raster;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use inkwave_engine::coords::{Point, Rect};
use inkwave_engine::image::ImageAlign;
use inkwave_engine::logging::{LoggingConfig, init_logging};
use inkwave_engine::paint::palette::{self, BLACK, WHITE, YELLOW};
use inkwave_engine::paint::Rgb8;
use inkwave_engine::render::{CodePacker, DitherRenderer};
use inkwave_engine::scene::Scene;
use inkwave_engine::scene::shapes::{DrawStyle, PolygonVariation};
use inkwave_engine::text::{BitmapFont, TextAlign};

use crate::raster::RasterImage;

// 7.5" tri-color panel geometry.
const PANEL_WIDTH: usize = 640;
const PANEL_HEIGHT: usize = 384;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let image_path = std::env::args().nth(1).map(PathBuf::from);
    let scene = build_scene(image_path.as_deref())?;
    log::info!("scene holds {} elements", scene.elements().len());

    let mut renderer = DitherRenderer::new(PANEL_WIDTH, PANEL_HEIGHT);
    let mut preview = image::RgbImage::new(PANEL_WIDTH as u32, PANEL_HEIGHT as u32);
    let mut packer = CodePacker::new();
    let mut frame = Vec::with_capacity(PANEL_WIDTH * PANEL_HEIGHT / 2);

    renderer.render(&scene, |x, y, color| {
        preview.put_pixel(x as u32, y as u32, image::Rgb([color.r, color.g, color.b]));
        if let Some(byte) = packer.push(palette::hardware_code(color)) {
            frame.push(byte);
        }
    });
    if let Some(byte) = packer.flush() {
        frame.push(byte);
    }

    preview.save("preview.png").context("failed to write preview.png")?;
    fs::write("frame.bin", &frame).context("failed to write frame.bin")?;
    log::info!("wrote preview.png and frame.bin ({} bytes)", frame.len());
    Ok(())
}

fn build_scene(image_path: Option<&Path>) -> Result<Scene> {
    let mut scene = Scene::new();
    scene.fill(WHITE);

    // Header band with a fade into the page.
    scene.filled_rectangle(0, 0, PANEL_WIDTH as i32, 56, BLACK);
    scene.gradient(
        Rect::spanning(Point::new(0, 56), Point::new(PANEL_WIDTH as i32, 24)),
        BLACK,
        WHITE,
    );

    // Shape row.
    scene.filled_circle(80, 160, 40, YELLOW);
    scene.circle(80, 160, 52, BLACK);
    scene.filled_triangle(160, 200, 200, 120, 240, 200, BLACK);
    scene.regular_polygon(
        320,
        160,
        48,
        6,
        PolygonVariation::PointyTop,
        0.0,
        YELLOW,
        DrawStyle::Filled,
    );
    scene.regular_polygon(
        320,
        160,
        48,
        6,
        PolygonVariation::PointyTop,
        0.0,
        BLACK,
        DrawStyle::Outline,
    );
    scene.rectangle(20, 100, 420, 120, BLACK);

    // Dial-style tick marks.
    for angle in (0..360).step_by(30) {
        scene.line_at_angle_between(540, 160, angle as f32, 40, 52, BLACK);
    }

    let source = match image_path {
        Some(path) => RasterImage::open(path)?,
        None => RasterImage::test_card(160, 100),
    };
    scene.image(
        PANEL_WIDTH as i32 / 2,
        330,
        source,
        ImageAlign::BottomCenter,
        BLACK,
        WHITE,
    );

    let font_data = load_font();
    if font_data.is_empty() {
        log::warn!("no system font found, skipping text layers");
    } else {
        let font = BitmapFont::new(&font_data, 32.0, 2)?;
        scene.text(
            PANEL_WIDTH as i32 / 2,
            28,
            &font,
            WHITE,
            TextAlign::CENTER,
            "inkwave studio",
            None,
        );
        scene.text(
            24,
            240,
            &font,
            BLACK,
            TextAlign::BASELINE_LEFT,
            "three inks, sixteen shades of dither",
            Some(WHITE),
        );
    }

    // A hand-plotted accent pixel run.
    for x in 0..12 {
        scene.draw_pixel_at(600 + x % 8, 20 + x, Rgb8::new(220, 180, 0));
    }

    Ok(scene)
}

fn load_font() -> Vec<u8> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| fs::read(p).ok())
    .unwrap_or_default()
}
