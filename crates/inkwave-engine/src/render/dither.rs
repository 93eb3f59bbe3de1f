use core::mem;

use crate::paint::{Rgb8, RgbF, RgbWide, palette};
use crate::scene::Scene;

// Diffusion weights, in 32nds. Each branch hands on exactly half of
// the quantization error; the other half is absorbed.
const RIGHT: f32 = 7.0 / 32.0;
const FIRST_DOWN: f32 = 7.0 / 32.0;
const FIRST_DOWN_RIGHT: f32 = 2.0 / 32.0;
const LAST_DOWN_LEFT: f32 = 7.0 / 32.0;
const LAST_DOWN: f32 = 9.0 / 32.0;
const DOWN_LEFT: f32 = 3.0 / 32.0;
const DOWN: f32 = 5.0 / 32.0;
const DOWN_RIGHT: f32 = 1.0 / 32.0;

/// Row-streaming error-diffusion renderer.
///
/// Holds two accumulator rows (current and next) and never the whole
/// frame. Accumulator channels are signed and saturate at ±255, so
/// diffused error survives out-of-range but cannot run away. Error
/// shares truncate toward zero when they land in the accumulator.
///
/// The same renderer can be reused across frames; every render refills
/// both rows from the scene before reading them.
#[derive(Debug)]
pub struct DitherRenderer {
    width: usize,
    height: usize,
    rows: Vec<RgbWide>,
}

impl DitherRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rows: vec![RgbWide::default(); width * 2],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Renders `scene` row-major, calling `emit` once per pixel with
    /// the quantized palette color.
    ///
    /// Diffusion happens before the emit call, so `emit` observes the
    /// accumulators for later pixels already updated.
    pub fn render<F>(&mut self, scene: &Scene, mut emit: F)
    where
        F: FnMut(usize, usize, Rgb8),
    {
        let w = self.width;
        let mut cur = 0;
        let mut next = w;

        self.fill_row(cur, scene, 0);
        for y in 0..self.height {
            // The last row has no successor; its downward shares land
            // in the stale half and are never read.
            if y + 1 < self.height {
                self.fill_row(next, scene, y + 1);
            }
            log::trace!("dithering row {y}");
            for x in 0..w {
                let current = self.rows[cur + x];
                let quantized = palette::quantize(RgbF::from(current));
                let err = RgbF::from(current).unbounded_sub(RgbF::from(quantized));

                if x == 0 {
                    if x + 1 < w {
                        self.spill(cur + x + 1, err, RIGHT);
                        self.spill(next + x + 1, err, FIRST_DOWN_RIGHT);
                    }
                    self.spill(next + x, err, FIRST_DOWN);
                } else if x == w - 1 {
                    self.spill(next + x - 1, err, LAST_DOWN_LEFT);
                    self.spill(next + x, err, LAST_DOWN);
                } else {
                    self.spill(cur + x + 1, err, RIGHT);
                    self.spill(next + x - 1, err, DOWN_LEFT);
                    self.spill(next + x, err, DOWN);
                    self.spill(next + x + 1, err, DOWN_RIGHT);
                }

                emit(x, y, quantized);
            }
            mem::swap(&mut cur, &mut next);
        }
    }

    fn fill_row(&mut self, offset: usize, scene: &Scene, y: usize) {
        for x in 0..self.width {
            self.rows[offset + x] = RgbWide::from(scene.pix_at(x as i32, y as i32));
        }
    }

    /// Adds a weighted error share to one accumulator slot.
    #[inline]
    fn spill(&mut self, index: usize, err: RgbF, weight: f32) {
        self.rows[index] = self.rows[index] + err.unbounded_mul(weight).to_wide();
    }
}

#[cfg(test)]
mod tests {
    use crate::paint::palette::{BLACK, WHITE, YELLOW};

    use super::*;

    fn rendered(scene: &Scene, w: usize, h: usize) -> Vec<(usize, usize, Rgb8)> {
        let mut out = Vec::new();
        DitherRenderer::new(w, h).render(scene, |x, y, c| out.push((x, y, c)));
        out
    }

    // ── weights ───────────────────────────────────────────────────────────

    #[test]
    fn each_branch_hands_on_half_the_error() {
        assert_eq!(RIGHT + FIRST_DOWN + FIRST_DOWN_RIGHT, 0.5);
        assert_eq!(LAST_DOWN_LEFT + LAST_DOWN, 0.5);
        assert_eq!(RIGHT + DOWN_LEFT + DOWN + DOWN_RIGHT, 0.5);
    }

    // ── exact small frames ────────────────────────────────────────────────

    #[test]
    fn uniform_palette_scene_has_no_error_to_diffuse() {
        let mut scene = Scene::new();
        scene.fill(YELLOW);
        for (_, _, c) in rendered(&scene, 4, 3) {
            assert_eq!(c, YELLOW);
        }
    }

    #[test]
    fn solid_red_two_by_two() {
        // Red quantizes to yellow; the diffused green debt flips the
        // final pixel to black.
        let mut scene = Scene::new();
        scene.fill(Rgb8::new(255, 0, 0));
        assert_eq!(
            rendered(&scene, 2, 2),
            vec![
                (0, 0, YELLOW),
                (1, 0, YELLOW),
                (0, 1, YELLOW),
                (1, 1, BLACK),
            ]
        );
    }

    #[test]
    fn emission_is_row_major() {
        let scene = Scene::new();
        let coords: Vec<(usize, usize)> =
            rendered(&scene, 3, 2).into_iter().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn black_line_on_white_survives_quantization() {
        let mut scene = Scene::new();
        scene.fill(WHITE);
        scene.horizontal_line(0, 1, 3, BLACK);
        let out = rendered(&scene, 4, 3);
        for &(x, y, c) in &out {
            let expected = if y == 1 { BLACK } else { WHITE };
            assert_eq!(c, expected, "at ({x},{y})");
        }
    }

    // ── reuse / degenerate sizes ──────────────────────────────────────────

    #[test]
    fn rerendering_the_same_scene_is_deterministic() {
        let mut scene = Scene::new();
        scene.fill(Rgb8::new(90, 140, 60));
        scene.filled_circle(8, 8, 5, Rgb8::new(200, 40, 120));

        let mut renderer = DitherRenderer::new(16, 16);
        let mut first = Vec::new();
        renderer.render(&scene, |x, y, c| first.push((x, y, c)));
        let mut second = Vec::new();
        renderer.render(&scene, |x, y, c| second.push((x, y, c)));
        assert_eq!(first, second);
    }

    #[test]
    fn single_column_frame_does_not_alias_rows() {
        let mut scene = Scene::new();
        scene.fill(Rgb8::new(128, 128, 128));
        let out = rendered(&scene, 1, 4);
        assert_eq!(out.len(), 4);
        // Every pixel lands on some palette color; the guard keeps the
        // rightward share from wrapping into the next row.
        for (_, _, c) in out {
            assert!([BLACK, WHITE, YELLOW].contains(&c));
        }
    }
}
