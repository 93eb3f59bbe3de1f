use crate::paint::Rgb8;
use crate::paint::palette;

use super::Element;

/// Ordered collection of drawable elements plus a background color.
///
/// The scene is a display list: nothing is rasterized on append, and
/// [`pix_at`](Self::pix_at) re-evaluates the stack per query. Later
/// elements win over earlier ones at the same pixel (painter's
/// algorithm), realized by probing newest-first.
///
/// Lifecycle: build with the shape helpers (or [`push`](Self::push)),
/// render any number of times, [`clear`](Self::clear) wholesale. The
/// scene must not be mutated while a render is walking it; this is a
/// single-threaded discipline, not a locked one.
#[derive(Debug)]
pub struct Scene {
    pub(super) elements: Vec<Element>,
    background: Rgb8,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            background: palette::BLACK,
        }
    }

    /// Sets the background color returned where no element hits.
    #[inline]
    pub fn fill(&mut self, background: Rgb8) {
        self.background = background;
    }

    #[inline]
    pub fn background(&self) -> Rgb8 {
        self.background
    }

    /// Appends an element on top of everything drawn so far.
    #[inline]
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Removes every element; the background is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Resolves the final color at `(x, y)`.
    ///
    /// Probes elements newest to oldest and returns the first
    /// non-transparent hit, falling back to the background.
    pub fn pix_at(&self, x: i32, y: i32) -> Rgb8 {
        self.elements
            .iter()
            .rev()
            .find_map(|el| el.pix_at(x, y))
            .unwrap_or(self.background)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
