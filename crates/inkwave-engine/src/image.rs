//! External image sources for the scene.
//!
//! Decoding stays outside the engine; callers implement [`ImageSource`]
//! over whatever pixel storage they have and the scene samples it once
//! into a texture on append.

use crate::coords::Point;
use crate::paint::Rgb8;
use crate::scene::Scene;

/// Pixel access contract for placing an image in a scene.
pub trait ImageSource {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    /// Color at `(x, y)`. Binary sources map set pixels to `on` and
    /// clear ones to `off`; full-color sources may ignore both.
    fn pixel(&self, x: i32, y: i32, on: Rgb8, off: Rgb8) -> Rgb8;
}

/// Which point of the image the anchor coordinates refer to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ImageAlign {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ImageAlign {
    fn x_offset(self, width: i32) -> i32 {
        use ImageAlign::*;
        match self {
            TopLeft | CenterLeft | BottomLeft => 0,
            TopCenter | Center | BottomCenter => width / 2,
            TopRight | CenterRight | BottomRight => width,
        }
    }

    fn y_offset(self, height: i32) -> i32 {
        use ImageAlign::*;
        match self {
            TopLeft | TopCenter | TopRight => 0,
            CenterLeft | Center | CenterRight => height / 2,
            BottomLeft | BottomCenter | BottomRight => height,
        }
    }
}

impl Scene {
    /// Places `source` anchored at `(x, y)` per `align`.
    ///
    /// The scene takes ownership and queries pixels lazily through a
    /// [`TextureFn`](crate::scene::shapes::TextureFn); nothing is
    /// materialized up front.
    pub fn image(
        &mut self,
        x: i32,
        y: i32,
        source: impl ImageSource + 'static,
        align: ImageAlign,
        on: Rgb8,
        off: Rgb8,
    ) {
        let pos = Point::new(
            x - align.x_offset(source.width()),
            y - align.y_offset(source.height()),
        );
        let size = Point::new(source.width(), source.height());
        self.texture_fn(pos, size, move |px, py| source.pixel(px, py, on, off));
    }
}
