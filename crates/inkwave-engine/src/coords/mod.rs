//! Integer raster geometry.
//!
//! Responsibilities:
//! - whole-pixel points and corner-based rectangles
//! - containment tests used by element hit-testing
//! - cached-bounding-box triangles and ternary circle containment
//!
//! All coordinates are in device pixels with a top-left origin.

mod circle;
mod point;
mod rect;
mod triangle;

pub use circle::{Circle, Containment};
pub use point::Point;
pub use rect::Rect;
pub use triangle::Triangle;
