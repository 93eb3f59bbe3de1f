//! Scene (display list) types.
//!
//! Responsibilities:
//! - store owned drawable elements in insertion order
//! - resolve per-pixel color with painter's-algorithm compositing
//! - keep element-specific helpers isolated per shape file under
//!   `scene::shapes`, including the `Scene` builder methods each adds

mod element;
#[allow(clippy::module_inception)]
mod scene;

pub mod shapes;

pub use element::Element;
pub use scene::Scene;
