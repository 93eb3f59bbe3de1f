use core::f32::consts::PI;

use crate::coords::Point;
use crate::paint::Rgb8;
use crate::scene::Scene;

use super::DrawStyle;

/// Orientation of a regular polygon's first vertex.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PolygonVariation {
    /// First vertex at the top center.
    PointyTop,
    /// First edge horizontal across the top.
    FlatTop,
}

/// Position of vertex `vertex_id` of a regular polygon.
///
/// Angles run clockwise from the x axis; the shape is pre-rotated 270°
/// so `rotation_degrees == 0` puts the reference vertex at the top. The
/// flat-top variation backs the first vertex off by π/edges so the
/// first edge lies horizontal. Coordinates round to nearest.
pub fn regular_polygon_vertex(
    vertex_id: i32,
    center: Point,
    radius: i32,
    edges: i32,
    variation: PolygonVariation,
    rotation_degrees: f32,
) -> Point {
    debug_assert!(edges >= 2);
    let mut rotation = (rotation_degrees + 270.0).to_radians();
    if variation == PolygonVariation::FlatTop {
        rotation -= PI / edges as f32;
    }
    let angle = vertex_id as f32 / edges as f32 * 2.0 * PI + rotation;
    Point::new(
        (angle.cos() * radius as f32).round() as i32 + center.x,
        (angle.sin() * radius as f32).round() as i32 + center.y,
    )
}

impl Scene {
    /// Regular polygon: a closed polyline outline, or a triangle fan
    /// from the center when filled. Fewer than two edges draws nothing.
    #[allow(clippy::too_many_arguments)]
    pub fn regular_polygon(
        &mut self,
        x: i32,
        y: i32,
        radius: i32,
        edges: i32,
        variation: PolygonVariation,
        rotation_degrees: f32,
        color: Rgb8,
        style: DrawStyle,
    ) {
        if edges < 2 {
            return;
        }
        let center = Point::new(x, y);
        let mut vertices = Vec::with_capacity(edges as usize + 1);
        let mut prev = Point::zero();
        for vertex_id in 0..=edges {
            let cur =
                regular_polygon_vertex(vertex_id, center, radius, edges, variation, rotation_degrees);
            vertices.push(cur);
            if vertex_id != 0 && style == DrawStyle::Filled {
                self.filled_triangle(x, y, prev.x, prev.y, cur.x, cur.y, color);
            }
            prev = cur;
        }
        if style == DrawStyle::Outline {
            self.polyline(vertices, color);
        }
    }

    pub fn filled_regular_polygon(
        &mut self,
        x: i32,
        y: i32,
        radius: i32,
        edges: i32,
        variation: PolygonVariation,
        rotation_degrees: f32,
        color: Rgb8,
    ) {
        self.regular_polygon(
            x,
            y,
            radius,
            edges,
            variation,
            rotation_degrees,
            color,
            DrawStyle::Filled,
        );
    }
}
