use crate::coords::{Point, Rect};
use crate::paint::Rgb8;
use crate::scene::{Element, Scene};

/// Open polyline hit-tested by triangle-inequality slack.
///
/// A pixel is on a segment when its distance to both endpoints exceeds
/// the segment length by less than 0.01. Degenerate lists (< 2
/// vertices) never match.
#[derive(Debug)]
pub struct LineShape {
    vertices: Vec<Point>,
    color: Rgb8,
    bb: Rect,
}

impl LineShape {
    pub fn new(color: Rgb8, vertices: Vec<Point>) -> Self {
        let bb = hull(&vertices);
        Self { vertices, color, bb }
    }

    #[inline]
    pub fn bounding_box(&self) -> Rect {
        self.bb
    }

    pub fn pix_at(&self, x: i32, y: i32) -> Option<Rgb8> {
        if self.vertices.len() < 2 {
            return None;
        }
        let p = Point::new(x, y);
        if !self.bb.has(p) {
            return None;
        }
        let mut prev = self.vertices[0];
        let mut prev_dist = (prev - p).len();
        for &cur in &self.vertices[1..] {
            let seg_len = (prev - cur).len();
            let cur_dist = (cur - p).len();
            if prev_dist + cur_dist - seg_len < 0.01 {
                return Some(self.color);
            }
            prev_dist = cur_dist;
            prev = cur;
        }
        None
    }
}

/// Componentwise min/max corners; empty input yields the empty rect.
fn hull(vertices: &[Point]) -> Rect {
    let Some(&first) = vertices.first() else {
        return Rect::default();
    };
    vertices[1..].iter().fold(Rect::new(first, first), |r, p| {
        Rect::new(
            Point::new(r.tl.x.min(p.x), r.tl.y.min(p.y)),
            Point::new(r.br.x.max(p.x), r.br.y.max(p.y)),
        )
    })
}

impl Scene {
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb8) {
        self.polyline(vec![Point::new(x1, y1), Point::new(x2, y2)], color);
    }

    pub fn horizontal_line(&mut self, x: i32, y: i32, width: i32, color: Rgb8) {
        self.line(x, y, x + width, y, color);
    }

    pub fn vertical_line(&mut self, x: i32, y: i32, height: i32, color: Rgb8) {
        self.line(x, y, x, y + height, color);
    }

    /// Appends an open polyline through `vertices` in order.
    pub fn polyline(&mut self, vertices: Vec<Point>, color: Rgb8) {
        self.push(Element::Line(LineShape::new(color, vertices)));
    }

    /// Line from `(x, y)` at `angle_degrees` (clockwise from the x
    /// axis) out to `length`.
    pub fn line_at_angle(&mut self, x: i32, y: i32, angle_degrees: f32, length: i32, color: Rgb8) {
        self.line_at_angle_between(x, y, angle_degrees, 0, length, color);
    }

    /// Line along `angle_degrees` covering radii `start_radius` to
    /// `stop_radius` from `(x, y)`. Endpoint coordinates truncate.
    pub fn line_at_angle_between(
        &mut self,
        x: i32,
        y: i32,
        angle_degrees: f32,
        start_radius: i32,
        stop_radius: i32,
        color: Rgb8,
    ) {
        let rad = angle_degrees.to_radians();
        let x1 = (start_radius as f32 * rad.cos()) as i32 + x;
        let y1 = (start_radius as f32 * rad.sin()) as i32 + y;
        let x2 = (stop_radius as f32 * rad.cos()) as i32 + x;
        let y2 = (stop_radius as f32 * rad.sin()) as i32 + y;
        self.line(x1, y1, x2, y2, color);
    }
}
