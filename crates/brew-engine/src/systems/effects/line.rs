//! Polylines drawn through the effects buffer (guides, outlines).

use glam::Vec2;

use super::geometry::{build_strip_vertices, strip_to_triangles, FLOATS_PER_VERTEX};
use super::line_color::LineColor;

/// A polyline with a fixed width and palette color.
#[derive(Debug, Clone)]
pub struct GuideLine {
    pub points: Vec<Vec2>,
    pub width: f32,
    pub color: LineColor,
}

impl GuideLine {
    pub fn new(points: Vec<Vec2>, width: f32, color: LineColor) -> Self {
        Self { points, width, color }
    }

    /// Triangle-list vertices for this line. Width is the full stroke width.
    pub fn to_triangles(&self) -> Vec<f32> {
        let strip = build_strip_vertices(&self.points, self.width * 0.5, self.color);
        strip_to_triangles(&strip, FLOATS_PER_VERTEX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_point_line_triangulates() {
        let line = GuideLine::new(
            vec![Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)],
            4.0,
            LineColor::Guide,
        );
        // 5 vertex pairs -> 10 strip verts -> 8 triangles
        assert_eq!(line.to_triangles().len(), 8 * 3 * FLOATS_PER_VERTEX);
    }
}
