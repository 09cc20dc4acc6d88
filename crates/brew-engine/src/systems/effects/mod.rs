//! Line effects: guide paths and outlines built into a triangle buffer.
//!
//! Games push [`GuideLine`]s during `update`; the runner rebuilds the
//! vertex buffer once per frame. Lines are transient and cleared each frame.

mod rng;
mod line_color;
mod geometry;
mod line;

pub use rng::Rng;
pub use line_color::LineColor;
pub use geometry::{build_strip_vertices, strip_to_triangles, FLOATS_PER_VERTEX};
pub use line::GuideLine;

/// Container for all line effects drawn this frame.
pub struct EffectsState {
    pub lines: Vec<GuideLine>,
    pub effects_buffer: Vec<f32>,
}

impl EffectsState {
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Create an EffectsState with a pre-allocated vertex capacity.
    pub fn with_capacity(max_vertices: usize) -> Self {
        EffectsState {
            lines: Vec::new(),
            effects_buffer: Vec::with_capacity(max_vertices * FLOATS_PER_VERTEX),
        }
    }

    /// Add a polyline.
    pub fn add_line(&mut self, points: Vec<glam::Vec2>, width: f32, color: LineColor) {
        self.lines.push(GuideLine::new(points, width, color));
    }

    /// Rebuild the effects vertex buffer (triangle list, 5 floats per vertex).
    pub fn rebuild_effects_buffer(&mut self) {
        self.effects_buffer.clear();
        for line in &self.lines {
            self.effects_buffer.extend_from_slice(&line.to_triangles());
        }
    }

    /// Cut the vertex buffer to at most `max` vertices, on a triangle boundary.
    /// Returns how many vertices were dropped.
    pub fn truncate_vertices(&mut self, max: usize) -> usize {
        let count = self.effects_vertex_count();
        if count <= max {
            return 0;
        }
        let keep = max - max % 3;
        self.effects_buffer.truncate(keep * FLOATS_PER_VERTEX);
        count - keep
    }

    /// Drop all lines and vertices.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.effects_buffer.clear();
    }

    pub fn effects_vertex_count(&self) -> usize {
        self.effects_buffer.len() / FLOATS_PER_VERTEX
    }

    pub fn effects_buffer_ptr(&self) -> *const f32 {
        self.effects_buffer.as_ptr()
    }
}

impl Default for EffectsState {
    fn default() -> Self {
        Self::new()
    }
}
