//! Triangle mesh generation for guide lines.

use glam::Vec2;

use super::line_color::LineColor;

/// Floats per effects vertex: x, y, palette, u, v.
pub const FLOATS_PER_VERTEX: usize = 5;

/// Generate triangle strip vertices from a polyline.
/// Output: `[x, y, palette, u, v]` per vertex, two vertices per point plus
/// square caps at both ends.
pub fn build_strip_vertices(points: &[Vec2], half_width: f32, color: LineColor) -> Vec<f32> {
    if points.len() < 2 {
        return Vec::new();
    }

    let n = points.len();
    let mut verts = Vec::with_capacity((n + 2) * 2 * FLOATS_PER_VERTEX);
    let z = color.index();

    let push_pair = |verts: &mut Vec<f32>, center: Vec2, perp: Vec2, v: f32| {
        let left = center + perp * half_width;
        let right = center - perp * half_width;
        verts.extend_from_slice(&[left.x, left.y, z, 0.0, v]);
        verts.extend_from_slice(&[right.x, right.y, z, 1.0, v]);
    };

    let dir = |a: Vec2, b: Vec2| (b - a).normalize_or(Vec2::X);

    let d0 = dir(points[0], points[1]);
    push_pair(&mut verts, points[0] - d0 * half_width, d0.perp(), 0.0);
    push_pair(&mut verts, points[0], d0.perp(), 1.0);

    // Interior joints use the averaged normal of both neighbouring segments.
    for i in 1..n - 1 {
        let p_prev = dir(points[i - 1], points[i]).perp();
        let p_next = dir(points[i], points[i + 1]).perp();
        let perp = (p_prev + p_next).normalize_or(p_next);
        push_pair(&mut verts, points[i], perp, 1.0);
    }

    let d_last = dir(points[n - 2], points[n - 1]);
    push_pair(&mut verts, points[n - 1], d_last.perp(), 1.0);
    push_pair(&mut verts, points[n - 1] + d_last * half_width, d_last.perp(), 0.0);

    verts
}

/// Convert triangle strip vertices to a triangle list (for WebGPU compatibility).
pub fn strip_to_triangles(strip_verts: &[f32], floats_per_vert: usize) -> Vec<f32> {
    let num_verts = strip_verts.len() / floats_per_vert;
    if num_verts < 3 {
        return Vec::new();
    }
    let num_tris = num_verts - 2;
    let mut out = Vec::with_capacity(num_tris * 3 * floats_per_vert);
    for i in 0..num_tris {
        // Alternate winding so every triangle faces the same way.
        let order = if i % 2 == 0 { [i, i + 1, i + 2] } else { [i + 1, i, i + 2] };
        for v in order {
            let base = v * floats_per_vert;
            out.extend_from_slice(&strip_verts[base..base + floats_per_vert]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_vertices_for_simple_line() {
        let points = [Vec2::ZERO, Vec2::new(100.0, 0.0)];
        let verts = build_strip_vertices(&points, 2.0, LineColor::Guide);
        // 2 points + 2 caps = 4 vertex pairs
        assert_eq!(verts.len(), 8 * FLOATS_PER_VERTEX);
    }

    #[test]
    fn strip_offsets_are_perpendicular() {
        let points = [Vec2::ZERO, Vec2::new(100.0, 0.0)];
        let verts = build_strip_vertices(&points, 2.0, LineColor::Traced);
        // Pair for the first real point starts at vertex 2.
        let base = 2 * FLOATS_PER_VERTEX;
        assert_eq!(verts[base], 0.0);
        assert_eq!(verts[base + 1].abs(), 2.0);
        assert_eq!(verts[base + 2], LineColor::Traced.index());
    }

    #[test]
    fn strip_to_triangles_correct_count() {
        let strip = vec![0.0; 6 * FLOATS_PER_VERTEX];
        let tris = strip_to_triangles(&strip, FLOATS_PER_VERTEX);
        assert_eq!(tris.len() / FLOATS_PER_VERTEX, 12);
    }

    #[test]
    fn degenerate_polylines_return_empty() {
        assert!(build_strip_vertices(&[], 2.0, LineColor::Guide).is_empty());
        assert!(build_strip_vertices(&[Vec2::ONE], 2.0, LineColor::Guide).is_empty());
    }
}
