//! Shape tessellation for 2D primitives
//!
//! Every shape appends into the frame's shared vertex stream; with thousands
//! of balls per frame, one growing buffer beats per-shape allocations.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Triangle count for one tessellated ball
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Append vertices for a filled circle as a triangle fan
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    out.reserve((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        out.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }
}

/// Append two triangles covering an axis-aligned rectangle
pub fn rect(out: &mut Vec<Vertex>, min: Vec2, max: Vec2, color: [f32; 4]) {
    out.push(Vertex::new(min.x, min.y, color));
    out.push(Vertex::new(min.x, max.y, color));
    out.push(Vertex::new(max.x, min.y, color));

    out.push(Vertex::new(max.x, min.y, color));
    out.push(Vertex::new(min.x, max.y, color));
    out.push(Vertex::new(max.x, max.y, color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertex_count() {
        let mut out = Vec::new();
        circle(&mut out, Vec2::new(10.0, 10.0), 5.0, [1.0; 4], 24);
        assert_eq!(out.len(), 24 * 3);
    }

    #[test]
    fn test_circle_stays_on_rim() {
        let center = Vec2::new(100.0, 50.0);
        let mut out = Vec::new();
        circle(&mut out, center, 8.0, [1.0; 4], 16);

        for v in &out {
            let d = (Vec2::from(v.position) - center).length();
            assert!(d <= 8.0 + 1e-4);
        }
    }

    #[test]
    fn test_rect_covers_corners() {
        let mut out = Vec::new();
        rect(&mut out, Vec2::new(1.0, 2.0), Vec2::new(3.0, 5.0), [1.0; 4]);
        assert_eq!(out.len(), 6);
        assert!(out.iter().any(|v| v.position == [1.0, 2.0]));
        assert!(out.iter().any(|v| v.position == [3.0, 5.0]));
    }
}
