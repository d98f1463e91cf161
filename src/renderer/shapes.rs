//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};
use crate::polar_to_cartesian;
use crate::sim::Frame;

/// Segments used for the ball disc
pub const BALL_SEGMENTS: u32 = 32;
/// Hexagon outline thickness (pixels)
pub const OUTLINE_WIDTH: f32 = 2.0;

/// Generate vertices for a filled circle as a triangle fan
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let step = TAU / segments as f32;
    let rim: Vec<Vec2> = (0..=segments)
        .map(|i| center + polar_to_cartesian(radius, step * i as f32))
        .collect();

    rim.windows(2)
        .flat_map(|pair| [center, pair[0], pair[1]])
        .map(|p| Vertex::new(p.x, p.y, color))
        .collect()
}

/// Generate vertices for a closed polygon outline
///
/// Each edge becomes a quad of `width` centered on the edge line. Corners
/// are left unmitred; at 2px the gaps are invisible.
pub fn polygon_outline(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let half = width * 0.5;
    let mut vertices = Vec::with_capacity(points.len() * 6);

    for (i, &p1) in points.iter().enumerate() {
        let p2 = points[(i + 1) % points.len()];
        let perp = (p2 - p1).normalize_or_zero().perp() * half;

        let v1a = p1 + perp;
        let v1b = p1 - perp;
        let v2a = p2 + perp;
        let v2b = p2 - perp;

        // Two triangles
        vertices.push(Vertex::new(v1a.x, v1a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2a.x, v2a.y, color));

        vertices.push(Vertex::new(v2a.x, v2a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2b.x, v2b.y, color));
    }

    vertices
}

/// Hexagon outline followed by the ball, in draw order
pub fn frame_vertices(frame: &Frame) -> Vec<Vertex> {
    let mut vertices = polygon_outline(&frame.vertices, OUTLINE_WIDTH, colors::HEXAGON);
    vertices.extend(circle(
        frame.ball_pos,
        frame.ball_radius,
        colors::BALL,
        BALL_SEGMENTS,
    ));
    vertices
}
