//! Hexagon geometry: world vertices and edges from center/radius/angle

use std::f64::consts::PI;

use crate::hex_body::Vec2;

pub const HEX_VERTEX_COUNT: usize = 6;

/// Local angle of vertex 0 (straight up on a y-down canvas)
const FIRST_VERTEX_ANGLE: f64 = -PI / 2.0;
const VERTEX_STEP: f64 = PI / 3.0;

/// Six world-space vertices, starting at the top and stepping +60° per index,
/// all offset by `angle`.
///
/// Pure function of its inputs; callers recompute instead of caching.
#[inline]
pub fn compute_world_vertices(center: Vec2, radius: f64, angle: f64) -> [Vec2; HEX_VERTEX_COUNT] {
    let mut out = [Vec2::zero(); HEX_VERTEX_COUNT];
    for (i, v) in out.iter_mut().enumerate() {
        let a = FIRST_VERTEX_ANGLE + VERTEX_STEP * i as f64 + angle;
        *v = center + Vec2::from_angle(a) * radius;
    }
    out
}

/// Edge `i` runs from vertex `i` to vertex `i + 1`, wrapping at the end
#[inline]
pub fn edge(vertices: &[Vec2; HEX_VERTEX_COUNT], i: usize) -> (Vec2, Vec2) {
    (vertices[i], vertices[(i + 1) % HEX_VERTEX_COUNT])
}
