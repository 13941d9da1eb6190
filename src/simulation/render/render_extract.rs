use serde::Serialize;

use crate::domain::color::attribute_color;
use crate::geometry::HEX_VERTEX_COUNT;

use super::WorldCore;

/// center (x, y) followed by six vertices (x, y)
pub const VERTEX_FLOATS_PER_BODY: usize = 2 + HEX_VERTEX_COUNT * 2;
/// one HSB triple per triangle
pub const COLOR_FLOATS_PER_BODY: usize = HEX_VERTEX_COUNT * 3;

/// Fill the flat render buffers, bodies in arena order.
/// Triangle `i` of a body is (center, vertex i, vertex i+1) with colour `i`.
pub(super) fn extract_render(world: &mut WorldCore) -> usize {
    let count = world.bodies.len();
    let vertices = &mut world.render.vertices;
    let colors = &mut world.render.colors;
    vertices.clear();
    colors.clear();
    vertices.reserve(count * VERTEX_FLOATS_PER_BODY);
    colors.reserve(count * COLOR_FLOATS_PER_BODY);

    for body in world.bodies.iter() {
        vertices.push(body.pos.x as f32);
        vertices.push(body.pos.y as f32);
        for v in body.vertices.iter() {
            vertices.push(v.x as f32);
            vertices.push(v.y as f32);
        }

        for i in 0..HEX_VERTEX_COUNT {
            // Bodies built outside import may carry fewer attributes; draw those grey.
            let hsb = body.attributes.get(i).map(attribute_color).unwrap_or([0.0, 0.0, 80.0]);
            colors.extend_from_slice(&hsb);
        }
    }

    count
}

/// Per-body state for debugging overlays
#[derive(Clone, Debug, Serialize)]
pub struct BodySnapshot {
    pub id: u32,
    pub group: &'static str,
    pub date: String,
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub vx: f64,
    pub vy: f64,
    pub omega: f64,
}

pub(super) fn snapshot(world: &WorldCore) -> Vec<BodySnapshot> {
    world
        .bodies
        .iter()
        .map(|b| BodySnapshot {
            id: b.id,
            group: b.group.as_str(),
            date: b.date.clone(),
            x: b.pos.x,
            y: b.pos.y,
            angle: b.angle,
            vx: b.velocity.x,
            vy: b.velocity.y,
            omega: b.angular_vel,
        })
        .collect()
}
