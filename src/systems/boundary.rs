//! Vertex vs canvas-rectangle collisions

use crate::events::{BoundaryContact, CanvasEdge};
use crate::geometry::compute_world_vertices;
use crate::hex_body::HexBody;

/// Test every world vertex against the canvas and respond.
///
/// Vertices come from the pose at call time. Each penetrating vertex applies
/// its own response in order (x side, then y side): the velocity component
/// is negated (times `left_wall_gain` on the left wall) and the center is
/// clamped back inside by one radius. Two vertices past the same wall flip
/// that component twice. A corner vertex can yield an x-side and a y-side
/// record.
pub fn check_boundary_collisions(
    body: &mut HexBody,
    width: f64,
    height: f64,
    left_wall_gain: f64,
) -> Vec<BoundaryContact> {
    let vertices = compute_world_vertices(body.pos, body.radius, body.angle);
    let r = body.radius;
    let mut contacts = Vec::new();

    for (i, v) in vertices.iter().enumerate() {
        let x_side = if v.x < 0.0 {
            body.velocity.x *= -left_wall_gain;
            body.pos.x = body.pos.x.max(r);
            Some(CanvasEdge::Left)
        } else if v.x > width {
            body.velocity.x = -body.velocity.x;
            body.pos.x = body.pos.x.min(width - r);
            Some(CanvasEdge::Right)
        } else {
            None
        };
        let y_side = if v.y < 0.0 {
            body.velocity.y = -body.velocity.y;
            body.pos.y = body.pos.y.max(r);
            Some(CanvasEdge::Top)
        } else if v.y > height {
            body.velocity.y = -body.velocity.y;
            body.pos.y = body.pos.y.min(height - r);
            Some(CanvasEdge::Bottom)
        } else {
            None
        };

        for edge in [x_side, y_side].into_iter().flatten() {
            contacts.push(BoundaryContact {
                body_id: body.id,
                vertex_index: i,
                edge,
                position: *v,
            });
        }
    }

    if !contacts.is_empty() {
        body.refresh_vertices();
    }
    contacts
}
