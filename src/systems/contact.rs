//! Cross-group vertex vs edge contacts
//!
//! Every vertex of each body in one group is tested against every edge of
//! each body in the other group. Tolerance decides whether a contact is
//! recorded; the approach test (vertex owner moving into the edge normal)
//! separately decides whether the two bodies exchange velocities.

use crate::domain::attributes::Group;
use crate::events::CrossContact;
use crate::geometry::{compute_world_vertices, edge, HEX_VERTEX_COUNT};
use crate::hex_body::{HexBody, Vec2};

/// Edges shorter than this (squared) are treated as a single point
const DEGENERATE_EDGE_LEN2: f64 = 1e-12;

/// Closest-point query of a vertex against an edge segment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactTest {
    pub closest_point: Vec2,
    pub distance: f64,
    pub edge_midpoint: Vec2,
}

/// Project `vertex` onto the segment `start..end`.
///
/// A zero-length edge yields its start point instead of dividing by zero.
pub fn vertex_edge_contact_test(vertex: Vec2, start: Vec2, end: Vec2) -> ContactTest {
    let ab = end - start;
    let len2 = ab.length_squared();
    let t = if len2 > DEGENERATE_EDGE_LEN2 {
        ((vertex - start).dot(ab) / len2).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let closest_point = start + ab * t;

    ContactTest {
        closest_point,
        distance: vertex.distance(closest_point),
        edge_midpoint: start.midpoint(end),
    }
}

/// Direction from the edge owner's center to the edge midpoint.
/// Stands in for the true edge normal on near-regular convex hexagons.
#[inline]
pub fn outward_normal(edge_midpoint: Vec2, owner_center: Vec2) -> Vec2 {
    (edge_midpoint - owner_center).normalize()
}

/// Vertex owner is moving into the edge (not already separating)
#[inline]
pub fn is_approaching(vertex_owner_velocity: Vec2, normal: Vec2) -> bool {
    vertex_owner_velocity.dot(normal) < 0.0
}

/// Exchange the full velocity vectors of two distinct bodies
#[inline]
fn swap_velocities(bodies: &mut [HexBody], a: usize, b: usize) {
    let va = bodies[a].velocity;
    bodies[a].velocity = bodies[b].velocity;
    bodies[b].velocity = va;
}

/// Vertices of `vertex_group` bodies against edges of the opposite group.
///
/// Visits owners in slice order, then edge owners in slice order, then
/// vertex index, then edge index. Velocity swaps take effect immediately,
/// so later pairs in the same pass see the updated velocities.
pub fn detect_cross_contacts(
    bodies: &mut [HexBody],
    vertex_group: Group,
    tolerance: f64,
) -> Vec<CrossContact> {
    let owners: Vec<usize> = indices_of(bodies, vertex_group);
    let edge_owners: Vec<usize> = indices_of(bodies, vertex_group.opposite());
    let mut contacts = Vec::new();

    for &i in &owners {
        for &j in &edge_owners {
            let (a, b) = (&bodies[i], &bodies[j]);
            let vertices = compute_world_vertices(a.pos, a.radius, a.angle);
            let edge_vertices = compute_world_vertices(b.pos, b.radius, b.angle);

            for (vi, &v) in vertices.iter().enumerate() {
                for ei in 0..HEX_VERTEX_COUNT {
                    let (start, end) = edge(&edge_vertices, ei);
                    let test = vertex_edge_contact_test(v, start, end);
                    if test.distance > tolerance {
                        continue;
                    }

                    let normal = outward_normal(test.edge_midpoint, bodies[j].pos);
                    let swapped = is_approaching(bodies[i].velocity, normal);
                    if swapped {
                        swap_velocities(bodies, i, j);
                    }

                    contacts.push(CrossContact {
                        vertex_owner_id: bodies[i].id,
                        vertex_owner_date: bodies[i].date.clone(),
                        edge_owner_id: bodies[j].id,
                        edge_owner_date: bodies[j].date.clone(),
                        vertex_index: vi,
                        edge_index: ei,
                        contact_point: test.closest_point,
                        normal,
                        distance: test.distance,
                        swapped,
                    });
                }
            }
        }
    }

    contacts
}

/// Both directions: AM vertices vs PM edges, then PM vertices vs AM edges
pub fn detect_all_cross_contacts(bodies: &mut [HexBody], tolerance: f64) -> Vec<CrossContact> {
    let mut contacts = detect_cross_contacts(bodies, Group::Am, tolerance);
    contacts.extend(detect_cross_contacts(bodies, Group::Pm, tolerance));
    contacts
}

fn indices_of(bodies: &[HexBody], group: Group) -> Vec<usize> {
    bodies
        .iter()
        .enumerate()
        .filter(|(_, b)| b.group == group)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::config::EngineConfig;

    const TOL: f64 = 2.0;

    fn hex(id: u32, group: Group, center: Vec2, angle: f64, vel: Vec2) -> HexBody {
        let mut b = HexBody::new(
            id,
            center,
            vel,
            group,
            format!("day-{}", id),
            Vec::new(),
            &EngineConfig::default(),
        );
        b.angle = angle;
        b.refresh_vertices();
        b
    }

    /// PM body at the origin and an AM body whose left-pointing vertex 4
    /// sits 1px outside the PM body's right edge (edge 1).
    fn touching_pair(am_vel: Vec2, pm_vel: Vec2) -> Vec<HexBody> {
        let pm = hex(2, Group::Pm, Vec2::zero(), 0.0, pm_vel);
        let edge_x = pm.vertices[1].x;
        let am = hex(1, Group::Am, Vec2::new(edge_x + 1.0 + 50.0, 0.0), PI / 6.0, am_vel);
        vec![am, pm]
    }

    #[test]
    fn vertex_on_edge_has_zero_distance() {
        let t = vertex_edge_contact_test(Vec2::new(10.0, 0.0), Vec2::zero(), Vec2::new(20.0, 0.0));
        assert_eq!(t.closest_point, Vec2::new(10.0, 0.0));
        assert_eq!(t.distance, 0.0);
        assert_eq!(t.edge_midpoint, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn projection_is_clamped_to_the_segment() {
        let t = vertex_edge_contact_test(Vec2::new(-5.0, 3.0), Vec2::zero(), Vec2::new(20.0, 0.0));
        assert_eq!(t.closest_point, Vec2::zero());
        assert!((t.distance - (34.0f64).sqrt()).abs() < 1e-12);

        let t = vertex_edge_contact_test(Vec2::new(30.0, 0.0), Vec2::zero(), Vec2::new(20.0, 0.0));
        assert_eq!(t.closest_point, Vec2::new(20.0, 0.0));
        assert_eq!(t.distance, 10.0);
    }

    #[test]
    fn degenerate_edge_gives_finite_result() {
        let p = Vec2::new(4.0, 4.0);
        let t = vertex_edge_contact_test(Vec2::new(7.0, 8.0), p, p);
        assert_eq!(t.closest_point, p);
        assert_eq!(t.distance, 5.0);
        assert!(t.closest_point.is_finite());
    }

    #[test]
    fn outward_normal_points_away_from_owner() {
        let n = outward_normal(Vec2::new(10.0, 0.0), Vec2::zero());
        assert_eq!(n, Vec2::new(1.0, 0.0));
        assert_eq!(outward_normal(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)), Vec2::zero());
    }

    #[test]
    fn approaching_contact_swaps_full_velocities_and_records_once() {
        let am_vel = Vec2::new(-1.0, 0.5);
        let pm_vel = Vec2::new(0.3, -0.2);
        let mut bodies = touching_pair(am_vel, pm_vel);

        let contacts = detect_all_cross_contacts(&mut bodies, TOL);

        assert_eq!(contacts.len(), 1);
        let c = &contacts[0];
        assert_eq!((c.vertex_owner_id, c.edge_owner_id), (1, 2));
        assert_eq!((c.vertex_index, c.edge_index), (4, 1));
        assert_eq!(c.vertex_owner_date, "day-1");
        assert!((c.distance - 1.0).abs() < 1e-9);
        assert!((c.normal.x - 1.0).abs() < 1e-9 && c.normal.y.abs() < 1e-9);
        assert!(c.swapped);

        assert_eq!(bodies[0].velocity, pm_vel);
        assert_eq!(bodies[1].velocity, am_vel);
    }

    #[test]
    fn separating_contact_is_recorded_without_response() {
        let am_vel = Vec2::new(1.0, 0.0);
        let pm_vel = Vec2::new(-1.0, 0.0);
        let mut bodies = touching_pair(am_vel, pm_vel);

        let contacts = detect_all_cross_contacts(&mut bodies, TOL);

        assert_eq!(contacts.len(), 1);
        assert!(!contacts[0].swapped);
        assert_eq!(bodies[0].velocity, am_vel);
        assert_eq!(bodies[1].velocity, pm_vel);
    }

    #[test]
    fn beyond_tolerance_is_ignored() {
        let mut bodies = touching_pair(Vec2::new(-1.0, 0.0), Vec2::zero());
        assert!(detect_all_cross_contacts(&mut bodies, 0.5).is_empty());
    }

    #[test]
    fn same_group_bodies_never_interact() {
        let mut bodies = touching_pair(Vec2::new(-1.0, 0.0), Vec2::zero());
        bodies[1].group = Group::Am;
        assert!(detect_all_cross_contacts(&mut bodies, TOL).is_empty());
    }

    #[test]
    fn direction_is_selected_by_vertex_group() {
        let mut bodies = touching_pair(Vec2::new(-1.0, 0.0), Vec2::zero());
        assert_eq!(detect_cross_contacts(&mut bodies, Group::Am, TOL).len(), 1);
        assert!(detect_cross_contacts(&mut bodies, Group::Pm, TOL).is_empty());
    }

    #[test]
    fn corner_contacts_compound_in_vertex_then_edge_order() {
        // AM vertex 0 sits 0.5px below PM vertex 3, so it is within tolerance
        // of PM edges 2 and 3, and PM vertex 3 of AM edges 0 and 5.
        let pm = hex(2, Group::Pm, Vec2::new(400.0, 200.0), 0.0, Vec2::new(0.0, 1.0));
        let tip_y = pm.vertices[3].y;
        let am = hex(1, Group::Am, Vec2::new(400.0, tip_y + 50.5), 0.0, Vec2::new(0.0, -1.0));
        let mut bodies = vec![am, pm];

        let contacts = detect_all_cross_contacts(&mut bodies, TOL);

        let order: Vec<_> = contacts
            .iter()
            .map(|c| (c.vertex_owner_id, c.vertex_index, c.edge_index, c.swapped))
            .collect();
        // Only the first pair swaps; the second already sees the AM body
        // moving away and would otherwise swap the velocities back.
        assert_eq!(
            order,
            vec![(1, 0, 2, true), (1, 0, 3, false), (2, 3, 0, false), (2, 3, 5, false)]
        );
        assert_eq!(bodies[0].velocity, Vec2::new(0.0, 1.0));
        assert_eq!(bodies[1].velocity, Vec2::new(0.0, -1.0));
    }
}
