//! Frame orchestration: cross contacts first, then per-body motion and walls

use crate::boundary::check_boundary_collisions;
use crate::config::EngineConfig;
use crate::contact::detect_all_cross_contacts;
use crate::events::ContactSink;
use crate::hex_body::HexBody;
use crate::motion::integrate;

/// Phase boundaries reported by [`run_frame_with`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FramePhase {
    CrossContacts,
    Motion,
}

/// Counters for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameSummary {
    pub cross_contacts: u32,
    pub velocity_swaps: u32,
    pub boundary_contacts: u32,
}

/// Clamp the host's frame time scale into something safe to integrate with.
/// NaN, infinities and non-positive values become 0 (bodies hold still).
pub fn sanitize_dt(dt: f64, max_dt: f64) -> f64 {
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("ignoring invalid frame dt {}", dt);
        return 0.0;
    }
    dt.min(max_dt)
}

/// Phase (a): AM->PM then PM->AM vertex/edge contacts
pub fn resolve_cross_contacts<S: ContactSink + ?Sized>(
    bodies: &mut [HexBody],
    config: &EngineConfig,
    frame: u64,
    sink: &mut S,
) -> FrameSummary {
    let contacts = detect_all_cross_contacts(bodies, config.tolerance);
    let mut summary = FrameSummary::default();
    for contact in &contacts {
        summary.cross_contacts += 1;
        if contact.swapped {
            summary.velocity_swaps += 1;
        }
        sink.cross_contact(contact, frame);
    }
    summary
}

/// Phase (b): integrate and wall-test every body exactly once
pub fn advance_bodies<S: ContactSink + ?Sized>(
    bodies: &mut [HexBody],
    width: f64,
    height: f64,
    dt: f64,
    config: &EngineConfig,
    frame: u64,
    sink: &mut S,
) -> u32 {
    let mut hits = 0u32;
    for body in bodies.iter_mut() {
        integrate(body, dt, config);
        let contacts = check_boundary_collisions(body, width, height, config.left_wall_gain);
        for contact in &contacts {
            sink.boundary_contact(contact, body, frame);
        }
        hits += contacts.len() as u32;
    }
    hits
}

/// One full frame. `dt` is sanitised here.
pub fn run_frame<S: ContactSink + ?Sized>(
    bodies: &mut [HexBody],
    width: f64,
    height: f64,
    dt: f64,
    config: &EngineConfig,
    frame: u64,
    sink: &mut S,
) -> FrameSummary {
    run_frame_with(bodies, width, height, dt, config, frame, sink, |_| {})
}

/// [`run_frame`] with `on_phase` called as each phase finishes
#[allow(clippy::too_many_arguments)]
pub fn run_frame_with<S, F>(
    bodies: &mut [HexBody],
    width: f64,
    height: f64,
    dt: f64,
    config: &EngineConfig,
    frame: u64,
    sink: &mut S,
    mut on_phase: F,
) -> FrameSummary
where
    S: ContactSink + ?Sized,
    F: FnMut(FramePhase),
{
    let dt = sanitize_dt(dt, config.max_dt);
    let mut summary = resolve_cross_contacts(bodies, config, frame, sink);
    on_phase(FramePhase::CrossContacts);
    summary.boundary_contacts = advance_bodies(bodies, width, height, dt, config, frame, sink);
    on_phase(FramePhase::Motion);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::attributes::Group;
    use crate::events::{CanvasEdge, RecordingSink};
    use crate::hex_body::Vec2;

    fn hex(id: u32, group: Group, x: f64, y: f64, vx: f64, vy: f64) -> HexBody {
        HexBody::new(
            id,
            Vec2::new(x, y),
            Vec2::new(vx, vy),
            group,
            String::new(),
            Vec::new(),
            &EngineConfig::default(),
        )
    }

    #[test]
    fn dt_is_sanitised() {
        assert_eq!(sanitize_dt(f64::NAN, 4.0), 0.0);
        assert_eq!(sanitize_dt(-1.0, 4.0), 0.0);
        assert_eq!(sanitize_dt(f64::INFINITY, 4.0), 0.0);
        assert_eq!(sanitize_dt(10.0, 4.0), 4.0);
        assert_eq!(sanitize_dt(0.5, 4.0), 0.5);
    }

    #[test]
    fn every_body_moves_once_per_frame() {
        let cfg = EngineConfig { friction: 1.0, angular_friction: 1.0, ..Default::default() };
        let mut bodies = vec![
            hex(1, Group::Am, 200.0, 200.0, 1.0, 0.0),
            hex(2, Group::Pm, 500.0, 400.0, 0.0, -2.0),
        ];
        let mut sink = RecordingSink::default();
        let summary = run_frame(&mut bodies, 800.0, 600.0, 1.0, &cfg, 0, &mut sink);

        assert_eq!(summary, FrameSummary::default());
        assert_eq!(bodies[0].pos, Vec2::new(201.0, 200.0));
        assert_eq!(bodies[1].pos, Vec2::new(500.0, 398.0));
    }

    #[test]
    fn wall_hits_reach_the_sink() {
        let cfg = EngineConfig::default();
        let mut bodies = vec![hex(1, Group::Am, 400.0, 52.0, 0.0, -5.0)];
        let mut sink = RecordingSink::default();
        let summary = run_frame(&mut bodies, 800.0, 600.0, 1.0, &cfg, 7, &mut sink);

        assert_eq!(summary.boundary_contacts as usize, sink.boundary.len());
        assert!(sink.boundary.iter().any(|c| c.edge == CanvasEdge::Top));
        assert!(bodies[0].velocity.y > 0.0);
        assert!(bodies[0].pos.y >= bodies[0].radius);
    }

    #[test]
    fn phases_are_reported_in_order() {
        let cfg = EngineConfig::default();
        let mut bodies = vec![hex(1, Group::Am, 200.0, 200.0, 1.0, 0.0)];
        let mut sink = RecordingSink::default();
        let mut phases = Vec::new();
        run_frame_with(&mut bodies, 800.0, 600.0, 1.0, &cfg, 0, &mut sink, |p| phases.push(p));
        assert_eq!(phases, vec![FramePhase::CrossContacts, FramePhase::Motion]);
    }

    #[test]
    fn cross_contacts_run_before_motion() {
        // Vertex 0 of the AM body (pointing up) touches the bottom edge of the PM body.
        let cfg = EngineConfig { friction: 1.0, angular_friction: 1.0, ..Default::default() };
        let pm = hex(2, Group::Pm, 400.0, 200.0, 0.0, 1.0);
        let bottom_y = pm.vertices[3].y;
        let am = hex(1, Group::Am, 400.0, bottom_y + 50.5, 0.0, -1.0);
        let mut bodies = vec![am, pm];
        let mut sink = RecordingSink::default();

        let summary = run_frame(&mut bodies, 800.0, 600.0, 1.0, &cfg, 0, &mut sink);

        assert_eq!(summary.cross_contacts, 4);
        assert_eq!(summary.velocity_swaps, 1);
        assert_eq!(sink.cross.len(), 4);
        // After the swap the AM body moves down, away from the PM body.
        assert!(bodies[0].velocity.y > 0.0);
    }
}
