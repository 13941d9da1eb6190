use crate::frame::{run_frame_with, FramePhase};

use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore, width: f64, height: f64, dt: f64) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.body_count = world.bodies.len() as u32;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Cross-body contacts first, so responses act on this frame's positions,
    // then motion and walls for every body.
    let mut phase_start = step_start;
    let mut contacts_ms = 0.0;
    let mut motion_ms = 0.0;
    let summary = run_frame_with(
        world.bodies.as_mut_slice(),
        width,
        height,
        dt,
        &world.config,
        world.frame,
        &mut world.log,
        |phase| {
            if let Some(t) = phase_start.as_mut() {
                match phase {
                    FramePhase::CrossContacts => contacts_ms = t.elapsed_ms(),
                    FramePhase::Motion => motion_ms = t.elapsed_ms(),
                }
                *t = PerfTimer::start();
            }
        },
    );

    world.frame += 1;

    if let Some(t) = step_start {
        world.perf_stats.contacts_ms = contacts_ms;
        world.perf_stats.motion_ms = motion_ms;
        world.perf_stats.cross_contacts = summary.cross_contacts;
        world.perf_stats.velocity_swaps = summary.velocity_swaps;
        world.perf_stats.boundary_contacts = summary.boundary_contacts;
        world.perf_stats.step_ms = t.elapsed_ms();
    }
}
