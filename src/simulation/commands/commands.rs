use crate::domain::records::{self, MoodRecord};
use crate::error::Result;
use crate::hex_body::Vec2;

use super::random::range;
use super::WorldCore;

pub(super) fn import_json(world: &mut WorldCore, text: &str, width: f64, height: f64) -> Result<u32> {
    let parsed = records::parse_json(text).map_err(|e| {
        log::warn!("json import rejected: {}", e);
        e
    })?;
    Ok(import_records(world, parsed, width, height))
}

pub(super) fn import_csv(world: &mut WorldCore, text: &str, width: f64, height: f64) -> Result<u32> {
    let parsed = records::parse_csv(text).map_err(|e| {
        log::warn!("csv import rejected: {}", e);
        e
    })?;
    Ok(import_records(world, parsed, width, height))
}

/// Swap in a fresh body set. Runs between frames, so the next frame never
/// sees a mix of old and new bodies or stale history.
pub(super) fn import_records(world: &mut WorldCore, records: Vec<MoodRecord>, width: f64, height: f64) -> u32 {
    reset(world);

    let margin = world.config.spawn_margin;
    let speed = world.config.initial_speed;
    for record in records {
        let pos = Vec2::new(
            range(&mut world.rng_state, margin, width - margin),
            range(&mut world.rng_state, margin, height - margin),
        );
        let velocity = Vec2::new(
            range(&mut world.rng_state, -speed, speed),
            range(&mut world.rng_state, -speed, speed),
        );
        world.bodies.spawn(record, pos, velocity, &world.config);
    }

    let count = world.bodies.len() as u32;
    log::info!("imported {} records", count);
    count
}

pub(super) fn reset(world: &mut WorldCore) {
    world.bodies.clear();
    world.log.clear();
    world.render.vertices.clear();
    world.render.colors.clear();
    world.frame = 0;
}
