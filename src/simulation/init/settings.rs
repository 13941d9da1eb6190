use crate::config::EngineConfig;
use crate::error::Result;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn set_config(world: &mut WorldCore, config: EngineConfig) -> Result<()> {
    config.validate()?;
    world.log.configure(config.recent_events, config.debug);
    world.rng_state = config.seed;
    world.config = config;
    Ok(())
}

pub(super) fn set_seed(world: &mut WorldCore, seed: u32) {
    // xorshift32 is stuck at zero forever
    let seed = if seed == 0 { crate::config::DEFAULT_SEED } else { seed };
    world.config.seed = seed;
    world.rng_state = seed;
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}
