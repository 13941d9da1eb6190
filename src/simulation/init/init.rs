use crate::body_arena::BodyArena;
use crate::config::EngineConfig;
use crate::events::InteractionLog;

use super::perf_stats::PerfStats;
use super::RenderBuffers;
use super::WorldCore;

pub(super) fn create_world_core(config: EngineConfig) -> WorldCore {
    WorldCore {
        log: InteractionLog::new(config.recent_events, config.debug),
        rng_state: config.seed,
        config,
        bodies: BodyArena::new(),
        frame: 0,
        render: RenderBuffers {
            vertices: Vec::new(),
            colors: Vec::new(),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
