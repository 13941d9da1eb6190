//! World - owns the body arena, config and interaction log
//!
//! The host render loop drives it: import records once, then call `step`
//! every animation frame with the canvas size and frame time scale.
//! Geometry, motion and collision code lives in `systems/`; this module
//! only orchestrates and keeps per-run state.

use crate::body_arena::BodyArena;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::events::InteractionLog;
use crate::hex_body::HexBody;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;
pub use render_extract::{BodySnapshot, COLOR_FLOATS_PER_BODY, VERTEX_FLOATS_PER_BODY};

use perf_timer::PerfTimer;

/// Flat f32 buffers handed to the JS renderer
pub(crate) struct RenderBuffers {
    pub(crate) vertices: Vec<f32>,
    pub(crate) colors: Vec<f32>,
}

/// The simulation world
pub struct WorldCore {
    config: EngineConfig,
    bodies: BodyArena,
    log: InteractionLog,

    // State
    frame: u64,
    rng_state: u32,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    pub fn new() -> Self {
        init::create_world_core(EngineConfig::default())
    }

    /// Create with a custom config (validated)
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(init::create_world_core(config))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the config; reseeds the placement RNG
    pub fn set_config(&mut self, config: EngineConfig) -> Result<()> {
        settings::set_config(self, config)
    }

    pub fn set_seed(&mut self, seed: u32) {
        settings::set_seed(self, seed);
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn bodies(&self) -> &[HexBody] {
        self.bodies.as_slice()
    }

    pub fn body(&self, id: u32) -> Option<&HexBody> {
        self.bodies.get(id)
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn log(&self) -> &InteractionLog {
        &self.log
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === IMPORT / RESET ===

    /// Parse, validate and import a JSON batch. On error nothing changes.
    pub fn import_json(&mut self, text: &str, width: f64, height: f64) -> Result<u32> {
        commands::import_json(self, text, width, height)
    }

    /// Parse, validate and import a CSV batch. On error nothing changes.
    pub fn import_csv(&mut self, text: &str, width: f64, height: f64) -> Result<u32> {
        commands::import_csv(self, text, width, height)
    }

    /// Drop all bodies and history
    pub fn reset(&mut self) {
        commands::reset(self)
    }

    // === FRAME ===

    /// Advance one animation frame.
    /// `dt` is the frame time scale (1.0 at the reference frame rate).
    pub fn step(&mut self, width: f64, height: f64, dt: f64) {
        step::step(self, width, height, dt);
    }

    // === RENDER ===

    /// Refresh the render buffers; returns the number of bodies written
    pub fn extract_render(&mut self) -> usize {
        render_extract::extract_render(self)
    }

    pub fn render_vertices(&self) -> &[f32] {
        &self.render.vertices
    }

    pub fn render_colors(&self) -> &[f32] {
        &self.render.colors
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        render_extract::snapshot(self)
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
