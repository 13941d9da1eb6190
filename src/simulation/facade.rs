use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::error::EngineError;

use super::perf_stats::PerfStats;
use super::WorldCore;

fn to_js(e: EngineError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty world with the default config
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: WorldCore::new(),
        }
    }

    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Result<World, JsValue> {
        let config = EngineConfig::from_json(config_json).map_err(to_js)?;
        let core = WorldCore::with_config(config).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.body_count() as u32 }

    // === CONFIG ===

    pub fn set_config(&mut self, config_json: &str) -> Result<(), JsValue> {
        let config = EngineConfig::from_json(config_json).map_err(to_js)?;
        self.core.set_config(config).map_err(to_js)
    }

    pub fn get_config(&self) -> String {
        self.core.config().to_json()
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === IMPORT ===

    /// Replace all bodies with the records in `text`. Returns the body count.
    /// Invalid input leaves the current bodies untouched.
    pub fn import_json(&mut self, text: &str, width: f64, height: f64) -> Result<u32, JsValue> {
        self.core.import_json(text, width, height).map_err(to_js)
    }

    pub fn import_csv(&mut self, text: &str, width: f64, height: f64) -> Result<u32, JsValue> {
        self.core.import_csv(text, width, height).map_err(to_js)
    }

    /// Clear all bodies and collision history
    pub fn reset(&mut self) {
        self.core.reset();
    }

    // === FRAME ===

    /// Advance one frame. `dt` = deltaTime / reference frame time.
    pub fn step(&mut self, width: f64, height: f64, dt: f64) {
        self.core.step(width, height, dt);
    }

    // === RENDER ===

    /// Refresh the render buffers; returns the number of bodies written
    pub fn extract_render(&mut self) -> u32 {
        self.core.extract_render() as u32
    }

    /// Pointer to the vertex buffer (f32, 14 per body)
    pub fn render_vertices_ptr(&self) -> *const f32 {
        self.core.render_vertices().as_ptr()
    }

    pub fn render_vertices_len(&self) -> usize {
        self.core.render_vertices().len()
    }

    /// Pointer to the colour buffer (f32 HSB, 18 per body)
    pub fn render_colors_ptr(&self) -> *const f32 {
        self.core.render_colors().as_ptr()
    }

    pub fn render_colors_len(&self) -> usize {
        self.core.render_colors().len()
    }

    pub fn bodies_json(&self) -> String {
        serde_json::to_string(&self.core.snapshot()).unwrap_or_else(|_| "[]".to_string())
    }

    // === INTERACTION LOG ===

    pub fn recent_collisions_json(&self) -> String {
        self.core.log().recent_boundary_json()
    }

    pub fn recent_interactions_json(&self) -> String {
        self.core.log().recent_interactions_json()
    }

    pub fn export_json(&self) -> String {
        self.core.log().export_json()
    }

    pub fn export_csv(&self) -> String {
        self.core.log().export_csv()
    }

    pub fn export_interactions_json(&self) -> String {
        self.core.log().export_interactions_json()
    }

    pub fn stats_json(&self) -> String {
        self.core.log().stats_json()
    }

    pub fn count_collisions_by_body(&self, body_id: u32) -> u32 {
        self.core.log().count_by_body(body_id) as u32
    }

    pub fn count_collisions_by_body_vertex(&self, body_id: u32) -> String {
        serde_json::to_string(&self.core.log().count_by_body_vertex(body_id))
            .unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
