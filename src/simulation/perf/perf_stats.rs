use wasm_bindgen::prelude::*;

/// Timings and counters for the last step
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) contacts_ms: f64,
    pub(super) motion_ms: f64,
    pub(super) cross_contacts: u32,
    pub(super) velocity_swaps: u32,
    pub(super) boundary_contacts: u32,
    pub(super) body_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn contacts_ms(&self) -> f64 { self.contacts_ms }
    #[wasm_bindgen(getter)]
    pub fn motion_ms(&self) -> f64 { self.motion_ms }
    #[wasm_bindgen(getter)]
    pub fn cross_contacts(&self) -> u32 { self.cross_contacts }
    #[wasm_bindgen(getter)]
    pub fn velocity_swaps(&self) -> u32 { self.velocity_swaps }
    #[wasm_bindgen(getter)]
    pub fn boundary_contacts(&self) -> u32 { self.boundary_contacts }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
}
