//! Hexdrift Engine - rotating hexagon bodies driven from a JS render loop
//!
//! Architecture:
//! - domain/        - Records, attributes and colour mapping
//! - events/        - Contact records, sinks and the interaction log
//! - systems/       - Geometry, motion, walls and cross-body contacts
//! - simulation/    - World orchestration and the wasm facade

pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod events;
pub mod simulation;
pub mod systems;

// Compatibility re-exports (keeps short internal/external paths working)
pub use systems::body_arena;
pub use systems::boundary;
pub use systems::contact;
pub use systems::frame;
pub use systems::geometry;
pub use systems::hex_body;
pub use systems::motion;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console::init_logger(log::LevelFilter::Info);
    log::info!("Hexdrift engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Turn on debug-level logging (per-contact traces when `debug` is set in the config)
#[wasm_bindgen]
pub fn set_log_debug(enabled: bool) {
    let level = if enabled { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    console::init_logger(level);
}

// Re-export main types
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use simulation::{World, WorldCore};

// Buffer layout constants for JS
#[wasm_bindgen]
pub fn vertex_floats_per_body() -> u32 { simulation::VERTEX_FLOATS_PER_BODY as u32 }
#[wasm_bindgen]
pub fn color_floats_per_body() -> u32 { simulation::COLOR_FLOATS_PER_BODY as u32 }
