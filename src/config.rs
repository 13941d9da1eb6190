//! Engine tuning knobs, loadable from JSON by the host

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Default seed for the placement RNG (xorshift32 must not start at 0)
pub const DEFAULT_SEED: u32 = 12345;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Per-component speed cap (pixels per reference frame)
    pub max_speed: f64,
    /// Linear damping per reference frame, in (0, 1]
    pub friction: f64,
    /// Angular damping per reference frame, in (0, 1]
    pub angular_friction: f64,
    /// Max vertex-to-edge distance that counts as contact
    pub tolerance: f64,
    /// Restitution gain on the left wall only. Values above 1 add energy;
    /// the other three walls reflect without gain.
    pub left_wall_gain: f64,
    /// Initial spin magnitude (radians per reference frame)
    pub spin: f64,
    /// Hexagon circumradius for imported bodies
    pub radius: f64,
    /// Keep spawned centers this far from the canvas edges
    pub spawn_margin: f64,
    /// Initial velocity components are drawn from [-initial_speed, initial_speed]
    pub initial_speed: f64,
    /// Upper bound on a single frame's time scale
    pub max_dt: f64,
    /// Size of the "recent" event rings kept by the interaction log
    pub recent_events: usize,
    /// Wrap the rotation angle into [0, 2π) after each integration
    pub normalize_angle: bool,
    /// Emit per-contact debug logs
    pub debug: bool,
    pub seed: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_speed: 6.0,
            friction: 0.999,
            angular_friction: 0.999,
            tolerance: 2.0,
            left_wall_gain: 1.05,
            spin: 0.02,
            radius: 50.0,
            spawn_margin: 100.0,
            initial_speed: 2.0,
            max_dt: 4.0,
            recent_events: 50,
            normalize_angle: true,
            debug: false,
            seed: DEFAULT_SEED,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<()> {
        let bad = |msg: String| Err(EngineError::InvalidConfig(msg));

        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return bad(format!("friction must be in (0, 1], got {}", self.friction));
        }
        if !(self.angular_friction > 0.0 && self.angular_friction <= 1.0) {
            return bad(format!(
                "angular_friction must be in (0, 1], got {}",
                self.angular_friction
            ));
        }
        if !(self.max_speed > 0.0 && self.max_speed.is_finite()) {
            return bad(format!("max_speed must be > 0, got {}", self.max_speed));
        }
        if !(self.tolerance >= 0.0 && self.tolerance.is_finite()) {
            return bad(format!("tolerance must be >= 0, got {}", self.tolerance));
        }
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return bad(format!("radius must be > 0, got {}", self.radius));
        }
        if !(self.left_wall_gain >= 1.0 && self.left_wall_gain.is_finite()) {
            return bad(format!("left_wall_gain must be >= 1, got {}", self.left_wall_gain));
        }
        if !(self.max_dt > 0.0 && self.max_dt.is_finite()) {
            return bad(format!("max_dt must be > 0, got {}", self.max_dt));
        }
        if !(self.spawn_margin >= 0.0 && self.initial_speed >= 0.0 && self.spin.is_finite()) {
            return bad("spawn_margin, initial_speed and spin must be finite and non-negative".to_string());
        }
        if self.recent_events == 0 {
            return bad("recent_events must be at least 1".to_string());
        }
        if self.seed == 0 {
            return bad("seed must be non-zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg = EngineConfig::from_json(r#"{ "tolerance": 3.5, "debug": true }"#).unwrap();
        assert_eq!(cfg.tolerance, 3.5);
        assert!(cfg.debug);
        assert_eq!(cfg.left_wall_gain, 1.05);
    }

    #[test]
    fn rejects_friction_outside_unit_interval() {
        assert!(EngineConfig::from_json(r#"{ "friction": 0.0 }"#).is_err());
        assert!(EngineConfig::from_json(r#"{ "friction": 1.2 }"#).is_err());
        assert!(EngineConfig::from_json(r#"{ "friction": 1.0 }"#).is_ok());
    }

    #[test]
    fn rejects_left_gain_below_one() {
        let err = EngineConfig::from_json(r#"{ "left_wall_gain": 0.9 }"#).unwrap_err();
        assert!(err.to_string().contains("left_wall_gain"));
    }
}
