use crate::config::EngineConfig;
use crate::domain::attributes::{BodyAttribute, Group};
use crate::geometry::{compute_world_vertices, HEX_VERTEX_COUNT};

use super::vec2::Vec2;

/// Hexagonal body - rotates and drifts as a unit
#[derive(Clone, Debug)]
pub struct HexBody {
    // === Identity ===
    /// Unique ID, never reused within one world
    pub id: u32,
    /// AM / PM tag, fixed at creation
    pub group: Group,
    /// Identifying attribute used in interaction reports (record date)
    pub date: String,

    // === Physics State ===
    /// World position of the center
    pub pos: Vec2,
    /// Circumradius (center to vertex), constant
    pub radius: f64,
    /// Rotation angle (radians)
    pub angle: f64,
    /// Velocity (pixels per reference frame)
    pub velocity: Vec2,
    /// Angular velocity (radians per reference frame)
    pub angular_vel: f64,

    // === Derived ===
    /// World vertices for the current pos/angle
    pub vertices: [Vec2; HEX_VERTEX_COUNT],

    // === Appearance ===
    pub attributes: Vec<BodyAttribute>,
}

impl HexBody {
    pub fn new(
        id: u32,
        pos: Vec2,
        velocity: Vec2,
        group: Group,
        date: String,
        attributes: Vec<BodyAttribute>,
        config: &EngineConfig,
    ) -> Self {
        let mut body = Self {
            id,
            group,
            date,
            pos,
            radius: config.radius,
            angle: 0.0,
            velocity,
            angular_vel: config.spin * group.spin_sign(),
            vertices: [Vec2::zero(); HEX_VERTEX_COUNT],
            attributes,
        };
        body.refresh_vertices();
        body
    }

    /// Recompute the derived vertices after pos/angle changed
    #[inline]
    pub fn refresh_vertices(&mut self) {
        self.vertices = compute_world_vertices(self.pos, self.radius, self.angle);
    }
}
