use std::f64::consts::TAU;

use crate::config::EngineConfig;
use crate::hex_body::HexBody;

/// Advance one body by `dt` reference frames.
///
/// Order: move, clamp speed, damp, rotate, refresh vertices.
/// `dt` must already be sanitised (finite, >= 0).
pub fn integrate(body: &mut HexBody, dt: f64, config: &EngineConfig) {
    body.pos += body.velocity * dt;

    clamp_speed(body, config.max_speed);
    apply_friction(body, dt, config);

    body.angle += body.angular_vel * dt;
    if config.normalize_angle {
        body.angle = body.angle.rem_euclid(TAU);
    }

    body.refresh_vertices();
}

/// Clamp each velocity component to [-max_speed, max_speed].
/// A NaN `max_speed` leaves the velocity unclamped instead of panicking.
#[inline]
pub fn clamp_speed(body: &mut HexBody, max_speed: f64) {
    body.velocity.x = body.velocity.x.max(-max_speed).min(max_speed);
    body.velocity.y = body.velocity.y.max(-max_speed).min(max_speed);
}

/// Damp linear and angular velocity. Raised to `dt` so that two half frames
/// damp exactly as much as one full frame.
#[inline]
pub fn apply_friction(body: &mut HexBody, dt: f64, config: &EngineConfig) {
    let linear = config.friction.powf(dt);
    let angular = config.angular_friction.powf(dt);
    body.velocity = body.velocity * linear;
    body.angular_vel *= angular;
}
