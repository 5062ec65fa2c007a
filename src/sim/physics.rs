//! Player physics: semi-implicit Euler under gravity
//!
//! Velocity first, then position from the new velocity. Not exact kinematics,
//! and not meant to be.

use super::state::Player;

/// Advance the player by one frame of gravity
///
/// Velocity is clamped into `[max_rise_speed, max_fall_speed]` before the
/// position update, so a long fall never exceeds terminal speed.
pub fn integrate(player: &mut Player, gravity: f32, dt: f32) {
    player.vel_y += gravity * dt;
    player.vel_y = player.vel_y.clamp(player.max_rise_speed, player.max_fall_speed);
    player.pos.y += player.vel_y * dt;
}

/// Apply a jump impulse
///
/// Sets velocity outright rather than adding to it; whatever fall speed had
/// accumulated is gone immediately.
pub fn jump(player: &mut Player) {
    player.vel_y = -player.jump_force;
}
