//! Per-frame orchestration
//!
//! One synchronous pass per frame in fixed order: input, physics, wall
//! advance, hide, recycle, collision, boundary. Both loss conditions funnel
//! into the same restart transition; nothing in here errors, blocks, or
//! measures time on its own.

use super::collision;
use super::physics;
use super::state::GameState;
use super::walls;

/// Input commands for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump requested this frame
    pub jump: bool,
}

/// Advance the game state by one frame of `dt` seconds
///
/// `dt` comes from the embedder's clock and must be >= 0; zero is a valid
/// no-op frame. The hide pass runs before recycle so a wall can leave and
/// re-enter the conveyor within the same tick.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    if input.jump {
        physics::jump(&mut state.player);
    }
    physics::integrate(&mut state.player, state.world.gravity, dt);

    walls::advance(&mut state.walls, &state.world, dt);
    walls::hide_offscreen(&mut state.walls, &state.world);
    walls::recycle(&mut state.walls, &state.world, &mut state.gap_rng);

    let hit = collision::player_hits_any_wall(
        &state.player,
        &state.walls,
        &state.world,
        state.window_height,
    );
    if hit {
        state.restart();
        return;
    }

    // Touching either window edge restarts outright; there is no soft clamp
    if state.player.pos.y >= state.window_height - state.player.size.y
        || state.player.pos.y <= 0.0
    {
        state.restart();
    }
}
