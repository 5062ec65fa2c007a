//! Flappy Duck - a side-scrolling tunnel-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, wall pool, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, windowing, input polling, and audio are the embedder's job. The
//! embedder feeds `sim::tick` one `TickInput` plus the frame's elapsed seconds,
//! then draws from `GameState::snapshot`.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Nominal frame duration at the 60 Hz target rate
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Window dimensions (logical pixels, y grows downward)
    pub const WINDOW_WIDTH: f32 = 360.0;
    pub const WINDOW_HEIGHT: f32 = 640.0;

    /// Downward acceleration, pixels/s²
    pub const GRAVITY: f32 = 600.0;

    /// Player defaults - the spawn point is derived in `Tuning::player`
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    /// Jump impulse magnitude; a jump sets vertical velocity to its negation
    pub const PLAYER_JUMP_FORCE: f32 = 500.0;
    /// Terminal fall speed, pixels/s
    pub const PLAYER_MAX_FALL_SPEED: f32 = 400.0;
    /// Upward speed ceiling (negative = upward)
    pub const PLAYER_MAX_RISE_SPEED: f32 = -300.0;

    /// The wall pool holds exactly this many recycled walls, forever
    pub const WALL_POOL_SIZE: usize = 3;
    /// Vertical extent of the passable opening
    pub const WALL_GAP: f32 = 180.0;
    pub const WALL_WIDTH: f32 = 80.0;
    /// Horizontal distance between consecutive walls
    pub const WALL_SPACING: f32 = 240.0;
    /// Leftward scroll speed, pixels/s
    pub const WALL_SPEED: f32 = 150.0;
    /// Minimum distance from a gap edge to the top/bottom of the window
    pub const WALL_OFFSET: f32 = 60.0;
    /// Where a recycled wall re-enters when no visible wall leads it
    pub const WALL_UNPOOL_X: f32 = 400.0;
}
