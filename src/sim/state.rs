//! Game state and core simulation types
//!
//! Everything mutable lives under one `GameState` root that is passed by
//! `&mut` into every simulation pass. No hidden statics, so tests can run
//! independent instances side by side.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

use super::walls;

/// The controllable entity
///
/// `pos.x` is fixed after spawn: the world scrolls left instead of the player
/// moving right.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Vertical velocity, pixels/s (positive = downward)
    pub vel_y: f32,
    /// Bounding box size
    pub size: Vec2,
    /// Where restart puts the player back
    pub spawn: Vec2,
    /// A jump sets `vel_y = -jump_force`, replacing accumulated fall speed
    pub jump_force: f32,
    /// Terminal fall speed
    pub max_fall_speed: f32,
    /// Upward speed ceiling (negative)
    pub max_rise_speed: f32,
}

/// One gapped wall pair: solid above and below a passable opening
///
/// The pool of these is fixed at init; walls are only ever repositioned and
/// toggled, never created or destroyed mid-session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    /// Left edge; decreases as the world scrolls
    pub x: f32,
    /// Vertical center of the gap
    pub gap_y: f32,
    /// Set once the wall has fully left the screen; cleared on recycle
    pub hidden: bool,
}

/// Immutable-after-init world configuration
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    /// Downward acceleration, pixels/s²
    pub gravity: f32,
    /// Vertical extent of the passable opening
    pub wall_gap: f32,
    pub wall_width: f32,
    /// Horizontal distance between consecutive walls
    pub wall_spacing: f32,
    /// Leftward scroll speed, pixels/s
    pub wall_speed: f32,
    /// Minimum distance from a gap edge to the top/bottom of the window
    pub wall_offset: f32,
    /// Where a recycled wall re-enters when no visible wall leads it
    pub wall_unpool_x: f32,
}

/// Seeded gap-center generator
///
/// Seeded exactly once per session from the embedder-supplied value. Restart
/// keeps drawing from the same stream; the generator is never reseeded.
#[derive(Debug, Clone)]
pub struct GapRng {
    rng: Pcg32,
    min_center: f32,
    max_center: f32,
}

impl GapRng {
    /// Bounds are `[offset + gap/2, window_height - offset - gap/2]`, so a
    /// drawn gap never clips the top or bottom of the window.
    pub fn new(seed: u64, world: &World, window_height: f32) -> Self {
        let half_gap = world.wall_gap / 2.0;
        Self {
            rng: Pcg32::seed_from_u64(seed),
            min_center: world.wall_offset + half_gap,
            max_center: window_height - world.wall_offset - half_gap,
        }
    }

    /// Draw the next gap center (inclusive bounds)
    pub fn draw(&mut self) -> f32 {
        self.rng.random_range(self.min_center..=self.max_center)
    }
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub window_width: f32,
    pub window_height: f32,
    /// Frames simulated since init
    pub time_ticks: u64,
    /// Restarts performed since init
    pub runs: u32,
    pub player: Player,
    pub world: World,
    /// Fixed-size recycled wall pool
    pub walls: [Wall; WALL_POOL_SIZE],
    pub gap_rng: GapRng,
}

impl GameState {
    /// Create a game state with built-in tuning and the given seed
    pub fn new(seed: u64) -> Self {
        Self::from_tuning(seed, &Tuning::default())
    }

    /// Create a game state from an explicit tuning table
    pub fn from_tuning(seed: u64, tuning: &Tuning) -> Self {
        let world = tuning.world();
        let player = tuning.player();
        let mut gap_rng = GapRng::new(seed, &world, tuning.window_height);

        let mut walls = [Wall {
            x: 0.0,
            gap_y: 0.0,
            hidden: true,
        }; WALL_POOL_SIZE];
        walls::seed_pool(&mut walls, &world, &mut gap_rng);

        Self {
            seed,
            window_width: tuning.window_width,
            window_height: tuning.window_height,
            time_ticks: 0,
            runs: 0,
            player,
            world,
            walls,
            gap_rng,
        }
    }

    /// The restart transition: player back to spawn at rest, wall pool back
    /// to its initial layout with fresh gap draws
    ///
    /// Triggered by collision and by the window boundary; both guards funnel
    /// here. The gap generator keeps its stream.
    pub fn restart(&mut self) {
        self.player.pos = self.player.spawn;
        self.player.vel_y = 0.0;
        walls::seed_pool(&mut self.walls, &self.world, &mut self.gap_rng);
        self.runs += 1;
        log::debug!("restart #{} at tick {}", self.runs, self.time_ticks);
    }

    /// Read-only copy of everything a renderer needs to draw the frame
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            player_pos: self.player.pos,
            player_size: self.player.size,
            walls: self.walls,
            wall_gap: self.world.wall_gap,
            wall_width: self.world.wall_width,
            window_width: self.window_width,
            window_height: self.window_height,
            time_ticks: self.time_ticks,
            runs: self.runs,
        }
    }
}

/// Renderer-facing view of one frame
///
/// Carries the world constants a renderer needs (gap height, wall width) so it
/// never re-derives game logic.
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub player_pos: Vec2,
    pub player_size: Vec2,
    pub walls: [Wall; WALL_POOL_SIZE],
    pub wall_gap: f32,
    pub wall_width: f32,
    pub window_width: f32,
    pub window_height: f32,
    pub time_ticks: u64,
    pub runs: u32,
}
