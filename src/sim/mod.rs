//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time arrives as an input value, never measured here
//! - Seeded RNG only
//! - Stable iteration order (pool index order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod state;
pub mod tick;
pub mod walls;

pub use collision::{Rect, player_hits_wall, wall_rects};
pub use state::{FrameSnapshot, GameState, GapRng, Player, Wall, World};
pub use tick::{TickInput, tick};
