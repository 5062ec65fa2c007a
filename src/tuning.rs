//! Data-driven game balance
//!
//! Every gameplay constant in one flat table, loadable from JSON so an
//! embedder can rebalance without recompiling. Defaults mirror `consts`.
//! Values are trusted as supplied; the simulation assumes positive, finite
//! configuration by construction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Player, World};

/// The balance table
///
/// Any subset of fields may appear in a tuning file; the rest keep their
/// built-in values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub window_width: f32,
    pub window_height: f32,
    pub gravity: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub jump_force: f32,
    pub max_fall_speed: f32,
    pub max_rise_speed: f32,
    pub wall_gap: f32,
    pub wall_width: f32,
    pub wall_spacing: f32,
    pub wall_speed: f32,
    pub wall_offset: f32,
    pub wall_unpool_x: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            gravity: GRAVITY,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            jump_force: PLAYER_JUMP_FORCE,
            max_fall_speed: PLAYER_MAX_FALL_SPEED,
            max_rise_speed: PLAYER_MAX_RISE_SPEED,
            wall_gap: WALL_GAP,
            wall_width: WALL_WIDTH,
            wall_spacing: WALL_SPACING,
            wall_speed: WALL_SPEED,
            wall_offset: WALL_OFFSET,
            wall_unpool_x: WALL_UNPOOL_X,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON object
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// World configuration for a new game state
    pub fn world(&self) -> World {
        World {
            gravity: self.gravity,
            wall_gap: self.wall_gap,
            wall_width: self.wall_width,
            wall_spacing: self.wall_spacing,
            wall_speed: self.wall_speed,
            wall_offset: self.wall_offset,
            wall_unpool_x: self.wall_unpool_x,
        }
    }

    /// Player record for a new game state
    ///
    /// The spawn point is derived, not tuned: a fifth of the window across,
    /// centered vertically.
    pub fn player(&self) -> Player {
        let spawn = Vec2::new(self.window_width / 5.0, self.window_height / 2.0);
        Player {
            pos: spawn,
            vel_y: 0.0,
            size: Vec2::new(self.player_width, self.player_height),
            spawn,
            jump_force: self.jump_force,
            max_fall_speed: self.max_fall_speed,
            max_rise_speed: self.max_rise_speed,
        }
    }
}
