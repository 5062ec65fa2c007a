//! Flappy Duck entry point
//!
//! Headless demo driver standing in for a real renderer/input embedder: it
//! sources the time-derived seed, initializes logging, optionally loads a
//! tuning file, and plays a fixed number of frames with a crude autopilot so
//! the core can be watched under `RUST_LOG=debug`.

use std::time::{SystemTime, UNIX_EPOCH};

use flappy_duck::consts::FRAME_DT;
use flappy_duck::sim::{GameState, TickInput, tick};
use flappy_duck::tuning::Tuning;

/// Demo length: 60 simulated seconds
const DEMO_FRAMES: u32 = 60 * 60;

fn main() {
    env_logger::init();

    // The core only accepts a seed; sourcing it from the clock is our job
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let tuning = load_tuning(std::env::args().nth(1));

    log::info!("starting demo run, seed={seed}");
    let mut state = GameState::from_tuning(seed, &tuning);

    for _ in 0..DEMO_FRAMES {
        let input = TickInput {
            jump: autopilot(&state),
        };
        tick(&mut state, &input, FRAME_DT);
    }

    let snap = state.snapshot();
    log::info!(
        "demo over: {} frames, {} restarts, player at y={:.1}",
        snap.time_ticks,
        snap.runs,
        snap.player_pos.y
    );
}

/// Optional tuning file as the first CLI argument; any failure falls back to
/// the built-in balance with a warning
fn load_tuning(path: Option<String>) -> Tuning {
    let Some(path) = path else {
        return Tuning::default();
    };
    let parsed = std::fs::read_to_string(&path)
        .map_err(|err| err.to_string())
        .and_then(|json| Tuning::from_json(&json).map_err(|err| err.to_string()));
    match parsed {
        Ok(tuning) => {
            log::info!("tuning loaded from {path}");
            tuning
        }
        Err(err) => {
            log::warn!("ignoring tuning file {path}: {err}");
            Tuning::default()
        }
    }
}

/// Flap whenever the player is sinking below the next gap center
fn autopilot(state: &GameState) -> bool {
    let player = &state.player;
    let next_gap = state
        .walls
        .iter()
        .filter(|w| !w.hidden && w.x + state.world.wall_width >= player.pos.x)
        .min_by(|a, b| a.x.total_cmp(&b.x))
        .map(|w| w.gap_y)
        .unwrap_or(state.window_height / 2.0);
    player.pos.y + player.size.y / 2.0 > next_gap && player.vel_y > 0.0
}
