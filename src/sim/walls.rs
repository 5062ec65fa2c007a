//! Wall pool: the infinite-corridor illusion
//!
//! A fixed pool of walls cycles forever: scroll left, hide once fully
//! off-screen, re-enter on the right behind the current leader with a fresh
//! gap. Nothing is allocated after startup, so per-frame work stays O(pool)
//! no matter how long the session runs.

use super::state::{GapRng, Wall, World};

/// Scroll every visible wall left
pub fn advance(walls: &mut [Wall], world: &World, dt: f32) {
    for wall in walls.iter_mut().filter(|w| !w.hidden) {
        wall.x -= world.wall_speed * dt;
    }
}

/// Mark walls whose trailing edge has fully left the screen
///
/// Only visible walls are considered, so a wall hides exactly once per cycle.
pub fn hide_offscreen(walls: &mut [Wall], world: &World) {
    for wall in walls.iter_mut() {
        if !wall.hidden && wall.x < -world.wall_width {
            wall.hidden = true;
        }
    }
}

/// Re-enter every hidden wall on the right, one spacing behind the leader
///
/// Runs in the same frame as the hide pass, so the conveyor never sits a wall
/// short. A wall recycled earlier in the pass counts as visible for the next
/// one, which keeps the spacing invariant even when a huge `dt` hides several
/// walls at once. With no visible leader at all, the wall falls back to the
/// configured unpool position.
pub fn recycle(walls: &mut [Wall], world: &World, gaps: &mut GapRng) {
    for i in 0..walls.len() {
        if !walls[i].hidden {
            continue;
        }
        let leader_x = walls
            .iter()
            .filter(|w| !w.hidden)
            .map(|w| w.x)
            .reduce(f32::max);
        walls[i] = Wall {
            x: match leader_x {
                Some(x) => x + world.wall_spacing,
                None => world.wall_unpool_x,
            },
            gap_y: gaps.draw(),
            hidden: false,
        };
    }
}

/// Reset the pool to its initial conveyor layout
///
/// Used at init and by the restart transition. Gap centers are drawn fresh;
/// the generator keeps its stream.
pub fn seed_pool(walls: &mut [Wall], world: &World, gaps: &mut GapRng) {
    for (i, wall) in walls.iter_mut().enumerate() {
        *wall = Wall {
            x: world.wall_unpool_x + i as f32 * world.wall_spacing,
            gap_y: gaps.draw(),
            hidden: false,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::tuning::Tuning;

    fn fixture(seed: u64) -> ([Wall; WALL_POOL_SIZE], World, GapRng) {
        let world = Tuning::default().world();
        let mut gaps = GapRng::new(seed, &world, WINDOW_HEIGHT);
        let mut walls = [Wall {
            x: 0.0,
            gap_y: 0.0,
            hidden: true,
        }; WALL_POOL_SIZE];
        seed_pool(&mut walls, &world, &mut gaps);
        (walls, world, gaps)
    }

    #[test]
    fn test_advance_skips_hidden_walls() {
        let (mut walls, world, _) = fixture(1);
        walls[1].hidden = true;
        let frozen_x = walls[1].x;

        advance(&mut walls, &world, 0.5);

        assert_eq!(walls[1].x, frozen_x);
        assert!((walls[0].x - (world.wall_unpool_x - world.wall_speed * 0.5)).abs() < 1e-3);
    }

    #[test]
    fn test_hide_triggers_past_trailing_edge_only() {
        let (mut walls, world, _) = fixture(2);
        walls[0].x = -world.wall_width; // trailing edge exactly at the screen edge
        walls[1].x = -world.wall_width - 0.1;

        hide_offscreen(&mut walls, &world);

        assert!(!walls[0].hidden);
        assert!(walls[1].hidden);
        assert!(!walls[2].hidden);
    }

    #[test]
    fn test_hide_is_idempotent() {
        let (mut walls, world, _) = fixture(7);
        walls[0].x = -world.wall_width - 1.0;

        hide_offscreen(&mut walls, &world);
        let after_first = walls;
        hide_offscreen(&mut walls, &world);

        assert!(walls[0].hidden);
        assert_eq!(walls, after_first);
    }

    #[test]
    fn test_recycle_spacing_behind_leader() {
        let (mut walls, world, mut gaps) = fixture(3);
        walls[0].hidden = true;
        let leader_x = walls[1].x.max(walls[2].x);

        recycle(&mut walls, &world, &mut gaps);

        assert!(!walls[0].hidden);
        assert!((walls[0].x - (leader_x + world.wall_spacing)).abs() < 1e-3);
    }

    #[test]
    fn test_recycle_is_idempotent_once_visible() {
        let (mut walls, world, mut gaps) = fixture(4);
        walls[2].hidden = true;

        recycle(&mut walls, &world, &mut gaps);
        let after_first = walls;
        recycle(&mut walls, &world, &mut gaps);

        // Nothing hidden, so the second pass touches nothing
        assert_eq!(walls, after_first);
    }

    #[test]
    fn test_recycle_all_hidden_rebuilds_conveyor() {
        let (mut walls, world, mut gaps) = fixture(5);
        for wall in &mut walls {
            wall.hidden = true;
        }

        recycle(&mut walls, &world, &mut gaps);

        // First wall falls back to the unpool position, the rest chain off it
        for (i, wall) in walls.iter().enumerate() {
            assert!(!wall.hidden);
            let expected = world.wall_unpool_x + i as f32 * world.wall_spacing;
            assert!((wall.x - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn test_full_cycle_keeps_visible_walls_spaced() {
        let (mut walls, world, mut gaps) = fixture(6);
        let dt = 1.0 / 60.0;

        for _ in 0..20_000 {
            advance(&mut walls, &world, dt);
            hide_offscreen(&mut walls, &world);
            recycle(&mut walls, &world, &mut gaps);

            let mut xs: Vec<f32> = walls.iter().map(|w| w.x).collect();
            xs.sort_by(f32::total_cmp);
            for pair in xs.windows(2) {
                // Loose tolerance: per-wall rounding drifts a little between recycles
                assert!((pair[1] - pair[0] - world.wall_spacing).abs() < 0.5);
            }
        }
    }
}
