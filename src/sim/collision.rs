//! Axis-aligned collision between the player and the wall pool
//!
//! A wall pair is two solid rectangles, one above and one below the gap. The
//! overlap test is strict: touching edges share zero area and do not count as
//! a hit, so grazing a wall edge-on is fair.

use glam::Vec2;

use super::state::{Player, Wall, World};

/// Axis-aligned rectangle, `min` top-left and `max` bottom-right
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// True iff the rectangles overlap with non-zero area
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// The two solid rectangles of a wall pair: above the gap, then below it
///
/// Both span the window vertically; the boundary restart makes anything
/// beyond the window unreachable before this test runs.
pub fn wall_rects(wall: &Wall, world: &World, window_height: f32) -> [Rect; 2] {
    let half_gap = world.wall_gap / 2.0;
    let top = Rect {
        min: Vec2::new(wall.x, 0.0),
        max: Vec2::new(wall.x + world.wall_width, wall.gap_y - half_gap),
    };
    let bottom = Rect {
        min: Vec2::new(wall.x, wall.gap_y + half_gap),
        max: Vec2::new(wall.x + world.wall_width, window_height),
    };
    [top, bottom]
}

/// Check the player box against one wall pair
pub fn player_hits_wall(player: &Player, wall: &Wall, world: &World, window_height: f32) -> bool {
    let player_box = Rect::from_pos_size(player.pos, player.size);
    wall_rects(wall, world, window_height)
        .iter()
        .any(|rect| player_box.overlaps(rect))
}

/// Scan the pool in index order; hidden walls are skipped
///
/// Which overlap is found first is irrelevant, since any hit triggers the
/// same restart.
pub fn player_hits_any_wall(
    player: &Player,
    walls: &[Wall],
    world: &World,
    window_height: f32,
) -> bool {
    walls
        .iter()
        .filter(|wall| !wall.hidden)
        .any(|wall| player_hits_wall(player, wall, world, window_height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::WINDOW_HEIGHT;
    use crate::sim::GameState;

    fn fixture() -> (Player, World) {
        let state = GameState::new(1);
        (state.player, state.world)
    }

    fn wall_at(x: f32, gap_y: f32) -> Wall {
        Wall {
            x,
            gap_y,
            hidden: false,
        }
    }

    #[test]
    fn test_rect_overlap_requires_area() {
        let a = Rect::from_pos_size(Vec2::ZERO, Vec2::splat(10.0));
        let b = Rect::from_pos_size(Vec2::new(5.0, 5.0), Vec2::splat(10.0));
        let touching = Rect::from_pos_size(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        let apart = Rect::from_pos_size(Vec2::new(20.0, 20.0), Vec2::splat(10.0));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&touching), "shared edge has zero measure");
        assert!(!a.overlaps(&apart));
    }

    #[test]
    fn test_player_through_gap_is_safe() {
        let (mut player, world) = fixture();
        // Gap centered on the player's box center
        let gap_y = player.pos.y + player.size.y / 2.0;
        let wall = wall_at(player.pos.x, gap_y);

        assert!(!player_hits_wall(&player, &wall, &world, WINDOW_HEIGHT));

        // Drift down until the box crosses the bottom gap edge
        player.pos.y = gap_y + world.wall_gap / 2.0 - player.size.y + 1.0;
        assert!(player_hits_wall(&player, &wall, &world, WINDOW_HEIGHT));
    }

    #[test]
    fn test_top_wall_hit() {
        let (mut player, world) = fixture();
        let wall = wall_at(player.pos.x, 400.0);
        // Box straddles the top wall's lower edge
        player.pos.y = 400.0 - world.wall_gap / 2.0 - player.size.y / 2.0;
        assert!(player_hits_wall(&player, &wall, &world, WINDOW_HEIGHT));
    }

    #[test]
    fn test_horizontal_miss() {
        let (player, world) = fixture();
        // Wall fully to the right of the player, gap nowhere near the player
        let wall = wall_at(player.pos.x + player.size.x + 1.0, 100.0);
        assert!(!player_hits_wall(&player, &wall, &world, WINDOW_HEIGHT));
    }

    #[test]
    fn test_hidden_walls_are_ignored() {
        let (player, world) = fixture();
        // A wall right on top of the player, but hidden
        let mut wall = wall_at(player.pos.x, 100.0);
        wall.hidden = true;
        let walls = [wall];
        assert!(!player_hits_any_wall(&player, &walls, &world, WINDOW_HEIGHT));
    }

    #[test]
    fn test_edge_contact_is_not_a_hit() {
        let (mut player, world) = fixture();
        let gap_y = 300.0;
        let wall = wall_at(player.pos.x, gap_y);
        // Player bottom exactly on the bottom wall's top edge
        player.pos.y = gap_y + world.wall_gap / 2.0 - player.size.y;
        assert!(!player_hits_wall(&player, &wall, &world, WINDOW_HEIGHT));
    }
}
