//! Level construction from ASCII grids.
//!
//! [`plan_level`] is the pure grid scan: it walks a validated grid and
//! produces a [`TilePlacement`] for every non-empty cell. [`spawn_level`]
//! turns the plan for the registry's active level into entities, split into
//! the `"obstacles"` (rocks and houses) and `"portals"` (doors) groups.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::Obstacle;
use crate::components::portal::Portal;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::levels::LevelRegistry;
use crate::resources::worldsignals::WorldSignals;

/// Footprint of rocks, doors, and empty ground, in pixels.
pub const TILE_SIZE: f32 = 16.0;
/// Footprint of houses, in pixels.
pub const HOUSE_SIZE: f32 = 64.0;

/// Draw layer of the obstacle group.
pub const OBSTACLE_Z: i32 = 1;
/// Draw layer of the portal group; painted over obstacles.
pub const PORTAL_Z: i32 = 2;

/// Non-empty tile kinds of the grid vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Rock,
    House,
    Door,
}

impl TileKind {
    fn from_char(cell: char) -> Option<Self> {
        match cell {
            'R' => Some(TileKind::Rock),
            'H' => Some(TileKind::House),
            'D' => Some(TileKind::Door),
            _ => None,
        }
    }

    /// Width and height the tile claims when advancing the cursor.
    pub fn footprint(&self) -> f32 {
        match self {
            TileKind::Rock | TileKind::Door => TILE_SIZE,
            TileKind::House => HOUSE_SIZE,
        }
    }

    /// Key of the tile's texture in the texture store.
    pub fn texture_key(&self) -> &'static str {
        match self {
            TileKind::Rock => "rock",
            TileKind::House => "house",
            TileKind::Door => "door",
        }
    }
}

/// A planned tile: what to place and where.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    pub kind: TileKind,
    pub x: f32,
    pub y: f32,
}

/// Scan the grid top-to-bottom, left-to-right, and produce a placement for
/// every non-empty cell.
///
/// The cursor advances by the footprint of the cell just processed, and the
/// row advance reuses the footprint of the *last* cell of the row. A house
/// in a row's final column therefore pushes the next row down by the house
/// height rather than the tile height. Maps authored for the original game
/// rely on that spacing, so it is kept as-is.
pub fn plan_level(grid: &[String]) -> Vec<TilePlacement> {
    let mut placements = Vec::new();
    let mut y = 0.0;
    for row in grid {
        let mut x = 0.0;
        let mut step = TILE_SIZE;
        for cell in row.chars() {
            let kind = TileKind::from_char(cell);
            step = kind.map_or(TILE_SIZE, |k| k.footprint());
            if let Some(kind) = kind {
                placements.push(TilePlacement { kind, x, y });
            }
            x += step;
        }
        y += step;
    }
    placements
}

/// Spawn the registry's active level: one entity per planned tile, grouped
/// into obstacles and portals. The player is managed separately by the
/// play-state enter hook.
pub fn spawn_level(
    mut commands: Commands,
    registry: Res<LevelRegistry>,
    mut signals: ResMut<WorldSignals>,
) {
    let Some(def) = registry.active_def() else {
        log::error!("active level '{}' missing from registry", registry.active());
        return;
    };

    let placements = plan_level(&def.grid);
    for placement in &placements {
        let size = placement.kind.footprint();
        let position = MapPosition::new(placement.x, placement.y);
        let sprite = Sprite::new(placement.kind.texture_key(), size, size);
        let collider = BoxCollider::new(size, size);
        match placement.kind {
            TileKind::Rock | TileKind::House => {
                commands.spawn((
                    Group::new("obstacles"),
                    Obstacle,
                    position,
                    ZIndex(OBSTACLE_Z),
                    sprite,
                    collider,
                ));
            }
            TileKind::Door => {
                commands.spawn((
                    Group::new("portals"),
                    Portal::new(def.portal_to.clone()),
                    position,
                    ZIndex(PORTAL_Z),
                    sprite,
                    collider,
                ));
            }
        }
    }

    signals.set_string("level", registry.active());
    log::info!(
        "built level '{}': {} tiles",
        registry.active(),
        placements.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(rows: &[&str]) -> Vec<String> {
        rows.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn three_rocks_in_a_row() {
        let placements = plan_level(&rows(&["RRR"]));
        assert_eq!(placements.len(), 3);
        for (index, placement) in placements.iter().enumerate() {
            assert_eq!(placement.kind, TileKind::Rock);
            assert_eq!(placement.x, index as f32 * 16.0);
            assert_eq!(placement.y, 0.0);
        }
    }

    #[test]
    fn empty_cells_advance_the_cursor() {
        let placements = plan_level(&rows(&["R R"]));
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].x, 0.0);
        assert_eq!(placements[1].x, 32.0);
    }

    #[test]
    fn houses_claim_a_wide_footprint() {
        let placements = plan_level(&rows(&["HR"]));
        assert_eq!(placements[0].kind, TileKind::House);
        assert_eq!(placements[0].x, 0.0);
        assert_eq!(placements[1].kind, TileKind::Rock);
        assert_eq!(placements[1].x, 64.0);
    }

    #[test]
    fn row_advance_uses_the_last_cell_of_the_row() {
        // A house in the final column pushes the next row down by 64.
        let tall = plan_level(&rows(&["RH", "R "]));
        assert_eq!(tall[2].y, 64.0);

        // The same house earlier in the row does not.
        let flat = plan_level(&rows(&["HR", "R "]));
        assert_eq!(flat[2].y, 16.0);
    }

    #[test]
    fn doors_are_planned_as_portals() {
        let placements = plan_level(&rows(&["RDR"]));
        assert_eq!(placements[1].kind, TileKind::Door);
        assert_eq!(placements[1].x, 16.0);
    }

    #[test]
    fn planning_is_idempotent() {
        let grid = rows(&["RRRR", "R DR", "RH R"]);
        assert_eq!(plan_level(&grid), plan_level(&grid));
    }
}
