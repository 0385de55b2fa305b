//! Level builder integration tests: grid spawning, group membership, and the
//! shipped level registry.

use std::path::Path;

use bevy_ecs::prelude::*;

use overworld::components::boxcollider::BoxCollider;
use overworld::components::group::Group;
use overworld::components::mapposition::MapPosition;
use overworld::components::obstacle::Obstacle;
use overworld::components::portal::Portal;
use overworld::components::sprite::Sprite;
use overworld::components::zindex::ZIndex;
use overworld::resources::levels::{LevelDef, LevelRegistry};
use overworld::resources::worldsignals::WorldSignals;
use overworld::systems::levelbuilder::{spawn_level, HOUSE_SIZE, TILE_SIZE};

fn world_with_level(grid: &[&str]) -> World {
    let mut world = World::new();
    world.insert_resource(WorldSignals::default());

    let mut registry = LevelRegistry::new("test");
    registry
        .insert(
            "test",
            LevelDef {
                grid: grid.iter().map(|r| r.to_string()).collect(),
                background: "map_town".into(),
                portal_to: "test".into(),
            },
        )
        .unwrap();
    world.insert_resource(registry);

    let spawn_id = world.register_system(spawn_level);
    world.run_system(spawn_id).unwrap();
    world
}

#[test]
fn rocks_and_houses_land_in_the_obstacles_group() {
    let mut world = world_with_level(&["RH "]);

    let mut obstacles = world.query::<(&Obstacle, &Group, &Sprite, &BoxCollider, &ZIndex)>();
    let mut seen = 0;
    for (_, group, sprite, collider, z) in obstacles.iter(&world) {
        assert_eq!(group.name(), "obstacles");
        assert_eq!(z.0, 1);
        match sprite.tex_key.as_str() {
            "rock" => {
                assert_eq!(collider.size.x, TILE_SIZE);
                assert_eq!(collider.size.y, TILE_SIZE);
            }
            "house" => {
                assert_eq!(collider.size.x, HOUSE_SIZE);
                assert_eq!(collider.size.y, HOUSE_SIZE);
            }
            other => panic!("unexpected obstacle texture '{}'", other),
        }
        seen += 1;
    }
    assert_eq!(seen, 2);
}

#[test]
fn doors_land_in_the_portals_group_with_their_destination() {
    let mut world = world_with_level(&["D"]);

    let mut portals = world.query::<(&Portal, &Group, &Sprite, &ZIndex)>();
    let (portal, group, sprite, z) = portals.single(&world).unwrap();
    assert_eq!(group.name(), "portals");
    assert_eq!(portal.destination, "test");
    assert_eq!(sprite.tex_key, "door");
    assert_eq!(z.0, 2);
}

#[test]
fn three_rocks_spawn_at_the_expected_positions() {
    let mut world = world_with_level(&["RRR"]);

    let mut positions: Vec<(f32, f32)> = world
        .query::<(&Obstacle, &MapPosition)>()
        .iter(&world)
        .map(|(_, p)| (p.pos.x, p.pos.y))
        .collect();
    positions.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(positions, vec![(0.0, 0.0), (16.0, 0.0), (32.0, 0.0)]);
}

#[test]
fn building_twice_from_the_same_grid_yields_identical_rectangles() {
    let grid = ["RRRR", "R DR", "RH R", "RRRR"];

    let rects = |world: &mut World| -> Vec<(f32, f32, f32, f32)> {
        let mut out: Vec<(f32, f32, f32, f32)> = world
            .query::<(&MapPosition, &BoxCollider)>()
            .iter(world)
            .map(|(p, c)| {
                let rect = c.rect(p.pos);
                (rect.x, rect.y, rect.width, rect.height)
            })
            .collect();
        out.sort_by(|a, b| a.partial_cmp(b).unwrap());
        out
    };

    let mut first = world_with_level(&grid);
    let mut second = world_with_level(&grid);
    assert_eq!(rects(&mut first), rects(&mut second));
}

#[test]
fn spawning_records_the_level_signal() {
    let world = world_with_level(&["R"]);
    assert_eq!(
        world
            .resource::<WorldSignals>()
            .get_string("level")
            .unwrap(),
        "test"
    );
}

#[test]
fn shipped_level_registry_is_valid() {
    let registry = LevelRegistry::load_from_file(Path::new("./assets/levels/levels.json")).unwrap();
    assert_eq!(registry.active(), "town");
    assert_eq!(registry.get("town").unwrap().portal_to, "house");
    assert_eq!(registry.get("house").unwrap().portal_to, "town");
}

#[test]
fn missing_level_file_is_an_error() {
    let err = LevelRegistry::load_from_file(Path::new("./no-such-levels.json")).unwrap_err();
    assert!(err.contains("cannot read level file"));
}
