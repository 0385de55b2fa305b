//! High-level game setup and state enter hooks.
//!
//! These systems are registered by name in the
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore) and run by
//! the game-state observer: `setup` on entering
//! [`Setup`](crate::resources::gamestate::GameStates::Setup), `enter_play`
//! on entering [`Playing`](crate::resources::gamestate::GameStates::Playing),
//! `quit_game` on entering
//! [`Quitting`](crate::resources::gamestate::GameStates::Quitting).

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::camera::ScrollCamera;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::levels::LevelRegistry;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldsignals::WorldSignals;

/// Player speed in pixels per tick.
pub const PLAYER_SPEED: f32 = 5.0;
/// Player spawn point, the center of the reference viewport.
pub const PLAYER_SPAWN: (f32, f32) = (320.0, 240.0);
/// Player sprite and collider size.
pub const PLAYER_SIZE: (f32, f32) = (16.0, 32.0);
/// Draw layer of the characters group; painted under obstacles and portals.
pub const CHARACTER_Z: i32 = 0;

/// Load a texture or terminate with a diagnostic. There is no fallback art:
/// a missing asset is unrecoverable.
fn load_texture_or_exit(rl: &mut RaylibHandle, thread: &RaylibThread, path: &str) -> Texture2D {
    match rl.load_texture(thread, path) {
        Ok(texture) => texture,
        Err(message) => {
            log::error!("cannot load image {}: {}", path, message);
            std::process::exit(1);
        }
    }
}

/// Setup hook: camera, textures, and the level registry.
pub fn setup(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    config: Res<GameConfig>,
    mut rl: NonSendMut<RaylibHandle>,
    thread: NonSend<RaylibThread>,
) {
    commands.insert_resource(ScrollCamera::new(
        config.window_width as f32,
        config.window_height as f32,
        config.world_scale,
    ));

    // One texture per entity variant.
    let mut textures = TextureStore::new();
    for (key, path) in [
        ("player", "./assets/textures/player.png"),
        ("rock", "./assets/textures/rock.png"),
        ("house", "./assets/textures/house.png"),
        ("door", "./assets/textures/door.png"),
    ] {
        textures.insert(key, load_texture_or_exit(&mut rl, &thread, path));
    }

    // The level registry, plus one backdrop texture per level. A bad level
    // file is as fatal as a missing image.
    let mut registry = match LevelRegistry::load_from_file(&config.levels_path) {
        Ok(registry) => registry,
        Err(message) => {
            log::error!("{}", message);
            std::process::exit(1);
        }
    };
    let backgrounds: Vec<String> = registry
        .iter()
        .map(|(_, def)| def.background.clone())
        .collect();
    for key in backgrounds {
        if !textures.contains(&key) {
            let path = format!("./assets/textures/{}.png", key);
            textures.insert(key, load_texture_or_exit(&mut rl, &thread, &path));
        }
    }

    if let Some(start) = &config.start_level {
        if !registry.set_active(start) {
            log::error!("start level '{}' is not defined", start);
            std::process::exit(1);
        }
    }

    commands.insert_resource(textures);
    commands.insert_resource(registry);

    next_state.set(GameStates::Playing);
}

/// Play hook: build the active level, then drop the player in.
pub fn enter_play(
    mut commands: Commands,
    mut signals: ResMut<WorldSignals>,
    systems_store: Res<SystemsStore>,
) {
    let spawn_level = systems_store
        .get("spawn_level")
        .expect("spawn_level hook not registered");
    commands.run_system(spawn_level);

    let player = Player::new();
    signals.set_integer("health", player.health);
    signals.set_integer("lives", player.lives);
    signals.set_integer("items", player.inventory.len() as i32);

    let (x, y) = PLAYER_SPAWN;
    let (width, height) = PLAYER_SIZE;
    commands.spawn((
        Group::new("characters"),
        player,
        MapPosition::new(x, y),
        ZIndex(CHARACTER_Z),
        Sprite::new("player", width, height),
        BoxCollider::new(width, height),
        RigidBody::new(),
        InputControlled::new(
            Vector2 {
                x: 0.0,
                y: -PLAYER_SPEED,
            },
            Vector2 {
                x: 0.0,
                y: PLAYER_SPEED,
            },
            Vector2 {
                x: -PLAYER_SPEED,
                y: 0.0,
            },
            Vector2 {
                x: PLAYER_SPEED,
                y: 0.0,
            },
        ),
    ));

    log::info!("entering play at ({}, {})", x, y);
}

/// Quit hook: raise the signal the main loop exits on.
pub fn quit_game(mut signals: ResMut<WorldSignals>) {
    log::info!("quit requested");
    signals.set_flag("quit_game");
}
