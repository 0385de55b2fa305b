//! Overworld main entry point.
//!
//! A top-down 2D tile-world game using:
//! - **raylib** for windowing, textures, and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! The player walks over a scrolling map, is stopped by rocks and houses,
//! and steps through doors to swap between the levels defined in
//! `assets/levels/levels.json`.
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, the ECS world, and resources
//! 2. Register state enter hooks and observers, then request `Setup`
//! 3. Each frame: poll input, apply velocities, move, resolve collisions
//!    and portals, render through the scroll camera
//! 4. Exit on window close or the `quit_game` signal

mod components;
mod events;
mod game;
mod resources;
mod systems;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use crate::events::collision::observe_collision;
use crate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use crate::events::input::observe_input_event;
use crate::events::level::observe_level_transition;
use crate::events::player::{observe_player_damage, observe_player_defeated};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::camera::camera_follow;
use crate::systems::collision::collision_resolution;
use crate::systems::gamestate::{check_pending_state, state_is_playing};
use crate::systems::input::update_input_state;
use crate::systems::inputsimplecontroller::input_simple_controller;
use crate::systems::levelbuilder::spawn_level;
use crate::systems::movement::movement;
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;

/// Overworld: a top-down tile-world game
#[derive(Parser)]
#[command(version, about = "A top-down 2D tile-world game with a scrolling camera and portal-linked maps")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Start on a specific level instead of the registry's default.
    #[arg(long, value_name = "NAME")]
    level: Option<String>,

    /// Start with the debug overlay enabled (F11 toggles it at runtime).
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config);
    if let Err(message) = config.load_from_file() {
        log::warn!("using default configuration: {}", message);
    }
    if cli.level.is_some() {
        config.start_level = cli.level;
    }

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title("Overworld")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled by the input system, not raylib.
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(InputState::default());
    world.insert_resource(ScreenSize {
        w: config.window_width as i32,
        h: config.window_height as i32,
    });
    world.insert_resource(config);
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    // State enter hooks and the level spawner, addressable by name.
    let mut systems_store = SystemsStore::new();
    systems_store.insert("setup", world.register_system(game::setup));
    systems_store.insert("enter_play", world.register_system(game::enter_play));
    systems_store.insert("quit_game", world.register_system(game::quit_game));
    systems_store.insert("spawn_level", world.register_system(spawn_level));
    world.insert_resource(systems_store);

    world.spawn(Observer::new(observe_gamestate_change_event));
    world.spawn(Observer::new(observe_level_transition));
    world.spawn(Observer::new(observe_collision));
    world.spawn(Observer::new(observe_input_event));
    world.spawn(Observer::new(observe_player_damage));
    world.spawn(Observer::new(observe_player_defeated));
    world.spawn(Observer::new(switch_debug_observer));
    // Observers must exist before any event fires.
    world.flush();

    {
        let mut next_state = world.resource_mut::<NextGameState>();
        next_state.set(GameStates::Setup);
    }
    world.trigger(GameStateChangedEvent {});

    // --------------- Schedule ---------------
    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(check_pending_state);
    update.add_systems(input_simple_controller.after(update_input_state));
    // The camera tracks the pre-move position: follow runs before movement.
    update.add_systems(
        camera_follow
            .run_if(state_is_playing)
            .after(input_simple_controller)
            .before(movement),
    );
    update.add_systems(movement.after(input_simple_controller));
    update.add_systems(collision_resolution.after(movement));
    update.add_systems(render_system.after(collision_resolution));
    update
        .initialize(&mut world)
        .expect("failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<WorldSignals>().has_flag("quit_game")
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }
}
