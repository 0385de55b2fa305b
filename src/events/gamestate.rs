//! Game state transition event and observer.
//!
//! Systems request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]; emitting a [`GameStateChangedEvent`] makes
//! [`observe_gamestate_change_event`] apply the transition and run the new
//! state's enter hook from the [`SystemsStore`]. This keeps the intent to
//! change state separate from the mechanics of running setup/teardown.

use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

/// Signal that a pending game state transition should be applied.
///
/// Carries no data: the pending state lives in [`NextGameState`]. Emitting
/// this with no pending transition is a no-op.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Apply a pending game state transition and run its enter hook.
///
/// Hooks are looked up in [`SystemsStore`] under well-known names:
/// `"setup"` for [`GameStates::Setup`], `"enter_play"` for
/// [`GameStates::Playing`], `"quit_game"` for [`GameStates::Quitting`].
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    mut state: ResMut<GameState>,
    systems_store: Res<SystemsStore>,
) {
    let pending = next_state.get().clone();
    match pending {
        NextGameStates::Pending(new_state) => {
            info!("state {:?} -> {:?}", state.get(), new_state);
            state.set(new_state.clone());
            next_state.reset();

            let hook = match new_state {
                GameStates::Boot => None,
                GameStates::Setup => Some("setup"),
                GameStates::Playing => Some("enter_play"),
                GameStates::Quitting => Some("quit_game"),
            };
            if let Some(name) = hook {
                let id = systems_store
                    .get(name)
                    .unwrap_or_else(|| panic!("{} hook not registered", name));
                commands.run_system(id);
            }
        }
        NextGameStates::Unchanged => {
            debug!("no state change pending");
        }
    }
}
