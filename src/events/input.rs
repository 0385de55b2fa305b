//! Input action events.
//!
//! [`InputEvent`] is triggered for the edge-triggered gameplay actions;
//! held directional keys go through
//! [`InputState`](crate::resources::input::InputState) instead.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::player::Player;
use crate::resources::gamestate::{GameStates, NextGameState};

/// Logical input actions, abstracted from the physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Action key (default: Space). The shoot stub fires on release.
    Shoot,
    /// Quit request (default: Escape).
    Back,
}

/// Emitted when an input action is pressed or released.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    pub action: InputAction,
    pub pressed: bool,
}

/// React to edge-triggered input: fire the shoot stub, request quitting.
pub fn observe_input_event(
    trigger: On<InputEvent>,
    mut next_state: ResMut<NextGameState>,
    players: Query<&Player>,
) {
    let event = trigger.event();
    match event.action {
        InputAction::Shoot if !event.pressed => {
            for player in players.iter() {
                player.shoot();
            }
        }
        InputAction::Back if event.pressed => {
            next_state.set(GameStates::Quitting);
        }
        _ => {}
    }
}
