//! Input polling system.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame,
//! writes the result into [`crate::resources::input::InputState`], and
//! emits events for the edge-triggered actions: the shoot stub fires on the
//! action key's *release* (reference behavior), quitting on Escape's press,
//! and the debug toggle on F11's press.

use bevy_ecs::prelude::*;

use crate::events::input::{InputAction, InputEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let poll = |state: &mut BoolState| {
        state.active = rl.is_key_down(state.key_binding);
        state.just_pressed = rl.is_key_pressed(state.key_binding);
        state.just_released = rl.is_key_released(state.key_binding);
    };

    poll(&mut input.move_up);
    poll(&mut input.move_down);
    poll(&mut input.move_left);
    poll(&mut input.move_right);
    poll(&mut input.action_shoot);
    poll(&mut input.action_back);
    poll(&mut input.mode_debug);

    if input.action_shoot.just_released {
        commands.trigger(InputEvent {
            action: InputAction::Shoot,
            pressed: false,
        });
    }
    if input.action_back.just_pressed {
        commands.trigger(InputEvent {
            action: InputAction::Back,
            pressed: true,
        });
    }
    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
