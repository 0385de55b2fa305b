//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes it
//! to systems via [`InputState`]. The bindings match the reference input
//! surface: arrow keys move, Space fires the shoot stub on release, Escape
//! quits, F11 toggles the debug overlay.

use bevy_ecs::prelude::*;
use raylib::prelude::KeyboardKey;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is held this frame.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    /// Whether the key went up this frame.
    pub just_released: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_up: BoolState,
    pub move_down: BoolState,
    pub move_left: BoolState,
    pub move_right: BoolState,
    /// Action key; the shoot stub fires on release.
    pub action_shoot: BoolState,
    /// Quit request.
    pub action_back: BoolState,
    /// Debug overlay toggle.
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            move_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            move_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            move_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            action_shoot: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            action_back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}
