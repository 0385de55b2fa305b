//! Event and observer to toggle the debug overlay.
//!
//! Emitting a [`SwitchDebugEvent`] flips the presence of the
//! [`DebugMode`] resource; the renderer gates its overlay on it.

use crate::resources::debugmode::DebugMode;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

/// Toggle the [`DebugMode`] resource on/off.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Flip the presence of [`DebugMode`].
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    if debug_mode.is_some() {
        log::debug!("debug overlay off");
        commands.remove_resource::<DebugMode>();
    } else {
        log::debug!("debug overlay on");
        commands.insert_resource(DebugMode {});
    }
}
