//! Level transition event and observer.
//!
//! Portal contact triggers a [`LevelTransitionEvent`]; the observer performs
//! the swap as one atomic step: despawn the current level's `"obstacles"`
//! and `"portals"` groups, switch the registry's active level, and re-run
//! the `"spawn_level"` hook to rebuild from the new grid. The player entity
//! and its position survive the swap.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::group::Group;
use crate::resources::levels::LevelRegistry;
use crate::resources::systemsstore::SystemsStore;

/// Fired when the player steps onto a portal.
#[derive(Event, Debug, Clone)]
pub struct LevelTransitionEvent {
    /// Name of the level to switch to.
    pub destination: String,
}

/// Swap the active level's entity collections for the destination's.
pub fn observe_level_transition(
    trigger: On<LevelTransitionEvent>,
    mut commands: Commands,
    mut registry: ResMut<LevelRegistry>,
    entities: Query<(Entity, &Group)>,
    systems_store: Res<SystemsStore>,
) {
    let destination = trigger.event().destination.clone();
    if !registry.set_active(&destination) {
        warn!("portal leads to unknown level '{}'", destination);
        return;
    }

    for (entity, group) in entities.iter() {
        if matches!(group.name(), "obstacles" | "portals") {
            commands.entity(entity).despawn();
        }
    }

    info!("level transition -> '{}'", destination);
    let spawn_level = systems_store
        .get("spawn_level")
        .expect("spawn_level hook not registered");
    commands.run_system(spawn_level);
}
