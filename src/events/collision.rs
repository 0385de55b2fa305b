//! Collision event.
//!
//! The collision system emits [`CollisionEvent`] whenever the player is
//! hard-stopped by an obstacle. Gameplay currently has no consequence beyond
//! the stop itself; the observer keeps the hit visible in the logs.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

/// Fired when the player's movement is reverted by an obstacle.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub player: Entity,
    pub obstacle: Entity,
}

/// Log the hit at debug level.
pub fn observe_collision(trigger: On<CollisionEvent>) {
    let event = trigger.event();
    log::debug!("player {:?} blocked by {:?}", event.player, event.obstacle);
}
