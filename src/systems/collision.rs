//! Collision resolution and portal detection.
//!
//! Runs right after movement. Player-versus-obstacle overlaps are resolved
//! with a hard stop: the just-applied velocity is subtracted back out of the
//! position and both axes are zeroed (no sliding). Player-versus-portal
//! overlaps trigger at most one level transition per tick.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::Obstacle;
use crate::components::player::Player;
use crate::components::portal::Portal;
use crate::components::rigidbody::RigidBody;
use crate::events::collision::CollisionEvent;
use crate::events::level::LevelTransitionEvent;

/// Resolve player collisions for this tick.
pub fn collision_resolution(
    mut commands: Commands,
    mut players: Query<(Entity, &mut MapPosition, &mut RigidBody, &BoxCollider), With<Player>>,
    obstacles: Query<(Entity, &MapPosition, &BoxCollider), (With<Obstacle>, Without<Player>)>,
    portals: Query<(&MapPosition, &BoxCollider, &Portal), Without<Player>>,
) {
    for (player, mut position, mut body, collider) in players.iter_mut() {
        let blocked = obstacles
            .iter()
            .find(|(_, obstacle_position, obstacle_collider)| {
                collider.overlaps(position.pos, obstacle_collider, obstacle_position.pos)
            });
        if let Some((obstacle, _, _)) = blocked {
            // Hard stop: undo the move the obstacle made illegal.
            position.pos = position.pos - body.velocity;
            body.stop();
            commands.trigger(CollisionEvent { player, obstacle });
        }

        let entered = portals.iter().find(|(portal_position, portal_collider, _)| {
            collider.overlaps(position.pos, portal_collider, portal_position.pos)
        });
        if let Some((_, _, portal)) = entered {
            commands.trigger(LevelTransitionEvent {
                destination: portal.destination.clone(),
            });
        }
    }
}
