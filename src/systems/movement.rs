use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;

/// Advance every kinematic entity by its per-tick velocity.
///
/// Movement is unconditional and has no collision awareness; the collision
/// system runs afterwards and reverts any move that ended up inside an
/// obstacle. Stationary entities simply have no `RigidBody`.
pub fn movement(mut query: Query<(&mut MapPosition, &RigidBody)>) {
    for (mut position, body) in query.iter_mut() {
        position.pos = position.pos + body.velocity;
    }
}
