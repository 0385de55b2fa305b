//! Input-controlled movement component.
//!
//! [`InputControlled`] describes how an entity responds to the directional
//! keys. The [`input_simple_controller`](crate::systems::inputsimplecontroller::input_simple_controller)
//! system reads the shared input state and writes the matching velocities
//! into the entity's [`RigidBody`](crate::components::rigidbody::RigidBody).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Movement intent derived from the player's directional keys.
///
/// Each field stores the velocity to apply while the corresponding key is
/// held. Opposite keys cancel out; axes are independent and diagonals are
/// not normalized.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    pub up_velocity: Vector2,
    pub down_velocity: Vector2,
    pub left_velocity: Vector2,
    pub right_velocity: Vector2,
}

impl InputControlled {
    pub fn new(up: Vector2, down: Vector2, left: Vector2, right: Vector2) -> Self {
        Self {
            up_velocity: up,
            down_velocity: down,
            left_velocity: left,
            right_velocity: right,
        }
    }
}
