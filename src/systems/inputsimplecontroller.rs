//! Simple input-to-velocity controller.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! applies directional velocities to entities with an
//! [`InputControlled`](crate::components::inputcontrolled::InputControlled)
//! component. Axes are independent and diagonal movement is not normalized,
//! matching the reference's per-axis speed model.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::inputcontrolled::InputControlled;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;

/// Update each controlled entity's `RigidBody` velocity from the held keys.
pub fn input_simple_controller(
    mut query: Query<(&InputControlled, &mut RigidBody)>,
    input: Res<InputState>,
) {
    for (controlled, mut body) in query.iter_mut() {
        body.stop();

        let mut velocity = Vector2::zero();
        if input.move_up.active {
            velocity += controlled.up_velocity;
        }
        if input.move_down.active {
            velocity += controlled.down_velocity;
        }
        if input.move_left.active {
            velocity += controlled.left_velocity;
        }
        if input.move_right.active {
            velocity += controlled.right_velocity;
        }

        body.set_horizontal(velocity.x);
        body.set_vertical(velocity.y);
    }
}
