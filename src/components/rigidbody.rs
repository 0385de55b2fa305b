//! Kinematic body component.
//!
//! [`RigidBody`] stores the velocity applied by the movement system. The
//! game runs on a fixed tick (the loop is throttled by the target FPS), so
//! the velocity is expressed in pixels per tick and added to the position
//! once per frame with no delta-time scaling.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Velocity in pixels per tick.
///
/// Movement is unconditional: the movement system applies the velocity with
/// no collision awareness, and the collision system reverts the position
/// afterwards when the move turns out to be illegal.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a body at rest.
    pub fn new() -> Self {
        Self {
            velocity: Vector2::zero(),
        }
    }

    /// Set the horizontal velocity, leaving the vertical axis untouched.
    pub fn set_horizontal(&mut self, speed: f32) {
        self.velocity.x = speed;
    }

    /// Set the vertical velocity, leaving the horizontal axis untouched.
    pub fn set_vertical(&mut self, speed: f32) {
        self.velocity.y = speed;
    }

    /// Zero both axes.
    pub fn stop(&mut self) {
        self.velocity = Vector2::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_body_is_at_rest() {
        let body = RigidBody::new();
        assert_eq!(body.velocity.x, 0.0);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn axis_setters_are_independent() {
        let mut body = RigidBody::new();
        body.set_horizontal(5.0);
        body.set_vertical(-3.0);
        assert_eq!(body.velocity.x, 5.0);
        assert_eq!(body.velocity.y, -3.0);

        body.set_horizontal(0.0);
        assert_eq!(body.velocity.x, 0.0);
        assert_eq!(body.velocity.y, -3.0);
    }

    #[test]
    fn stop_zeroes_both_axes() {
        let mut body = RigidBody::new();
        body.set_horizontal(5.0);
        body.set_vertical(5.0);
        body.stop();
        assert_eq!(body.velocity.x, 0.0);
        assert_eq!(body.velocity.y, 0.0);
    }
}
