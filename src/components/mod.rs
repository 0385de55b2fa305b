//! ECS components for entities.
//!
//! Entities are built by composing capabilities instead of inheriting from a
//! base class: anything with a [`rigidbody::RigidBody`] moves, anything with
//! a [`sprite::Sprite`] draws, anything with a [`boxcollider::BoxCollider`]
//! collides. The concrete kinds (player, rock, house, door) are just
//! different component bundles.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned rectangular collider
//! - [`group`] – tag component for grouping entities by name
//! - [`inputcontrolled`] – keyboard-driven movement intent
//! - [`mapposition`] – world-space position for an entity
//! - [`obstacle`] – marker for impassable stationary entities
//! - [`player`] – hero stats (health, lives, inventory)
//! - [`portal`] – level-transition trigger with a destination
//! - [`rigidbody`] – per-tick velocity
//! - [`sprite`] – 2D sprite rendering component
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod boxcollider;
pub mod group;
pub mod inputcontrolled;
pub mod mapposition;
pub mod obstacle;
pub mod player;
pub mod portal;
pub mod rigidbody;
pub mod sprite;
pub mod zindex;
