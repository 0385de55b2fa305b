//! Time update.
//!
//! Called once per frame from the main loop with the unscaled frame delta.
//! Movement does not consume this (it is fixed-tick); the counters feed
//! logging and the debug overlay.

use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance elapsed time and the frame counter.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut time = world.resource_mut::<WorldTime>();
    time.elapsed += dt;
    time.delta = dt;
    time.frame_count += 1;
}
