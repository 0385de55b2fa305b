use bevy_ecs::prelude::Component;

/// Impassable stationary entity (rock or house). The collision system
/// reverts any player movement that ends up overlapping one of these.
#[derive(Component, Clone, Copy, Debug)]
pub struct Obstacle;
