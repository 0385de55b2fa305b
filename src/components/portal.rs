use bevy_ecs::prelude::Component;

/// Stationary entity that triggers a level transition on contact.
///
/// Carries the name of the destination level in the
/// [`LevelRegistry`](crate::resources::levels::LevelRegistry).
#[derive(Component, Clone, Debug)]
pub struct Portal {
    pub destination: String,
}

impl Portal {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
        }
    }
}
