use bevy_ecs::prelude::Component;

/// Tag naming the collection an entity belongs to.
///
/// The game uses three groups: `"characters"`, `"obstacles"` and
/// `"portals"`. Level transitions despawn the latter two by name, so every
/// entity spawned by the level builder must carry its group.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Group(String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}
