//! Registry for dynamically addressable systems.
//!
//! State enter hooks and the level spawner are registered under string keys
//! so observers can look them up and run them via
//! [`bevy_ecs::system::SystemId`] without tight coupling.

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

/// Map of string names to registered system IDs.
#[derive(Resource, Default)]
pub struct SystemsStore {
    map: FxHashMap<String, SystemId>,
}

impl SystemsStore {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Register a system ID under a human-readable name.
    pub fn insert(&mut self, name: impl Into<String>, id: SystemId) {
        self.map.insert(name.into(), id);
    }

    /// Look up a system ID by name.
    pub fn get(&self, name: &str) -> Option<SystemId> {
        self.map.get(name).copied()
    }
}
