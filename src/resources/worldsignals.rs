//! Global signal storage resource.
//!
//! [`WorldSignals`] is a world-wide key/value map for cross-system
//! communication: the quit flag, the active level name, and the player
//! stats shown by the debug overlay all live here.

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

/// Global signals: integers, strings, and presence-only flags.
#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    integers: FxHashMap<String, i32>,
    strings: FxHashMap<String, String>,
    flags: FxHashSet<String>,
}

impl WorldSignals {
    /// Set an integer signal value.
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }

    /// Get an integer signal by key.
    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }

    /// Set a string signal value.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// Get a string signal by key.
    pub fn get_string(&self, key: &str) -> Option<&String> {
        self.strings.get(key)
    }

    /// Mark a flag as present/true.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }

    /// Check whether a flag is present/true.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}
