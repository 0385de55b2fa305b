//! High-level game state resources.
//!
//! [`GameState`] holds the authoritative current state; [`NextGameState`]
//! holds a pending transition request. The observer in
//! [`crate::events::gamestate`] applies pending transitions and runs the
//! matching enter hooks.

use bevy_ecs::prelude::Resource;

/// Discrete high-level states the game can be in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    /// Before any resources are loaded.
    #[default]
    Boot,
    /// Loading assets, config and the level registry.
    Setup,
    /// The main gameplay loop.
    Playing,
    /// Shutting down; the main loop exits on the next iteration.
    Quitting,
}

/// A requested next state, applied by the game-state observer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            current: GameStates::Boot,
        }
    }

    pub fn get(&self) -> &GameStates {
        &self.current
    }

    /// Update the current state immediately. Prefer requesting transitions
    /// via [`NextGameState`] so the enter hooks run.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

/// Intent to change to a new game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    pub fn new() -> Self {
        Self {
            next: NextGameStates::Unchanged,
        }
    }

    pub fn get(&self) -> &NextGameStates {
        &self.next
    }

    /// Mark a transition as pending; `check_pending_state` emits the event
    /// that makes the observer apply it.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}
