//! ECS resources made available to systems.
//!
//! Long-lived data injected into the ECS world: input state, timing, the
//! camera, asset stores, the level registry, and configuration.
//!
//! Overview
//! - [`camera`] – scrolling camera clamped to the world bounds
//! - [`debugmode`] – presence toggles the debug overlay
//! - [`gameconfig`] – settings loaded from `config.ini`
//! - [`gamestate`] – authoritative and pending high-level game state
//! - [`input`] – per-frame keyboard state of the keys the game uses
//! - [`levels`] – named-level registry built from a JSON file
//! - [`screensize`] – window dimensions in pixels
//! - [`systemsstore`] – registry of systems addressable by name
//! - [`texturestore`] – loaded textures keyed by string IDs
//! - [`worldsignals`] – global key/value signals
//! - [`worldtime`] – elapsed time and frame counter

pub mod camera;
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod levels;
pub mod screensize;
pub mod systemsstore;
pub mod texturestore;
pub mod worldsignals;
pub mod worldtime;
