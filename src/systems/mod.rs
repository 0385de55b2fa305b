//! Engine systems.
//!
//! ECS systems that advance input, simulation, and rendering each tick.
//!
//! Submodules overview
//! - [`camera`] – recenter the scroll camera on the player
//! - [`collision`] – hard-stop resolution and portal detection
//! - [`gamestate`] – check for pending state transitions
//! - [`input`] – read hardware input into [`crate::resources::input::InputState`]
//! - [`inputsimplecontroller`] – translate input state into velocity
//! - [`levelbuilder`] – plan and spawn levels from ASCII grids
//! - [`movement`] – apply per-tick velocities to positions
//! - [`render`] – draw the world and debug overlay using Raylib
//! - [`time`] – update elapsed time and the frame counter

pub mod camera;
pub mod collision;
pub mod gamestate;
pub mod input;
pub mod inputsimplecontroller;
pub mod levelbuilder;
pub mod movement;
pub mod render;
pub mod time;
