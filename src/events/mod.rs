//! Event types and observers.
//!
//! Domain events exchanged across systems plus the observers that react to
//! them, so systems can communicate without direct dependencies.
//!
//! Submodules:
//! - [`collision`] – the player was hard-stopped by an obstacle
//! - [`gamestate`] – state transition notifications and enter hooks
//! - [`input`] – edge-triggered input actions (shoot, quit)
//! - [`level`] – portal-triggered level transitions
//! - [`player`] – damage application and defeat notification
//! - [`switchdebug`] – debug overlay toggle

pub mod collision;
pub mod gamestate;
pub mod input;
pub mod level;
pub mod player;
pub mod switchdebug;
