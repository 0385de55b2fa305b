//! Game configuration resource.
//!
//! Settings loaded from an INI file, with safe defaults when the file or a
//! key is missing.
//!
//! # Configuration file format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 60
//!
//! [world]
//! scale = 32
//!
//! [levels]
//! path = ./assets/levels/levels.json
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_WORLD_SCALE: f32 = 32.0;
const DEFAULT_LEVELS_PATH: &str = "./assets/levels/levels.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Window, world and level-registry settings.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second; movement is expressed per tick at this rate.
    pub target_fps: u32,
    /// World size as a multiple of the window size.
    pub world_scale: f32,
    /// Path to the level registry JSON file.
    pub levels_path: PathBuf,
    /// Start level override (from the CLI); `None` uses the registry's own.
    pub start_level: Option<String>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            world_scale: DEFAULT_WORLD_SCALE,
            levels_path: PathBuf::from(DEFAULT_LEVELS_PATH),
            start_level: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load settings from the INI file. Missing values keep their current
    /// (default) values; an unreadable file is an error the caller may treat
    /// as non-fatal.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("failed to load config file: {}", e))?;

        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(scale) = config.getfloat("world", "scale").ok().flatten() {
            self.world_scale = scale as f32;
        }
        if let Some(path) = config.get("levels", "path") {
            self.levels_path = PathBuf::from(path);
        }

        info!(
            "loaded config: {}x{} window, fps={}, world scale={}, levels={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.world_scale,
            self.levels_path.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_reference_resolution() {
        let config = GameConfig::new();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 600);
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.world_scale, 32.0);
    }

    #[test]
    fn missing_file_keeps_defaults() {
        let mut config = GameConfig::with_path("./no-such-config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_width, 800);
    }
}
