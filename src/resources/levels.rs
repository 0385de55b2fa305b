//! Named-level registry.
//!
//! Levels are ASCII grids over a fixed tile vocabulary, loaded once from a
//! JSON file and kept for the whole run. Exactly one level is *active*; a
//! portal contact swaps the active name and the level builder respawns the
//! tile entities from the new grid.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "start": "town",
//!   "levels": {
//!     "town": {
//!       "grid": ["RRRR", "R  R", "RDRR"],
//!       "background": "map_town",
//!       "portal_to": "house"
//!     }
//!   }
//! }
//! ```

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::Path;

/// Characters a level grid may contain. Anything else is rejected at load
/// time instead of being silently treated as empty ground.
pub const GRID_VOCABULARY: [char; 4] = ['R', 'H', 'D', ' '];

/// A single level: its tile grid, the texture key of its backdrop, and the
/// level its doors lead to.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelDef {
    pub grid: Vec<String>,
    pub background: String,
    pub portal_to: String,
}

#[derive(Debug, Deserialize)]
struct LevelFile {
    start: String,
    levels: FxHashMap<String, LevelDef>,
}

/// All known levels plus the name of the active one.
#[derive(Resource, Debug, Clone)]
pub struct LevelRegistry {
    levels: FxHashMap<String, LevelDef>,
    active: String,
}

impl LevelRegistry {
    /// Empty registry with a declared start level. Used by tests and by the
    /// JSON loader; `insert` validates every grid going in.
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            levels: FxHashMap::default(),
            active: start.into(),
        }
    }

    /// Add a level after validating its grid.
    pub fn insert(&mut self, name: impl Into<String>, def: LevelDef) -> Result<(), String> {
        let name = name.into();
        validate_grid(&def.grid).map_err(|e| format!("level '{}': {}", name, e))?;
        self.levels.insert(name, def);
        Ok(())
    }

    /// Parse a registry from JSON text, validating every grid, the start
    /// level, and every portal destination.
    pub fn from_json(text: &str) -> Result<Self, String> {
        let file: LevelFile =
            serde_json::from_str(text).map_err(|e| format!("invalid level file: {}", e))?;
        let mut registry = Self::new(file.start.clone());
        for (name, def) in file.levels {
            registry.insert(name, def)?;
        }
        if !registry.levels.contains_key(&file.start) {
            return Err(format!("start level '{}' is not defined", file.start));
        }
        for (name, def) in &registry.levels {
            if !registry.levels.contains_key(&def.portal_to) {
                return Err(format!(
                    "level '{}' portals to unknown level '{}'",
                    name, def.portal_to
                ));
            }
        }
        Ok(registry)
    }

    /// Load and validate a registry from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read level file {}: {}", path.display(), e))?;
        Self::from_json(&text)
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Switch the active level. Returns `false` (and leaves the active name
    /// untouched) when the name is unknown.
    pub fn set_active(&mut self, name: &str) -> bool {
        if self.levels.contains_key(name) {
            self.active = name.to_string();
            true
        } else {
            false
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn get(&self, name: &str) -> Option<&LevelDef> {
        self.levels.get(name)
    }

    pub fn active_def(&self) -> Option<&LevelDef> {
        self.levels.get(&self.active)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LevelDef)> {
        self.levels.iter()
    }
}

/// Reject grids with no rows, ragged rows, or characters outside the tile
/// vocabulary.
pub fn validate_grid(grid: &[String]) -> Result<(), String> {
    let Some(first) = grid.first() else {
        return Err("grid has no rows".to_string());
    };
    let width = first.chars().count();
    for (index, row) in grid.iter().enumerate() {
        let row_width = row.chars().count();
        if row_width != width {
            return Err(format!(
                "row {} is {} cells wide, expected {}",
                index, row_width, width
            ));
        }
        if let Some(bad) = row.chars().find(|c| !GRID_VOCABULARY.contains(c)) {
            return Err(format!("row {} contains unknown tile '{}'", index, bad));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(rows: &[&str]) -> Vec<String> {
        rows.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn valid_grid_passes() {
        assert!(validate_grid(&rows(&["RRR", "R D", "RHR"])).is_ok());
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert!(validate_grid(&[]).is_err());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = validate_grid(&rows(&["RRR", "RR"])).unwrap_err();
        assert!(err.contains("row 1"));
    }

    #[test]
    fn unknown_tiles_are_rejected() {
        let err = validate_grid(&rows(&["RXR"])).unwrap_err();
        assert!(err.contains('X'));
    }

    #[test]
    fn registry_parses_json() {
        let registry = LevelRegistry::from_json(
            r#"{
                "start": "town",
                "levels": {
                    "town": { "grid": ["RDR"], "background": "map_town", "portal_to": "house" },
                    "house": { "grid": ["RDR"], "background": "map_house", "portal_to": "town" }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(registry.active(), "town");
        assert_eq!(registry.get("house").unwrap().portal_to, "town");
    }

    #[test]
    fn registry_rejects_unknown_start() {
        let err = LevelRegistry::from_json(
            r#"{
                "start": "nowhere",
                "levels": {
                    "town": { "grid": ["R"], "background": "map_town", "portal_to": "town" }
                }
            }"#,
        )
        .unwrap_err();
        assert!(err.contains("nowhere"));
    }

    #[test]
    fn registry_rejects_dangling_portal() {
        let err = LevelRegistry::from_json(
            r#"{
                "start": "town",
                "levels": {
                    "town": { "grid": ["R"], "background": "map_town", "portal_to": "nowhere" }
                }
            }"#,
        )
        .unwrap_err();
        assert!(err.contains("portals to unknown level"));
    }

    #[test]
    fn registry_rejects_invalid_grid() {
        let err = LevelRegistry::from_json(
            r#"{
                "start": "town",
                "levels": {
                    "town": { "grid": ["R?"], "background": "map_town", "portal_to": "town" }
                }
            }"#,
        )
        .unwrap_err();
        assert!(err.contains("unknown tile"));
    }

    #[test]
    fn set_active_refuses_unknown_levels() {
        let mut registry = LevelRegistry::new("town");
        registry
            .insert(
                "town",
                LevelDef {
                    grid: rows(&["R"]),
                    background: "map_town".into(),
                    portal_to: "town".into(),
                },
            )
            .unwrap();
        assert!(!registry.set_active("nowhere"));
        assert_eq!(registry.active(), "town");
        assert!(registry.set_active("town"));
    }
}
