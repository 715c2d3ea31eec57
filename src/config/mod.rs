//! Garden configuration, read from a RON file at startup.
//!
//! A missing file means defaults. A malformed file is logged and also falls
//! back to defaults so a bad edit never blocks check-ins.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::garden::PlacementRules;
use crate::shared::*;

pub const DEFAULT_CONFIG_FILE: &str = "kirakira.ron";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenConfig {
    pub slots_per_shelf: i32,
    pub shelves_per_room: i32,
    pub random_placement_attempts: u32,
    pub scan_rooms: i32,
    pub save_dir: PathBuf,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            slots_per_shelf: DEFAULT_SLOTS_PER_SHELF,
            shelves_per_room: DEFAULT_SHELVES_PER_ROOM,
            random_placement_attempts: crate::garden::DEFAULT_RANDOM_ATTEMPTS,
            scan_rooms: crate::garden::DEFAULT_SCAN_ROOMS,
            save_dir: PathBuf::from("saves"),
        }
    }
}

impl GardenConfig {
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: GardenConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Reads `path` if it exists. Any problem is logged and defaults are used.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("[Config] {} not found; using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                info!("[Config] Loaded {}", path.display());
                config
            }
            Err(e) => {
                warn!("[Config] Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.slots_per_shelf < 1 || self.shelves_per_room < 1 {
            return Err(ConfigError::Invalid(format!(
                "room must have at least one shelf and slot (got {} slots x {} shelves)",
                self.slots_per_shelf, self.shelves_per_room
            )));
        }
        if self.scan_rooms < 0 {
            return Err(ConfigError::Invalid("scan_rooms must not be negative".into()));
        }
        Ok(())
    }

    pub fn layout(&self) -> GardenLayout {
        GardenLayout::new(self.slots_per_shelf, self.shelves_per_room)
    }

    pub fn placement_rules(&self) -> PlacementRules {
        PlacementRules {
            layout: self.layout(),
            random_attempts: self.random_placement_attempts,
            scan_rooms: self.scan_rooms,
        }
    }
}

/// Where the config file lives. Inserted by the host before the plugin runs.
#[derive(Resource, Debug, Clone)]
pub struct ConfigPath(pub PathBuf);

impl Default for ConfigPath {
    fn default() -> Self {
        Self(PathBuf::from(DEFAULT_CONFIG_FILE))
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ConfigPath>()
            .init_resource::<GardenConfig>()
            .add_systems(OnEnter(AppState::Loading), load_config);
    }
}

pub fn load_config(path: Res<ConfigPath>, mut config: ResMut<GardenConfig>) {
    *config = GardenConfig::load_or_default(&path.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_ron_fills_in_defaults() {
        let config = GardenConfig::from_ron("(slots_per_shelf: 5)").unwrap();
        assert_eq!(config.slots_per_shelf, 5);
        assert_eq!(config.shelves_per_room, DEFAULT_SHELVES_PER_ROOM);
        assert_eq!(config.layout().elements_per_room(), 20);
    }

    #[test]
    fn zero_sized_room_is_rejected() {
        let err = GardenConfig::from_ron("(shelves_per_room: 0)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(
            GardenConfig::from_ron("slots_per_shelf = 5"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = GardenConfig::load_or_default(Path::new("/definitely/not/here.ron"));
        assert_eq!(config, GardenConfig::default());
    }

    #[test]
    fn placement_rules_follow_config() {
        let config = GardenConfig {
            random_placement_attempts: 7,
            ..Default::default()
        };
        let rules = config.placement_rules();
        assert_eq!(rules.random_attempts, 7);
        assert_eq!(rules.layout, GardenLayout::default());
    }
}
