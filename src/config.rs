//! Configuration persistence for floorwatch settings

use cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};

use crate::domain::ViewMode;

/// Application configuration persisted between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, CosmicConfigEntry)]
#[version = 1]
pub struct FloorwatchConfig {
    /// Path of the floor-plan raster shown behind the map
    pub floor_plan_path: String,
    /// Drags no larger than this (logical units, either side) are discarded
    #[serde(default = "default_min_box_size")]
    pub min_box_size: f32,
    /// File name proposed by the export dialog
    pub export_file_name: String,
    /// View shown at startup
    pub default_view_mode: ViewMode,
    /// Hide machines failing the active filters instead of fading them
    #[serde(default)]
    pub hide_dimmed: bool,
    /// Whether flow lines are drawn at startup
    #[serde(default = "default_show_flows")]
    pub show_flows: bool,
}

fn default_min_box_size() -> f32 {
    5.0
}

fn default_show_flows() -> bool {
    true
}

impl FloorwatchConfig {
    /// Configuration ID for cosmic-config
    pub const ID: &'static str = "io.github.floorwatch";

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        match cosmic_config::Config::new(Self::ID, Self::VERSION) {
            Ok(config) => match Self::get_entry(&config) {
                Ok(entry) => entry,
                Err((errs, entry)) => {
                    log::warn!("Error loading config, using defaults: {:?}", errs);
                    entry
                }
            },
            Err(err) => {
                log::warn!("Could not create config handler: {:?}", err);
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) {
        match cosmic_config::Config::new(Self::ID, Self::VERSION) {
            Ok(config) => {
                if let Err(err) = self.write_entry(&config) {
                    log::error!("Failed to save config: {:?}", err);
                }
            }
            Err(err) => {
                log::error!("Could not create config handler for saving: {:?}", err);
            }
        }
    }
}

impl Default for FloorwatchConfig {
    fn default() -> Self {
        Self {
            floor_plan_path: "ww.jpg".to_string(),
            min_box_size: default_min_box_size(),
            export_file_name: "factory_config.json".to_string(),
            default_view_mode: ViewMode::Map,
            hide_dimmed: false,
            show_flows: default_show_flows(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FloorwatchConfig::default();
        assert_eq!(config.min_box_size, 5.0);
        assert_eq!(config.export_file_name, "factory_config.json");
        assert_eq!(config.default_view_mode, ViewMode::Map);
        assert!(config.show_flows);
        assert!(!config.hide_dimmed);
    }
}
