use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{DEFAULT_CIRCLE_RADIUS, DEFAULT_SHAPE_COLOR, DEFAULT_SHAPE_SIZE};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Application configuration persisted to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfigData {
    /// Width and height of newly created rectangles
    pub default_shape_size: [i32; 2],

    /// Radius of newly created circles
    pub default_circle_radius: i32,

    /// Outline color of shapes (sRGBA)
    pub shape_color: [f32; 4],

    /// Put a few undoable shapes on the drawing at startup
    pub seed_demo_drawing: bool,
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            default_shape_size: DEFAULT_SHAPE_SIZE,
            default_circle_radius: DEFAULT_CIRCLE_RADIUS,
            shape_color: DEFAULT_SHAPE_COLOR,
            seed_demo_drawing: true,
        }
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Result of loading config from disk
struct LoadConfigResult {
    data: AppConfigData,
    /// Error message if config was reset to defaults due to an error
    reset_reason: Option<String>,
}

/// Parse config file contents, falling back to defaults on error
fn parse_config(json: &str) -> LoadConfigResult {
    match serde_json::from_str(json) {
        Ok(data) => LoadConfigResult {
            data,
            reset_reason: None,
        },
        Err(e) => {
            warn!("Failed to parse config file: {}", e);
            LoadConfigResult {
                data: AppConfigData::default(),
                reset_reason: Some(format!("Configuration file was corrupted: {}", e)),
            }
        }
    }
}

/// Load configuration from disk
fn load_config(config_path: &std::path::Path) -> LoadConfigResult {
    if !config_path.exists() {
        info!("No config file found, using defaults");
        return LoadConfigResult {
            data: AppConfigData::default(),
            reset_reason: None,
        };
    }

    match std::fs::read_to_string(config_path) {
        Ok(json) => {
            let result = parse_config(&json);
            if result.reset_reason.is_none() {
                info!("Loaded config from {:?}", config_path);
            }
            result
        }
        Err(e) => {
            warn!("Failed to read config file: {}", e);
            LoadConfigResult {
                data: AppConfigData::default(),
                reset_reason: Some(format!("Could not read configuration file: {}", e)),
            }
        }
    }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    if let Err(e) = crate::paths::ensure_directories() {
        warn!("Failed to create application directories: {}", e);
    }

    let first_run = !config.config_path.exists();
    let result = load_config(&config.config_path);
    config.data = result.data;
    config.dirty = first_run;

    // Write out the defaults so they can be edited by hand
    if first_run {
        save_events.write(SaveConfigRequest);
    }

    if let Some(reason) = result.reset_reason {
        warn!("Using default configuration: {}", reason);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .add_message::<SaveConfigRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                save_config_system.run_if(on_message::<SaveConfigRequest>),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_data_default() {
        let data = AppConfigData::default();
        assert_eq!(data.default_shape_size, DEFAULT_SHAPE_SIZE);
        assert_eq!(data.default_circle_radius, DEFAULT_CIRCLE_RADIUS);
        assert!(data.seed_demo_drawing);
    }

    #[test]
    fn test_app_config_data_serialization() {
        let data = AppConfigData {
            default_shape_size: [40, 20],
            default_circle_radius: 12,
            shape_color: [0.5, 0.25, 1.0, 1.0],
            seed_demo_drawing: false,
        };

        let json = serde_json::to_string(&data).unwrap();
        let parsed: AppConfigData = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, data);
    }

    #[test]
    fn test_parse_config_fills_missing_fields() {
        let result = parse_config(r#"{ "default_circle_radius": 7 }"#);

        assert!(result.reset_reason.is_none());
        assert_eq!(result.data.default_circle_radius, 7);
        assert_eq!(result.data.default_shape_size, DEFAULT_SHAPE_SIZE);
    }

    #[test]
    fn test_parse_config_corrupted_resets_to_defaults() {
        let result = parse_config("{ not json");

        assert_eq!(result.data, AppConfigData::default());
        assert!(
            result
                .reset_reason
                .as_deref()
                .is_some_and(|reason| reason.starts_with("Configuration file was corrupted"))
        );
    }

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("sketchbook-config-that-does-not-exist.json");
        let result = load_config(&path);

        assert!(result.reset_reason.is_none());
        assert_eq!(result.data, AppConfigData::default());
    }
}
