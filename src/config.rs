use clap::Parser;
use config::{
    Config as ConfigCrate, // Need this for builder
    ConfigError as ConfigCrateError,
    Environment,
    File,
    Map,
    Source,
    Value,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::geometry::MapScale;

// Farm footprint in feet and the canvas it is drawn on (2 px per foot).
const DEFAULT_MAP_WIDTH_FEET: f64 = 455.0;
const DEFAULT_MAP_HEIGHT_FEET: f64 = 125.0;
const DEFAULT_CANVAS_WIDTH_PX: f64 = 910.0;
const DEFAULT_CANVAS_HEIGHT_PX: f64 = 250.0;
const DEFAULT_MIN_RADIUS_PX: f64 = 8.0;
const DEFAULT_MAX_RADIUS_PX: f64 = 50.0;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_PLACEMENTS_FILE: &str = "placements.json";
const DEFAULT_CATALOG_FILE: &str = "plants.json";
const DEFAULT_LOG_FILE: &str = "orchard-map.log";
const ENV_PREFIX: &str = "ORCHARD_MAP";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Failed to determine config directory")]
    DirectoryNotFound,
    #[error("Validation error: {0}")]
    ValidationError(String),
}

// Optional fields allow for layered config (defaults -> file -> env -> args).
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    placements_file: Option<PathBuf>,
    catalog_file: Option<PathBuf>,
    map_width_feet: Option<f64>,
    map_height_feet: Option<f64>,
    canvas_width_px: Option<f64>,
    canvas_height_px: Option<f64>,
    min_radius_px: Option<f64>,
    max_radius_px: Option<f64>,
    log_file: Option<PathBuf>,
    log_level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub placements_file: PathBuf,
    pub catalog_file: PathBuf,
    pub map_width_feet: f64,
    pub map_height_feet: f64,
    pub canvas_width_px: f64,
    pub canvas_height_px: f64,
    pub min_radius_px: f64,
    pub max_radius_px: f64,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();
        AppConfig {
            placements_file: data_dir.join(DEFAULT_PLACEMENTS_FILE),
            catalog_file: data_dir.join(DEFAULT_CATALOG_FILE),
            map_width_feet: DEFAULT_MAP_WIDTH_FEET,
            map_height_feet: DEFAULT_MAP_HEIGHT_FEET,
            canvas_width_px: DEFAULT_CANVAS_WIDTH_PX,
            canvas_height_px: DEFAULT_CANVAS_HEIGHT_PX,
            min_radius_px: DEFAULT_MIN_RADIUS_PX,
            max_radius_px: DEFAULT_MAX_RADIUS_PX,
            log_file: data_dir.join(DEFAULT_LOG_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn map_scale(&self) -> MapScale {
        MapScale::from_footprint(
            self.map_width_feet,
            self.map_height_feet,
            self.canvas_width_px,
            self.canvas_height_px,
            self.min_radius_px,
            self.max_radius_px,
        )
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Farm map editor for the orchard", long_about = None)]
pub struct CliArgs {
    /// Path to the placed-plants JSON file
    pub placements_file: Option<PathBuf>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the plant catalog JSON file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[arg(long)]
    pub map_width_feet: Option<f64>,
    #[arg(long)]
    pub map_height_feet: Option<f64>,
    #[arg(long)]
    pub canvas_width_px: Option<f64>,
    #[arg(long)]
    pub canvas_height_px: Option<f64>,
    #[arg(long)]
    pub min_radius_px: Option<f64>,
    #[arg(long)]
    pub max_radius_px: Option<f64>,
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub debug_config: bool,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "orchard-map")
}

fn default_data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_config_file() -> Result<PathBuf, ConfigError> {
    project_dirs()
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .ok_or(ConfigError::DirectoryNotFound)
}

/// Loads configuration from all sources: args > env > file > defaults.
pub fn load_config(args: &CliArgs) -> Result<AppConfig, ConfigError> {
    let env_source = Environment::with_prefix(ENV_PREFIX).separator("__");
    // Missing env vars are fine; collect only fails on malformed ones.
    let env_map: Map<String, Value> = env_source.collect().unwrap_or_else(|_| Map::new());

    build_config_from_args(args, Some(env_map))
}

// Separate function to allow testing with specific args and override sources
fn build_config_from_args(
    args: &CliArgs,
    override_source: Option<Map<String, Value>>,
) -> Result<AppConfig, ConfigError> {
    let config_file_path = match args.config.clone() {
        Some(path) => Some(path),
        None => default_config_file().ok(),
    };

    let mut config_builder = ConfigCrate::builder();

    if let Some(ref path) = config_file_path {
        config_builder = config_builder.add_source(File::from(path.clone()).required(false));
    }

    // Overrides (environment or a test map) take priority over the file.
    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            config_builder = config_builder.set_override(&key, value)?;
        }
    }

    let loaded: FileConfig = config_builder.build()?.try_deserialize()?;
    let defaults = AppConfig::default();

    let config = AppConfig {
        placements_file: args
            .placements_file
            .clone()
            .or(loaded.placements_file)
            .unwrap_or(defaults.placements_file),
        catalog_file: args
            .catalog
            .clone()
            .or(loaded.catalog_file)
            .unwrap_or(defaults.catalog_file),
        map_width_feet: args
            .map_width_feet
            .or(loaded.map_width_feet)
            .unwrap_or(DEFAULT_MAP_WIDTH_FEET),
        map_height_feet: args
            .map_height_feet
            .or(loaded.map_height_feet)
            .unwrap_or(DEFAULT_MAP_HEIGHT_FEET),
        canvas_width_px: args
            .canvas_width_px
            .or(loaded.canvas_width_px)
            .unwrap_or(DEFAULT_CANVAS_WIDTH_PX),
        canvas_height_px: args
            .canvas_height_px
            .or(loaded.canvas_height_px)
            .unwrap_or(DEFAULT_CANVAS_HEIGHT_PX),
        min_radius_px: args
            .min_radius_px
            .or(loaded.min_radius_px)
            .unwrap_or(DEFAULT_MIN_RADIUS_PX),
        max_radius_px: args
            .max_radius_px
            .or(loaded.max_radius_px)
            .unwrap_or(DEFAULT_MAX_RADIUS_PX),
        log_file: args
            .log_file
            .clone()
            .or(loaded.log_file)
            .unwrap_or(defaults.log_file),
        log_level: args
            .log_level
            .clone()
            .or(loaded.log_level)
            .unwrap_or(defaults.log_level),
    };

    validate_config(&config)?;
    Ok(config)
}

/// Validates the loaded configuration for consistency.
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let dimensions = [
        ("map_width_feet", config.map_width_feet),
        ("map_height_feet", config.map_height_feet),
        ("canvas_width_px", config.canvas_width_px),
        ("canvas_height_px", config.canvas_height_px),
        ("min_radius_px", config.min_radius_px),
        ("max_radius_px", config.max_radius_px),
    ];
    for (name, value) in dimensions {
        if !(value.is_finite() && value > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "{} must be a positive number, got {}",
                name, value
            )));
        }
    }

    if config.min_radius_px > config.max_radius_px {
        return Err(ConfigError::ValidationError(format!(
            "min_radius_px ({}) exceeds max_radius_px ({})",
            config.min_radius_px, config.max_radius_px
        )));
    }

    if config.log_level.parse::<log::LevelFilter>().is_err() {
        return Err(ConfigError::ValidationError(format!(
            "unknown log_level: {}",
            config.log_level
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::ValueKind;
    use std::fs;
    use tempfile::tempdir;

    fn test_args(extra: &[&str]) -> CliArgs {
        let mut cmd = vec!["test_binary"];
        cmd.extend_from_slice(extra);
        CliArgs::try_parse_from(cmd).expect("Failed to parse test args")
    }

    // Points at a config file that does not exist so the user's real config is ignored.
    fn isolated_args(dir: &tempfile::TempDir, extra: &[&str]) -> CliArgs {
        let missing = dir.path().join("none.toml");
        let mut cmd = vec!["--config", missing.to_str().unwrap()];
        cmd.extend_from_slice(extra);
        test_args(&cmd)
    }

    #[test]
    fn test_default_config() {
        let dir = tempdir().unwrap();
        let config = build_config_from_args(&isolated_args(&dir, &[]), None)
            .expect("Failed to load default config");

        assert_eq!(config.map_width_feet, DEFAULT_MAP_WIDTH_FEET);
        assert_eq!(config.max_radius_px, DEFAULT_MAX_RADIUS_PX);
        assert_eq!(config.log_level, "info");
        assert!(config.placements_file.ends_with(DEFAULT_PLACEMENTS_FILE));
        assert_eq!(config.map_scale().pixels_per_foot, 2.0);
    }

    #[test]
    fn test_file_values_are_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "map_width_feet = 200.0\ncatalog_file = \"/srv/orchard/plants.json\"\n",
        )
        .unwrap();

        let args = test_args(&["--config", path.to_str().unwrap()]);
        let config = build_config_from_args(&args, None).unwrap();

        assert_eq!(config.map_width_feet, 200.0);
        assert_eq!(config.catalog_file, PathBuf::from("/srv/orchard/plants.json"));
        assert_eq!(config.map_height_feet, DEFAULT_MAP_HEIGHT_FEET);
    }

    #[test]
    fn test_env_override() {
        let dir = tempdir().unwrap();
        let mut override_map = Map::new();
        override_map.insert(
            "min_radius_px".to_string(),
            Value::new(None, ValueKind::Float(4.0)),
        );
        override_map.insert(
            "log_level".to_string(),
            Value::new(None, ValueKind::String("debug".to_string())),
        );

        let config = build_config_from_args(&isolated_args(&dir, &[]), Some(override_map))
            .expect("Failed to load config with simulated env");

        assert_eq!(config.min_radius_px, 4.0);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.max_radius_px, DEFAULT_MAX_RADIUS_PX);
    }

    #[test]
    fn test_arg_override() {
        let dir = tempdir().unwrap();
        let mut override_map = Map::new();
        override_map.insert(
            "canvas_width_px".to_string(),
            Value::new(None, ValueKind::Float(500.0)),
        );
        let args = isolated_args(
            &dir,
            &["my_farm.json", "--canvas-width-px=1820", "--catalog=db.json"],
        );

        let config = build_config_from_args(&args, Some(override_map)).unwrap();

        assert_eq!(config.placements_file, PathBuf::from("my_farm.json"));
        assert_eq!(config.catalog_file, PathBuf::from("db.json"));
        assert_eq!(config.canvas_width_px, 1820.0);
    }

    #[test]
    fn test_validation_rejects_inverted_radius_bounds() {
        let dir = tempdir().unwrap();
        let args = isolated_args(&dir, &["--min-radius-px=60"]);
        let result = build_config_from_args(&args, None);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validation_rejects_zero_dimensions() {
        let dir = tempdir().unwrap();
        let args = isolated_args(&dir, &["--map-height-feet=0"]);
        assert!(build_config_from_args(&args, None).is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_log_level() {
        let dir = tempdir().unwrap();
        let args = isolated_args(&dir, &["--log-level=chatty"]);
        assert!(matches!(
            build_config_from_args(&args, None),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
