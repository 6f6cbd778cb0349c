use std::fs;
use std::path::{Path, PathBuf};

use super::core::SchemaConfig;
use crate::errors::SchemaError;

pub const CONFIG_FILE_NAME: &str = ".modelschema.toml";

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<SchemaConfig, SchemaError> {
    let config = toml::from_str::<SchemaConfig>(contents)
        .map_err(|e| SchemaError::config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &SchemaConfig) -> Result<(), SchemaError> {
    if config.types.boolean.is_empty() {
        return Err(SchemaError::config("types.boolean must name at least one type"));
    }
    if config.types.void.as_str().is_empty() {
        return Err(SchemaError::config("types.void must not be empty"));
    }
    Ok(())
}

/// Load configuration from an explicit path; a missing or invalid file is an error.
pub fn load_config_from_path(path: &Path) -> Result<SchemaConfig, SchemaError> {
    let contents = fs::read_to_string(path).map_err(|e| SchemaError::io(path, e))?;
    let config = parse_config(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Pure function to try loading config from a discovered path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<SchemaConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file, falling back to defaults.
pub fn discover_config(start: PathBuf) -> SchemaConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            SchemaConfig::default()
        })
}

/// Default configuration rendered as TOML, written by `modelschema init`.
pub fn default_config_toml() -> Result<String, SchemaError> {
    toml::to_string_pretty(&SchemaConfig::default())
        .map_err(|e| SchemaError::config(format!("Failed to render default config: {}", e)))
}
