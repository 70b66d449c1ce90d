//! Configuration loading.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, InstallConfig};

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub model: Option<String>,
    pub api_url: Option<String>,
}

/// Load the TOML config at `path`, or defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<InstallConfig, AppError> {
    let Some(path) = path else {
        return Ok(InstallConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|e| {
        AppError::config_error(format!("Failed to read config {}: {}", path.display(), e))
    })?;
    let config: InstallConfig = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Apply command-line overrides on top of a loaded config.
pub fn apply_overrides(mut config: InstallConfig, overrides: ConfigOverrides) -> InstallConfig {
    if let Some(model) = overrides.model {
        config.api.model = model;
    }
    if let Some(api_url) = overrides.api_url {
        config.api.url = api_url;
    }
    config
}
