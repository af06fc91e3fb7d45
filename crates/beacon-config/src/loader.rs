//! Config path resolution and TOML loading.

use std::path::{Path, PathBuf};

use beacon_common::ConfigError;
use tracing::{info, warn};

use crate::schema::BeaconConfig;
use crate::validate;

/// Template written the first time beacon runs without a config file.
const DEFAULT_CONFIG_TOML: &str = "\
# beacon configuration
#
# All values are optional; missing entries fall back to the defaults below.

[sync]
# Delay between publish cycles, in milliseconds.
interval_ms = 100
# Application id registered with the presence-display client.
application_id = \"410943600705273856\"
# Branding icon shown on the remote display.
large_image_key = \"logo\"

[host]
# Path of the state file the editor integration writes.
# Defaults to <state dir>/beacon/host_state.json when unset.
# state_file = \"/path/to/host_state.json\"

[logging]
# Default tracing filter, overridable with --log-level or RUST_LOG.
filter = \"beacon=info\"
";

/// Platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("beacon").join("config.toml"))
}

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. A config that fails validation is
/// rejected rather than silently corrected.
pub fn load_from_path(path: &Path) -> Result<BeaconConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config: BeaconConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    validate(&config)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// If the file does not exist, a commented default config is created and
/// the defaults are returned.
pub fn load_default() -> Result<BeaconConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            if let Err(e) = create_default_config(&path) {
                warn!("failed to write default config: {e}");
            }
            Ok(BeaconConfig::default())
        }
        Err(e) => Err(e),
    }
}

fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, DEFAULT_CONFIG_TOML).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
