//! Beacon configuration system.
//!
//! TOML-based configuration with full serde defaults, so partial configs
//! (or no config at all) work out of the box. The shipped defaults match
//! the fixed constants of the presence system: a 100 ms publish interval,
//! the registered application id, and the "logo" branding key.

pub mod loader;
pub mod schema;

pub use loader::{default_config_path, load_default, load_from_path};
pub use schema::{BeaconConfig, HostConfig, LoggingConfig, SyncConfig};

use beacon_common::ConfigError;

/// Validate a parsed config.
///
/// Only values that would break the sync loop outright are rejected;
/// everything else is taken as-is.
pub fn validate(config: &BeaconConfig) -> Result<(), ConfigError> {
    if config.sync.interval_ms == 0 {
        return Err(ConfigError::ValidationError(
            "sync.interval_ms must be nonzero".into(),
        ));
    }
    if config.sync.application_id.is_empty() {
        return Err(ConfigError::ValidationError(
            "sync.application_id must not be empty".into(),
        ));
    }
    Ok(())
}
