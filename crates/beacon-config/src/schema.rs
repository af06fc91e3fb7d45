//! Configuration schema with serde defaults for every section.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level beacon configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BeaconConfig {
    pub sync: SyncConfig,
    pub host: HostConfig,
    pub logging: LoggingConfig,
}

/// Sync loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Delay between publish cycles, in milliseconds.
    pub interval_ms: u64,
    /// Application identifier handed to the presence client at session init.
    pub application_id: String,
    /// Branding icon key sent with every record.
    pub large_image_key: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval_ms: 100,
            application_id: "410943600705273856".into(),
            large_image_key: "logo".into(),
        }
    }
}

/// Host state source configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Path of the state file the editor integration writes.
    /// `None` selects the platform default under the state directory.
    pub state_file: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter directive, overridable via CLI or env.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "beacon=info".into(),
        }
    }
}
