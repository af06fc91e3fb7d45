//! Configuration for the sync loop.

use beacon_common::IconSet;

/// Fixed parameters of one sync session.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Delay between publish cycles, in milliseconds.
    pub interval_ms: u64,
    /// Application identifier handed to the client at session init.
    pub application_id: String,
    /// Branding icon key sent with every record.
    pub large_image_key: String,
    /// Extension keys the display client has icons for.
    pub icons: IconSet,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval_ms: 100,
            application_id: "410943600705273856".into(),
            large_image_key: "logo".into(),
            icons: IconSet::default(),
        }
    }
}
