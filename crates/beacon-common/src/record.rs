//! The presence record published to the display client each cycle.

use serde::{Deserialize, Serialize};

/// Status payload pushed to the presence-display client.
///
/// Field names are camelCased on the wire to match what the client
/// expects. Absent host state is carried as empty strings, never as
/// missing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceRecord {
    /// "Working on <workspace>", or empty if no workspace is open.
    pub details: String,
    /// "Editing <document>", or empty if no document is active.
    pub state: String,
    /// Recognized file-type icon key, or empty for unrecognized extensions.
    pub small_image_key: String,
    /// Fixed branding identifier, always present.
    pub large_image_key: String,
    /// Unix seconds captured once at session start, never re-sampled.
    pub start_timestamp: i64,
}
