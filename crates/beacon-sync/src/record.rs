//! Derivation of a presence record from one host snapshot.

use beacon_common::PresenceRecord;
use beacon_host::HostSnapshot;

use crate::types::SyncConfig;

/// Build the record for one cycle.
///
/// Absent host state renders as empty fields. The icon key only passes
/// through when the display client actually has an icon for it; the
/// timestamp is the session's fixed start epoch, never the sample time.
pub fn build_record(snapshot: &HostSnapshot, config: &SyncConfig, started_at: i64) -> PresenceRecord {
    let details = snapshot
        .workspace_name
        .as_deref()
        .map(|name| format!("Working on {name}"))
        .unwrap_or_default();

    let state = snapshot
        .document_name
        .as_deref()
        .map(|name| format!("Editing {name}"))
        .unwrap_or_default();

    let small_image_key = snapshot
        .extension_key
        .as_deref()
        .filter(|key| config.icons.contains(key))
        .map(str::to_owned)
        .unwrap_or_default();

    PresenceRecord {
        details,
        state,
        small_image_key,
        large_image_key: config.large_image_key.clone(),
        start_timestamp: started_at,
    }
}
