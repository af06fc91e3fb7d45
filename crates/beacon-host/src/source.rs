//! Raw host query boundary.

use std::path::PathBuf;

use beacon_common::HostError;

/// Fallible queries against the host application.
///
/// Every call may legitimately return `Ok(None)` — the host may have
/// nothing open, may not be running yet, or may already be shutting
/// down. Transient failures are expected; callers decide how to degrade.
pub trait HostStateSource: Send {
    /// Full path of the currently open workspace, if any.
    fn workspace_path(&self) -> Result<Option<PathBuf>, HostError>;

    /// Display name of the currently active document, if any.
    fn active_document(&self) -> Result<Option<String>, HostError>;
}
