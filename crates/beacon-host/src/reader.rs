//! Safe, always-defined view over a [`HostStateSource`].

use std::path::Path;

use tracing::trace;

use crate::source::HostStateSource;

/// One bundled sample of host state, taken once per sync cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostSnapshot {
    pub workspace_name: Option<String>,
    pub document_name: Option<String>,
    pub extension_key: Option<String>,
}

/// Read-through accessor that never raises past its boundary.
///
/// Host state can change between calls (a document closing mid-query,
/// the host shutting down entirely); every such failure collapses to
/// `None` and the caller renders the corresponding field empty.
pub struct HostStateReader<S> {
    source: S,
}

impl<S: HostStateSource> HostStateReader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Workspace file name without extension, if a workspace is open
    /// and has a non-empty path.
    pub fn workspace_name(&self) -> Option<String> {
        let path = match self.source.workspace_path() {
            Ok(Some(path)) => path,
            Ok(None) => return None,
            Err(e) => {
                trace!("workspace query unavailable: {e}");
                return None;
            }
        };
        if path.as_os_str().is_empty() {
            return None;
        }
        path.file_stem().map(|s| s.to_string_lossy().into_owned())
    }

    /// Display name of the active document, if one exists.
    pub fn document_name(&self) -> Option<String> {
        match self.source.active_document() {
            Ok(name) => name.filter(|n| !n.is_empty()),
            Err(e) => {
                trace!("document query unavailable: {e}");
                None
            }
        }
    }

    /// Lowercase icon key of the form `file_<extension>` derived from
    /// the active document's name, or `None` when there is no document,
    /// the name has no extension, or the query failed transiently.
    pub fn document_extension_key(&self) -> Option<String> {
        self.document_name()
            .as_deref()
            .and_then(extension_key_for)
    }

    /// Take one bundled sample of the full host state.
    ///
    /// The document is queried once and the extension key derived from
    /// that same answer, so a document closing mid-cycle cannot split
    /// the snapshot.
    pub fn snapshot(&self) -> HostSnapshot {
        let document_name = self.document_name();
        let extension_key = document_name.as_deref().and_then(extension_key_for);
        HostSnapshot {
            workspace_name: self.workspace_name(),
            document_name,
            extension_key,
        }
    }
}

fn extension_key_for(name: &str) -> Option<String> {
    let extension = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())?;
    if extension.is_empty() {
        return None;
    }
    Some(format!("file_{extension}"))
}
