//! File-backed host source.
//!
//! Editor integrations mirror their state into a small JSON file; this
//! source reads it on every query. A missing file means the host is not
//! running, which is ordinary absence rather than an error. A file that
//! exists but cannot be read or parsed is a transient failure — the host
//! may be rewriting it mid-query.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use beacon_common::HostError;

use crate::source::HostStateSource;

/// Shape of the state file written by the editor integration.
#[derive(Debug, Default, Deserialize)]
struct HostStateFile {
    #[serde(default)]
    workspace: Option<PathBuf>,
    #[serde(default)]
    document: Option<String>,
}

/// [`HostStateSource`] reading a JSON state file from disk.
pub struct FileHostSource {
    path: PathBuf,
}

impl FileHostSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Platform default: `<state dir>/beacon/host_state.json`.
    pub fn default_path() -> Result<PathBuf, HostError> {
        let state_dir = dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .ok_or_else(|| HostError::Unavailable("could not determine state directory".into()))?;
        Ok(state_dir.join("beacon").join("host_state.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_state(&self) -> Result<Option<HostStateFile>, HostError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(HostError::QueryFailed(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )));
            }
        };

        let state: HostStateFile = serde_json::from_str(&content)
            .map_err(|e| HostError::QueryFailed(format!("malformed host state: {e}")))?;
        Ok(Some(state))
    }
}

impl HostStateSource for FileHostSource {
    fn workspace_path(&self) -> Result<Option<PathBuf>, HostError> {
        Ok(self.read_state()?.and_then(|s| s.workspace))
    }

    fn active_document(&self) -> Result<Option<String>, HostError> {
        Ok(self.read_state()?.and_then(|s| s.document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_state(dir: &tempfile::TempDir, content: &str) -> FileHostSource {
        let path = dir.path().join("host_state.json");
        std::fs::write(&path, content).unwrap();
        FileHostSource::new(path)
    }

    #[test]
    fn reads_workspace_and_document() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_state(
            &dir,
            r#"{ "workspace": "/projects/Foo.sln", "document": "Bar.cpp" }"#,
        );

        assert_eq!(
            source.workspace_path().unwrap(),
            Some(PathBuf::from("/projects/Foo.sln"))
        );
        assert_eq!(source.active_document().unwrap().as_deref(), Some("Bar.cpp"));
    }

    #[test]
    fn null_and_missing_fields_are_absent() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_state(&dir, r#"{ "workspace": null }"#);

        assert_eq!(source.workspace_path().unwrap(), None);
        assert_eq!(source.active_document().unwrap(), None);
    }

    #[test]
    fn missing_file_means_host_not_running() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileHostSource::new(dir.path().join("absent.json"));

        assert_eq!(source.workspace_path().unwrap(), None);
        assert_eq!(source.active_document().unwrap(), None);
    }

    #[test]
    fn malformed_content_is_a_transient_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_state(&dir, "{ not json");

        assert!(source.workspace_path().is_err());
        assert!(source.active_document().is_err());
    }
}
