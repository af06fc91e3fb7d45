use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("host unavailable: {0}")]
    Unavailable(String),

    #[error("host query failed: {0}")]
    QueryFailed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("session init failed: {0}")]
    SessionInit(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("session closed")]
    SessionClosed,
}

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("sync loop already started")]
    AlreadyStarted,

    #[error(transparent)]
    Publish(#[from] PublishError),
}

#[derive(Debug, thiserror::Error)]
pub enum BeaconError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Publish(#[from] PublishError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("interval_ms must be nonzero".into());
        assert_eq!(
            err.to_string(),
            "config validation error: interval_ms must be nonzero"
        );
    }

    #[test]
    fn host_error_display() {
        let err = HostError::Unavailable("state file missing".into());
        assert_eq!(err.to_string(), "host unavailable: state file missing");

        let err = HostError::QueryFailed("document closed mid-query".into());
        assert_eq!(err.to_string(), "host query failed: document closed mid-query");
    }

    #[test]
    fn publish_error_display() {
        let err = PublishError::SessionInit("connection refused".into());
        assert_eq!(err.to_string(), "session init failed: connection refused");

        let err = PublishError::Transport("broken pipe".into());
        assert_eq!(err.to_string(), "transport error: broken pipe");

        assert_eq!(PublishError::SessionClosed.to_string(), "session closed");
    }

    #[test]
    fn beacon_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: BeaconError = config_err.into();
        assert!(matches!(err, BeaconError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn beacon_error_from_host() {
        let host_err = HostError::Unavailable("not running".into());
        let err: BeaconError = host_err.into();
        assert!(matches!(err, BeaconError::Host(_)));
        assert!(err.to_string().contains("not running"));
    }

    #[test]
    fn sync_error_from_publish() {
        let publish_err = PublishError::SessionInit("no socket".into());
        let err: SyncError = publish_err.into();
        assert!(matches!(err, SyncError::Publish(_)));
        assert!(err.to_string().contains("no socket"));
    }

    #[test]
    fn beacon_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BeaconError = io_err.into();
        assert!(matches!(err, BeaconError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
