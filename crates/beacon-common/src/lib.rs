pub mod errors;
pub mod icons;
pub mod record;

pub use errors::{BeaconError, ConfigError, HostError, PublishError, SyncError};
pub use icons::IconSet;
pub use record::PresenceRecord;

pub type Result<T> = std::result::Result<T, BeaconError>;
