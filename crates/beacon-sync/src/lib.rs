//! The presence state-synchronization loop.
//!
//! Samples host state through a [`beacon_host::HostStateReader`], derives
//! a [`beacon_common::PresenceRecord`], and publishes it through a
//! session-oriented [`PresencePublisher`] at a fixed rate until stopped.
//! The publishing client's transport internals live behind the trait;
//! this crate owns the cycle and its shutdown coordination.

mod controller;
mod publisher;
mod record;
mod types;
mod worker;

pub use controller::PresenceLoop;
pub use publisher::PresencePublisher;
pub use record::build_record;
pub use types::SyncConfig;
