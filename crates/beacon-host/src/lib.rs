//! Host application state access.
//!
//! A [`HostStateSource`] answers the raw, fallible questions "which
//! workspace is open?" and "which document is active?". The
//! [`HostStateReader`] on top collapses every failure or absence into
//! `None`, so the sync loop never sees a host-side error.

pub mod file_source;
pub mod reader;
pub mod source;

pub use file_source::FileHostSource;
pub use reader::{HostSnapshot, HostStateReader};
pub use source::HostStateSource;
