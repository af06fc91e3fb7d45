//! The four-operation boundary to the presence-display client.

use async_trait::async_trait;

use beacon_common::{PresenceRecord, PublishError};

/// Session-oriented publishing client.
///
/// The implementation owns the transport (local socket, pipe, whatever
/// the display client speaks); this trait only promises the lifecycle
/// the sync loop relies on: one `initialize_session`, any number of
/// `run_pending_callbacks` / `publish` cycles, one `shutdown_session`.
/// Every operation may fail; only init failure is terminal for the loop.
#[async_trait]
pub trait PresencePublisher: Send {
    /// Open the session with the display client.
    async fn initialize_session(
        &mut self,
        application_id: &str,
        auto_register: bool,
    ) -> Result<(), PublishError>;

    /// Non-blocking maintenance step required by the transport: lets the
    /// client process any pending inbound callbacks.
    async fn run_pending_callbacks(&mut self) -> Result<(), PublishError>;

    /// Push one presence record through the open session.
    async fn publish(&mut self, record: &PresenceRecord) -> Result<(), PublishError>;

    /// Close the session. No publishes may follow.
    async fn shutdown_session(&mut self) -> Result<(), PublishError>;
}
