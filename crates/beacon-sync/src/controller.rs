//! Two-phase lifecycle around the sync worker.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;

use beacon_common::SyncError;
use beacon_host::{HostStateReader, HostStateSource};

use crate::publisher::PresencePublisher;
use crate::types::SyncConfig;
use crate::worker::sync_worker;

struct Parts<S, P> {
    reader: HostStateReader<S>,
    publisher: P,
    config: SyncConfig,
}

/// Owner of the sync session lifecycle.
///
/// Construction has no side effects. `start` spawns the background
/// worker and returns immediately; `request_stop` flips the shutdown
/// flag the worker reads once per cycle. The in-flight cycle completes
/// first — at most one extra publish can happen after a stop request.
/// The loop is not restartable.
pub struct PresenceLoop<S, P> {
    parts: Option<Parts<S, P>>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl<S, P> PresenceLoop<S, P>
where
    S: HostStateSource + 'static,
    P: PresencePublisher + 'static,
{
    pub fn new(reader: HostStateReader<S>, publisher: P, config: SyncConfig) -> Self {
        Self {
            parts: Some(Parts {
                reader,
                publisher,
                config,
            }),
            stop: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// Spawn the background worker. Non-blocking; must be called from
    /// within a tokio runtime.
    pub fn start(&mut self) -> Result<(), SyncError> {
        let parts = self.parts.take().ok_or(SyncError::AlreadyStarted)?;
        let stop = Arc::clone(&self.stop);
        self.handle = Some(tokio::spawn(sync_worker(
            parts.reader,
            parts.publisher,
            parts.config,
            stop,
        )));
        Ok(())
    }

    /// Signal the worker to stop after its current cycle. Returns the
    /// previous flag value, so a second call reports `true` and is
    /// otherwise a no-op. Never blocks.
    pub fn request_stop(&self) -> bool {
        self.stop.swap(true, Ordering::Relaxed)
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Wait for the worker to exit. Used for deterministic shutdown;
    /// callers normally `request_stop` first.
    pub async fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}
