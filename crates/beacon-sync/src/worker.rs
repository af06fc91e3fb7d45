//! Background task running the publish cycle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use beacon_host::{HostStateReader, HostStateSource};

use crate::publisher::PresencePublisher;
use crate::record::build_record;
use crate::types::SyncConfig;

/// The full life of one sync session: open, cycle until the stop flag
/// is observed, close.
///
/// Host-query failures and individual publish failures never end the
/// loop; the next cycle is the retry. Only a failed session init is
/// terminal — the loop logs it and ends without ever entering a cycle.
pub(crate) async fn sync_worker<S, P>(
    reader: HostStateReader<S>,
    mut publisher: P,
    config: SyncConfig,
    stop: Arc<AtomicBool>,
) where
    S: HostStateSource,
    P: PresencePublisher,
{
    if let Err(e) = publisher
        .initialize_session(&config.application_id, true)
        .await
    {
        error!(error = %e, "presence session init failed, sync loop disabled");
        return;
    }

    // Fixed for the whole session; tells the remote display "active since".
    let started_at = Utc::now().timestamp();
    info!(application_id = %config.application_id, "presence session opened");

    while !stop.load(Ordering::Relaxed) {
        if let Err(e) = publisher.run_pending_callbacks().await {
            debug!(error = %e, "pending callback processing failed");
        }

        let snapshot = reader.snapshot();
        let record = build_record(&snapshot, &config, started_at);

        if let Err(e) = publisher.publish(&record).await {
            warn!(error = %e, "presence publish failed, retrying next cycle");
        }

        tokio::time::sleep(Duration::from_millis(config.interval_ms)).await;
    }

    if let Err(e) = publisher.shutdown_session().await {
        warn!(error = %e, "presence session shutdown failed");
    }
    info!("presence session closed");
}
