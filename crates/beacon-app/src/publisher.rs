//! NDJSON transport adapter to the presence-display client.
//!
//! One JSON object per line over any async byte stream (unix socket,
//! pipe, stdout): a `hello` on session init carrying the application id,
//! a `presence` per published record, a `bye` on shutdown. The display
//! client owns everything past this framing.

use async_trait::async_trait;
use serde_json::json;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use beacon_common::{PresenceRecord, PublishError};
use beacon_sync::PresencePublisher;

pub struct NdjsonPublisher<W> {
    writer: W,
    session_open: bool,
}

impl<W: AsyncWrite + Unpin + Send> NdjsonPublisher<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            session_open: false,
        }
    }

    async fn write_line(&mut self, value: &serde_json::Value) -> Result<(), PublishError> {
        let mut line = serde_json::to_vec(value)
            .map_err(|e| PublishError::Transport(e.to_string()))?;
        line.push(b'\n');
        self.writer
            .write_all(&line)
            .await
            .map_err(|e| PublishError::Transport(e.to_string()))
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> PresencePublisher for NdjsonPublisher<W> {
    async fn initialize_session(
        &mut self,
        application_id: &str,
        auto_register: bool,
    ) -> Result<(), PublishError> {
        if self.session_open {
            return Err(PublishError::SessionInit("session already open".into()));
        }
        self.write_line(&json!({
            "op": "hello",
            "applicationId": application_id,
            "autoRegister": auto_register,
        }))
        .await
        .map_err(|e| PublishError::SessionInit(e.to_string()))?;
        self.session_open = true;
        Ok(())
    }

    async fn run_pending_callbacks(&mut self) -> Result<(), PublishError> {
        if !self.session_open {
            return Err(PublishError::SessionClosed);
        }
        self.writer
            .flush()
            .await
            .map_err(|e| PublishError::Transport(e.to_string()))
    }

    async fn publish(&mut self, record: &PresenceRecord) -> Result<(), PublishError> {
        if !self.session_open {
            return Err(PublishError::SessionClosed);
        }
        let record = serde_json::to_value(record)
            .map_err(|e| PublishError::Transport(e.to_string()))?;
        self.write_line(&json!({ "op": "presence", "record": record })).await
    }

    async fn shutdown_session(&mut self) -> Result<(), PublishError> {
        if !self.session_open {
            return Err(PublishError::SessionClosed);
        }
        self.write_line(&json!({ "op": "bye" })).await?;
        self.writer
            .flush()
            .await
            .map_err(|e| PublishError::Transport(e.to_string()))?;
        self.session_open = false;
        Ok(())
    }
}
