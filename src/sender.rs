// src/sender.rs
use async_trait::async_trait;

use crate::telemetry::{LogBatch, SpanBatch};

/// Error surfaced by a sender implementation.
#[derive(Debug)]
pub struct SendError(pub String);

impl std::fmt::Display for SendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "send failed: {}", self.0)
    }
}

impl std::error::Error for SendError {}

/// Trait for transmitting adapted batches (abstracts the HTTP client).
///
/// Transport framing, authentication, retries and flush cadence all live
/// behind this boundary; the adapter only hands batches over.
#[async_trait]
pub trait TelemetrySender {
    async fn send_spans(&self, batch: SpanBatch) -> Result<(), SendError>;
    async fn send_logs(&self, batch: LogBatch) -> Result<(), SendError>;
}
