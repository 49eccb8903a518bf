// src/lib.rs
//! Converts finished OpenTelemetry spans into New Relic span batches, and
//! span events into log batches, ready for a batch sender to transmit.

pub mod adapter;
pub mod sender;
pub mod span_data;
pub mod telemetry;

pub use adapter::{AttributeMerger, AttributesSupport, SpanBatchAdapter};
pub use sender::{SendError, TelemetrySender};
pub use span_data::{
    InstrumentationLibrary, SpanData, SpanEvent, SpanId, SpanKind, SpanStatus, TraceId,
};
pub use telemetry::{
    AttributeMap, AttributeValue, Attributes, Batch, Log, LogBatch, Span, SpanBatch,
};
