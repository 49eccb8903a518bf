//! Vendor wire model: the span, log and batch value objects handed to the
//! sender, plus the attribute container they all share.

pub mod attributes;
pub mod batch;
pub mod log;
pub mod span;

pub use attributes::{AttributeMap, AttributeValue, Attributes};
pub use batch::{Batch, LogBatch, SpanBatch};
pub use log::Log;
pub use span::Span;
