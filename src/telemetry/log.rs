use serde::Serialize;

use super::Attributes;

/// A log record in the vendor wire model, derived from a span event.
///
/// `attributes` always carries `span.id` and `trace.id` back-references to
/// the originating span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Log {
    pub message: String,
    pub timestamp: i64,
    pub attributes: Attributes,
}
