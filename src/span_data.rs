//! In-process representation of finished spans, as handed over by a tracing
//! SDK. The adapter consumes these read-only; it never mutates or retains
//! them.

use crate::telemetry::AttributeMap;

/// 8-byte span identifier. The all-zero id is invalid and marks an absent
/// parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SpanId([u8; 8]);

impl SpanId {
    pub const INVALID: SpanId = SpanId([0u8; 8]);

    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        SpanId(bytes)
    }

    pub fn from_hex(hex: &str) -> Result<Self, const_hex::FromHexError> {
        const_hex::decode_to_array(hex).map(SpanId)
    }

    pub fn is_valid(&self) -> bool {
        self.0 != [0u8; 8]
    }

    /// Lowercase hex rendering, 16 characters.
    pub fn to_hex(&self) -> String {
        const_hex::encode(self.0)
    }
}

/// 16-byte trace identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TraceId([u8; 16]);

impl TraceId {
    pub const INVALID: TraceId = TraceId([0u8; 16]);

    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        TraceId(bytes)
    }

    pub fn from_hex(hex: &str) -> Result<Self, const_hex::FromHexError> {
        const_hex::decode_to_array(hex).map(TraceId)
    }

    pub fn is_valid(&self) -> bool {
        self.0 != [0u8; 16]
    }

    /// Lowercase hex rendering, 32 characters.
    pub fn to_hex(&self) -> String {
        const_hex::encode(self.0)
    }
}

/// Role of a span relative to its trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SpanKind {
    #[default]
    Internal,
    Server,
    Client,
    Producer,
    Consumer,
}

impl SpanKind {
    /// Name recorded under the `span.kind` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            SpanKind::Internal => "INTERNAL",
            SpanKind::Server => "SERVER",
            SpanKind::Client => "CLIENT",
            SpanKind::Producer => "PRODUCER",
            SpanKind::Consumer => "CONSUMER",
        }
    }
}

/// Completion status of a span: an ok flag plus an optional description set
/// by the instrumentation when something went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanStatus {
    pub is_ok: bool,
    pub description: Option<String>,
}

impl SpanStatus {
    pub fn ok() -> Self {
        SpanStatus {
            is_ok: true,
            description: None,
        }
    }

    pub fn error() -> Self {
        SpanStatus {
            is_ok: false,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Default for SpanStatus {
    fn default() -> Self {
        SpanStatus::ok()
    }
}

/// Point-in-time annotation attached to a span.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpanEvent {
    pub name: String,
    pub epoch_nanos: i64,
    pub attributes: AttributeMap,
}

/// Identity of the library that produced a span.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstrumentationLibrary {
    pub name: String,
    pub version: String,
}

impl InstrumentationLibrary {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        InstrumentationLibrary {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// A finished span as recorded by the tracing SDK.
///
/// `span_id` and `trace_id` must be valid; that is the producer's contract
/// (see the adapter's debug assertions). `parent_span_id` may be
/// [`SpanId::INVALID`] for root spans, and `name` may be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpanData {
    pub span_id: SpanId,
    pub parent_span_id: SpanId,
    pub trace_id: TraceId,
    pub name: String,
    pub kind: SpanKind,
    pub status: SpanStatus,
    pub start_epoch_nanos: i64,
    pub end_epoch_nanos: i64,
    pub attributes: AttributeMap,
    pub events: Vec<SpanEvent>,
    pub resource: Option<AttributeMap>,
    pub instrumentation_library: Option<InstrumentationLibrary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_span_id_is_invalid() {
        assert!(!SpanId::INVALID.is_valid());
        assert!(!SpanId::default().is_valid());
        assert!(SpanId::from_bytes([0, 0, 0, 0, 0, 0, 0, 1]).is_valid());
    }

    #[test]
    fn span_id_renders_lowercase_hex() {
        let id = SpanId::from_bytes([0xb7, 0xad, 0x6b, 0x71, 0x69, 0x20, 0x33, 0x31]);
        assert_eq!(id.to_hex(), "b7ad6b7169203331");
    }

    #[test]
    fn span_id_round_trips_through_hex() {
        let id = SpanId::from_hex("b7ad6b7169203331").unwrap();
        assert_eq!(id.to_hex(), "b7ad6b7169203331");
        assert!(SpanId::from_hex("not hex").is_err());
        assert!(SpanId::from_hex("abcd").is_err());
    }

    #[test]
    fn trace_id_renders_lowercase_hex() {
        let id = TraceId::from_hex("0af7651916cd43dd8448eb211c80319c").unwrap();
        assert_eq!(id.to_hex(), "0af7651916cd43dd8448eb211c80319c");
        assert!(id.is_valid());
        assert!(!TraceId::INVALID.is_valid());
    }

    #[test]
    fn span_kind_names_are_uppercase() {
        for kind in [
            SpanKind::Internal,
            SpanKind::Server,
            SpanKind::Client,
            SpanKind::Producer,
            SpanKind::Consumer,
        ] {
            let name = kind.name();
            assert_eq!(name, name.to_uppercase());
        }
        assert_eq!(SpanKind::Internal.name(), "INTERNAL");
    }

    #[test]
    fn status_constructors_set_flags() {
        assert!(SpanStatus::ok().is_ok);
        assert!(SpanStatus::ok().description.is_none());

        let status = SpanStatus::error().with_description("boom");
        assert!(!status.is_ok);
        assert_eq!(status.description.as_deref(), Some("boom"));
    }
}
