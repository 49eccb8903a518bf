//! The span/log adapter: a stateless, synchronous transform from finished
//! spans to vendor span and log batches.

use tracing::debug;

use crate::span_data::{SpanData, SpanId};
use crate::telemetry::{Attributes, Log, LogBatch, Span, SpanBatch};

mod attributes_support;

pub use attributes_support::{AttributeMerger, AttributesSupport};

/// Value of the `instrumentation.provider` common attribute.
const INSTRUMENTATION_PROVIDER: &str = "opentelemetry";
/// Value of the `collector.name` common attribute.
const COLLECTOR_NAME: &str = "newrelic-opentelemetry-exporter";

const NANOS_PER_MILLI: i64 = 1_000_000;

/// Adapts finished spans into vendor span batches, and their events into
/// vendor log batches.
///
/// The common attributes passed at construction are augmented once with the
/// fixed `instrumentation.provider` and `collector.name` tags and reused,
/// unmodified, on every batch this adapter produces. The adapter holds no
/// other state, so a shared instance can be called from multiple threads.
pub struct SpanBatchAdapter<M: AttributeMerger = AttributesSupport> {
    common_attributes: Attributes,
    merger: M,
}

impl SpanBatchAdapter {
    pub fn new(common_attributes: Attributes) -> Self {
        SpanBatchAdapter::with_merger(common_attributes, AttributesSupport)
    }
}

impl<M: AttributeMerger> SpanBatchAdapter<M> {
    pub fn with_merger(common_attributes: Attributes, merger: M) -> Self {
        let common_attributes = common_attributes
            .put("instrumentation.provider", INSTRUMENTATION_PROVIDER)
            .put("collector.name", COLLECTOR_NAME);
        SpanBatchAdapter {
            common_attributes,
            merger,
        }
    }

    /// Convert a collection of finished spans into a span batch.
    ///
    /// Equal spans collapse to one entry; an empty input yields an empty
    /// batch that still carries the common attributes.
    pub fn adapt_to_span_batch(&self, spans: &[SpanData]) -> SpanBatch {
        let batch = SpanBatch::new(
            spans.iter().map(|span| self.make_span(span)),
            self.common_attributes.clone(),
        );
        debug!(
            input = spans.len(),
            output = batch.len(),
            "adapted spans into batch"
        );
        batch
    }

    /// Flatten the timed events of a collection of spans into a log batch.
    ///
    /// Each log's message is the event name and its attributes carry
    /// `span.id` / `trace.id` back-references to the owning span.
    pub fn adapt_events_as_logs(&self, spans: &[SpanData]) -> LogBatch {
        let batch = LogBatch::new(
            spans.iter().flat_map(|span| self.extract_events(span)),
            self.common_attributes.clone(),
        );
        debug!(
            input = spans.len(),
            output = batch.len(),
            "adapted span events into log batch"
        );
        batch
    }

    fn extract_events<'a>(&'a self, span: &'a SpanData) -> impl Iterator<Item = Log> + 'a {
        span.events.iter().map(move |event| Log {
            message: event.name.clone(),
            timestamp: event.epoch_nanos / NANOS_PER_MILLI,
            attributes: self
                .merger
                .make_attributes(&event.attributes)
                .put("span.id", span.span_id.to_hex())
                .put("trace.id", span.trace_id.to_hex()),
        })
    }

    fn make_span(&self, span: &SpanData) -> Span {
        debug_assert!(span.span_id.is_valid(), "span id must be set");
        debug_assert!(span.trace_id.is_valid(), "trace id must be set");

        Span {
            id: span.span_id.to_hex(),
            trace_id: span.trace_id.to_hex(),
            parent_id: make_parent_span_id(span.parent_span_id),
            name: (!span.name.is_empty()).then(|| span.name.clone()),
            timestamp: span.start_epoch_nanos / NANOS_PER_MILLI,
            duration_ms: duration_millis(span),
            attributes: self.generate_span_attributes(span),
        }
    }

    /// Derivation order: intrinsic attributes, then the error message, then
    /// instrumentation-library and resource metadata. Later sources win on
    /// key collision.
    fn generate_span_attributes(&self, span: &SpanData) -> Attributes {
        let attributes = self.create_intrinsic_attributes(span);
        let attributes = add_possible_error_attribute(span, attributes);
        self.merger.populate_library_info(
            attributes,
            span.instrumentation_library.as_ref(),
            span.resource.as_ref(),
        )
    }

    fn create_intrinsic_attributes(&self, span: &SpanData) -> Attributes {
        self.merger
            .make_attributes(&span.attributes)
            .put("span.kind", span.kind.name())
    }
}

/// `error.message` is set only for a not-ok status with a non-empty
/// description; its absence, not an empty string, signals "no error".
fn add_possible_error_attribute(span: &SpanData, attributes: Attributes) -> Attributes {
    match span.status.description.as_deref() {
        Some(description) if !span.status.is_ok && !description.is_empty() => {
            attributes.put("error.message", description)
        }
        _ => attributes,
    }
}

fn make_parent_span_id(parent_span_id: SpanId) -> Option<String> {
    if parent_span_id.is_valid() {
        Some(parent_span_id.to_hex())
    } else {
        None
    }
}

fn duration_millis(span: &SpanData) -> f64 {
    // Integer millisecond conversion would drop sub-ms resolution here.
    (span.end_epoch_nanos - span.start_epoch_nanos) as f64 / NANOS_PER_MILLI as f64
}
