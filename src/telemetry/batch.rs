use serde::Serialize;

use super::{Attributes, Log, Span};

/// The unit of transmission: a set of entries plus the attributes shared by
/// all of them.
///
/// A batch has set semantics, not list semantics. Entries that compare equal
/// by full value collapse to one, so output cardinality can be lower than
/// input cardinality when the producer emits duplicates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Batch<T> {
    entries: Vec<T>,
    common_attributes: Attributes,
}

pub type SpanBatch = Batch<Span>;
pub type LogBatch = Batch<Log>;

impl<T: PartialEq> Batch<T> {
    pub fn new(items: impl IntoIterator<Item = T>, common_attributes: Attributes) -> Self {
        let mut entries: Vec<T> = Vec::new();
        for item in items {
            if !entries.contains(&item) {
                entries.push(item);
            }
        }
        Batch {
            entries,
            common_attributes,
        }
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn common_attributes(&self) -> &Attributes {
        &self.common_attributes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
