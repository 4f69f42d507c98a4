//! Coalescing of rapid edits.

use indexmap::IndexMap;
use tailor_core::{ConfigError, ConfigField, FieldValue};

use crate::store::ConfigStore;

/// Queue of pending edits, last write wins per field.
///
/// Re-queuing a field moves it behind the edits queued since, so the surviving
/// writes are applied in the order they were last made.
#[derive(Debug, Default, Clone)]
pub struct EditCoalescer {
    pending: IndexMap<ConfigField, FieldValue>,
}

/// Outcome of [`EditCoalescer::flush`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FlushReport {
    pub changed: Vec<ConfigField>,
    pub rejected: Vec<(ConfigField, ConfigError)>,
}

impl FlushReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl EditCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an edit, replacing any pending value for the same field.
    pub fn push(&mut self, field: ConfigField, value: impl Into<FieldValue>) {
        self.pending.shift_remove(&field);
        self.pending.insert(field, value.into());
    }

    pub fn pending(&self, field: ConfigField) -> Option<&FieldValue> {
        self.pending.get(&field)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop every pending edit.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Apply the pending edits to `store` with a single notification.
    pub fn flush(&mut self, store: &mut ConfigStore) -> FlushReport {
        if self.pending.is_empty() {
            return FlushReport::default();
        }
        let edits = std::mem::take(&mut self.pending);
        tracing::debug!(edits = edits.len(), "flushing coalesced edits");
        let (changed, rejected) = store.set_many(edits);
        FlushReport { changed, rejected }
    }
}
