// 🗂️ Interning Index - One shared FieldValue per distinct string
//
// Problem solved:
// - "Acme", "ACME", "acme" across thousands of rows → ONE Employer value
// - First-seen casing is the one that gets displayed
// - Lookup is O(1) on the case-folded string

use crate::entities::{FieldKind, FieldValue};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Interner for a single kind of categorical value
#[derive(Debug)]
pub struct FieldInterner {
    kind: FieldKind,

    /// Canonical list in creation order
    values: Vec<Arc<FieldValue>>,

    /// Case-folded string → index into `values`
    by_key: HashMap<String, usize>,
}

impl FieldInterner {
    pub fn new(kind: FieldKind) -> Self {
        FieldInterner {
            kind,
            values: Vec::new(),
            by_key: HashMap::new(),
        }
    }

    /// Return the shared value for `raw`, creating it if this is the first time
    /// it (or any case variant of it) has been seen.
    pub fn intern(&mut self, raw: &str) -> Arc<FieldValue> {
        let key = normalize_key(raw);

        if let Some(&index) = self.by_key.get(&key) {
            return Arc::clone(&self.values[index]);
        }

        let id = self.values.len() as u32 + 1;
        let value = Arc::new(FieldValue::new(id, self.kind, raw.to_string()));
        debug!(kind = %self.kind, id, value = raw, "interned new field value");

        self.by_key.insert(key, self.values.len());
        self.values.push(Arc::clone(&value));
        value
    }

    /// All values in creation order
    pub fn values(&self) -> &[Arc<FieldValue>] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Key used to decide whether two raw strings are the same value.
///
/// Case is ignored. All blank strings share one key, matching
/// `FieldValue::is_blank`, so "" and "  " intern to one placeholder value.
fn normalize_key(raw: &str) -> String {
    if raw.trim().is_empty() {
        String::new()
    } else {
        raw.to_lowercase()
    }
}
