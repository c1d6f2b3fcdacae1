// 🏷️ Field Values - Interned categorical attributes
//
// "Acme", "ACME" and "acme" in the source all become ONE FieldValue.
// Identity is the (kind, id) pair; the string is only what we display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

// ============================================================================
// FIELD KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Employer,
    Location,
    PositionType,
    CoreCompetency,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Employer => "Employer",
            FieldKind::Location => "Location",
            FieldKind::PositionType => "Position Type",
            FieldKind::CoreCompetency => "Core Competency",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// One distinct categorical value (an employer, a location, ...)
///
/// Ids are assigned by the interner that created the value, sequentially per
/// kind, starting at 1. Two values are equal only if kind and id match, never
/// by string content.
#[derive(Debug, Clone, Serialize)]
pub struct FieldValue {
    id: u32,
    kind: FieldKind,
    value: String,
}

impl FieldValue {
    pub(crate) fn new(id: u32, kind: FieldKind, value: String) -> Self {
        FieldValue { id, kind, value }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Value as it first appeared in the source (first-seen casing)
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Empty or whitespace-only. The interner folds all blanks into one value.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.id == other.id
    }
}

impl Eq for FieldValue {}

impl Hash for FieldValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.id.hash(state);
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
