// 💼 Job Entity
//
// A job is a name plus four references to interned FieldValues.
// Jobs are built once by the store and never mutated afterward.

use super::field::FieldValue;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Shown in place of an empty field when a job is displayed
pub const DATA_NOT_AVAILABLE: &str = "Data not available";

/// Returns `value`, or the placeholder if it is blank.
///
/// Only the returned string changes; the stored value is untouched.
pub fn display_or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        DATA_NOT_AVAILABLE
    } else {
        value
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    id: u32,
    name: String,
    employer: Arc<FieldValue>,
    location: Arc<FieldValue>,
    position_type: Arc<FieldValue>,
    core_competency: Arc<FieldValue>,
}

impl Job {
    pub(crate) fn new(
        id: u32,
        name: String,
        employer: Arc<FieldValue>,
        location: Arc<FieldValue>,
        position_type: Arc<FieldValue>,
        core_competency: Arc<FieldValue>,
    ) -> Self {
        Job {
            id,
            name,
            employer,
            location,
            position_type,
            core_competency,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn employer(&self) -> &Arc<FieldValue> {
        &self.employer
    }

    pub fn location(&self) -> &Arc<FieldValue> {
        &self.location
    }

    pub fn position_type(&self) -> &Arc<FieldValue> {
        &self.position_type
    }

    pub fn core_competency(&self) -> &Arc<FieldValue> {
        &self.core_competency
    }
}

impl PartialEq for Job {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Job {}

impl Hash for Job {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\nID: {}\nName: {}\nEmployer: {}\nLocation: {}\nPosition Type: {}\nCore Competency: {}\n",
            self.id,
            display_or_placeholder(&self.name),
            display_or_placeholder(self.employer.value()),
            display_or_placeholder(self.location.value()),
            display_or_placeholder(self.position_type.value()),
            display_or_placeholder(self.core_competency.value()),
        )
    }
}
