// Entity Models
//
// Each entity has:
// - Identity: a sequential id assigned by the store that loaded it
// - Value: the strings read from the source, never mutated after load

pub mod field;
pub mod job;

pub use field::{FieldKind, FieldValue};
pub use job::{display_or_placeholder, Job, DATA_NOT_AVAILABLE};
