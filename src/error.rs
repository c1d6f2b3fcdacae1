// ⚠️ Catalog Errors
// Every public catalog operation returns one of these.
//
// The type is Clone: the store caches the outcome of its single load and
// hands the same error to every caller that asks afterwards.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The data source could not be opened or parsed
    #[error("failed to read job data from {source_name}: {reason}")]
    SourceUnreadable { source_name: String, reason: String },

    /// A data row did not have the expected number of columns
    #[error("malformed row at line {line}: expected {expected} columns, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Header-based column mapping could not find a required column
    #[error("missing column in header: {0}")]
    MissingColumn(String),

    /// Search was asked for a column that does not exist
    #[error("unrecognized field: {0}")]
    UnknownField(String),

    /// Configuration file unreadable or invalid
    #[error("invalid configuration: {reason}")]
    Config { reason: String },
}

impl CatalogError {
    pub fn source_unreadable(source_name: impl Into<String>, reason: impl ToString) -> Self {
        CatalogError::SourceUnreadable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
