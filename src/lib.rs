// TechJobs - Core Library
// Load job records once, intern their categorical values, answer searches.
// Exposes all modules for use in the CLI, presentation layers, and tests.

pub mod config;
pub mod entities;
pub mod error;
pub mod interner;
pub mod loader;
pub mod search;
pub mod sort;
pub mod store;

// Re-export commonly used types
pub use config::{CatalogConfig, ColumnMapping, SourceErrorPolicy, DEFAULT_DATA_FILE};
pub use entities::{display_or_placeholder, FieldKind, FieldValue, Job, DATA_NOT_AVAILABLE};
pub use error::{CatalogError, Result};
pub use interner::FieldInterner;
pub use loader::{parse_csv, CsvSource, JobSource, MemorySource, RawJobRow};
pub use search::{JobField, SearchColumn};
pub use sort::{compare_display_ci, sort_by_display};
pub use store::{Catalog, JobStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
