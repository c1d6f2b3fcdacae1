// 🗄️ Job Store - Load once, intern, serve read-only queries
//
// Lifecycle: uninitialized → loaded (exactly once) → immutable
//
// The store is an ordinary value: construct it with a source, share it by
// reference. Ids are counted per store, so two stores never share counters.

use crate::config::{CatalogConfig, SourceErrorPolicy};
use crate::entities::{FieldKind, FieldValue, Job};
use crate::error::{CatalogError, Result};
use crate::interner::FieldInterner;
use crate::loader::{CsvSource, JobSource, RawJobRow};
use crate::search::{self, SearchColumn};
use crate::sort::sort_by_display;
use std::sync::{Arc, OnceLock};
use tracing::{debug, error, info};

// ============================================================================
// CATALOG (loaded data)
// ============================================================================

/// Everything produced by one load: jobs plus one interner per kind
#[derive(Debug)]
pub struct Catalog {
    jobs: Vec<Job>,
    employers: FieldInterner,
    locations: FieldInterner,
    position_types: FieldInterner,
    core_competencies: FieldInterner,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            jobs: Vec::new(),
            employers: FieldInterner::new(FieldKind::Employer),
            locations: FieldInterner::new(FieldKind::Location),
            position_types: FieldInterner::new(FieldKind::PositionType),
            core_competencies: FieldInterner::new(FieldKind::CoreCompetency),
        }
    }
}

impl Catalog {
    /// Intern every row's categorical values and build its job, in row order
    pub fn build(rows: Vec<RawJobRow>) -> Self {
        let mut catalog = Catalog::default();
        catalog.jobs.reserve(rows.len());

        for row in rows {
            let employer = catalog.employers.intern(&row.employer);
            let location = catalog.locations.intern(&row.location);
            let position_type = catalog.position_types.intern(&row.position_type);
            let core_competency = catalog.core_competencies.intern(&row.core_competency);

            let id = catalog.jobs.len() as u32 + 1;
            debug!(id, line = row.line, name = %row.name, "built job");
            catalog.jobs.push(Job::new(
                id,
                row.name,
                employer,
                location,
                position_type,
                core_competency,
            ));
        }

        catalog
    }

    /// All jobs in load order
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn interner(&self, kind: FieldKind) -> &FieldInterner {
        match kind {
            FieldKind::Employer => &self.employers,
            FieldKind::Location => &self.locations,
            FieldKind::PositionType => &self.position_types,
            FieldKind::CoreCompetency => &self.core_competencies,
        }
    }
}

// ============================================================================
// JOB STORE
// ============================================================================

pub struct JobStore {
    source: Box<dyn JobSource>,
    on_source_error: SourceErrorPolicy,

    /// Outcome of the single load (success or failure), set on first access
    catalog: OnceLock<Result<Catalog>>,
}

impl JobStore {
    pub fn new(source: impl JobSource + 'static) -> Self {
        JobStore {
            source: Box::new(source),
            on_source_error: SourceErrorPolicy::default(),
            catalog: OnceLock::new(),
        }
    }

    /// Store over the CSV file named by `config`
    pub fn from_config(config: &CatalogConfig) -> Self {
        JobStore::new(CsvSource::from_path(config.data_path.clone(), config.column_mapping))
            .with_source_error_policy(config.on_source_error)
    }

    pub fn with_source_error_policy(mut self, policy: SourceErrorPolicy) -> Self {
        self.on_source_error = policy;
        self
    }

    /// Load the source if that has not happened yet.
    ///
    /// Safe to call from several threads; the source is read at most once.
    /// A failed load is not retried: every later call sees the same error.
    pub fn ensure_loaded(&self) -> Result<&Catalog> {
        self.catalog
            .get_or_init(|| self.load_catalog())
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Explicit form of `ensure_loaded` for callers that want to fail early
    pub fn load(&self) -> Result<()> {
        self.ensure_loaded().map(|_| ())
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.get().is_some()
    }

    fn load_catalog(&self) -> Result<Catalog> {
        let source_name = self.source.describe();

        match self.source.read_rows() {
            Ok(rows) => {
                let catalog = Catalog::build(rows);
                info!(
                    source = %source_name,
                    jobs = catalog.jobs.len(),
                    employers = catalog.employers.len(),
                    locations = catalog.locations.len(),
                    position_types = catalog.position_types.len(),
                    core_competencies = catalog.core_competencies.len(),
                    "job data loaded"
                );
                Ok(catalog)
            }
            Err(e @ CatalogError::SourceUnreadable { .. })
                if self.on_source_error == SourceErrorPolicy::Empty =>
            {
                error!(source = %source_name, error = %e, "failed to load job data, serving empty catalog");
                Ok(Catalog::default())
            }
            Err(e) => {
                error!(source = %source_name, error = %e, "failed to load job data");
                Err(e)
            }
        }
    }

    // ========================================================================
    // JOB QUERIES
    // ========================================================================

    /// Every job, in load order. The returned list is the caller's own copy.
    pub fn find_all(&self) -> Result<Vec<Job>> {
        Ok(self.ensure_loaded()?.jobs.clone())
    }

    /// Search by column name ("all", "name", "employer", "location",
    /// "positionType", "coreCompetency") and term.
    ///
    /// An empty or "all" term returns every job before the column is even
    /// looked at. Any other unknown column is an `UnknownField` error.
    pub fn find_by_column_and_value(&self, column: &str, term: &str) -> Result<Vec<Job>> {
        let catalog = self.ensure_loaded()?;
        if search::is_match_all(term) {
            return Ok(catalog.jobs.clone());
        }

        let column: SearchColumn = column.parse()?;
        Ok(search::search(&catalog.jobs, column, term))
    }

    /// Typed form of `find_by_column_and_value`
    pub fn search(&self, column: SearchColumn, term: &str) -> Result<Vec<Job>> {
        Ok(search::search(&self.ensure_loaded()?.jobs, column, term))
    }

    /// Jobs where any field contains `term`, ignoring case
    pub fn find_by_value(&self, term: &str) -> Result<Vec<Job>> {
        Ok(search::find_by_value(&self.ensure_loaded()?.jobs, term))
    }

    // ========================================================================
    // CATEGORICAL VALUES
    // ========================================================================

    /// Distinct values of `kind`, sorted by display string ignoring case.
    ///
    /// Sorting happens on a copy; the canonical list keeps creation order.
    pub fn all_values(&self, kind: FieldKind) -> Result<Vec<Arc<FieldValue>>> {
        let mut values = self.ensure_loaded()?.interner(kind).values().to_vec();
        sort_by_display(&mut values);
        Ok(values)
    }

    pub fn all_employers(&self) -> Result<Vec<Arc<FieldValue>>> {
        self.all_values(FieldKind::Employer)
    }

    pub fn all_locations(&self) -> Result<Vec<Arc<FieldValue>>> {
        self.all_values(FieldKind::Location)
    }

    pub fn all_position_types(&self) -> Result<Vec<Arc<FieldValue>>> {
        self.all_values(FieldKind::PositionType)
    }

    pub fn all_core_competencies(&self) -> Result<Vec<Arc<FieldValue>>> {
        self.all_values(FieldKind::CoreCompetency)
    }
}

impl std::fmt::Debug for JobStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobStore")
            .field("source", &self.source.describe())
            .field("on_source_error", &self.on_source_error)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
