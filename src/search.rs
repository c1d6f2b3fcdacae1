// 🔍 Search Engine - Case-insensitive substring search over jobs
//
// Two modes:
// - Column search: one field must contain the term
// - Value search: any of the five fields may contain the term
//
// Results always keep load order. There is no ranking.

use crate::entities::Job;
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Column name and search term that mean "everything"
pub const ALL: &str = "all";

// ============================================================================
// FIELD SELECTORS
// ============================================================================

/// One searchable job field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobField {
    Name,
    Employer,
    Location,
    PositionType,
    CoreCompetency,
}

impl JobField {
    pub const ALL: [JobField; 5] = [
        JobField::Name,
        JobField::Employer,
        JobField::Location,
        JobField::PositionType,
        JobField::CoreCompetency,
    ];

    /// Column name as callers pass it in
    pub fn as_str(&self) -> &'static str {
        match self {
            JobField::Name => "name",
            JobField::Employer => "employer",
            JobField::Location => "location",
            JobField::PositionType => "positionType",
            JobField::CoreCompetency => "coreCompetency",
        }
    }

    /// Label for result headings ("Jobs with Skill: Java")
    pub fn label(&self) -> &'static str {
        match self {
            JobField::Name => "Name",
            JobField::Employer => "Employer",
            JobField::Location => "Location",
            JobField::PositionType => "Position Type",
            JobField::CoreCompetency => "Skill",
        }
    }

    /// The field's display string on `job`
    pub fn value_of<'a>(&self, job: &'a Job) -> &'a str {
        match self {
            JobField::Name => job.name(),
            JobField::Employer => job.employer().value(),
            JobField::Location => job.location().value(),
            JobField::PositionType => job.position_type().value(),
            JobField::CoreCompetency => job.core_competency().value(),
        }
    }
}

impl FromStr for JobField {
    type Err = CatalogError;

    /// Exact, case-sensitive match on the column names
    fn from_str(s: &str) -> Result<Self> {
        JobField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for JobField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a search looks: one field, or all of them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchColumn {
    All,
    Field(JobField),
}

impl SearchColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchColumn::All => ALL,
            SearchColumn::Field(field) => field.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchColumn::All => "All",
            SearchColumn::Field(field) => field.label(),
        }
    }

    /// Every column a caller can search, with its label, "all" first
    pub fn choices() -> Vec<(&'static str, &'static str)> {
        std::iter::once(SearchColumn::All)
            .chain(JobField::ALL.into_iter().map(SearchColumn::Field))
            .map(|column| (column.as_str(), column.label()))
            .collect()
    }
}

impl FromStr for SearchColumn {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        if s == ALL {
            Ok(SearchColumn::All)
        } else {
            s.parse().map(SearchColumn::Field)
        }
    }
}

impl From<JobField> for SearchColumn {
    fn from(field: JobField) -> Self {
        SearchColumn::Field(field)
    }
}

// ============================================================================
// SEARCH FUNCTIONS
// ============================================================================

/// True when `term` asks for every job ("" or "all" in any casing)
pub fn is_match_all(term: &str) -> bool {
    term.is_empty() || term.eq_ignore_ascii_case(ALL)
}

/// Search one column (or all of them) for `term`.
///
/// A match-all term returns every job regardless of column.
pub fn search(jobs: &[Job], column: SearchColumn, term: &str) -> Vec<Job> {
    if is_match_all(term) {
        return jobs.to_vec();
    }

    match column {
        SearchColumn::All => find_by_value(jobs, term),
        SearchColumn::Field(field) => find_by_field(jobs, field, term),
    }
}

/// Jobs whose `field` contains `term`, ignoring case
pub fn find_by_field(jobs: &[Job], field: JobField, term: &str) -> Vec<Job> {
    let needle = term.to_lowercase();
    let matches: Vec<Job> = jobs
        .iter()
        .filter(|job| contains_ci(field.value_of(job), &needle))
        .cloned()
        .collect();

    debug!(field = %field, term, matches = matches.len(), "column search");
    matches
}

/// Jobs where any field contains `term`, ignoring case. Each job at most once.
pub fn find_by_value(jobs: &[Job], term: &str) -> Vec<Job> {
    let needle = term.to_lowercase();
    let matches: Vec<Job> = jobs
        .iter()
        .filter(|job| {
            JobField::ALL
                .iter()
                .any(|field| contains_ci(field.value_of(job), &needle))
        })
        .cloned()
        .collect();

    debug!(term, matches = matches.len(), "value search");
    matches
}

/// `haystack` contains the already lower-cased `needle`
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::FieldKind;
    use crate::interner::FieldInterner;

    fn create_test_jobs() -> Vec<Job> {
        let mut employers = FieldInterner::new(FieldKind::Employer);
        let mut locations = FieldInterner::new(FieldKind::Location);
        let mut positions = FieldInterner::new(FieldKind::PositionType);
        let mut skills = FieldInterner::new(FieldKind::CoreCompetency);

        let rows = [
            ("Dev", "Acme", "NYC", "Full Time", "Java"),
            ("QA", "acme", "LA", "Part Time", "Java"),
            ("Java Dev", "Globex", "Java Island", "Contract", "Ruby"),
        ];

        rows.iter()
            .enumerate()
            .map(|(i, &(name, employer, location, position, skill))| {
                Job::new(
                    i as u32 + 1,
                    name.to_string(),
                    employers.intern(employer),
                    locations.intern(location),
                    positions.intern(position),
                    skills.intern(skill),
                )
            })
            .collect()
    }

    fn ids(jobs: &[Job]) -> Vec<u32> {
        jobs.iter().map(|j| j.id()).collect()
    }

    #[test]
    fn test_job_field_parse_is_exact() {
        assert_eq!("positionType".parse::<JobField>().unwrap(), JobField::PositionType);
        assert_eq!("coreCompetency".parse::<JobField>().unwrap(), JobField::CoreCompetency);
        assert_eq!(
            "Employer".parse::<JobField>().unwrap_err(),
            CatalogError::UnknownField("Employer".to_string())
        );
        assert!("salary".parse::<JobField>().is_err());
    }

    #[test]
    fn test_search_column_parse() {
        assert_eq!("all".parse::<SearchColumn>().unwrap(), SearchColumn::All);
        assert_eq!(
            "location".parse::<SearchColumn>().unwrap(),
            SearchColumn::Field(JobField::Location)
        );
        assert!("ALL".parse::<SearchColumn>().is_err());
    }

    #[test]
    fn test_match_all_terms() {
        assert!(is_match_all(""));
        assert!(is_match_all("all"));
        assert!(is_match_all("ALL"));
        assert!(!is_match_all(" all"));
        assert!(!is_match_all("java"));
    }

    #[test]
    fn test_column_search_case_insensitive_substring() {
        let jobs = create_test_jobs();

        let acme = find_by_field(&jobs, JobField::Employer, "ACME");
        assert_eq!(ids(&acme), vec![1, 2]);

        let nyc = find_by_field(&jobs, JobField::Location, "NYC");
        assert_eq!(ids(&nyc), vec![1]);

        let time = find_by_field(&jobs, JobField::PositionType, "time");
        assert_eq!(ids(&time), vec![1, 2]);
    }

    #[test]
    fn test_value_search_no_duplicates() {
        let jobs = create_test_jobs();

        // Job 3 matches "java" in name and location, still listed once
        let java = find_by_value(&jobs, "java");
        assert_eq!(ids(&java), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_match_all_ignores_column() {
        let jobs = create_test_jobs();

        assert_eq!(ids(&search(&jobs, SearchColumn::Field(JobField::Name), "all")), vec![1, 2, 3]);
        assert_eq!(ids(&search(&jobs, SearchColumn::All, "")), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_all_column_equals_value_search() {
        let jobs = create_test_jobs();
        for term in ["java", "ACME", "la", "nothing"] {
            assert_eq!(
                ids(&search(&jobs, SearchColumn::All, term)),
                ids(&find_by_value(&jobs, term))
            );
        }
    }

    #[test]
    fn test_search_no_matches() {
        let jobs = create_test_jobs();
        assert!(search(&jobs, JobField::Name.into(), "astronaut").is_empty());
    }

    #[test]
    fn test_choices_and_labels() {
        let choices = SearchColumn::choices();
        assert_eq!(choices.len(), 6);
        assert_eq!(choices[0], ("all", "All"));
        assert!(choices.contains(&("coreCompetency", "Skill")));
        assert_eq!(JobField::PositionType.label(), "Position Type");
    }
}
