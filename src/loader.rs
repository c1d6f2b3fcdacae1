// 📥 Job Sources - Where raw job rows come from
//
// JobSource is the only seam the store depends on:
// - CsvSource: RFC4180 file (or in-memory text) with a header row
// - MemorySource: rows already in memory (embedding, tests)
//
// Sources only produce raw strings. Interning and id assignment happen in the
// store, so a source can be read without touching any shared state.

use crate::config::ColumnMapping;
use crate::error::{CatalogError, Result};
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Number of job fields every row must provide
pub const JOB_COLUMNS: usize = 5;

// ============================================================================
// CORE TYPES
// ============================================================================

/// One data row before interning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawJobRow {
    pub name: String,
    pub employer: String,
    pub location: String,
    pub position_type: String,
    pub core_competency: String,

    /// 1-based line (or row number) in the source; 0 when unknown
    pub line: u64,
}

impl RawJobRow {
    pub fn new(
        name: &str,
        employer: &str,
        location: &str,
        position_type: &str,
        core_competency: &str,
    ) -> Self {
        RawJobRow {
            name: name.to_string(),
            employer: employer.to_string(),
            location: location.to_string(),
            position_type: position_type.to_string(),
            core_competency: core_competency.to_string(),
            line: 0,
        }
    }

    /// Builder pattern: record the source line
    pub fn at_line(mut self, line: u64) -> Self {
        self.line = line;
        self
    }
}

/// Anything that can hand the store its full row set
pub trait JobSource: Send + Sync {
    /// Read every data row, in source order
    fn read_rows(&self) -> Result<Vec<RawJobRow>>;

    /// Human-readable name for logs and errors
    fn describe(&self) -> String;
}

// ============================================================================
// CSV SOURCE
// ============================================================================

#[derive(Debug, Clone)]
enum CsvOrigin {
    File(PathBuf),
    Text { name: String, contents: String },
}

#[derive(Debug, Clone)]
pub struct CsvSource {
    origin: CsvOrigin,
    mapping: ColumnMapping,
}

impl CsvSource {
    pub fn from_path(path: impl Into<PathBuf>, mapping: ColumnMapping) -> Self {
        CsvSource {
            origin: CsvOrigin::File(path.into()),
            mapping,
        }
    }

    /// CSV held in memory; `name` is only used in logs and errors
    pub fn from_text(
        name: impl Into<String>,
        contents: impl Into<String>,
        mapping: ColumnMapping,
    ) -> Self {
        CsvSource {
            origin: CsvOrigin::Text {
                name: name.into(),
                contents: contents.into(),
            },
            mapping,
        }
    }
}

impl JobSource for CsvSource {
    fn read_rows(&self) -> Result<Vec<RawJobRow>> {
        match &self.origin {
            CsvOrigin::File(path) => {
                let file = File::open(path)
                    .map_err(|e| CatalogError::source_unreadable(path.display().to_string(), e))?;
                parse_csv(file, self.mapping, &path.display().to_string())
            }
            CsvOrigin::Text { name, contents } => {
                parse_csv(contents.as_bytes(), self.mapping, name)
            }
        }
    }

    fn describe(&self) -> String {
        match &self.origin {
            CsvOrigin::File(path) => path.display().to_string(),
            CsvOrigin::Text { name, .. } => name.clone(),
        }
    }
}

/// Parse CSV job data: header row first, then one job per row.
///
/// Every data row must have as many columns as the header. Wrong column
/// counts fail the whole parse so no job is ever built from a partial row.
pub fn parse_csv<R: Read>(
    reader: R,
    mapping: ColumnMapping,
    source_name: &str,
) -> Result<Vec<RawJobRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| CatalogError::source_unreadable(source_name, e))?
        .clone();

    // Zero-byte source: nothing to load
    if headers.is_empty() {
        debug!(source = source_name, "source has no header row");
        return Ok(Vec::new());
    }

    let columns = ColumnIndexes::resolve(&headers, mapping)?;
    if headers.len() > JOB_COLUMNS {
        warn!(
            source = source_name,
            columns = headers.len(),
            "ignoring columns beyond the five job fields"
        );
    }

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| CatalogError::source_unreadable(source_name, e))?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 2);

        if record.len() != headers.len() {
            return Err(CatalogError::MalformedRow {
                line,
                expected: headers.len(),
                found: record.len(),
            });
        }

        rows.push(columns.extract(&record).at_line(line));
    }

    debug!(source = source_name, rows = rows.len(), "parsed job rows");
    Ok(rows)
}

// ============================================================================
// COLUMN MAPPING
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndexes {
    name: usize,
    employer: usize,
    location: usize,
    position_type: usize,
    core_competency: usize,
}

impl ColumnIndexes {
    const POSITIONAL: ColumnIndexes = ColumnIndexes {
        name: 0,
        employer: 1,
        location: 2,
        position_type: 3,
        core_competency: 4,
    };

    fn resolve(headers: &StringRecord, mapping: ColumnMapping) -> Result<Self> {
        match mapping {
            ColumnMapping::Positional => {
                if headers.len() < JOB_COLUMNS {
                    return Err(CatalogError::MalformedRow {
                        line: 1,
                        expected: JOB_COLUMNS,
                        found: headers.len(),
                    });
                }
                Ok(Self::POSITIONAL)
            }
            ColumnMapping::ByHeader => {
                let folded: Vec<String> = headers.iter().map(fold_header).collect();
                let find = |wanted: &str| {
                    folded
                        .iter()
                        .position(|h| h == wanted)
                        .ok_or_else(|| CatalogError::MissingColumn(wanted.to_string()))
                };

                Ok(ColumnIndexes {
                    name: find("name")?,
                    employer: find("employer")?,
                    location: find("location")?,
                    position_type: find("positiontype")?,
                    core_competency: find("corecompetency")?,
                })
            }
        }
    }

    fn extract(&self, record: &StringRecord) -> RawJobRow {
        let get = |i: usize| record.get(i).unwrap_or("");
        RawJobRow::new(
            get(self.name),
            get(self.employer),
            get(self.location),
            get(self.position_type),
            get(self.core_competency),
        )
    }
}

/// "Position Type", "position_type", "positionType" → "positiontype"
fn fold_header(header: &str) -> String {
    header
        .trim_start_matches('\u{feff}')
        .chars()
        .filter(|c| !matches!(*c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

// ============================================================================
// MEMORY SOURCE
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: Vec<RawJobRow>,
}

impl MemorySource {
    pub fn new(rows: Vec<RawJobRow>) -> Self {
        MemorySource { rows }
    }

    /// Build from (name, employer, location, position type, core competency) tuples
    pub fn from_tuples(rows: &[(&str, &str, &str, &str, &str)]) -> Self {
        MemorySource::new(
            rows.iter()
                .enumerate()
                .map(|(i, &(name, employer, location, position_type, core_competency))| {
                    RawJobRow::new(name, employer, location, position_type, core_competency)
                        .at_line(i as u64 + 1)
                })
                .collect(),
        )
    }
}

impl JobSource for MemorySource {
    fn read_rows(&self) -> Result<Vec<RawJobRow>> {
        Ok(self.rows.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} rows)", self.rows.len())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
name,employer,location,position type,core competency
Junior Data Analyst,Lockerdome,Saint Louis,Data Scientist / Business Intelligence,Statistical Analysis
\"Developer, Web\",\"Acme, Inc\",NYC,Full Time,Java
";

    #[test]
    fn test_parse_positional() {
        let rows = parse_csv(SAMPLE.as_bytes(), ColumnMapping::Positional, "sample").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Junior Data Analyst");
        assert_eq!(rows[0].employer, "Lockerdome");
        assert_eq!(rows[0].core_competency, "Statistical Analysis");
        assert_eq!(rows[0].line, 2);

        // RFC4180 quoting keeps embedded commas
        assert_eq!(rows[1].name, "Developer, Web");
        assert_eq!(rows[1].employer, "Acme, Inc");
        assert_eq!(rows[1].line, 3);
    }

    #[test]
    fn test_parse_by_header_reordered_columns() {
        let csv = "\
Core_Competency,Location,Name,Employer,PositionType
Java,NYC,Dev,Acme,Full Time
";
        let rows = parse_csv(csv.as_bytes(), ColumnMapping::ByHeader, "reordered").unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Dev");
        assert_eq!(rows[0].employer, "Acme");
        assert_eq!(rows[0].location, "NYC");
        assert_eq!(rows[0].position_type, "Full Time");
        assert_eq!(rows[0].core_competency, "Java");
    }

    #[test]
    fn test_by_header_missing_column() {
        let csv = "name,employer,location,core competency\nDev,Acme,NYC,Java\n";
        let err = parse_csv(csv.as_bytes(), ColumnMapping::ByHeader, "short").unwrap_err();
        assert_eq!(err, CatalogError::MissingColumn("positiontype".to_string()));
    }

    #[test]
    fn test_short_row_is_malformed() {
        let csv = "\
name,employer,location,position type,core competency
Dev,Acme,NYC,Full Time,Java
QA,Acme,LA
";
        let err = parse_csv(csv.as_bytes(), ColumnMapping::Positional, "bad").unwrap_err();
        assert_eq!(
            err,
            CatalogError::MalformedRow {
                line: 3,
                expected: 5,
                found: 3
            }
        );
    }

    #[test]
    fn test_positional_header_too_narrow() {
        let csv = "name,employer\nDev,Acme\n";
        let err = parse_csv(csv.as_bytes(), ColumnMapping::Positional, "narrow").unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRow { line: 1, .. }));
    }

    #[test]
    fn test_empty_input_yields_no_rows() {
        let rows = parse_csv("".as_bytes(), ColumnMapping::Positional, "empty").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_header_only_yields_no_rows() {
        let csv = "name,employer,location,position type,core competency\n";
        let rows = parse_csv(csv.as_bytes(), ColumnMapping::Positional, "header").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_fold_header() {
        assert_eq!(fold_header("Position Type"), "positiontype");
        assert_eq!(fold_header("core_competency"), "corecompetency");
        assert_eq!(fold_header("\u{feff}Name"), "name");
        assert_eq!(fold_header("position-type"), "positiontype");
    }

    #[test]
    fn test_csv_source_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let source = CsvSource::from_path(file.path(), ColumnMapping::Positional);
        let rows = source.read_rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[test]
    fn test_csv_source_missing_file() {
        let source = CsvSource::from_path("/nonexistent/job_data.csv", ColumnMapping::Positional);
        let err = source.read_rows().unwrap_err();
        assert!(matches!(err, CatalogError::SourceUnreadable { .. }));
    }

    #[test]
    fn test_memory_source() {
        let source = MemorySource::from_tuples(&[("Dev", "Acme", "NYC", "Full Time", "Java")]);
        let rows = source.read_rows().unwrap();
        assert_eq!(
            rows,
            vec![RawJobRow::new("Dev", "Acme", "NYC", "Full Time", "Java").at_line(1)]
        );
        assert_eq!(source.describe(), "memory (1 rows)");
    }
}
