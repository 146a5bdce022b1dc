//! Comma-separated course loader.
//!
//! ## Row Format
//!
//! ```text
//! CSCI201,Data Structures,CSCI101
//! CSCI300,"Algorithms, Advanced",CSCI200
//! identifier,title[,prerequisite...]
//! ```
//!
//! - Fields may be double-quoted; a quoted field keeps its commas
//! - Rows may have any number of fields
//! - Blank lines are skipped
//! - Every field is trimmed
//! - Rows without an identifier or a title are skipped
//! - Empty prerequisite fields are dropped

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::error::LoadError;
use crate::types::Record;

/// Parse one row, or None if it should be skipped
pub fn parse_row(line: &str) -> Option<Record> {
    let mut reader = reader(line.as_bytes());
    let row = reader.records().next()?.ok()?;
    record_from_row(&row)
}

/// Read records from any reader
///
/// # Errors
///
/// Returns [`LoadError::Csv`] if the reader fails mid-stream or the input
/// is malformed (invalid UTF-8, for one). The path is reported as `-`.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<Record>, LoadError> {
    read_rows(reader, Path::new("-"))
}

/// Read records from a file
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be opened, and
/// [`LoadError::Csv`] if reading or decoding its rows fails.
///
/// # Example
///
/// ```no_run
/// use course_catalog::loader::load_file;
///
/// let records = load_file("courses.csv")?;
/// println!("loaded {} courses", records.len());
/// # Ok::<(), course_catalog::error::LoadError>(())
/// ```
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Record>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| io_error(path, source))?;
    let records = read_rows(file, path)?;

    info!(path = %path.display(), records = records.len(), "courses loaded");
    Ok(records)
}

fn reader<R: Read>(source: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source)
}

fn read_rows<R: Read>(source: R, path: &Path) -> Result<Vec<Record>, LoadError> {
    let mut records = Vec::new();

    for row in reader(source).records() {
        let row = row.map_err(|source| csv_error(path, source))?;

        match record_from_row(&row) {
            Some(record) => records.push(record),
            None => debug!(
                line = ?row.position().map(|p| p.line()),
                "skipping row without identifier or title"
            ),
        }
    }

    Ok(records)
}

fn record_from_row(row: &StringRecord) -> Option<Record> {
    let mut fields = row.iter();

    let identifier = fields.next().filter(|f| !f.is_empty())?;
    let title = fields.next().filter(|f| !f.is_empty())?;
    let prerequisites = fields
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect();

    Some(Record::new(identifier, title, prerequisites))
}

fn csv_error(path: &Path, source: csv::Error) -> LoadError {
    LoadError::Csv {
        path: PathBuf::from(path),
        source,
    }
}

fn io_error(path: &Path, source: std::io::Error) -> LoadError {
    LoadError::Io {
        path: PathBuf::from(path),
        source,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
