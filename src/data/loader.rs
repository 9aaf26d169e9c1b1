use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use csv::StringRecord;

use super::model::{Record, Table, REQUIRED_COLUMNS};
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Load policy
// ---------------------------------------------------------------------------

/// What to do with a row that does not fit the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Drop the row without reporting it.
    #[default]
    Lenient,
    /// Fail the whole load on the first bad row.
    Strict,
}

// ---------------------------------------------------------------------------
// Loader – memoized entry-point
// ---------------------------------------------------------------------------

/// Reads the lifecycle table from disk at most once.
///
/// The first successful [`Loader::load`] caches the table; later calls hand
/// out the same `Arc` without touching the file again. A failed load is not
/// cached.
#[derive(Debug)]
pub struct Loader {
    path: PathBuf,
    policy: LoadPolicy,
    table: OnceLock<Arc<Table>>,
}

impl Loader {
    pub fn new(path: impl Into<PathBuf>, policy: LoadPolicy) -> Self {
        Self {
            path: path.into(),
            policy,
            table: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    pub fn load(&self) -> Result<Arc<Table>, LoadError> {
        if let Some(table) = self.table.get() {
            return Ok(Arc::clone(table));
        }
        let table = Arc::new(load_path(&self.path, self.policy)?);
        Ok(Arc::clone(self.table.get_or_init(|| table)))
    }
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Read the table from a CSV file.
pub fn load_path(path: &Path, policy: LoadPolicy) -> Result<Table, LoadError> {
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|e| LoadError::SourceUnreadable {
        origin: origin.clone(),
        source: e.into(),
    })?;
    let table = parse_table(file, &origin, policy)?;
    log::info!("Loaded {} phases from {origin}", table.len());
    Ok(table)
}

/// Parse CSV from any reader. `origin` only labels errors.
///
/// The header must name every column in [`REQUIRED_COLUMNS`]; extra columns
/// are ignored. Rows are kept in source order.
pub fn parse_table<R: Read>(reader: R, origin: &str, policy: LoadPolicy) -> Result<Table, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| unreadable(origin, e))?
        .clone();
    check_headers(&headers, origin)?;

    let mut records = Vec::new();
    for result in reader.records() {
        match parse_row(result, &headers) {
            Ok(record) => records.push(record),
            Err(RowError::Io(e)) => return Err(unreadable(origin, e)),
            Err(RowError::Malformed { line, reason }) => {
                if policy == LoadPolicy::Strict {
                    return Err(LoadError::MalformedRow { line, reason });
                }
            }
        }
    }

    Ok(Table::new(records))
}

enum RowError {
    Io(csv::Error),
    Malformed { line: u64, reason: String },
}

fn parse_row(result: csv::Result<StringRecord>, headers: &StringRecord) -> Result<Record, RowError> {
    let row = match result {
        Ok(row) => row,
        Err(e) if e.is_io_error() => return Err(RowError::Io(e)),
        Err(e) => {
            return Err(RowError::Malformed {
                line: e.position().map(|p| p.line()).unwrap_or_default(),
                reason: e.to_string(),
            })
        }
    };
    let line = row.position().map(|p| p.line()).unwrap_or_default();

    if row.len() != headers.len() {
        return Err(RowError::Malformed {
            line,
            reason: format!("expected {} fields, found {}", headers.len(), row.len()),
        });
    }

    let record: Record = row
        .deserialize(Some(headers))
        .map_err(|e| RowError::Malformed {
            line,
            reason: e.to_string(),
        })?;

    if record.phase_id.trim().is_empty() {
        return Err(RowError::Malformed {
            line,
            reason: "empty Phase ID".to_string(),
        });
    }
    Ok(record)
}

fn check_headers(headers: &StringRecord, origin: &str) -> Result<(), LoadError> {
    match REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        Some(column) => Err(LoadError::MissingColumn {
            origin: origin.to_string(),
            column: *column,
        }),
        None => Ok(()),
    }
}

fn unreadable(origin: &str, source: csv::Error) -> LoadError {
    LoadError::SourceUnreadable {
        origin: origin.to_string(),
        source,
    }
}
