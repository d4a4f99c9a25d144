use crate::error::{LyricsError, Result};

/// Name of the output column. Matched exactly, not by alias.
pub const LYRICS_COLUMN: &str = "Lyrics";

pub const STATUS_NOT_AVAILABLE: &str = "Lyrics Not Available";
pub const STATUS_NOT_FOUND: &str = "Lyrics Not Found/Error";
pub const STATUS_SKIPPED: &str = "Skipped: Missing data";
pub const STATUS_ROW_ERROR: &str = "Error processing row";
pub const STATUS_WRITE_ERROR: &str = "Error writing lyrics";

/// An in-memory table: a header plus rows of string cells.
///
/// Every row is exactly as wide as the header. An empty cell is the null value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table, padding short rows with empty cells.
    ///
    /// Rows wider than the header are rejected.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let width = headers.len();
        let mut padded = Vec::with_capacity(rows.len());
        for (i, mut row) in rows.into_iter().enumerate() {
            if row.len() > width {
                return Err(LyricsError::Malformed(format!(
                    "row {} has {} fields, expected at most {}",
                    i,
                    row.len(),
                    width
                )));
            }
            row.resize(width, String::new());
            padded.push(row);
        }
        Ok(Self {
            headers,
            rows: padded,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Append a column whose cells are all empty. Returns its index.
    pub fn add_column(&mut self, name: &str) -> usize {
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.headers.len() - 1
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
    }

    pub fn set_cell(&mut self, row: usize, column: usize, value: impl Into<String>) -> Result<()> {
        let slot = self
            .rows
            .get_mut(row)
            .and_then(|r| r.get_mut(column))
            .ok_or(LyricsError::Cell { row, column })?;
        *slot = value.into();
        Ok(())
    }
}

/// Resolved positions of the three columns the run cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub artist: usize,
    pub song: usize,
    pub lyrics: usize,
}

/// Outcome of one provider lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LyricResult {
    Found(String),
    NotFound,
    /// Artist or normalized title was blank; no request was made.
    Skipped,
    Error(String),
}

/// What happened to a single row. Exactly one per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Lyrics were written; `placeholder` is set when the provider text was
    /// replaced with the "not available" status.
    Stored { placeholder: bool },
    Skipped,
    NotFound,
    WriteFailed,
    Failed,
}

/// Counters reported once at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub errors: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn record(mut self, outcome: &RowOutcome) -> Self {
        match outcome {
            RowOutcome::Stored { .. } => self.processed += 1,
            RowOutcome::Skipped => self.skipped += 1,
            RowOutcome::NotFound | RowOutcome::WriteFailed | RowOutcome::Failed => {
                self.errors += 1
            }
        }
        self
    }

    pub fn total(&self) -> usize {
        self.processed + self.errors + self.skipped
    }
}
