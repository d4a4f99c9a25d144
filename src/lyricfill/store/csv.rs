use super::TableStore;
use crate::error::{LyricsError, Result};
use crate::model::Table;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TableStore for CsvStore {
    fn load(&self) -> Result<Table> {
        if !self.path.exists() {
            return Err(LyricsError::FileNotFound(self.path.clone()));
        }
        let bytes = fs::read(&self.path).map_err(LyricsError::Io)?;

        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes.as_slice());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| LyricsError::Malformed(e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();
        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(LyricsError::Malformed(
                "no columns to parse from file".to_string(),
            ));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| LyricsError::Malformed(e.to_string()))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(path = %self.path.display(), rows = rows.len(), "loaded csv");
        Table::new(headers, rows)
    }

    fn save(&mut self, table: &Table) -> Result<()> {
        let mut writer = ::csv::WriterBuilder::new()
            .terminator(::csv::Terminator::Any(b'\n'))
            .from_path(&self.path)
            .map_err(LyricsError::Csv)?;

        writer.write_record(table.headers())?;
        for row in table.rows() {
            writer.write_record(row)?;
        }
        writer.flush().map_err(LyricsError::Io)?;

        debug!(path = %self.path.display(), rows = table.len(), "saved csv");
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
