use super::TableStore;
use crate::error::{LyricsError, Result};
use crate::model::Table;
use std::path::{Path, PathBuf};

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    table: Table,
    saves: usize,
    fail_on_save: bool,
    location: PathBuf,
}

impl InMemoryStore {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            location: PathBuf::from("memory.csv"),
            ..Self::default()
        }
    }

    pub fn failing_on_save(mut self) -> Self {
        self.fail_on_save = true;
        self
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl TableStore for InMemoryStore {
    fn load(&self) -> Result<Table> {
        Ok(self.table.clone())
    }

    fn save(&mut self, table: &Table) -> Result<()> {
        if self.fail_on_save {
            return Err(LyricsError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only store",
            )));
        }
        self.table = table.clone();
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.location
    }
}

// --- Test Fixtures ---
