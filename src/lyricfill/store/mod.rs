//! # Storage Layer
//!
//! The [`TableStore`] trait hides where the table comes from and where it goes back to.
//!
//! ## Implementations
//!
//! - [`csv::CsvStore`]: Production storage. Reads a CSV file and overwrites the same
//!   path on save. The write is not atomic: an interrupted save can leave a truncated file.
//!
//! - [`memory::InMemoryStore`]: Keeps the table in memory for tests. Can be told to fail
//!   on save.
//!
//! A run loads exactly once and saves exactly once, after every row has been handled.

use crate::error::Result;
use crate::model::Table;
use std::path::Path;

pub mod csv;
pub mod memory;

pub trait TableStore {
    /// Load the whole table.
    fn load(&self) -> Result<Table>;

    /// Persist the table, replacing whatever was stored before.
    fn save(&mut self, table: &Table) -> Result<()>;

    /// Location shown to the user in progress messages.
    fn location(&self) -> &Path;
}
