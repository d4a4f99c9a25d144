use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LyricsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{var} not found in environment variables.")]
    MissingToken { var: String },

    #[error("File not found at {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Malformed input: {0}")]
    Malformed(String),

    #[error("CSV must have 'Artist' and 'Song' columns. Found columns: {found:?}")]
    Schema { found: Vec<String> },

    #[error("No cell at row {row}, column {column}")]
    Cell { row: usize, column: usize },

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LyricsError>;
