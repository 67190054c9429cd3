use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Input file not found at {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("Workbook has no sheets")]
    MissingSheet,

    #[error("Source table is empty; expected a header row")]
    EmptyTable,

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Spreadsheet read failed: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
