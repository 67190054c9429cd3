pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod table;
pub mod types;

pub use error::{DirectoryError, Result};
pub use pipeline::{DirectoryBuild, Pipeline, RunSummary};
pub use types::{CellValue, DoctorEntry, Row, Specialty};
