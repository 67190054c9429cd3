// Extraction pipeline: classify name cells, normalize fields, infer specialty,
// then merge repeated identities into the directory.

pub mod classifier;
pub mod dedupe;
pub mod normalize;
pub mod specialty;

pub use classifier::{classify_name, looks_like_doctor, Rejection};
pub use dedupe::{entry_id, DirectoryBuilder, MergeOutcome};
pub use normalize::{normalize_whitespace, split_multi_value};
pub use specialty::infer_specialty;

use crate::config::Config;
use crate::error::Result;
use crate::output::write_directory;
use crate::table::{DirectoryColumns, SourceTable};
use crate::types::{DoctorEntry, Row};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

/// Counters collected during one scan of the source table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub rows_scanned: usize,
    /// Rows too short to hold a name, or with a blank name cell
    pub rows_skipped: usize,
    pub rows_rejected: usize,
    pub rows_merged: usize,
    pub entries: usize,
}

/// Result of scanning a table: the deduplicated entries in first-seen order.
#[derive(Debug, Clone)]
pub struct DirectoryBuild {
    pub entries: Vec<DoctorEntry>,
    pub stats: BuildStats,
}

/// Result of a complete load → build → write run
#[derive(Debug)]
pub struct RunSummary {
    pub stats: BuildStats,
    pub output_file: PathBuf,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} doctor-like entries to {}",
            self.stats.entries,
            self.output_file.display()
        )
    }
}

/// What a single data row turned into.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Skipped,
    Rejected(Rejection),
    Candidate(DoctorEntry),
}

fn cell_text(row: &Row, index: usize) -> String {
    row.get(index).and_then(|cell| cell.text()).unwrap_or_default()
}

/// Turn one data row into a candidate entry, or say why it produced none.
pub fn extract_candidate(row: &Row, columns: &DirectoryColumns) -> RowOutcome {
    let Some(raw_name) = row.get(columns.name).and_then(|cell| cell.text()) else {
        return RowOutcome::Skipped;
    };
    let name = normalize_whitespace(&raw_name);
    if let Err(rejection) = classify_name(&name) {
        return RowOutcome::Rejected(rejection);
    }

    let contact_value = normalize_whitespace(&cell_text(row, columns.contact));
    let credentials_value = normalize_whitespace(&cell_text(row, columns.credentials));
    let registration_value = normalize_whitespace(&cell_text(row, columns.registration));
    let source_file = cell_text(row, columns.source_file);

    let registration_numbers = split_multi_value(&registration_value);
    let specialty = infer_specialty(&[&credentials_value, &registration_value]);
    let id = entry_id(
        &name,
        registration_numbers.first().map(String::as_str),
        &source_file,
    );

    RowOutcome::Candidate(DoctorEntry {
        id,
        name,
        specialty,
        contacts: split_multi_value(&contact_value).into_iter().collect(),
        credentials: split_multi_value(&credentials_value).into_iter().collect(),
        registration_numbers: registration_numbers.into_iter().collect(),
        source_file,
    })
}

pub struct Pipeline;

impl Pipeline {
    /// Scan every data row in table order and build the deduplicated directory.
    ///
    /// Fails only when a required header is missing; ragged rows and blank
    /// cells are tolerated.
    #[instrument(skip(table), fields(rows = table.rows.len()))]
    pub fn build(table: &SourceTable) -> Result<DirectoryBuild> {
        let columns = DirectoryColumns::resolve(table)?;
        debug!("Resolved columns: {:?}", columns);

        let mut builder = DirectoryBuilder::new();
        let mut stats = BuildStats::default();

        for (index, row) in table.rows.iter().enumerate() {
            stats.rows_scanned += 1;
            match extract_candidate(row, &columns) {
                RowOutcome::Skipped => stats.rows_skipped += 1,
                RowOutcome::Rejected(reason) => {
                    debug!("Row {}: rejected name ({:?})", index + 1, reason);
                    stats.rows_rejected += 1;
                }
                RowOutcome::Candidate(entry) => {
                    let id = entry.id.clone();
                    if builder.insert(entry) == MergeOutcome::Merged {
                        debug!("Row {}: merged into entry {}", index + 1, id);
                        stats.rows_merged += 1;
                    }
                }
            }
        }

        stats.entries = builder.len();
        info!(
            "Scanned {} rows: {} entries, {} merged, {} rejected, {} skipped",
            stats.rows_scanned,
            stats.entries,
            stats.rows_merged,
            stats.rows_rejected,
            stats.rows_skipped
        );
        if builder.is_empty() {
            warn!("No doctor-like rows found in source table");
        }

        Ok(DirectoryBuild {
            entries: builder.finish(),
            stats,
        })
    }

    /// Load the configured input, build the directory and write it out.
    ///
    /// Nothing is written when loading or header resolution fails.
    #[instrument(skip(config), fields(input = %config.input_path.display()))]
    pub fn run(config: &Config) -> Result<RunSummary> {
        info!("Loading source table");
        let table = SourceTable::load(&config.input_path)?;
        let build = Self::build(&table)?;

        write_directory(&config.output_path, &build.entries)?;
        info!(
            "Wrote {} entries to {}",
            build.entries.len(),
            config.output_path.display()
        );

        Ok(RunSummary {
            stats: build.stats,
            output_file: config.output_path.clone(),
        })
    }
}
