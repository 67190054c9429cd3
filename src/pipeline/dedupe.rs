use crate::constants::ENTRY_ID_LEN;
use crate::types::DoctorEntry;
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Deterministic short identifier for a doctor record.
///
/// The identity basis is `lower(name)|<first registration number>`, falling
/// back to `lower(source file)` when the record has no registration number.
pub fn entry_id(name: &str, first_registration: Option<&str>, source_file: &str) -> String {
    let mut basis = name.to_lowercase();
    basis.push('|');
    match first_registration {
        Some(reg) => basis.push_str(reg),
        None => basis.push_str(&source_file.to_lowercase()),
    }

    let mut hasher = Sha256::new();
    hasher.update(basis.as_bytes());
    let mut hex = hex::encode(hasher.finalize());
    hex.truncate(ENTRY_ID_LEN);
    hex
}

/// What happened to a candidate handed to [`DirectoryBuilder::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Inserted,
    Merged,
}

/// Accumulates entries keyed by id, keeping first-insertion order.
#[derive(Debug, Default)]
pub struct DirectoryBuilder {
    entries: Vec<DoctorEntry>,
    positions: HashMap<String, usize>,
}

impl DirectoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new entry, or union its multi-valued fields into the entry
    /// already holding the same id.
    pub fn insert(&mut self, candidate: DoctorEntry) -> MergeOutcome {
        match self.positions.get(&candidate.id) {
            Some(&position) => {
                self.entries[position].merge(candidate);
                MergeOutcome::Merged
            }
            None => {
                self.positions.insert(candidate.id.clone(), self.entries.len());
                self.entries.push(candidate);
                MergeOutcome::Inserted
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&DoctorEntry> {
        self.positions.get(id).map(|&position| &self.entries[position])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order their ids were first seen.
    pub fn finish(self) -> Vec<DoctorEntry> {
        self.entries
    }
}
