//! Challenge records and the read-only store built from one source table.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// One innovation-challenge project as read from a source table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeRecord {
    name: String,
    description: String,
    fields: Vec<(String, String)>,
}

impl ChallengeRecord {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        fields: Vec<(String, String)>,
    ) -> Self {
        Self { name: name.into(), description: description.into(), fields }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Additional columns in source order, as `(header, value)` pairs.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

/// Mapping from challenge name to record for one loaded source table.
///
/// A store is never mutated after construction. Reloading builds a new store.
#[derive(Debug, Clone)]
pub struct ChallengeStore {
    records: BTreeMap<String, ChallengeRecord>,
    fingerprint: String,
    source: PathBuf,
}

impl ChallengeStore {
    /// Build a store from records in row order. Later rows replace earlier
    /// rows with the same name.
    pub fn from_records(
        records: impl IntoIterator<Item = ChallengeRecord>,
        fingerprint: impl Into<String>,
        source: impl Into<PathBuf>,
    ) -> Self {
        let mut map = BTreeMap::new();
        for record in records {
            if let Some(previous) = map.insert(record.name.clone(), record) {
                log::debug!("challenge '{}' replaced by a later row", previous.name);
            }
        }
        Self { records: map, fingerprint: fingerprint.into(), source: source.into() }
    }

    /// Resolve a challenge by name: exact match first, then case-insensitive
    /// on trimmed names.
    pub fn get(&self, name: &str) -> Option<&ChallengeRecord> {
        if let Some(record) = self.records.get(name) {
            return Some(record);
        }
        let wanted = name.trim().to_lowercase();
        self.records.values().find(|record| record.name.trim().to_lowercase() == wanted)
    }

    /// Challenge names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// SHA-256 of the source bytes this store was built from.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}
