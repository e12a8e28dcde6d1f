//! Cross-reference decision cache
//!
//! Persisted human accept/reject decisions, keyed by the exact roster name
//! (never normalized). Three-valued semantics: a name maps to an accepted
//! secondary filename, to an explicit rejection, or to nothing at all, in
//! which case the resolver goes through fuzzy matching.
//!
//! Persisted as CSV with columns `cpj_name`, `gigaza_name`, `accepted`.
//! `accepted` is matched case-sensitively against `"yes"` and `"no"`; rows
//! with any other value contribute no entry.

use crate::error::{PhotoRosterError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A persisted human decision for one roster name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Use this filename from the secondary picture set.
    Accepted(String),
    /// Explicitly declined; never offer a fuzzy candidate again.
    Rejected,
}

#[derive(Debug, Serialize, Deserialize)]
struct CacheRow {
    cpj_name: String,
    gigaza_name: String,
    accepted: String,
}

#[derive(Debug, Default)]
pub struct CrossRefCache {
    entries: HashMap<String, Decision>,
    dirty: bool,
}

impl CrossRefCache {
    /// Load decisions from `path`.
    ///
    /// A missing file is an empty cache. A row that cannot be read against
    /// the expected columns is fatal: a broken cache format means the
    /// persisted-decision contract is violated.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let mut reader = csv::Reader::from_path(path)?;
        let mut entries = HashMap::new();

        for row in reader.deserialize() {
            let row: CacheRow = row.map_err(|e| {
                PhotoRosterError::InvalidCache(format!("{}: {}", path.display(), e))
            })?;

            match row.accepted.as_str() {
                "yes" => {
                    entries.insert(row.cpj_name, Decision::Accepted(row.gigaza_name));
                }
                "no" => {
                    entries.insert(row.cpj_name, Decision::Rejected);
                }
                // Anything else is dropped without comment
                _ => {}
            }
        }

        Ok(Self {
            entries,
            dirty: false,
        })
    }

    pub fn get(&self, roster_name: &str) -> Option<&Decision> {
        self.entries.get(roster_name)
    }

    pub fn insert_accepted(&mut self, roster_name: String, secondary_file: String) {
        self.entries
            .insert(roster_name, Decision::Accepted(secondary_file));
        self.dirty = true;
    }

    pub fn insert_rejected(&mut self, roster_name: String) {
        self.entries.insert(roster_name, Decision::Rejected);
        self.dirty = true;
    }

    /// True when in-session decisions have not been written back yet.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn accepted_count(&self) -> usize {
        self.entries
            .values()
            .filter(|d| matches!(d, Decision::Accepted(_)))
            .count()
    }

    pub fn rejected_count(&self) -> usize {
        self.entries
            .values()
            .filter(|d| matches!(d, Decision::Rejected))
            .count()
    }

    /// Write all decisions back to `path`, sorted by roster name so the
    /// file diffs cleanly between runs.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        let mut names: Vec<&String> = self.entries.keys().collect();
        names.sort();

        let mut writer = csv::Writer::from_path(path)?;
        for name in names {
            let row = match &self.entries[name] {
                Decision::Accepted(file) => CacheRow {
                    cpj_name: name.clone(),
                    gigaza_name: file.clone(),
                    accepted: "yes".to_string(),
                },
                Decision::Rejected => CacheRow {
                    cpj_name: name.clone(),
                    gigaza_name: String::new(),
                    accepted: "no".to_string(),
                },
            };
            writer.serialize(row)?;
        }
        writer.flush()?;

        self.dirty = false;
        Ok(())
    }
}
