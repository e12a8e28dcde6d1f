//! Photo resolution engine
//!
//! Decides, for each roster record, which picture file (if any) represents
//! that person. Fixed fallback order, each stage short-circuiting:
//!
//! 1. Exact filename match in the primary directory
//! 2. Cross-reference cache lookup (accepted mapping or explicit rejection)
//! 3. Fuzzy match over the candidate index, gated by an interactive
//!    confirmation when the best score clears the threshold
//! 4. No match
//!
//! The fuzzy stage costs O(candidates) similarity computations per record,
//! so a full pass is O(records * candidates). Fine for rosters of a few
//! thousand names; not built for more.

use crate::crossref::{CrossRefCache, Decision};
use crate::error::Result;
use crate::normalize::{normalize_name, sanitize_filename};
use crate::pictures::{PictureIndex, IMAGE_EXTENSIONS};
use crate::roster::RosterRecord;
use crate::similarity::similarity;
use dialoguer::Input;
use std::path::{Path, PathBuf};

/// Default minimum score a fuzzy candidate must strictly exceed.
pub const DEFAULT_THRESHOLD: f64 = 0.70;

/// Terminal outcome for one roster record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exact filename hit in the primary picture set.
    Primary(PathBuf),
    /// Cached or freshly confirmed match from the secondary picture set.
    Secondary(PathBuf),
    /// A human declined the match, now or in a previous run.
    Rejected,
    /// Nothing scored above the threshold.
    NoMatch,
}

impl Resolution {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Resolution::Primary(p) | Resolution::Secondary(p) => Some(p),
            Resolution::Rejected | Resolution::NoMatch => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Resolution::Primary(_) => "primary",
            Resolution::Secondary(_) => "secondary",
            Resolution::Rejected => "rejected",
            Resolution::NoMatch => "no match",
        }
    }
}

/// Aggregate outcome counts for a resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveStats {
    pub total: usize,
    pub primary: usize,
    pub secondary: usize,
    pub rejected: usize,
    pub unmatched: usize,
}

impl ResolveStats {
    pub fn record(&mut self, resolution: &Resolution) {
        self.total += 1;
        match resolution {
            Resolution::Primary(_) => self.primary += 1,
            Resolution::Secondary(_) => self.secondary += 1,
            Resolution::Rejected => self.rejected += 1,
            Resolution::NoMatch => self.unmatched += 1,
        }
    }

    pub fn with_photo(&self) -> usize {
        self.primary + self.secondary
    }
}

/// Injectable confirmation step for fuzzy candidates.
///
/// Production wires this to a terminal prompt; tests and non-interactive
/// runs supply deterministic implementations.
pub trait ConfirmMatch {
    fn confirm(&mut self, roster_name: &str, candidate_file: &str, score: f64) -> Result<bool>;
}

impl<'b, T: ConfirmMatch + ?Sized> ConfirmMatch for &'b mut T {
    fn confirm(&mut self, roster_name: &str, candidate_file: &str, score: f64) -> Result<bool> {
        (**self).confirm(roster_name, candidate_file, score)
    }
}

impl<T: ConfirmMatch + ?Sized> ConfirmMatch for Box<T> {
    fn confirm(&mut self, roster_name: &str, candidate_file: &str, score: f64) -> Result<bool> {
        (**self).confirm(roster_name, candidate_file, score)
    }
}

/// Terminal prompt. Accepts `y` / `yes` case-insensitively; every other
/// answer, including an empty one, is a rejection.
pub struct PromptConfirm;

impl ConfirmMatch for PromptConfirm {
    fn confirm(&mut self, roster_name: &str, candidate_file: &str, score: f64) -> Result<bool> {
        println!(
            "  Fuzzy match score: {:.2} {:<33} {}",
            score, roster_name, candidate_file
        );

        let answer: String = Input::new()
            .with_prompt("    Accept this match? (y/n)")
            .allow_empty(true)
            .interact_text()?;

        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

/// Declines every candidate without asking. Used by `--non-interactive`
/// runs, where no human is available to decide.
pub struct AutoReject;

impl ConfirmMatch for AutoReject {
    fn confirm(&mut self, _roster_name: &str, _candidate_file: &str, _score: f64) -> Result<bool> {
        Ok(false)
    }
}

pub struct Resolver<'a, C: ConfirmMatch> {
    primary_dir: PathBuf,
    secondary_dir: PathBuf,
    index: &'a PictureIndex,
    cache: &'a mut CrossRefCache,
    threshold: f64,
    /// When set, interactive accept/reject answers are recorded into the
    /// cache so the next run does not ask again.
    record_decisions: bool,
    confirm: C,
}

impl<'a, C: ConfirmMatch> Resolver<'a, C> {
    pub fn new(
        primary_dir: &Path,
        secondary_dir: &Path,
        index: &'a PictureIndex,
        cache: &'a mut CrossRefCache,
        threshold: f64,
        record_decisions: bool,
        confirm: C,
    ) -> Self {
        Self {
            primary_dir: primary_dir.to_path_buf(),
            secondary_dir: secondary_dir.to_path_buf(),
            index,
            cache,
            threshold,
            record_decisions,
            confirm,
        }
    }

    /// Resolve one record through the fixed fallback order.
    pub fn resolve(&mut self, record: &RosterRecord) -> Result<Resolution> {
        // 1. Exact match: a sanitized roster name probing the primary set
        //    always wins, whatever the cache says.
        let safe_name = sanitize_filename(&record.name);
        for ext in IMAGE_EXTENSIONS {
            let path = self.primary_dir.join(format!("{}.{}", safe_name, ext));
            if path.exists() {
                return Ok(Resolution::Primary(path));
            }
        }

        // 2. Cache lookup, keyed by the exact roster name.
        match self.cache.get(&record.name) {
            Some(Decision::Rejected) => return Ok(Resolution::Rejected),
            Some(Decision::Accepted(file)) => {
                let path = self.secondary_dir.join(file);
                if path.exists() {
                    return Ok(Resolution::Secondary(path));
                }
                // Stale entry: the mapped file is gone, fall through
            }
            None => {}
        }

        // 3. Fuzzy match over the sorted candidate pool. Strict `>` on the
        //    running best keeps the first of equally-scored candidates.
        let wanted = normalize_name(&record.name);
        let mut best: Option<(&Path, f64)> = None;
        for (base_name, path) in self.index.iter() {
            let score = similarity(&wanted, &normalize_name(base_name));
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((path, score));
            }
        }

        if let Some((path, score)) = best {
            if score > self.threshold {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();

                if self.confirm.confirm(&record.name, &file_name, score)? {
                    if self.record_decisions {
                        self.cache.insert_accepted(record.name.clone(), file_name);
                    }
                    return Ok(Resolution::Secondary(path.to_path_buf()));
                }

                // Declined. Only the best candidate is ever offered.
                if self.record_decisions {
                    self.cache.insert_rejected(record.name.clone());
                }
                return Ok(Resolution::Rejected);
            }
        }

        // 4. Nothing above the threshold.
        Ok(Resolution::NoMatch)
    }

    /// Resolve every record in order, printing one progress line each, and
    /// return the resolutions with the aggregate counts.
    pub fn resolve_all(
        &mut self,
        records: &[RosterRecord],
    ) -> Result<(Vec<Resolution>, ResolveStats)> {
        let mut resolutions = Vec::with_capacity(records.len());
        let mut stats = ResolveStats::default();

        for (idx, record) in records.iter().enumerate() {
            println!("[{}/{}] {}", idx + 1, records.len(), record.name);

            let resolution = self.resolve(record)?;
            stats.record(&resolution);
            resolutions.push(resolution);
        }

        Ok((resolutions, stats))
    }
}
