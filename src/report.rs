//! Report collection.
//!
//! Walks the repository list in order, fetching records for each one. A
//! failure for one repository is recorded as its outcome and the walk
//! continues.

use crate::github::{self, Mode, Records, RepoRef, RepoSource};

/// Result of fetching one repository.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Records were fetched.
    Fetched(Records),
    /// The fetch failed; the message is shown in place of records.
    Failed(String),
}

/// One repository and what was found for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// The repository inspected.
    pub repo: RepoRef,
    /// Its records or failure.
    pub outcome: Outcome,
}

/// Ordered results for a single run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// What was collected.
    pub mode: Mode,
    /// One entry per input repository, in input order.
    pub entries: Vec<Entry>,
}

impl Report {
    /// Number of repositories whose fetch failed.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, Outcome::Failed(_)))
            .count()
    }
}

/// Fetches every repository in `repos` and collects the outcomes.
pub fn collect<S: RepoSource + ?Sized>(source: &S, repos: &[RepoRef], mode: Mode) -> Report {
    let entries = repos
        .iter()
        .map(|repo| {
            log::info!("Fetching {repo}");
            let outcome = match github::fetch(source, repo, mode) {
                Ok(records) => {
                    log::info!("{repo}: {} record(s)", records.len());
                    Outcome::Fetched(records)
                }
                Err(e) => {
                    log::warn!("{repo}: {e}");
                    Outcome::Failed(e.to_string())
                }
            };
            Entry {
                repo: repo.clone(),
                outcome,
            }
        })
        .collect();

    Report { mode, entries }
}
