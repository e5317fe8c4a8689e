//! GitHub data access.
//!
//! [`RepoSource`] is the seam between report generation and the REST API;
//! [`fetch`] turns its primitive operations into the records for one mode.

pub mod client;
pub mod types;

pub use client::GitHubClient;
pub use types::{Commit, PullRequest, Release, RepoRef};

use crate::error::FetchError;

/// Which records a report collects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Commits on the default branch after the latest release.
    Unreleased,
    /// Open pull requests targeting the default branch.
    PullRequests,
}

/// Records fetched for one repository.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Records {
    /// Unreleased commits, newest first, with the release they follow.
    Commits {
        /// Baseline release, `None` when the repository has never released.
        release: Option<Release>,
        /// Commits after `release`.
        commits: Vec<Commit>,
    },
    /// Open pull requests, most recently updated first.
    PullRequests(Vec<PullRequest>),
}

impl Records {
    /// Number of commits or pull requests.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Commits { commits, .. } => commits.len(),
            Self::PullRequests(prs) => prs.len(),
        }
    }

    /// Whether no records were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read-only operations against a source-hosting API.
pub trait RepoSource {
    /// Name of the repository's main line of development.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on access, network, or decode failure.
    fn default_branch(&self, repo: &RepoRef) -> Result<String, FetchError>;

    /// Most recent published (non-draft, non-prerelease) release, if any.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on access, network, or decode failure.
    fn latest_release(&self, repo: &RepoRef) -> Result<Option<Release>, FetchError>;

    /// Commits reachable from `head` but not from `base`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on access, network, or decode failure.
    fn compare(&self, repo: &RepoRef, base: &str, head: &str) -> Result<Vec<Commit>, FetchError>;

    /// Every commit reachable from `branch`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on access, network, or decode failure.
    fn branch_commits(&self, repo: &RepoRef, branch: &str) -> Result<Vec<Commit>, FetchError>;

    /// Open pull requests whose target is `base`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on access, network, or decode failure.
    fn open_pulls(&self, repo: &RepoRef, base: &str) -> Result<Vec<PullRequest>, FetchError>;
}

/// Fetches the records for `mode` from one repository.
///
/// # Errors
///
/// Returns the first [`FetchError`] raised by `source`.
pub fn fetch<S: RepoSource + ?Sized>(
    source: &S,
    repo: &RepoRef,
    mode: Mode,
) -> Result<Records, FetchError> {
    let branch = source.default_branch(repo)?;
    log::debug!("{repo}: default branch is {branch}");

    match mode {
        Mode::Unreleased => {
            let release = source.latest_release(repo)?;
            let commits = match &release {
                Some(rel) => {
                    log::debug!("{repo}: latest release {}", rel.tag);
                    source.compare(repo, &rel.tag, &branch)?
                }
                None => {
                    log::info!("{repo}: no published release, listing all of {branch}");
                    source.branch_commits(repo, &branch)?
                }
            };
            Ok(Records::Commits { release, commits })
        }
        Mode::PullRequests => {
            let prs = source
                .open_pulls(repo, &branch)?
                .into_iter()
                .filter(|pr| pr.base == branch)
                .collect();
            Ok(Records::PullRequests(prs))
        }
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory [`RepoSource`] with a linear history per repository.

    use std::collections::HashMap;

    use super::{Commit, FetchError, PullRequest, Release, RepoRef, RepoSource};

    #[derive(Default, Clone)]
    pub struct FakeRepo {
        pub branch: String,
        /// Oldest first.
        pub history: Vec<Commit>,
        /// Tag name and index into `history` it points at.
        pub release: Option<(String, usize)>,
        pub pulls: Vec<PullRequest>,
    }

    #[derive(Default)]
    pub struct FakeSource {
        pub repos: HashMap<RepoRef, FakeRepo>,
        pub forbidden: Vec<RepoRef>,
    }

    pub fn commit(n: usize) -> Commit {
        Commit {
            sha: format!("{n:040x}"),
            title: format!("commit {n}"),
            author: "dev".into(),
            url: format!("https://github.com/acme/commit/{n}"),
        }
    }

    pub fn pull(number: u64, base: &str) -> PullRequest {
        PullRequest {
            number,
            title: format!("pr {number}"),
            author: "dev".into(),
            url: format!("https://github.com/acme/pull/{number}"),
            base: base.into(),
            assignees: Vec::new(),
        }
    }

    impl FakeSource {
        fn repo(&self, repo: &RepoRef) -> Result<&FakeRepo, FetchError> {
            if self.forbidden.contains(repo) {
                return Err(FetchError::from_status(403, "Forbidden".into()));
            }
            self.repos
                .get(repo)
                .ok_or_else(|| FetchError::NotFound(repo.to_string()))
        }

        fn newest_first(commits: &[Commit]) -> Vec<Commit> {
            commits.iter().rev().cloned().collect()
        }
    }

    impl RepoSource for FakeSource {
        fn default_branch(&self, repo: &RepoRef) -> Result<String, FetchError> {
            Ok(self.repo(repo)?.branch.clone())
        }

        fn latest_release(&self, repo: &RepoRef) -> Result<Option<Release>, FetchError> {
            Ok(self.repo(repo)?.release.as_ref().map(|(tag, _)| Release {
                tag: tag.clone(),
                name: None,
            }))
        }

        fn compare(
            &self,
            repo: &RepoRef,
            base: &str,
            _head: &str,
        ) -> Result<Vec<Commit>, FetchError> {
            let fake = self.repo(repo)?;
            match &fake.release {
                Some((tag, idx)) if tag == base => Ok(Self::newest_first(&fake.history[idx + 1..])),
                _ => Err(FetchError::NotFound(base.to_string())),
            }
        }

        fn branch_commits(&self, repo: &RepoRef, _branch: &str) -> Result<Vec<Commit>, FetchError> {
            Ok(Self::newest_first(&self.repo(repo)?.history))
        }

        fn open_pulls(&self, repo: &RepoRef, _base: &str) -> Result<Vec<PullRequest>, FetchError> {
            Ok(self.repo(repo)?.pulls.clone())
        }
    }
}
