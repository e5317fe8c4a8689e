//! Repository, commit, pull request, and release types.
//!
//! The `Raw*` structs mirror the subset of GitHub REST payloads we read and
//! are converted into the flat record types used by reports.

use serde::Deserialize;

use crate::constants;
use crate::error::ConfigError;

/// Owner + name identifying a remote repository.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RepoRef {
    /// Account or organisation login.
    pub owner: String,
    /// Repository name.
    pub name: String,
}

impl RepoRef {
    /// Creates a reference from explicit parts.
    #[must_use]
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parses `name` (resolved against `default_owner`) or `owner/name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRepo`] for empty segments or more than
    /// one slash.
    pub fn parse(input: &str, default_owner: &str) -> Result<Self, ConfigError> {
        let input = input.trim();
        let invalid = || ConfigError::InvalidRepo(input.to_string());

        let (owner, name) = match input.split_once('/') {
            Some((owner, name)) => (owner, name),
            None => (default_owner, input),
        };
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }
        if owner.chars().any(char::is_whitespace) || name.chars().any(char::is_whitespace) {
            return Err(invalid());
        }
        Ok(Self::new(owner, name))
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A commit on the default branch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit {
    /// Full commit SHA.
    pub sha: String,
    /// First line of the commit message.
    pub title: String,
    /// GitHub login, or git author name when the commit is not linked.
    pub author: String,
    /// Web URL of the commit.
    pub url: String,
}

impl Commit {
    /// Abbreviated SHA for display.
    #[must_use]
    pub fn short_sha(&self) -> &str {
        self.sha
            .get(..constants::SHORT_SHA_LEN)
            .unwrap_or(self.sha.as_str())
    }
}

/// An open pull request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PullRequest {
    /// Pull request number.
    pub number: u64,
    /// Pull request title.
    pub title: String,
    /// Login of the user who opened it.
    pub author: String,
    /// Web URL of the pull request.
    pub url: String,
    /// Target branch.
    pub base: String,
    /// Logins of assigned users.
    pub assignees: Vec<String>,
}

/// The most recent published release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Release {
    /// Git tag the release points at.
    pub tag: String,
    /// Human-readable release title, if set.
    pub name: Option<String>,
}

// ── Wire payloads ───────────────────────────────────────────────────────────

#[derive(Deserialize, Debug)]
pub(crate) struct RawRepository {
    pub default_branch: String,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawRelease {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<RawRelease> for Release {
    fn from(raw: RawRelease) -> Self {
        Self {
            tag: raw.tag_name,
            name: raw.name.filter(|n| !n.trim().is_empty()),
        }
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawUser {
    pub login: String,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawGitAuthor {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawCommitDetail {
    pub message: String,
    #[serde(default)]
    pub author: Option<RawGitAuthor>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawCommit {
    pub sha: String,
    pub html_url: String,
    pub commit: RawCommitDetail,
    #[serde(default)]
    pub author: Option<RawUser>,
}

impl From<RawCommit> for Commit {
    fn from(raw: RawCommit) -> Self {
        let title = raw
            .commit
            .message
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();
        let author = raw
            .author
            .map(|u| u.login)
            .or_else(|| raw.commit.author.and_then(|a| a.name))
            .unwrap_or_else(|| constants::UNKNOWN_AUTHOR.to_string());
        Self {
            sha: raw.sha,
            title,
            author,
            url: raw.html_url,
        }
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawComparison {
    #[serde(default)]
    pub commits: Vec<RawCommit>,
}

impl IntoIterator for RawComparison {
    type Item = RawCommit;
    type IntoIter = std::vec::IntoIter<RawCommit>;

    fn into_iter(self) -> Self::IntoIter {
        self.commits.into_iter()
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawBranchRef {
    #[serde(rename = "ref")]
    pub name: String,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawPullRequest {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    #[serde(default)]
    pub user: Option<RawUser>,
    #[serde(default)]
    pub assignees: Vec<RawUser>,
    pub base: RawBranchRef,
}

impl From<RawPullRequest> for PullRequest {
    fn from(raw: RawPullRequest) -> Self {
        Self {
            number: raw.number,
            title: raw.title,
            author: raw
                .user
                .map_or_else(|| constants::UNKNOWN_AUTHOR.to_string(), |u| u.login),
            url: raw.html_url,
            base: raw.base.name,
            assignees: raw.assignees.into_iter().map(|u| u.login).collect(),
        }
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawApiError {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_name_uses_default_owner() {
        let repo = RepoRef::parse("invenio-cli", "inveniosoftware").unwrap();
        assert_eq!(repo, RepoRef::new("inveniosoftware", "invenio-cli"));
        assert_eq!(repo.to_string(), "inveniosoftware/invenio-cli");
    }

    #[test]
    fn test_parse_full_name_overrides_owner() {
        let repo = RepoRef::parse(" acme/widgets ", "inveniosoftware").unwrap();
        assert_eq!(repo, RepoRef::new("acme", "widgets"));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "/", "acme/", "/widgets", "a/b/c", "has space"] {
            assert!(
                RepoRef::parse(bad, "inveniosoftware").is_err(),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_short_sha() {
        let commit = Commit {
            sha: "0123456789abcdef".into(),
            title: String::new(),
            author: String::new(),
            url: String::new(),
        };
        assert_eq!(commit.short_sha(), "0123456");

        let tiny = Commit {
            sha: "abc".into(),
            ..commit
        };
        assert_eq!(tiny.short_sha(), "abc");
    }

    #[test]
    fn test_commit_from_payload() {
        let json = r#"{
            "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
            "html_url": "https://github.com/acme/widgets/commit/6dcb09b",
            "commit": {
                "message": "Fix all the bugs\n\nLonger body here.",
                "author": { "name": "Monalisa Octocat" }
            },
            "author": { "login": "octocat" }
        }"#;
        let raw: RawCommit = serde_json::from_str(json).unwrap();
        let commit = Commit::from(raw);
        assert_eq!(commit.title, "Fix all the bugs");
        assert_eq!(commit.author, "octocat");
        assert_eq!(commit.short_sha(), "6dcb09b");
    }

    #[test]
    fn test_commit_author_fallbacks() {
        let unlinked = r#"{
            "sha": "abc",
            "html_url": "u",
            "commit": { "message": "m", "author": { "name": "Jane Doe" } },
            "author": null
        }"#;
        let commit = Commit::from(serde_json::from_str::<RawCommit>(unlinked).unwrap());
        assert_eq!(commit.author, "Jane Doe");

        let anonymous = r#"{ "sha": "abc", "html_url": "u", "commit": { "message": "" } }"#;
        let commit = Commit::from(serde_json::from_str::<RawCommit>(anonymous).unwrap());
        assert_eq!(commit.author, constants::UNKNOWN_AUTHOR);
        assert_eq!(commit.title, "");
    }

    #[test]
    fn test_pull_request_from_payload() {
        let json = r#"{
            "number": 1347,
            "title": "Amazing new feature",
            "html_url": "https://github.com/acme/widgets/pull/1347",
            "user": { "login": "octocat" },
            "assignees": [{ "login": "hubot" }, { "login": "other_user" }],
            "base": { "ref": "master", "sha": "6dcb09b" }
        }"#;
        let pr = PullRequest::from(serde_json::from_str::<RawPullRequest>(json).unwrap());
        assert_eq!(pr.number, 1347);
        assert_eq!(pr.author, "octocat");
        assert_eq!(pr.base, "master");
        assert_eq!(pr.assignees, vec!["hubot", "other_user"]);
    }

    #[test]
    fn test_release_blank_name_dropped() {
        let raw: RawRelease = serde_json::from_str(r#"{ "tag_name": "v1.0.0", "name": "" }"#).unwrap();
        let release = Release::from(raw);
        assert_eq!(release.tag, "v1.0.0");
        assert_eq!(release.name, None);
    }
}
