//! Application-wide constants and configuration values.
//!
//! This module defines the static defaults used throughout relwatch,
//! including API endpoints, the built-in repository set, and output labels.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === GitHub API ===

/// Default GitHub REST API base URL.
pub const GITHUB_API_URL: &str = "https://api.github.com";
/// Media type requested from the REST API.
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";
/// REST API version header value.
pub const GITHUB_API_VERSION: &str = "2022-11-28";
/// Page size for list endpoints (API maximum).
pub const PAGE_SIZE: u32 = 100;

// === Default Repository Set ===

/// Owner used for short repository names when none is configured.
pub const DEFAULT_OWNER: &str = "inveniosoftware";

/// Repositories inspected when none are given on the command line or in config.
pub const DEFAULT_REPOS: [&str; 7] = [
    "invenio-app-rdm",
    "invenio-cli",
    "invenio-drafts-resources",
    "invenio-rdm-records",
    "invenio-records-resources",
    "react-invenio-deposit",
    "react-invenio-forms",
];

// === Path Configuration ===

/// Name of the config subdirectory under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "relwatch";
/// Name of the config file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// === Output Labels ===

/// Author placeholder when neither a login nor a git author name is present.
pub const UNKNOWN_AUTHOR: &str = "unknown";
/// Plain-text placeholder for pull requests without assignees.
pub const UNASSIGNED: &str = "UNASSIGNED";
/// Number of SHA characters shown in reports.
pub const SHORT_SHA_LEN: usize = 7;

// === Error Messages ===

pub const ERR_EMPTY_TOKEN: &str = "GitHub access token must not be empty";
pub const ERR_HTTP_CLIENT_BUILD_FAILED: &str = "Failed to build HTTP client";
pub const ERR_INVALID_API_URL: &str = "Invalid API URL";
