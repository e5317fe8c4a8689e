//! Configuration loading and resolution.
//!
//! Settings come from three layers, highest precedence first: command-line
//! arguments, the optional TOML config file, and the built-in defaults in
//! [`crate::constants`].
//!
//! ```toml
//! owner = "inveniosoftware"
//! repos = ["invenio-cli", "acme/widgets"]
//! api_url = "https://api.github.com"
//! format = "txt"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::cli::args::ReportArgs;
use crate::constants;
use crate::error::ConfigError;
use crate::format::OutputFormat;
use crate::github::RepoRef;

/// Contents of the config file. Every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Owner for short repository names.
    pub owner: Option<String>,
    /// Repositories used when none are given on the command line.
    pub repos: Option<Vec<String>>,
    /// API base URL.
    pub api_url: Option<String>,
    /// Default output format.
    pub format: Option<OutputFormat>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Access token.
    pub token: String,
    /// Output format.
    pub format: OutputFormat,
    /// API base URL.
    pub api_url: Url,
    /// Repositories to inspect, in order.
    pub repos: Vec<RepoRef>,
}

/// Default config file location (`<config dir>/relwatch/config.toml`).
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR_NAME).join(constants::CONFIG_FILE_NAME))
}

/// Loads the config file.
///
/// An explicitly requested file must exist; a missing file at the default
/// location yields an empty config.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] or [`ConfigError::Parse`].
pub fn load(explicit: Option<&Path>) -> Result<FileConfig, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_path() {
            Some(path) if path.is_file() => path,
            _ => return Ok(FileConfig::default()),
        },
    };

    log::debug!("Loading config from {}", path.display());
    let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Merges command-line arguments over the config file and built-in defaults.
///
/// # Errors
///
/// Returns [`ConfigError`] for an empty token, an invalid owner, API URL or
/// repository reference.
pub fn resolve(args: &ReportArgs, file: FileConfig) -> Result<Settings, ConfigError> {
    let token = args.token.trim();
    if token.is_empty() {
        return Err(ConfigError::EmptyToken);
    }

    let owner = args
        .owner
        .clone()
        .or(file.owner)
        .unwrap_or_else(|| constants::DEFAULT_OWNER.to_string());
    let owner = owner.trim();
    if owner.is_empty() || owner.contains('/') || owner.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidOwner(owner.to_string()));
    }

    let api_url = parse_api_url(
        args.api_url
            .as_deref()
            .or(file.api_url.as_deref())
            .unwrap_or(constants::GITHUB_API_URL),
    )?;

    let names: Vec<String> = if !args.repos.is_empty() {
        args.repos.clone()
    } else if let Some(repos) = file.repos.filter(|r| !r.is_empty()) {
        repos
    } else {
        constants::DEFAULT_REPOS.iter().map(ToString::to_string).collect()
    };
    let repos = names
        .iter()
        .map(|name| RepoRef::parse(name, owner))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Settings {
        token: token.to_string(),
        format: args.format.or(file.format).unwrap_or_default(),
        api_url,
        repos,
    })
}

fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidApiUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}
