//! Error types for configuration resolution and repository fetches.

use thiserror::Error;

/// Problems with arguments or the config file. These abort the run before
/// any request is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The access token is empty or whitespace.
    #[error("{}", crate::constants::ERR_EMPTY_TOKEN)]
    EmptyToken,
    /// The access token cannot be sent as an HTTP header value.
    #[error("GitHub access token contains characters not allowed in a header")]
    InvalidToken,
    /// A repository argument is not `name` or `owner/name`.
    #[error("invalid repository reference '{0}' (expected `name` or `owner/name`)")]
    InvalidRepo(String),
    /// The owner is empty or contains a slash.
    #[error("invalid owner '{0}'")]
    InvalidOwner(String),
    /// The API base URL does not parse or is not http(s).
    #[error("{}: {url}: {reason}", crate::constants::ERR_INVALID_API_URL)]
    InvalidApiUrl {
        /// The rejected value.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The config file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path of the config file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The config file is not valid TOML for [`crate::config::FileConfig`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path of the config file.
        path: String,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
    /// The HTTP client could not be constructed.
    #[error("{}: {0}", crate::constants::ERR_HTTP_CLIENT_BUILD_FAILED)]
    HttpClient(#[source] reqwest::Error),
}

/// Failure fetching records for a single repository.
///
/// These are caught per repository and rendered in the report; they never
/// stop the run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The repository (or a resource inside it) does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// The token is invalid or lacks access.
    #[error("access denied ({status}): {message}")]
    Access {
        /// HTTP status code (401 or 403).
        status: u16,
        /// Message returned by the API.
        message: String,
    },
    /// Any other non-success response.
    #[error("unexpected status {status}: {message}")]
    Status {
        /// HTTP status code received.
        status: u16,
        /// Message returned by the API.
        message: String,
    },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Classify a non-success HTTP status.
    #[must_use]
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            404 => Self::NotFound(message),
            401 | 403 => Self::Access { status, message },
            _ => Self::Status { status, message },
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}
