//! Blocking GitHub REST client.

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, LINK};
use serde::de::DeserializeOwned;
use url::Url;

use super::types::{
    Commit, PullRequest, RawApiError, RawComparison, RawCommit, RawPullRequest, RawRelease,
    RawRepository, Release, RepoRef,
};
use super::RepoSource;
use crate::constants;
use crate::error::{ConfigError, FetchError};

/// `reqwest`-backed implementation of [`RepoSource`].
#[derive(Debug, Clone)]
pub struct GitHubClient {
    base_url: String,
    http: Client,
}

impl GitHubClient {
    /// Builds a client that authenticates every request with `token`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the token is not a valid header value or
    /// the HTTP client cannot be built.
    pub fn new(api_url: &Url, token: &str) -> Result<Self, ConfigError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .map_err(|_| ConfigError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(constants::GITHUB_ACCEPT));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(constants::GITHUB_API_VERSION),
        );

        let http = Client::builder()
            .user_agent(format!("{}/{}", constants::APP_NAME, constants::APP_VERSION))
            .default_headers(headers)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            base_url: api_url.as_str().trim_end_matches('/').to_string(),
            http,
        })
    }

    fn repo_url(&self, repo: &RepoRef, path: &str) -> String {
        format!(
            "{}/repos/{}/{}{path}",
            self.base_url,
            urlencoding::encode(&repo.owner),
            urlencoding::encode(&repo.name)
        )
    }

    fn send(&self, url: &str) -> Result<Response, FetchError> {
        log::debug!("GET {url}");
        let response = self.http.get(url).send()?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        let message = serde_json::from_str::<RawApiError>(&body)
            .map(|e| e.message)
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string());
        Err(FetchError::from_status(status.as_u16(), message))
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        Ok(self.send(url)?.json()?)
    }

    /// Follows `rel="next"` links, concatenating every page in order.
    fn get_paginated<P>(&self, first: String) -> Result<Vec<P::Item>, FetchError>
    where
        P: DeserializeOwned + IntoIterator,
    {
        let mut items = Vec::new();
        let mut next = Some(first);
        while let Some(url) = next {
            let response = self.send(&url)?;
            next = response
                .headers()
                .get(LINK)
                .and_then(|v| v.to_str().ok())
                .and_then(next_page_url);
            let page: P = response.json()?;
            items.extend(page);
        }
        Ok(items)
    }
}

impl RepoSource for GitHubClient {
    fn default_branch(&self, repo: &RepoRef) -> Result<String, FetchError> {
        let raw: RawRepository = self.get_json(&self.repo_url(repo, ""))?;
        Ok(raw.default_branch)
    }

    fn latest_release(&self, repo: &RepoRef) -> Result<Option<Release>, FetchError> {
        // Drafts and pre-releases are never returned by this endpoint.
        match self.get_json::<RawRelease>(&self.repo_url(repo, "/releases/latest")) {
            Ok(raw) => Ok(Some(raw.into())),
            Err(FetchError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn compare(&self, repo: &RepoRef, base: &str, head: &str) -> Result<Vec<Commit>, FetchError> {
        let path = format!(
            "/compare/{}...{}",
            urlencoding::encode(base),
            urlencoding::encode(head)
        );
        let url = format!("{}?per_page={}", self.repo_url(repo, &path), constants::PAGE_SIZE);
        let raw = self.get_paginated::<RawComparison>(url)?;
        // Compare pages run oldest first; reports show newest first like `git log`.
        Ok(raw.into_iter().rev().map(Commit::from).collect())
    }

    fn branch_commits(&self, repo: &RepoRef, branch: &str) -> Result<Vec<Commit>, FetchError> {
        let url = format!(
            "{}?sha={}&per_page={}",
            self.repo_url(repo, "/commits"),
            urlencoding::encode(branch),
            constants::PAGE_SIZE
        );
        let raw = self.get_paginated::<Vec<RawCommit>>(url)?;
        Ok(raw.into_iter().map(Commit::from).collect())
    }

    fn open_pulls(&self, repo: &RepoRef, base: &str) -> Result<Vec<PullRequest>, FetchError> {
        let url = format!(
            "{}?state=open&base={}&sort=updated&direction=desc&per_page={}",
            self.repo_url(repo, "/pulls"),
            urlencoding::encode(base),
            constants::PAGE_SIZE
        );
        let raw = self.get_paginated::<Vec<RawPullRequest>>(url)?;
        Ok(raw.into_iter().map(PullRequest::from).collect())
    }
}

/// Extracts the `rel="next"` target from an RFC 8288 `Link` header.
fn next_page_url(header: &str) -> Option<String> {
    header.split(',').find_map(|part| {
        let mut segments = part.split(';').map(str::trim);
        let target = segments.next()?;
        let is_next = segments.any(|param| {
            param
                .strip_prefix("rel=")
                .is_some_and(|rel| rel.trim_matches('"').split_whitespace().any(|r| r == "next"))
        });
        if !is_next {
            return None;
        }
        target
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .map(str::to_string)
    })
}
