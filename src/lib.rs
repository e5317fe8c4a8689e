//! List unreleased commits and open pull requests across GitHub repositories.
//!
//! The pipeline is: resolve [`config::Settings`], [`report::collect`] records
//! through a [`github::RepoSource`], then [`format::render`] the report.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod github;
pub mod logger;
pub mod report;
