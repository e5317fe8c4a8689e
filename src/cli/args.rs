//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::format::OutputFormat;

/// relwatch - unreleased commits and open pull requests at a glance
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show commits on the default branch made after the latest release
    Unreleased(ReportArgs),
    /// Show open pull requests targeting the default branch
    Prs(ReportArgs),
}

/// Options shared by every report command.
#[derive(ClapArgs, Debug, Clone)]
pub struct ReportArgs {
    /// GitHub access token
    #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Output format [default: md]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Owner used for repository names given without one
    #[arg(short, long)]
    pub owner: Option<String>,

    /// GitHub API base URL (for GitHub Enterprise)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Repositories to inspect (`name` or `owner/name`)
    pub repos: Vec<String>,
}
