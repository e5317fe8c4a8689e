//! Command handlers.

use color_eyre::Result;

use super::args::Commands;
use crate::config::{self, Settings};
use crate::format;
use crate::github::{GitHubClient, Mode, RepoSource};
use crate::report;

/// Runs a report command against the live API and returns the rendered output.
///
/// # Errors
///
/// Returns an error if configuration cannot be resolved. Per-repository
/// fetch failures are part of the output, not errors.
pub fn run(command: &Commands) -> Result<String> {
    let (mode, args) = match command {
        Commands::Unreleased(args) => (Mode::Unreleased, args),
        Commands::Prs(args) => (Mode::PullRequests, args),
    };

    let settings = config::resolve(args, config::load(args.config.as_deref())?)?;
    let client = GitHubClient::new(&settings.api_url, &settings.token)?;
    Ok(run_with(&client, mode, &settings))
}

/// Collects and renders a report from any [`RepoSource`].
pub fn run_with<S: RepoSource + ?Sized>(source: &S, mode: Mode, settings: &Settings) -> String {
    let report = report::collect(source, &settings.repos, mode);
    if report.failures() > 0 {
        log::warn!(
            "{} of {} repositories could not be fetched",
            report.failures(),
            report.entries.len()
        );
    }
    format::render(&report, settings.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputFormat;
    use crate::github::fake::{commit, FakeRepo, FakeSource};
    use crate::github::RepoRef;
    use url::Url;

    #[test]
    fn test_failed_repo_noted_and_others_reported() {
        let a = RepoRef::new("acme", "ghost");
        let b = RepoRef::new("acme", "widgets");
        let mut source = FakeSource::default();
        source.repos.insert(
            b.clone(),
            FakeRepo {
                branch: "main".into(),
                history: (0..3).map(commit).collect(),
                release: Some(("v0.1.0".into(), 0)),
                ..FakeRepo::default()
            },
        );
        let settings = Settings {
            token: "tok".into(),
            format: OutputFormat::Txt,
            api_url: Url::parse("https://api.github.com").unwrap(),
            repos: vec![a, b],
        };

        let out = run_with(&source, Mode::Unreleased, &settings);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "- acme/ghost");
        assert_eq!(lines[1], "  ! error: not found: acme/ghost");
        assert_eq!(lines[2], "- acme/widgets (since v0.1.0)");
        assert_eq!(lines.iter().filter(|l| l.starts_with("  - ")).count(), 2);
    }
}
