//! Report rendering.
//!
//! Both formats list the same records in the same order; only the surface
//! syntax differs.

use std::fmt::Write as _;

use clap::ValueEnum;
use serde::Deserialize;

use crate::constants;
use crate::github::{Commit, PullRequest, Records, Release};
use crate::report::{Entry, Outcome, Report};

/// Report output formats.
#[derive(ValueEnum, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown tables
    #[default]
    Md,
    /// Plain-text bullet list
    Txt,
}

/// Renders `report` as text in the chosen format.
#[must_use]
pub fn render(report: &Report, format: OutputFormat) -> String {
    match format {
        OutputFormat::Md => render_markdown(report),
        OutputFormat::Txt => render_text(report),
    }
}

// ── Markdown ────────────────────────────────────────────────────────────────

fn render_markdown(report: &Report) -> String {
    let sections: Vec<String> = report.entries.iter().map(markdown_section).collect();
    sections.join("\n")
}

fn markdown_section(entry: &Entry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "### {}\n", entry.repo);

    match &entry.outcome {
        Outcome::Failed(msg) => {
            let _ = writeln!(out, "> **Error:** {}", md_cell(msg));
        }
        Outcome::Fetched(Records::Commits { release, commits }) => {
            let _ = writeln!(out, "{}\n", baseline_line(release.as_ref()));
            out.push_str("| SHA | Message | Author | Link |\n");
            out.push_str("|----|----|----|----|\n");
            for c in commits {
                let _ = writeln!(
                    out,
                    "| `{}` | {} | {} | [{}]({}) |",
                    c.short_sha(),
                    md_cell(&c.title),
                    md_cell(&c.author),
                    c.short_sha(),
                    c.url
                );
            }
        }
        Outcome::Fetched(Records::PullRequests(prs)) => {
            out.push_str("| PR | Title | Author | Assignees | Link |\n");
            out.push_str("|----|----|----|----|----|\n");
            for p in prs {
                let _ = writeln!(
                    out,
                    "| #{} | {} | {} | {} | [#{}]({}) |",
                    p.number,
                    md_cell(&p.title),
                    md_cell(&p.author),
                    md_cell(&p.assignees.join(", ")),
                    p.number,
                    p.url
                );
            }
        }
    }
    out
}

fn baseline_line(release: Option<&Release>) -> String {
    match release {
        Some(rel) => match &rel.name {
            Some(name) if name != &rel.tag => {
                format!("Unreleased since `{}` ({})", rel.tag, md_cell(name))
            }
            _ => format!("Unreleased since `{}`", rel.tag),
        },
        None => "No published release".to_string(),
    }
}

/// Makes `text` safe inside a single table cell.
fn md_cell(text: &str) -> String {
    text.replace('|', "\\|")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}

// ── Plain text ──────────────────────────────────────────────────────────────

fn render_text(report: &Report) -> String {
    let mut out = String::new();
    for entry in &report.entries {
        text_section(&mut out, entry);
    }
    out
}

fn text_section(out: &mut String, entry: &Entry) {
    match &entry.outcome {
        Outcome::Failed(msg) => {
            let _ = writeln!(out, "- {}", entry.repo);
            let _ = writeln!(out, "  ! error: {msg}");
        }
        Outcome::Fetched(Records::Commits { release, commits }) => {
            match release {
                Some(rel) => {
                    let _ = writeln!(out, "- {} (since {})", entry.repo, rel.tag);
                }
                None => {
                    let _ = writeln!(out, "- {} (no release)", entry.repo);
                }
            }
            for c in commits {
                text_commit(out, c);
            }
        }
        Outcome::Fetched(Records::PullRequests(prs)) => {
            let _ = writeln!(out, "- {}", entry.repo);
            for p in prs {
                text_pull(out, p);
            }
        }
    }
}

fn text_commit(out: &mut String, c: &Commit) {
    let _ = writeln!(out, "  - {} {} ({})", c.short_sha(), c.title, c.author);
    let _ = writeln!(out, "    {}", c.url);
}

fn text_pull(out: &mut String, p: &PullRequest) {
    let assignees = if p.assignees.is_empty() {
        constants::UNASSIGNED.to_string()
    } else {
        p.assignees.join(", ")
    };
    let _ = writeln!(out, "  - #{}: {} by {} ({assignees})", p.number, p.title, p.author);
    let _ = writeln!(out, "    {}", p.url);
}
