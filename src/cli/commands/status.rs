//! Status command: sync readiness for every issue in the store.

use anyhow::{Context, Result};
use clap::Args;

use crate::adapters::FsIssueCatalog;
use crate::cli::output::{output, truncate, CommandOutput};
use crate::domain::models::{AttemptDocument, TrackerBinding};
use crate::domain::ports::IssueCatalog;
use crate::infrastructure::config::ConfigLoader;

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Only show issues belonging to this project
    #[arg(short, long)]
    pub project: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct StatusOutput {
    pub issues: Vec<IssueRow>,
    pub total: usize,
}

#[derive(Debug, serde::Serialize)]
pub struct IssueRow {
    pub project: String,
    pub issue_id: String,
    pub title: Option<String>,
    pub status: Option<String>,
    pub linked: bool,
    pub latest_attempt: Option<u32>,
    pub attempt_status: Option<String>,
}

/// Pad first, then style, so ANSI escapes do not skew column widths.
fn styled_status(status: Option<&str>, width: usize) -> String {
    let cell = format!("{:<width$}", status.unwrap_or("-"));
    match status {
        Some("success" | "done" | "completed") => console::style(cell).green().to_string(),
        Some("failed" | "error" | "canceled") => console::style(cell).red().to_string(),
        Some(_) => console::style(cell).yellow().to_string(),
        None => cell,
    }
}

impl CommandOutput for StatusOutput {
    fn to_human(&self) -> String {
        if self.issues.is_empty() {
            return "No issues found.".to_string();
        }

        let mut lines = vec![format!("Showing {} issue(s):\n", self.total)];
        lines.push(format!(
            "{:<14} {:<28} {:<26} {:<14} {:<8} {:<8} {:<12}",
            "PROJECT", "ISSUE", "TITLE", "STATUS", "LINKED", "ATTEMPT", "RESULT"
        ));
        lines.push("-".repeat(116));
        for row in &self.issues {
            lines.push(format!(
                "{:<14} {:<28} {:<26} {} {:<8} {:<8} {}",
                truncate(&row.project, 14),
                truncate(&row.issue_id, 28),
                truncate(row.title.as_deref().unwrap_or("-"), 26),
                styled_status(row.status.as_deref(), 14),
                if row.linked { "yes" } else { "no" },
                row.latest_attempt
                    .map_or_else(|| "-".to_string(), |n| n.to_string()),
                styled_status(row.attempt_status.as_deref(), 12),
            ));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: StatusArgs, json_mode: bool) -> Result<()> {
    let config = ConfigLoader::load()?;
    let catalog = FsIssueCatalog::new(&config.store);

    let mut rows = Vec::new();
    for handle in catalog.list_issues()? {
        if args.project.as_ref().is_some_and(|p| p != &handle.project) {
            continue;
        }

        let frontmatter = catalog
            .load_issue(&handle)
            .with_context(|| format!("Failed to load issue '{}'", handle.issue_id))?;
        let linked = matches!(frontmatter.tracker_binding(), TrackerBinding::Linked(_));

        let latest = catalog.latest_attempt(&handle)?;
        let attempt_status = match &latest {
            Some(attempt) => {
                let text = catalog.read_attempt(attempt)?;
                // Status listing tolerates unparseable attempts; sync does not.
                AttemptDocument::parse(&text)
                    .ok()
                    .and_then(|doc| doc.frontmatter.status)
            }
            None => None,
        };

        rows.push(IssueRow {
            project: handle.project,
            issue_id: handle.issue_id,
            title: frontmatter.title,
            status: frontmatter.status,
            linked,
            latest_attempt: latest.map(|a| a.sequence),
            attempt_status,
        });
    }

    let out = StatusOutput {
        total: rows.len(),
        issues: rows,
    };
    output(&out, json_mode);
    Ok(())
}
