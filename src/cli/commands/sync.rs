//! Sync command: deliver the latest attempt report for one issue.

use anyhow::{Context, Result};
use clap::Args;

use crate::adapters::{FsIssueCatalog, LinearClient};
use crate::cli::output::{output, CommandOutput};
use crate::infrastructure::config::ConfigLoader;
use crate::services::{SyncOutcome, SyncService};

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Issue id or unique prefix (e.g. ISSUE-001)
    pub issue: String,
}

#[derive(Debug, serde::Serialize)]
pub struct SyncReport {
    pub outcome: &'static str,
    pub issue_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<String>,
    pub message: String,
}

impl From<SyncOutcome> for SyncReport {
    fn from(outcome: SyncOutcome) -> Self {
        match outcome {
            SyncOutcome::Delivered {
                issue_id,
                external_id,
                attempt,
                comment_id,
            } => Self {
                outcome: "delivered",
                message: format!(
                    "✅ {issue_id}: posted attempt #{attempt} to Linear issue {external_id}"
                ),
                issue_id,
                external_id: Some(external_id),
                attempt: Some(attempt),
                comment_id,
            },
            SyncOutcome::SkippedUnlinked { issue_id } => Self {
                outcome: "skipped_unlinked",
                message: format!(
                    "⚠️ {issue_id}: not linked to a Linear issue (set linear_id in issue.md), skipped"
                ),
                issue_id,
                external_id: None,
                attempt: None,
                comment_id: None,
            },
            SyncOutcome::SkippedNoAttempts { issue_id } => Self {
                outcome: "skipped_no_attempts",
                message: format!("🤷 {issue_id}: no attempts recorded, skipped"),
                issue_id,
                external_id: None,
                attempt: None,
                comment_id: None,
            },
        }
    }
}

impl CommandOutput for SyncReport {
    fn to_human(&self) -> String {
        self.message.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: SyncArgs, json_mode: bool) -> Result<()> {
    let config = ConfigLoader::load()?;
    ConfigLoader::require_credential(&config)?;

    let catalog = FsIssueCatalog::new(&config.store);
    let tracker = LinearClient::new(&config.tracker);
    let service = SyncService::new(catalog, tracker);

    let outcome = service
        .sync(&args.issue)
        .await
        .with_context(|| format!("Failed to sync '{}'", args.issue))?;

    output(&SyncReport::from(outcome), json_mode);
    Ok(())
}
