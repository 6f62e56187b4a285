//! Attempt report rendering.
//!
//! Turns a parsed attempt document into the Markdown comment delivered
//! to Linear. Rendering is pure and byte-deterministic: the same
//! document and issue id always produce the same string.

use crate::domain::models::AttemptDocument;

/// Literal used for any metadata field that is absent.
const FIELD_PLACEHOLDER: &str = "N/A";

/// Glyph for an attempt whose status is exactly `success`.
const SUCCESS_GLYPH: &str = "✅";

/// Glyph for every other status, including a missing one.
const FAILURE_GLYPH: &str = "❌";

/// Render the comment body for one attempt.
///
/// Layout: a heading with outcome glyph, attempt number, and agent name;
/// labeled metadata lines; a horizontal rule; then the report body
/// verbatim. Absent fields render as `N/A` without failing.
pub fn format_attempt_comment(document: &AttemptDocument, issue_id: &str) -> String {
    let fm = &document.frontmatter;

    let glyph = if fm.status.as_deref() == Some("success") {
        SUCCESS_GLYPH
    } else {
        FAILURE_GLYPH
    };
    let attempt = fm
        .attempt
        .map_or_else(|| FIELD_PLACEHOLDER.to_string(), |n| n.to_string());
    let agent = fm.agent.as_deref().unwrap_or(FIELD_PLACEHOLDER);
    let status = fm.status.as_deref().unwrap_or(FIELD_PLACEHOLDER);
    let started = fm.started.as_deref().unwrap_or(FIELD_PLACEHOLDER);
    let completed = fm.completed.as_deref().unwrap_or(FIELD_PLACEHOLDER);

    format!(
        "### {glyph} Agent Attempt #{attempt} Report ({agent})\n\n\
         **Task:** `{issue_id}`\n\
         **Status:** `{status}`\n\
         **Started:** `{started}`\n\
         **Completed:** `{completed}`\n\n\
         ---\n\n\
         {body}",
        body = document.body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::AttemptFrontmatter;

    fn full_document() -> AttemptDocument {
        AttemptDocument {
            frontmatter: AttemptFrontmatter {
                attempt: Some(3),
                agent: Some("agentX".to_string()),
                status: Some("success".to_string()),
                started: Some("T1".to_string()),
                completed: Some("T2".to_string()),
            },
            body: "Did the thing.".to_string(),
        }
    }

    #[test]
    fn test_full_document_renders_exactly() {
        let comment = format_attempt_comment(&full_document(), "ISSUE-001-fix-login");
        assert_eq!(
            comment,
            "### ✅ Agent Attempt #3 Report (agentX)\n\n\
             **Task:** `ISSUE-001-fix-login`\n\
             **Status:** `success`\n\
             **Started:** `T1`\n\
             **Completed:** `T2`\n\n\
             ---\n\n\
             Did the thing."
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let document = full_document();
        let first = format_attempt_comment(&document, "ISSUE-001-fix-login");
        let second = format_attempt_comment(&document, "ISSUE-001-fix-login");
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_non_success_status_gets_failure_glyph() {
        let mut document = full_document();
        document.frontmatter.status = Some("failed".to_string());
        let comment = format_attempt_comment(&document, "ISSUE-001");
        assert!(comment.starts_with("### ❌ "));
        assert!(comment.contains("**Status:** `failed`"));
    }

    #[test]
    fn test_missing_status_gets_failure_glyph_and_placeholder() {
        let mut document = full_document();
        document.frontmatter.status = None;
        let comment = format_attempt_comment(&document, "ISSUE-001");
        assert!(comment.starts_with("### ❌ "));
        assert!(comment.contains("**Status:** `N/A`"));
    }

    #[test]
    fn test_each_missing_field_degrades_independently() {
        let document = AttemptDocument {
            frontmatter: AttemptFrontmatter {
                attempt: None,
                agent: None,
                status: Some("success".to_string()),
                started: None,
                completed: None,
            },
            body: "body".to_string(),
        };
        let comment = format_attempt_comment(&document, "ISSUE-001");
        assert!(comment.contains("Agent Attempt #N/A Report (N/A)"));
        assert!(comment.contains("**Status:** `success`"));
        assert!(comment.contains("**Started:** `N/A`"));
        assert!(comment.contains("**Completed:** `N/A`"));
    }

    #[test]
    fn test_missing_completed_only() {
        let mut document = full_document();
        document.frontmatter.completed = None;
        let comment = format_attempt_comment(&document, "ISSUE-001");
        assert!(comment.contains("**Started:** `T1`"));
        assert!(comment.contains("**Completed:** `N/A`"));
    }

    #[test]
    fn test_body_follows_the_rule_verbatim() {
        let mut document = full_document();
        document.body = "line one\n\n- bullet\n\n---\n\ntrailing section".to_string();
        let comment = format_attempt_comment(&document, "ISSUE-001");
        assert!(comment.ends_with("\n---\n\nline one\n\n- bullet\n\n---\n\ntrailing section"));
    }

    #[test]
    fn test_issue_id_is_echoed_in_task_line() {
        let comment = format_attempt_comment(&full_document(), "TASK-777-rename");
        assert!(comment.contains("**Task:** `TASK-777-rename`"));
    }
}
