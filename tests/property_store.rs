use std::fs;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use tempfile::TempDir;

use terna_sync::adapters::FsIssueCatalog;
use terna_sync::domain::errors::SyncError;
use terna_sync::domain::models::{
    attempt_sequence, AttemptDocument, AttemptFrontmatter, StoreConfig,
};
use terna_sync::domain::ports::IssueCatalog;
use terna_sync::services::format_attempt_comment;

fn write_issue(root: &Path, project: &str, issue: &str) -> PathBuf {
    let issue_dir = root.join("projects").join(project).join("issues").join(issue);
    fs::create_dir_all(issue_dir.join("attempts")).unwrap();
    fs::write(issue_dir.join("issue.md"), "---\nlinear_id: lin-1\n---\nbody\n").unwrap();
    issue_dir
}

fn catalog_at(root: &Path) -> FsIssueCatalog {
    FsIssueCatalog::new(&StoreConfig {
        root: root.to_string_lossy().into_owned(),
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: resolve yields a single handle exactly when one issue id
    /// starts with the prefix, and reports every candidate otherwise.
    #[test]
    fn prop_resolve_matches_prefix_count(
        names in prop::collection::btree_set("[A-Z]{1,4}-[0-9]{1,3}", 1..6),
        pick in any::<prop::sample::Index>(),
        cut in any::<prop::sample::Index>(),
    ) {
        let dir = TempDir::new().unwrap();
        for name in &names {
            write_issue(dir.path(), "P1", name);
        }
        let catalog = catalog_at(dir.path());

        let names: Vec<&String> = names.iter().collect();
        let chosen = names[pick.index(names.len())];
        let prefix = &chosen[..1 + cut.index(chosen.len())];

        let matching = names.iter().filter(|n| n.starts_with(prefix)).count();
        match catalog.resolve(prefix) {
            Ok(Some(handle)) => {
                prop_assert_eq!(matching, 1);
                prop_assert_eq!(&handle.issue_id, chosen);
            }
            Ok(None) => prop_assert_eq!(matching, 0),
            Err(SyncError::AmbiguousPrefix { candidates, .. }) => {
                prop_assert!(matching > 1, "ambiguity reported for {} match(es)", matching);
                prop_assert_eq!(candidates.len(), matching);
                let mut sorted = candidates.clone();
                sorted.sort();
                prop_assert_eq!(candidates, sorted, "candidates must be sorted");
            }
            Err(e) => return Err(TestCaseError::fail(format!("unexpected error: {e}"))),
        }
    }

    /// Property: the selected attempt is the numeric maximum, whatever
    /// order the directory yields entries in and whatever else sits there.
    #[test]
    fn prop_latest_attempt_is_numeric_max(
        sequences in prop::collection::btree_set(0u32..500, 1..8),
        noise in prop::collection::vec("[a-z]{1,8}\\.(md|txt|log)", 0..4),
    ) {
        let dir = TempDir::new().unwrap();
        let issue_dir = write_issue(dir.path(), "P1", "ISSUE-001-demo");
        for sequence in &sequences {
            fs::write(
                issue_dir.join("attempts").join(format!("attempt-{sequence}.md")),
                "x",
            )
            .unwrap();
        }
        for name in &noise {
            fs::write(issue_dir.join("attempts").join(name), "noise").unwrap();
        }

        let catalog = catalog_at(dir.path());
        let handle = catalog
            .resolve("ISSUE-001")
            .map_err(|e| TestCaseError::fail(e.to_string()))?
            .ok_or_else(|| TestCaseError::fail("issue not resolved".to_string()))?;
        let latest = catalog
            .latest_attempt(&handle)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert_eq!(latest.map(|a| a.sequence), sequences.iter().max().copied());
    }
}

proptest! {
    /// Property: canonical attempt file names round-trip their sequence.
    #[test]
    fn prop_attempt_sequence_round_trip(sequence in any::<u32>()) {
        let name = format!("attempt-{sequence}.md");
        prop_assert_eq!(attempt_sequence(&name).unwrap(), Some(sequence));
    }

    /// Property: names without the attempt prefix are skipped, not errors.
    #[test]
    fn prop_non_attempt_names_are_ignored(name in "[b-z][a-z0-9_.-]{0,12}") {
        prop_assert_eq!(attempt_sequence(&name).unwrap(), None);
    }

    /// Property: report rendering is deterministic and the glyph tracks
    /// the literal "success" status.
    #[test]
    fn prop_report_glyph_tracks_success_status(
        status in prop::option::of("[a-z]{1,10}"),
        attempt in prop::option::of(any::<u32>()),
    ) {
        let document = AttemptDocument {
            frontmatter: AttemptFrontmatter {
                attempt,
                agent: Some("agentX".to_string()),
                status: status.clone(),
                started: None,
                completed: None,
            },
            body: "body".to_string(),
        };

        let first = format_attempt_comment(&document, "ISSUE-001-demo");
        let second = format_attempt_comment(&document, "ISSUE-001-demo");
        prop_assert_eq!(&first, &second, "rendering must be deterministic");

        let succeeded = status.as_deref() == Some("success");
        prop_assert_eq!(first.starts_with("### ✅"), succeeded);
        prop_assert_eq!(first.starts_with("### ❌"), !succeeded);
    }
}
