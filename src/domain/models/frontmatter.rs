//! Frontmatter splitting for terna Markdown documents.
//!
//! A store document carries a YAML metadata block delimited by `---`
//! markers, followed by a free-form Markdown body:
//!
//! ```text
//! ---
//! status: success
//! ---
//! Body text.
//! ```

/// The frontmatter delimiter.
const SEPARATOR: &str = "---";

/// Split a document into its raw YAML metadata and its body.
///
/// The document must contain at least two `---` markers. The split is on
/// the marker substring with at most two cuts, so any later `---` inside
/// the body is left intact. Text before the first marker is ignored; the
/// body is returned whitespace-trimmed.
///
/// Returns a reason string when the markers are missing, without parsing
/// the metadata itself.
pub fn split_frontmatter(text: &str) -> Result<(&str, &str), String> {
    let mut parts = text.splitn(3, SEPARATOR);
    let _leading = parts.next().unwrap_or("");
    let metadata = parts
        .next()
        .ok_or_else(|| "document has no '---' frontmatter markers".to_string())?;
    let body = parts
        .next()
        .ok_or_else(|| "frontmatter is not closed by a second '---' marker".to_string())?;
    Ok((metadata, body.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_well_formed_document() {
        let doc = "---\nstatus: success\n---\nDid the thing.\n";
        let (metadata, body) = split_frontmatter(doc).unwrap();
        assert_eq!(metadata, "\nstatus: success\n");
        assert_eq!(body, "Did the thing.");
    }

    #[test]
    fn test_split_trims_body_whitespace() {
        let doc = "---\nagent: agentX\n---\n\n  body line  \n\n";
        let (_, body) = split_frontmatter(doc).unwrap();
        assert_eq!(body, "body line");
    }

    #[test]
    fn test_split_preserves_separators_inside_body() {
        let doc = "---\nstatus: failed\n---\nintro\n\n---\n\noutro";
        let (_, body) = split_frontmatter(doc).unwrap();
        assert_eq!(body, "intro\n\n---\n\noutro");
    }

    #[test]
    fn test_split_ignores_text_before_first_marker() {
        let doc = "stray preamble---\nkey: v\n---\nbody";
        let (metadata, body) = split_frontmatter(doc).unwrap();
        assert_eq!(metadata, "\nkey: v\n");
        assert_eq!(body, "body");
    }

    #[test]
    fn test_split_no_markers_is_an_error() {
        let err = split_frontmatter("just a plain document").unwrap_err();
        assert!(err.contains("no '---'"));
    }

    #[test]
    fn test_split_single_marker_is_an_error() {
        let err = split_frontmatter("---\nstatus: success\nno closing marker").unwrap_err();
        assert!(err.contains("not closed"));
    }

    #[test]
    fn test_split_empty_document_is_an_error() {
        assert!(split_frontmatter("").is_err());
    }

    #[test]
    fn test_split_empty_body_is_allowed() {
        let (metadata, body) = split_frontmatter("---\nkey: v\n---").unwrap();
        assert_eq!(metadata, "\nkey: v\n");
        assert_eq!(body, "");
    }
}
