//! Linear GraphQL request and response models.
//!
//! These structs map to the payloads of the `commentCreate` mutation.
//! They are used internally by the Linear adapter and are not part of
//! the public domain model.

use serde::{Deserialize, Serialize};

/// The one mutation this tool sends: create a comment on an issue.
pub const COMMENT_CREATE_MUTATION: &str = r"
mutation CreateComment($issueId: String!, $body: String!) {
    commentCreate(input: { issueId: $issueId, body: $body }) {
        success
        comment {
            id
            body
        }
    }
}
";

/// A GraphQL request envelope: query text plus variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlRequest {
    /// The mutation text.
    pub query: String,
    /// Variables referenced by the mutation.
    pub variables: CommentVariables,
}

/// Variables for the comment mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentVariables {
    /// Linear issue id to comment on.
    pub issue_id: String,
    /// Markdown comment body.
    pub body: String,
}

impl GraphqlRequest {
    /// Build a comment-creation request for one issue.
    pub fn comment_create(issue_id: &str, body: &str) -> Self {
        Self {
            query: COMMENT_CREATE_MUTATION.to_string(),
            variables: CommentVariables {
                issue_id: issue_id.to_string(),
                body: body.to_string(),
            },
        }
    }
}

/// Top-level GraphQL response envelope.
///
/// `data` is absent or null when the request failed outright; `errors`
/// carries the server's diagnostics in that case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlResponse {
    /// Mutation payload, when the server executed it.
    #[serde(default)]
    pub data: Option<CommentCreateData>,
    /// GraphQL-level errors, when any occurred.
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

/// One entry of the GraphQL `errors` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlError {
    /// Human-readable error description.
    pub message: String,
}

/// The `data` object of a comment mutation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentCreateData {
    /// The mutation result, null when the mutation was rejected.
    #[serde(rename = "commentCreate", default)]
    pub comment_create: Option<CommentCreatePayload>,
}

/// Result of the `commentCreate` mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentCreatePayload {
    /// Application-level success flag. Transport success alone does not
    /// count as delivery.
    pub success: bool,
    /// The created comment, when the server returned it.
    #[serde(default)]
    pub comment: Option<CreatedComment>,
}

/// The comment object echoed back on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedComment {
    /// Identifier of the created comment.
    pub id: String,
    /// Body as stored by the tracker.
    #[serde(default)]
    pub body: Option<String>,
}

impl GraphqlResponse {
    /// The mutation payload, if the server reached it at all.
    pub fn comment_create(&self) -> Option<&CommentCreatePayload> {
        self.data.as_ref().and_then(|data| data.comment_create.as_ref())
    }

    /// Joined GraphQL error messages, when any are present.
    pub fn error_messages(&self) -> Option<String> {
        let errors = self.errors.as_ref()?;
        if errors.is_empty() {
            return None;
        }
        Some(
            errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}
