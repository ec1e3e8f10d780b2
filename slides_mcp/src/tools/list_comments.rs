//! List comments tool implementation.

use chrono::{DateTime, Utc};
use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::ToolContext;
use crate::errors::ToolError;
use crate::service::{Author, Comment, Reply};

/// Parameters for the list_comments tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListCommentsParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// Include resolved comments. Default: false.
    #[serde(default)]
    pub include_resolved: bool,
}

#[derive(Debug, Serialize)]
pub struct CommentList {
    pub total: usize,
    pub comments: Vec<CommentSummary>,
}

#[derive(Debug, Serialize)]
pub struct CommentSummary {
    pub comment_id: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    pub resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quoted_text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<ReplySummary>,
}

#[derive(Debug, Serialize)]
pub struct ReplySummary {
    pub reply_id: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// Execute the list_comments tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &ListCommentsParams,
) -> Result<CommentList, ToolError> {
    super::require_non_empty(&params.presentation_id, "presentation_id")?;
    let comments = ctx
        .service
        .list_comments(&params.presentation_id, false)
        .await
        .map_err(|e| ToolError::remote("Failed to list comments", e))?;

    let comments: Vec<CommentSummary> = comments
        .into_iter()
        .filter(|c| params.include_resolved || !c.resolved)
        .map(summarize)
        .collect();

    Ok(CommentList {
        total: comments.len(),
        comments,
    })
}

pub(crate) fn summarize(comment: Comment) -> CommentSummary {
    CommentSummary {
        comment_id: comment.id,
        content: comment.content,
        author: author_name(comment.author.as_ref()),
        created_time: comment.created_time,
        resolved: comment.resolved,
        quoted_text: comment
            .quoted_file_content
            .map(|q| q.value)
            .filter(|v| !v.is_empty()),
        replies: comment.replies.into_iter().map(summarize_reply).collect(),
    }
}

pub(crate) fn summarize_reply(reply: Reply) -> ReplySummary {
    ReplySummary {
        reply_id: reply.id,
        content: reply.content,
        author: author_name(reply.author.as_ref()),
        created_time: reply.created_time,
        action: reply.action,
    }
}

fn author_name(author: Option<&Author>) -> Option<String> {
    let author = author?;
    author
        .display_name
        .clone()
        .or_else(|| author.email_address.clone())
}
