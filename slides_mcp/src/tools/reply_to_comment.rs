//! Reply to comment tool implementation.

use rmcp::schemars;
use serde::Deserialize;

use super::list_comments::{ReplySummary, summarize_reply};
use super::{ToolContext, require_non_empty};
use crate::errors::ToolError;
use crate::service::NewReply;

/// Parameters for the reply_to_comment tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ReplyToCommentParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// The comment to reply to.
    pub comment_id: String,
    /// Reply text.
    pub content: String,
}

/// Execute the reply_to_comment tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &ReplyToCommentParams,
) -> Result<ReplySummary, ToolError> {
    require_non_empty(&params.presentation_id, "presentation_id")?;
    require_non_empty(&params.comment_id, "comment_id")?;
    require_non_empty(&params.content, "content")?;

    let reply = NewReply {
        content: params.content.clone(),
        action: None,
    };
    let created = ctx
        .service
        .create_reply(&params.presentation_id, &params.comment_id, reply)
        .await
        .map_err(|e| ToolError::remote("Failed to reply to comment", e))?;
    Ok(summarize_reply(created))
}
