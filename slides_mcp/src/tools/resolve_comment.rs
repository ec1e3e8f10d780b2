//! Resolve comment tool implementation.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::{ToolContext, require_non_empty};
use crate::errors::ToolError;
use crate::service::NewReply;

/// Parameters for the resolve_comment tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ResolveCommentParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// The comment to resolve.
    pub comment_id: String,
    /// Optional closing message.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResolvedComment {
    pub comment_id: String,
    pub reply_id: String,
    pub resolved: bool,
}

/// Execute the resolve_comment tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &ResolveCommentParams,
) -> Result<ResolvedComment, ToolError> {
    require_non_empty(&params.presentation_id, "presentation_id")?;
    require_non_empty(&params.comment_id, "comment_id")?;

    let reply = NewReply {
        content: params.message.clone().unwrap_or_default(),
        action: Some("resolve".to_string()),
    };
    let created = ctx
        .service
        .create_reply(&params.presentation_id, &params.comment_id, reply)
        .await
        .map_err(|e| ToolError::remote("Failed to resolve comment", e))?;

    Ok(ResolvedComment {
        comment_id: params.comment_id.clone(),
        reply_id: created.id,
        resolved: true,
    })
}
