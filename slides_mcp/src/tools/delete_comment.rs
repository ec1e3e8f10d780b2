//! Delete comment tool implementation.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::{ToolContext, require_non_empty};
use crate::errors::ToolError;

/// Parameters for the delete_comment tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct DeleteCommentParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// The comment to delete.
    pub comment_id: String,
}

#[derive(Debug, Serialize)]
pub struct DeletedComment {
    pub comment_id: String,
    pub deleted: bool,
}

/// Execute the delete_comment tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &DeleteCommentParams,
) -> Result<DeletedComment, ToolError> {
    require_non_empty(&params.presentation_id, "presentation_id")?;
    require_non_empty(&params.comment_id, "comment_id")?;

    ctx.service
        .delete_comment(&params.presentation_id, &params.comment_id)
        .await
        .map_err(|e| ToolError::remote("Failed to delete comment", e))?;

    Ok(DeletedComment {
        comment_id: params.comment_id.clone(),
        deleted: true,
    })
}
