//! Add comment tool implementation.

use rmcp::schemars;
use serde::Deserialize;

use super::list_comments::{CommentSummary, summarize};
use super::{ToolContext, require_non_empty};
use crate::errors::ToolError;
use crate::service::{NewComment, QuotedContent};

/// Parameters for the add_comment tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct AddCommentParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// Comment text.
    pub content: String,
    /// Drive anchor JSON, if the comment should point at a region.
    #[serde(default)]
    pub anchor: Option<String>,
    /// Text from the presentation the comment refers to.
    #[serde(default)]
    pub quoted_text: Option<String>,
}

/// Execute the add_comment tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &AddCommentParams,
) -> Result<CommentSummary, ToolError> {
    require_non_empty(&params.presentation_id, "presentation_id")?;
    require_non_empty(&params.content, "content")?;

    let comment = NewComment {
        content: params.content.clone(),
        anchor: params.anchor.clone().filter(|a| !a.trim().is_empty()),
        quoted_file_content: params
            .quoted_text
            .clone()
            .filter(|q| !q.is_empty())
            .map(|value| QuotedContent { value }),
    };

    let created = ctx
        .service
        .create_comment(&params.presentation_id, comment)
        .await
        .map_err(|e| ToolError::remote("Failed to add comment", e))?;
    Ok(summarize(created))
}
