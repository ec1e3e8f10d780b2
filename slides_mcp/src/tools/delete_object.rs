//! Delete object tool implementation.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use slides_core::model::{ElementKind, PageKind, PageScope, find_element, find_page};

use super::{ToolContext, require_non_empty};
use crate::errors::ToolError;
use crate::requests;

/// Parameters for the delete_object tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct DeleteObjectParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// Object ID of a slide or a page element (shape, image, table, ...).
    pub object_id: String,
}

#[derive(Debug, Serialize)]
pub struct DeletedObject {
    pub object_id: String,
    /// "slide" or the element kind.
    pub kind: String,
}

/// Execute the delete_object tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &DeleteObjectParams,
) -> Result<DeletedObject, ToolError> {
    require_non_empty(&params.object_id, "object_id")?;
    let presentation = ctx.presentation(&params.presentation_id).await?;

    let kind = match find_page(&presentation, &params.object_id, PageScope::Any) {
        Some((PageKind::Slide, _)) => {
            if presentation.slides.len() == 1 {
                return Err(ToolError::invalid(
                    "Cannot delete the only slide in the presentation",
                ));
            }
            "slide".to_string()
        }
        Some((kind, _)) => {
            return Err(ToolError::unsupported(format!(
                "'{}' is a {:?} page; only slides and page elements can be deleted",
                params.object_id, kind
            )));
        }
        None => {
            let location = find_element(&presentation, &params.object_id, PageScope::Any)?;
            element_kind_name(location.element.kind())
        }
    };

    ctx.apply(
        &params.presentation_id,
        vec![requests::delete_object(&params.object_id)],
        "Failed to delete object",
    )
    .await?;

    Ok(DeletedObject {
        object_id: params.object_id.clone(),
        kind,
    })
}

fn element_kind_name(kind: ElementKind) -> String {
    serde_json::to_value(kind)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_else(|| "element".to_string())
}
