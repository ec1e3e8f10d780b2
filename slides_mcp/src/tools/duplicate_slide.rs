//! Duplicate slide tool implementation.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use slides_core::model::{SlideRef, resolve_slide};

use super::ToolContext;
use crate::errors::ToolError;
use crate::requests;

/// Parameters for the duplicate_slide tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct DuplicateSlideParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// 1-based position of the slide to copy.
    #[serde(default)]
    pub slide_index: Option<usize>,
    /// Object ID of the slide to copy. Takes precedence over slide_index.
    #[serde(default)]
    pub slide_id: Option<String>,
    /// 1-based position for the copy. Default: right after the original.
    #[serde(default)]
    pub position: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct DuplicatedSlide {
    pub source_slide_id: String,
    pub new_slide_id: String,
    pub position: usize,
}

/// Execute the duplicate_slide tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &DuplicateSlideParams,
) -> Result<DuplicatedSlide, ToolError> {
    let presentation = ctx.presentation(&params.presentation_id).await?;
    let source = resolve_slide(
        &presentation,
        SlideRef::new(params.slide_index, params.slide_id.as_deref()),
    )?;

    // The copy lands directly after the source, at zero-based index `source.position`.
    let copy_index = source.position;
    let count_after = presentation.slides.len() + 1;
    let target = params.position.unwrap_or(source.position + 1);
    if target == 0 || target > count_after {
        return Err(ToolError::invalid(format!(
            "Position {} is out of range. Valid positions are 1 to {}",
            target, count_after
        )));
    }

    let new_slide_id = ctx.ids.object_id(&format!("{}_copy", source.page.object_id));
    let mut batch = vec![requests::duplicate_object(&source.page.object_id, &new_slide_id)];

    let target_index = target - 1;
    if target_index != copy_index {
        // insertionIndex counts positions before the move, with the copy still in place.
        let insertion_index = if target_index < copy_index {
            target_index
        } else {
            target_index + 1
        };
        batch.push(requests::update_slides_position(&[&new_slide_id], insertion_index));
    }

    ctx.apply(&params.presentation_id, batch, "Failed to duplicate slide")
        .await?;

    Ok(DuplicatedSlide {
        source_slide_id: source.page.object_id.clone(),
        new_slide_id,
        position: target,
    })
}
