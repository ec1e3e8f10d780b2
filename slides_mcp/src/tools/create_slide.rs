//! Create slide tool implementation.

use log::debug;
use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::{ToolContext, normalize_choice};
use crate::errors::ToolError;
use crate::requests;

/// Layouts accepted by `slideLayoutReference.predefinedLayout`.
pub const PREDEFINED_LAYOUTS: &[&str] = &[
    "BLANK",
    "CAPTION_ONLY",
    "TITLE",
    "TITLE_AND_BODY",
    "TITLE_AND_TWO_COLUMNS",
    "TITLE_ONLY",
    "SECTION_HEADER",
    "SECTION_TITLE_AND_DESCRIPTION",
    "ONE_COLUMN_TEXT",
    "MAIN_POINT",
    "BIG_NUMBER",
];

/// Parameters for the create_slide tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct CreateSlideParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// Predefined layout (case-insensitive), e.g. "blank", "title_and_body". Default: BLANK.
    #[serde(default)]
    pub layout: Option<String>,
    /// 1-based position for the new slide. Omit to append at the end.
    #[serde(default)]
    pub position: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CreatedSlide {
    pub slide_id: String,
    pub layout: String,
    pub position: usize,
}

/// Execute the create_slide tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &CreateSlideParams,
) -> Result<CreatedSlide, ToolError> {
    let layout = normalize_choice(
        params.layout.as_deref().unwrap_or("BLANK"),
        PREDEFINED_LAYOUTS,
        "layout",
    )?;

    let presentation = ctx.presentation(&params.presentation_id).await?;
    let count = presentation.slides.len();
    let position = params.position.unwrap_or(count + 1);
    if position == 0 || position > count + 1 {
        return Err(ToolError::invalid(format!(
            "Position {} is out of range. Valid positions are 1 to {}",
            position,
            count + 1
        )));
    }

    let slide_id = ctx.ids.object_id("slide");
    debug!("Creating slide {} with layout {} at {}", slide_id, layout, position);

    let request = requests::create_slide(&slide_id, layout, Some(position - 1));
    let response = ctx
        .apply(&params.presentation_id, vec![request], "Failed to create slide")
        .await?;

    Ok(CreatedSlide {
        slide_id: response
            .created_object_id(0, "createSlide")
            .unwrap_or(slide_id),
        layout: layout.to_string(),
        position,
    })
}
