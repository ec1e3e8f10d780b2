//! List slides tool implementation.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use slides_core::model::{Page, Presentation};

use super::ToolContext;
use crate::errors::ToolError;

/// Parameters for the list_slides tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListSlidesParams {
    /// The presentation ID (the Drive file ID in the presentation URL).
    pub presentation_id: String,
}

/// Outline of a presentation.
#[derive(Debug, Serialize)]
pub struct PresentationOutline {
    pub presentation_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_width_pt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_height_pt: Option<f64>,
    pub slide_count: usize,
    pub slides: Vec<SlideSummary>,
}

#[derive(Debug, Serialize)]
pub struct SlideSummary {
    /// 1-based position.
    pub position: usize,
    pub object_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_object_id: Option<String>,
    pub element_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Execute the list_slides tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &ListSlidesParams,
) -> Result<PresentationOutline, ToolError> {
    let presentation = ctx.presentation(&params.presentation_id).await?;
    Ok(outline(&presentation))
}

/// Builds the outline from a fetched presentation.
pub fn outline(presentation: &Presentation) -> PresentationOutline {
    let slides = presentation
        .slides
        .iter()
        .enumerate()
        .map(|(i, page)| SlideSummary {
            position: i + 1,
            object_id: page.object_id.clone(),
            layout_object_id: page
                .slide_properties
                .as_ref()
                .and_then(|p| p.layout_object_id.clone()),
            element_count: page.page_elements.len(),
            title: slide_title(page),
        })
        .collect::<Vec<_>>();

    PresentationOutline {
        presentation_id: presentation.presentation_id.clone(),
        title: presentation.title.clone().unwrap_or_default(),
        revision_id: presentation.revision_id.clone(),
        page_width_pt: presentation.page_size.as_ref().map(|s| s.width.to_pt()),
        page_height_pt: presentation.page_size.as_ref().map(|s| s.height.to_pt()),
        slide_count: slides.len(),
        slides,
    }
}

/// Text of the slide's title placeholder, if it has one with text.
fn slide_title(page: &Page) -> Option<String> {
    page.page_elements.iter().find_map(|element| {
        let shape = element.shape.as_ref()?;
        let kind = shape.placeholder.as_ref()?.placeholder_type.as_deref()?;
        if kind != "TITLE" && kind != "CENTERED_TITLE" {
            return None;
        }
        let text = shape.text.as_ref()?.plain_text();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    })
}
