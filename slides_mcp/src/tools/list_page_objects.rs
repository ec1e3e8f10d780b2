//! List page objects tool implementation.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use slides_core::model::{
    Bounds, ElementKind, PageElement, PageKind, PageScope, SlideRef, find_page, resolve_slide,
};

use super::ToolContext;
use crate::errors::ToolError;

/// Characters of text kept in each element preview.
const TEXT_PREVIEW_CHARS: usize = 100;

/// Parameters for the list_page_objects tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListPageObjectsParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// 1-based slide position.
    #[serde(default)]
    pub slide_index: Option<usize>,
    /// Slide object ID. Takes precedence over slide_index.
    #[serde(default)]
    pub slide_id: Option<String>,
    /// Object ID of any page, including layouts and masters.
    /// Takes precedence over the slide selectors.
    #[serde(default)]
    pub page_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PageObjects {
    pub page_id: String,
    pub page_kind: PageKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_position: Option<usize>,
    pub objects: Vec<ObjectSummary>,
}

#[derive(Debug, Serialize)]
pub struct ObjectSummary {
    pub object_id: String,
    pub kind: ElementKind,
    /// Group the object is nested in, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Position and size in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Execute the list_page_objects tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &ListPageObjectsParams,
) -> Result<PageObjects, ToolError> {
    let presentation = ctx.presentation(&params.presentation_id).await?;

    let page_id = params.page_id.as_deref().filter(|s| !s.is_empty());
    let (page, page_kind, slide_position) = match page_id {
        Some(page_id) => {
            let (kind, page) = find_page(&presentation, page_id, PageScope::Any)
                .ok_or_else(|| ToolError::not_found(format!("Page '{}' not found", page_id)))?;
            let position = presentation
                .slides
                .iter()
                .position(|s| s.object_id == page_id)
                .map(|i| i + 1);
            (page, kind, position)
        }
        None => {
            let slide = resolve_slide(
                &presentation,
                SlideRef::new(params.slide_index, params.slide_id.as_deref()),
            )?;
            (slide.page, PageKind::Slide, Some(slide.position))
        }
    };

    let mut objects = Vec::new();
    summarize(&page.page_elements, None, &mut objects);

    Ok(PageObjects {
        page_id: page.object_id.clone(),
        page_kind,
        slide_position,
        objects,
    })
}

fn summarize(elements: &[PageElement], parent: Option<&str>, out: &mut Vec<ObjectSummary>) {
    for element in elements {
        out.push(summary(element, parent));
        summarize(element.children(), Some(element.object_id.as_str()), out);
    }
}

fn summary(element: &PageElement, parent: Option<&str>) -> ObjectSummary {
    let shape = element.shape.as_ref();
    let text = shape
        .and_then(|s| s.text.as_ref())
        .map(|t| preview(&t.plain_text()))
        .filter(|t| !t.is_empty());

    let url = element
        .image
        .as_ref()
        .and_then(|i| i.source_url.clone().or_else(|| i.content_url.clone()))
        .or_else(|| element.video.as_ref().and_then(|v| v.url.clone()));

    ObjectSummary {
        object_id: element.object_id.clone(),
        kind: element.kind(),
        parent_group: parent.map(str::to_string),
        shape_type: shape.and_then(|s| s.shape_type.clone()),
        placeholder: shape
            .and_then(|s| s.placeholder.as_ref())
            .and_then(|p| p.placeholder_type.clone()),
        bounds: element.bounds_pt(),
        text,
        rows: element.table.as_ref().map(|t| t.rows),
        columns: element.table.as_ref().map(|t| t.columns),
        url,
    }
}

fn preview(text: &str) -> String {
    let flat = text.trim().replace('\n', " ");
    if flat.chars().count() > TEXT_PREVIEW_CHARS {
        let cut: String = flat.chars().take(TEXT_PREVIEW_CHARS).collect();
        format!("{}...", cut)
    } else {
        flat
    }
}
