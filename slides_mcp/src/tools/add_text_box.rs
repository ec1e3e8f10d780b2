//! Add text box tool implementation.

use log::debug;
use rmcp::schemars;
use serde::{Deserialize, Serialize};

use slides_core::model::{SlideRef, resolve_slide};

use super::{ToolContext, normalize_choice, parse_optional_color, placement, require_non_empty};
use crate::errors::ToolError;
use crate::requests::{self, Placement, TextStyle};

const ALIGNMENTS: &[&str] = &["START", "CENTER", "END", "JUSTIFIED"];

const DEFAULT_PLACEMENT: Placement = Placement {
    x: 50.0,
    y: 50.0,
    width: 400.0,
    height: 50.0,
};

/// Parameters for the add_text_box tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct AddTextBoxParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// 1-based slide position.
    #[serde(default)]
    pub slide_index: Option<usize>,
    /// Slide object ID. Takes precedence over slide_index.
    #[serde(default)]
    pub slide_id: Option<String>,
    /// The text content.
    pub text: String,
    /// Left edge in points. Default: 50.
    #[serde(default)]
    pub x: Option<f64>,
    /// Top edge in points. Default: 50.
    #[serde(default)]
    pub y: Option<f64>,
    /// Width in points. Default: 400.
    #[serde(default)]
    pub width: Option<f64>,
    /// Height in points. Default: 50.
    #[serde(default)]
    pub height: Option<f64>,
    /// Font size in points.
    #[serde(default)]
    pub font_size: Option<f64>,
    /// Font family, e.g. "Roboto".
    #[serde(default)]
    pub font_family: Option<String>,
    /// Text color as hex.
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub bold: Option<bool>,
    #[serde(default)]
    pub italic: Option<bool>,
    /// Paragraph alignment: left, center, right or justified.
    #[serde(default)]
    pub alignment: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedTextBox {
    pub object_id: String,
    pub slide_id: String,
}

/// Execute the add_text_box tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &AddTextBoxParams,
) -> Result<CreatedTextBox, ToolError> {
    require_non_empty(&params.text, "text")?;
    let placement = placement(params.x, params.y, params.width, params.height, DEFAULT_PLACEMENT)?;
    if let Some(size) = params.font_size.filter(|s| !s.is_finite() || *s <= 0.0) {
        return Err(ToolError::invalid(format!("font_size must be positive, got {}", size)));
    }

    let style = TextStyle {
        bold: params.bold,
        italic: params.italic,
        font_size: params.font_size,
        font_family: params
            .font_family
            .clone()
            .filter(|f| !f.trim().is_empty()),
        color: parse_optional_color(params.color.as_deref(), "color")?,
    };
    let alignment = params
        .alignment
        .as_deref()
        .map(|value| normalize_choice(alignment_alias(value), ALIGNMENTS, "alignment"))
        .transpose()?;

    let presentation = ctx.presentation(&params.presentation_id).await?;
    let slide = resolve_slide(
        &presentation,
        SlideRef::new(params.slide_index, params.slide_id.as_deref()),
    )?;

    let object_id = ctx.ids.object_id("textbox");
    debug!("Creating text box {} on slide {}", object_id, slide.page.object_id);

    let mut batch = vec![
        requests::create_shape(&object_id, "TEXT_BOX", &slide.page.object_id, placement),
        requests::insert_text(&object_id, None, &params.text, 0),
    ];
    batch.extend(requests::update_text_style(&object_id, &style));
    if let Some(alignment) = alignment {
        batch.push(requests::update_paragraph_alignment(&object_id, alignment));
    }

    ctx.apply(&params.presentation_id, batch, "Failed to create text box")
        .await?;

    Ok(CreatedTextBox {
        object_id,
        slide_id: slide.page.object_id.clone(),
    })
}

/// Maps the familiar left/right names onto the API's START/END.
fn alignment_alias(value: &str) -> &str {
    match value.trim().to_ascii_lowercase().as_str() {
        "left" => "START",
        "right" => "END",
        "justify" => "JUSTIFIED",
        _ => value,
    }
}
