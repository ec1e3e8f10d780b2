//! Add shape tool implementation.

use log::debug;
use rmcp::schemars;
use serde::{Deserialize, Serialize};

use slides_core::model::{SlideRef, resolve_slide};

use super::{ToolContext, normalize_choice, parse_optional_color, placement};
use crate::errors::ToolError;
use crate::requests::{self, Placement};

/// Shape types accepted by `createShape`.
pub const SHAPE_TYPES: &[&str] = &[
    "TEXT_BOX",
    "RECTANGLE",
    "ROUND_RECTANGLE",
    "ELLIPSE",
    "TRIANGLE",
    "RIGHT_TRIANGLE",
    "DIAMOND",
    "PENTAGON",
    "HEXAGON",
    "OCTAGON",
    "PARALLELOGRAM",
    "TRAPEZOID",
    "CLOUD",
    "HEART",
    "STAR_5",
    "STAR_6",
    "STAR_8",
    "ARC",
    "DONUT",
    "CHEVRON",
    "HOME_PLATE",
    "PLUS",
    "CAN",
    "CUBE",
    "LIGHTNING_BOLT",
    "RIGHT_ARROW",
    "LEFT_ARROW",
    "UP_ARROW",
    "DOWN_ARROW",
    "LEFT_RIGHT_ARROW",
    "WEDGE_RECTANGLE_CALLOUT",
    "WEDGE_ELLIPSE_CALLOUT",
    "FLOW_CHART_PROCESS",
    "FLOW_CHART_DECISION",
    "FLOW_CHART_TERMINATOR",
];

const DEFAULT_PLACEMENT: Placement = Placement {
    x: 100.0,
    y: 100.0,
    width: 200.0,
    height: 100.0,
};

/// Parameters for the add_shape tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct AddShapeParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// 1-based slide position.
    #[serde(default)]
    pub slide_index: Option<usize>,
    /// Slide object ID. Takes precedence over slide_index.
    #[serde(default)]
    pub slide_id: Option<String>,
    /// Shape type (case-insensitive), e.g. "rectangle", "ellipse", "star_5". Default: RECTANGLE.
    #[serde(default)]
    pub shape_type: Option<String>,
    /// Left edge in points. Default: 100.
    #[serde(default)]
    pub x: Option<f64>,
    /// Top edge in points. Default: 100.
    #[serde(default)]
    pub y: Option<f64>,
    /// Width in points. Default: 200.
    #[serde(default)]
    pub width: Option<f64>,
    /// Height in points. Default: 100.
    #[serde(default)]
    pub height: Option<f64>,
    /// Fill color as hex, e.g. "#4285F4".
    #[serde(default)]
    pub fill_color: Option<String>,
    /// Outline color as hex.
    #[serde(default)]
    pub outline_color: Option<String>,
    /// Text to put inside the shape.
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedShape {
    pub object_id: String,
    pub slide_id: String,
    pub shape_type: String,
}

/// Execute the add_shape tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &AddShapeParams,
) -> Result<CreatedShape, ToolError> {
    let shape_type = normalize_choice(
        params.shape_type.as_deref().unwrap_or("RECTANGLE"),
        SHAPE_TYPES,
        "shape_type",
    )?;
    let fill = parse_optional_color(params.fill_color.as_deref(), "fill_color")?;
    let outline = parse_optional_color(params.outline_color.as_deref(), "outline_color")?;
    let placement = placement(params.x, params.y, params.width, params.height, DEFAULT_PLACEMENT)?;

    let presentation = ctx.presentation(&params.presentation_id).await?;
    let slide = resolve_slide(
        &presentation,
        SlideRef::new(params.slide_index, params.slide_id.as_deref()),
    )?;

    let object_id = ctx.ids.object_id("shape");
    debug!("Creating {} {} on slide {}", shape_type, object_id, slide.page.object_id);

    let mut batch = vec![requests::create_shape(
        &object_id,
        shape_type,
        &slide.page.object_id,
        placement,
    )];
    batch.extend(requests::update_shape_colors(&object_id, fill, outline));
    if let Some(text) = params.text.as_deref().filter(|t| !t.is_empty()) {
        batch.push(requests::insert_text(&object_id, None, text, 0));
    }

    let response = ctx
        .apply(&params.presentation_id, batch, "Failed to create shape")
        .await?;

    Ok(CreatedShape {
        object_id: response
            .created_object_id(0, "createShape")
            .unwrap_or(object_id),
        slide_id: slide.page.object_id.clone(),
        shape_type: shape_type.to_string(),
    })
}
