//! Set background tool implementation.
//!
//! Gradients are not a Slides fill type, so they are rasterized to a PNG,
//! uploaded to Drive, shared and applied as a stretched picture fill.

use log::{debug, info};
use rmcp::schemars;
use serde::{Deserialize, Serialize};

use slides_core::image::{GradientDirection, PNG_MIME_TYPE, generate_gradient_image};
use slides_core::Color;
use slides_core::model::{SlideRef, resolve_slide};

use super::add_image::require_http_url;
use super::{ToolContext, parse_color, parse_optional_color};
use crate::errors::ToolError;
use crate::requests;

/// Parameters for the set_background tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct SetBackgroundParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// 1-based slide position.
    #[serde(default)]
    pub slide_index: Option<usize>,
    /// Slide object ID. Takes precedence over slide_index.
    #[serde(default)]
    pub slide_id: Option<String>,
    /// Apply to every slide instead of one.
    #[serde(default)]
    pub apply_to_all: bool,
    /// Solid background color as hex.
    #[serde(default)]
    pub color: Option<String>,
    /// Public http(s) URL of a background image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Gradient start color as hex.
    #[serde(default)]
    pub gradient_start: Option<String>,
    /// Gradient end color as hex.
    #[serde(default)]
    pub gradient_end: Option<String>,
    /// Gradient angle in degrees: 0 left to right, 90 top to bottom,
    /// 180 right to left, 270 bottom to top. Default: 90.
    #[serde(default)]
    pub gradient_angle: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct BackgroundResult {
    pub fill: &'static str,
    pub slide_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_file_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_direction: Option<GradientDirection>,
}

enum Fill {
    Solid(Color),
    Image(String),
    Gradient {
        start: Color,
        end: Color,
        angle: f64,
    },
}

/// Execute the set_background tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &SetBackgroundParams,
) -> Result<BackgroundResult, ToolError> {
    let fill = requested_fill(params)?;

    let presentation = ctx.presentation(&params.presentation_id).await?;
    let slide_ids: Vec<String> = if params.apply_to_all {
        presentation.slides.iter().map(|s| s.object_id.clone()).collect()
    } else {
        let slide = resolve_slide(
            &presentation,
            SlideRef::new(params.slide_index, params.slide_id.as_deref()),
        )?;
        vec![slide.page.object_id.clone()]
    };
    if slide_ids.is_empty() {
        return Err(ToolError::invalid("The presentation has no slides"));
    }

    let mut result = BackgroundResult {
        fill: "solid",
        slide_ids: slide_ids.clone(),
        image_url: None,
        uploaded_file_id: None,
        gradient_direction: None,
    };

    let (value, field) = match fill {
        Fill::Solid(color) => requests::solid_background(color),
        Fill::Image(url) => {
            result.fill = "image";
            let background = requests::picture_background(&url);
            result.image_url = Some(url);
            background
        }
        Fill::Gradient { start, end, angle } => {
            result.fill = "gradient";
            result.gradient_direction = Some(GradientDirection::from_angle(angle));

            let png = generate_gradient_image(start, end, angle)?;
            let name = ctx.ids.file_name("gradient", "png");
            debug!("Uploading gradient {} ({} bytes)", name, png.len());

            let file = ctx
                .service
                .upload_file(&name, PNG_MIME_TYPE, png)
                .await
                .map_err(|e| ToolError::remote("Failed to upload gradient image", e))?;
            ctx.service
                .share_publicly(&file.id)
                .await
                .map_err(|e| ToolError::remote("Failed to share gradient image", e))?;
            info!("Uploaded gradient background as Drive file {}", file.id);

            let url = file.content_url();
            result.uploaded_file_id = Some(file.id);
            let background = requests::picture_background(&url);
            result.image_url = Some(url);
            background
        }
    };

    let batch = slide_ids
        .iter()
        .map(|id| requests::update_page_background(id, value.clone(), field))
        .collect();
    ctx.apply(&params.presentation_id, batch, "Failed to set background")
        .await?;

    Ok(result)
}

/// Exactly one of color, image URL or gradient colors must be given.
fn requested_fill(params: &SetBackgroundParams) -> Result<Fill, ToolError> {
    let gradient = params.gradient_start.is_some() || params.gradient_end.is_some();
    let given = [params.color.is_some(), params.image_url.is_some(), gradient]
        .iter()
        .filter(|b| **b)
        .count();
    if given != 1 {
        return Err(ToolError::invalid(
            "Provide exactly one of color, image_url, or gradient_start with gradient_end",
        ));
    }

    if let Some(color) = &params.color {
        return Ok(Fill::Solid(parse_color(color, "color")?));
    }
    if let Some(url) = &params.image_url {
        require_http_url(url, "image_url")?;
        return Ok(Fill::Image(url.trim().to_string()));
    }

    let start = parse_optional_color(params.gradient_start.as_deref(), "gradient_start")?;
    let end = parse_optional_color(params.gradient_end.as_deref(), "gradient_end")?;
    let (Some(start), Some(end)) = (start, end) else {
        return Err(ToolError::invalid(
            "A gradient needs both gradient_start and gradient_end",
        ));
    };
    let angle = params.gradient_angle.unwrap_or(90.0);
    if !angle.is_finite() {
        return Err(ToolError::invalid(format!("gradient_angle must be finite, got {}", angle)));
    }
    Ok(Fill::Gradient { start, end, angle })
}
