//! Add image tool implementation.

use log::debug;
use rmcp::schemars;
use serde::{Deserialize, Serialize};

use slides_core::model::{SlideRef, resolve_slide};

use super::{ToolContext, placement, require_non_empty};
use crate::errors::ToolError;
use crate::requests::{self, Placement};

const DEFAULT_PLACEMENT: Placement = Placement {
    x: 100.0,
    y: 100.0,
    width: 300.0,
    height: 200.0,
};

/// Parameters for the add_image tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct AddImageParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// 1-based slide position.
    #[serde(default)]
    pub slide_index: Option<usize>,
    /// Slide object ID. Takes precedence over slide_index.
    #[serde(default)]
    pub slide_id: Option<String>,
    /// Publicly reachable http(s) URL of a PNG, JPEG or GIF image.
    pub image_url: String,
    /// Left edge in points. Default: 100.
    #[serde(default)]
    pub x: Option<f64>,
    /// Top edge in points. Default: 100.
    #[serde(default)]
    pub y: Option<f64>,
    /// Width in points. Default: 300.
    #[serde(default)]
    pub width: Option<f64>,
    /// Height in points. Default: 200.
    #[serde(default)]
    pub height: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct CreatedImage {
    pub object_id: String,
    pub slide_id: String,
}

/// Execute the add_image tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &AddImageParams,
) -> Result<CreatedImage, ToolError> {
    require_http_url(&params.image_url, "image_url")?;
    let placement = placement(params.x, params.y, params.width, params.height, DEFAULT_PLACEMENT)?;

    let presentation = ctx.presentation(&params.presentation_id).await?;
    let slide = resolve_slide(
        &presentation,
        SlideRef::new(params.slide_index, params.slide_id.as_deref()),
    )?;

    let object_id = ctx.ids.object_id("image");
    debug!("Creating image {} from {}", object_id, params.image_url);

    let request = requests::create_image(
        &object_id,
        params.image_url.trim(),
        &slide.page.object_id,
        placement,
    );
    let response = ctx
        .apply(&params.presentation_id, vec![request], "Failed to add image")
        .await?;

    Ok(CreatedImage {
        object_id: response
            .created_object_id(0, "createImage")
            .unwrap_or(object_id),
        slide_id: slide.page.object_id.clone(),
    })
}

pub(crate) fn require_http_url(url: &str, field: &str) -> Result<(), ToolError> {
    require_non_empty(url, field)?;
    let url = url.trim();
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(ToolError::invalid(format!(
            "{} must be an http(s) URL, got '{}'",
            field, url
        )));
    }
    Ok(())
}
