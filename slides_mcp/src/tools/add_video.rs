//! Add video tool implementation.

use log::debug;
use rmcp::schemars;
use serde::{Deserialize, Serialize};

use slides_core::model::{SlideRef, resolve_slide};

use super::{ToolContext, normalize_choice, placement};
use crate::errors::ToolError;
use crate::requests::{self, Placement};

const SOURCES: &[&str] = &["YOUTUBE", "DRIVE"];

const DEFAULT_PLACEMENT: Placement = Placement {
    x: 100.0,
    y: 100.0,
    width: 480.0,
    height: 270.0,
};

/// Parameters for the add_video tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct AddVideoParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// 1-based slide position.
    #[serde(default)]
    pub slide_index: Option<usize>,
    /// Slide object ID. Takes precedence over slide_index.
    #[serde(default)]
    pub slide_id: Option<String>,
    /// YouTube URL (watch, youtu.be, embed, shorts) or Drive file URL.
    #[serde(default)]
    pub video_url: Option<String>,
    /// Video ID, used with `source` instead of a URL.
    #[serde(default)]
    pub video_id: Option<String>,
    /// "youtube" or "drive". Required with video_id.
    #[serde(default)]
    pub source: Option<String>,
    /// Left edge in points. Default: 100.
    #[serde(default)]
    pub x: Option<f64>,
    /// Top edge in points. Default: 100.
    #[serde(default)]
    pub y: Option<f64>,
    /// Width in points. Default: 480.
    #[serde(default)]
    pub width: Option<f64>,
    /// Height in points. Default: 270.
    #[serde(default)]
    pub height: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct CreatedVideo {
    pub object_id: String,
    pub slide_id: String,
    pub source: String,
    pub video_id: String,
}

/// Execute the add_video tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &AddVideoParams,
) -> Result<CreatedVideo, ToolError> {
    let (source, video_id) = video_reference(params)?;
    let placement = placement(params.x, params.y, params.width, params.height, DEFAULT_PLACEMENT)?;

    let presentation = ctx.presentation(&params.presentation_id).await?;
    let slide = resolve_slide(
        &presentation,
        SlideRef::new(params.slide_index, params.slide_id.as_deref()),
    )?;

    let object_id = ctx.ids.object_id("video");
    debug!("Creating {} video {} ({})", source, object_id, video_id);

    let request = requests::create_video(
        &object_id,
        source,
        &video_id,
        &slide.page.object_id,
        placement,
    );
    let response = ctx
        .apply(&params.presentation_id, vec![request], "Failed to add video")
        .await?;

    Ok(CreatedVideo {
        object_id: response
            .created_object_id(0, "createVideo")
            .unwrap_or(object_id),
        slide_id: slide.page.object_id.clone(),
        source: source.to_string(),
        video_id,
    })
}

fn video_reference(params: &AddVideoParams) -> Result<(&'static str, String), ToolError> {
    if let Some(id) = params.video_id.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        let source = params
            .source
            .as_deref()
            .ok_or_else(|| ToolError::invalid("source is required when video_id is given"))?;
        let source = normalize_choice(source, SOURCES, "source")?;
        return Ok((source, id.to_string()));
    }

    let url = params
        .video_url
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ToolError::invalid("Either video_url or video_id must be provided"))?;
    parse_video_url(url).ok_or_else(|| {
        ToolError::invalid(format!(
            "Could not extract a YouTube or Drive video ID from '{}'",
            url
        ))
    })
}

/// Extracts `(source, id)` from a YouTube or Google Drive URL.
pub fn parse_video_url(url: &str) -> Option<(&'static str, String)> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    let rest = rest.strip_prefix("m.").unwrap_or(rest);

    let id = if let Some(path) = rest.strip_prefix("youtu.be/") {
        ("YOUTUBE", take_id(path))
    } else if let Some(path) = rest.strip_prefix("youtube.com/") {
        let id = if let Some(query) = path.strip_prefix("watch?") {
            query
                .split('&')
                .find_map(|pair| pair.strip_prefix("v="))
                .map(take_id)
        } else if let Some(p) = path.strip_prefix("embed/") {
            Some(take_id(p))
        } else {
            path.strip_prefix("shorts/").map(take_id)
        };
        ("YOUTUBE", id?)
    } else if let Some(path) = rest.strip_prefix("drive.google.com/file/d/") {
        ("DRIVE", take_id(path))
    } else {
        return None;
    };

    (!id.1.is_empty()).then(|| (id.0, id.1.to_string()))
}

fn take_id(path: &str) -> &str {
    let end = path
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(path.len());
    &path[..end]
}
