//! MCP tool implementations for Google Slides.
//!
//! Every tool module exposes a `*Params` type (the tool's input schema), an
//! output type, and an async `execute` that the server calls.

pub mod add_comment;
pub mod add_image;
pub mod add_shape;
pub mod add_table;
pub mod add_text_box;
pub mod add_video;
pub mod apply_theme;
pub mod create_slide;
pub mod delete_comment;
pub mod delete_object;
pub mod duplicate_slide;
pub mod insert_text;
pub mod list_comments;
pub mod list_page_objects;
pub mod list_slides;
pub mod merge_table_cells;
pub mod modify_table_structure;
pub mod reply_to_comment;
pub mod replace_text;
pub mod resolve_comment;
pub mod search_text;
pub mod set_background;
pub mod set_table_cell;

use log::warn;
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

use slides_core::model::{PageElement, PageScope, Presentation, Table, find_element};
use slides_core::{Color, IdGenerator};

use crate::errors::{ErrorKind, ToolError};
use crate::requests::Placement;
use crate::service::{BatchUpdateResponse, SlidesService};

/// Collaborators a tool runs against.
#[derive(Clone, Copy)]
pub struct ToolContext<'a> {
    pub service: &'a dyn SlidesService,
    pub ids: &'a dyn IdGenerator,
}

impl<'a> ToolContext<'a> {
    pub fn new(service: &'a dyn SlidesService, ids: &'a dyn IdGenerator) -> Self {
        ToolContext { service, ids }
    }

    /// Fetches the presentation, mapping remote errors.
    pub async fn presentation(&self, presentation_id: &str) -> Result<Presentation, ToolError> {
        require_non_empty(presentation_id, "presentation_id")?;
        self.service
            .get_presentation(presentation_id)
            .await
            .map_err(|e| ToolError::remote("Failed to get presentation", e))
    }

    /// Sends a batch update, mapping remote errors.
    pub async fn apply(
        &self,
        presentation_id: &str,
        requests: Vec<serde_json::Value>,
        context: &str,
    ) -> Result<BatchUpdateResponse, ToolError> {
        self.service
            .batch_update(presentation_id, requests)
            .await
            .map_err(|e| ToolError::remote(context, e))
    }
}

/// Converts a tool outcome into an MCP result: pretty JSON on success,
/// an error result carrying the message otherwise.
pub fn respond<T: Serialize>(result: Result<T, ToolError>) -> CallToolResult {
    match result {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(json) => CallToolResult::success(vec![Content::text(json)]),
            Err(e) => CallToolResult::error(vec![Content::text(format!(
                "{}: failed to serialize output: {}",
                ErrorKind::RemoteApiFailure,
                e
            ))]),
        },
        Err(err) => {
            warn!("Tool failed: {}", err);
            CallToolResult::error(vec![Content::text(err.to_string())])
        }
    }
}

pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), ToolError> {
    if value.trim().is_empty() {
        return Err(ToolError::invalid(format!("{} is required", field)));
    }
    Ok(())
}

/// Parses a hex color argument.
pub(crate) fn parse_color(value: &str, field: &str) -> Result<Color, ToolError> {
    Color::from_hex(value).ok_or_else(|| {
        ToolError::invalid(format!(
            "{} '{}' is not a valid hex color. Expected format like #FF0000",
            field, value
        ))
    })
}

pub(crate) fn parse_optional_color(
    value: Option<&str>,
    field: &str,
) -> Result<Option<Color>, ToolError> {
    value.map(|v| parse_color(v, field)).transpose()
}

/// Case-insensitive enum normalization: `"round-rectangle"` and
/// `"Round Rectangle"` both become `ROUND_RECTANGLE` if allowed.
pub(crate) fn normalize_choice(
    value: &str,
    allowed: &[&'static str],
    field: &str,
) -> Result<&'static str, ToolError> {
    let normalized = value.trim().to_uppercase().replace(['-', ' '], "_");
    allowed
        .iter()
        .copied()
        .find(|candidate| *candidate == normalized)
        .ok_or_else(|| {
            ToolError::invalid(format!(
                "Invalid {} '{}'. Valid values: {}",
                field,
                value,
                allowed.join(", ")
            ))
        })
}

/// Validates a placement in points, filling defaults for missing values.
pub(crate) fn placement(
    x: Option<f64>,
    y: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    defaults: Placement,
) -> Result<Placement, ToolError> {
    let placement = Placement {
        x: x.unwrap_or(defaults.x),
        y: y.unwrap_or(defaults.y),
        width: width.unwrap_or(defaults.width),
        height: height.unwrap_or(defaults.height),
    };

    let all = [placement.x, placement.y, placement.width, placement.height];
    if all.iter().any(|v| !v.is_finite()) {
        return Err(ToolError::invalid("Position and size must be finite numbers"));
    }
    if placement.width <= 0.0 || placement.height <= 0.0 {
        return Err(ToolError::invalid(format!(
            "Width and height must be positive, got {}x{}",
            placement.width, placement.height
        )));
    }
    Ok(placement)
}

/// Finds a table element anywhere in the presentation.
pub(crate) fn find_table<'p>(
    presentation: &'p Presentation,
    table_id: &str,
) -> Result<(&'p PageElement, &'p Table), ToolError> {
    require_non_empty(table_id, "table_id")?;
    let location = find_element(presentation, table_id, PageScope::Any)?;
    let table = location.element.table.as_ref().ok_or_else(|| {
        ToolError::invalid(format!("Object '{}' is not a table", table_id))
    })?;
    Ok((location.element, table))
}

/// Checks a zero-based cell address against the table dimensions.
pub(crate) fn check_cell(
    table: &Table,
    table_id: &str,
    row: usize,
    column: usize,
) -> Result<(), ToolError> {
    if row >= table.rows || column >= table.columns {
        return Err(ToolError::invalid(format!(
            "Cell ({}, {}) is outside table '{}' which has {} row(s) and {} column(s); indexes start at 0",
            row, column, table_id, table.rows, table.columns
        )));
    }
    Ok(())
}

/// Length of a string in UTF-16 code units, the unit Slides counts text in.
pub(crate) fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}
