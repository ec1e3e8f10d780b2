//! Add table tool implementation.

use log::debug;
use rmcp::schemars;
use serde::{Deserialize, Serialize};

use slides_core::model::{SlideRef, resolve_slide};

use super::{ToolContext, placement};
use crate::errors::ToolError;
use crate::requests::{self, CellLocation, Placement};

/// Upper bound the Slides editor allows in either dimension.
pub(crate) const MAX_DIMENSION: usize = 25;

const DEFAULT_PLACEMENT: Placement = Placement {
    x: 50.0,
    y: 100.0,
    width: 600.0,
    height: 200.0,
};

/// Parameters for the add_table tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct AddTableParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// 1-based slide position.
    #[serde(default)]
    pub slide_index: Option<usize>,
    /// Slide object ID. Takes precedence over slide_index.
    #[serde(default)]
    pub slide_id: Option<String>,
    /// Number of rows (1 to 25).
    pub rows: usize,
    /// Number of columns (1 to 25).
    pub columns: usize,
    /// Initial cell text, row by row. May be shorter than the table.
    #[serde(default)]
    pub data: Vec<Vec<String>>,
    /// Left edge in points. Default: 50.
    #[serde(default)]
    pub x: Option<f64>,
    /// Top edge in points. Default: 100.
    #[serde(default)]
    pub y: Option<f64>,
    /// Width in points. Default: 600.
    #[serde(default)]
    pub width: Option<f64>,
    /// Height in points. Default: 200.
    #[serde(default)]
    pub height: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct CreatedTable {
    pub object_id: String,
    pub slide_id: String,
    pub rows: usize,
    pub columns: usize,
    pub cells_filled: usize,
}

/// Execute the add_table tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &AddTableParams,
) -> Result<CreatedTable, ToolError> {
    for (name, value) in [("rows", params.rows), ("columns", params.columns)] {
        if value == 0 || value > MAX_DIMENSION {
            return Err(ToolError::invalid(format!(
                "{} must be between 1 and {}, got {}",
                name, MAX_DIMENSION, value
            )));
        }
    }
    if params.data.len() > params.rows {
        return Err(ToolError::invalid(format!(
            "data has {} row(s) but the table has {}",
            params.data.len(),
            params.rows
        )));
    }
    if let Some((i, row)) = params
        .data
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() > params.columns)
    {
        return Err(ToolError::invalid(format!(
            "data row {} has {} value(s) but the table has {} column(s)",
            i,
            row.len(),
            params.columns
        )));
    }
    let placement = placement(params.x, params.y, params.width, params.height, DEFAULT_PLACEMENT)?;

    let presentation = ctx.presentation(&params.presentation_id).await?;
    let slide = resolve_slide(
        &presentation,
        SlideRef::new(params.slide_index, params.slide_id.as_deref()),
    )?;

    let object_id = ctx.ids.object_id("table");
    debug!(
        "Creating {}x{} table {} on slide {}",
        params.rows, params.columns, object_id, slide.page.object_id
    );

    let mut batch = vec![requests::create_table(
        &object_id,
        params.rows,
        params.columns,
        &slide.page.object_id,
        placement,
    )];
    for (row, values) in params.data.iter().enumerate() {
        for (column, value) in values.iter().enumerate() {
            if !value.is_empty() {
                let cell = CellLocation { row, column };
                batch.push(requests::insert_text(&object_id, Some(cell), value, 0));
            }
        }
    }
    let cells_filled = batch.len() - 1;

    ctx.apply(&params.presentation_id, batch, "Failed to create table")
        .await?;

    Ok(CreatedTable {
        object_id,
        slide_id: slide.page.object_id.clone(),
        rows: params.rows,
        columns: params.columns,
        cells_filled,
    })
}
