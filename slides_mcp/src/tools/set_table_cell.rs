//! Set table cell tool implementation.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::insert_text::editable_len;
use super::{ToolContext, check_cell, find_table, parse_optional_color};
use crate::errors::ToolError;
use crate::requests::{self, CellLocation};

/// Parameters for the set_table_cell tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct SetTableCellParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// Object ID of the table.
    pub table_id: String,
    /// 0-based row.
    pub row: usize,
    /// 0-based column.
    pub column: usize,
    /// New cell text. Replaces what is there; omit to leave the text alone.
    #[serde(default)]
    pub text: Option<String>,
    /// Cell background color as hex.
    #[serde(default)]
    pub background_color: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdatedCell {
    pub table_id: String,
    pub row: usize,
    pub column: usize,
    pub text_updated: bool,
    pub background_updated: bool,
}

/// Execute the set_table_cell tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &SetTableCellParams,
) -> Result<UpdatedCell, ToolError> {
    let background = parse_optional_color(params.background_color.as_deref(), "background_color")?;
    if params.text.is_none() && background.is_none() {
        return Err(ToolError::invalid("Provide text, background_color or both"));
    }

    let presentation = ctx.presentation(&params.presentation_id).await?;
    let (_, table) = find_table(&presentation, &params.table_id)?;
    check_cell(table, &params.table_id, params.row, params.column)?;
    let cell = CellLocation {
        row: params.row,
        column: params.column,
    };

    let mut batch = Vec::new();
    if let Some(text) = &params.text {
        let current = table
            .cell(params.row, params.column)
            .and_then(|c| c.text.as_ref())
            .map(editable_len)
            .unwrap_or(0);
        if current > 0 {
            batch.push(requests::delete_all_text(&params.table_id, Some(cell)));
        }
        if !text.is_empty() {
            batch.push(requests::insert_text(&params.table_id, Some(cell), text, 0));
        }
    }
    if let Some(color) = background {
        batch.push(requests::set_cell_background(&params.table_id, cell, color));
    }

    if !batch.is_empty() {
        ctx.apply(&params.presentation_id, batch, "Failed to update table cell")
            .await?;
    }

    Ok(UpdatedCell {
        table_id: params.table_id.clone(),
        row: params.row,
        column: params.column,
        text_updated: params.text.is_some(),
        background_updated: background.is_some(),
    })
}
