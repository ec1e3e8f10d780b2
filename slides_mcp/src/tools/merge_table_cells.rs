//! Merge table cells tool implementation.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::{ToolContext, check_cell, find_table};
use crate::errors::ToolError;
use crate::requests::{self, CellLocation};

/// Parameters for the merge_table_cells tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct MergeTableCellsParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// Object ID of the table.
    pub table_id: String,
    /// 0-based row of the top-left cell.
    pub row: usize,
    /// 0-based column of the top-left cell.
    pub column: usize,
    /// Number of rows in the range. Default: 1.
    #[serde(default)]
    pub row_span: Option<usize>,
    /// Number of columns in the range. Default: 1.
    #[serde(default)]
    pub column_span: Option<usize>,
    /// Unmerge the range instead of merging it.
    #[serde(default)]
    pub unmerge: bool,
}

#[derive(Debug, Serialize)]
pub struct MergedRange {
    pub table_id: String,
    pub action: &'static str,
    pub row: usize,
    pub column: usize,
    pub row_span: usize,
    pub column_span: usize,
}

/// Execute the merge_table_cells tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &MergeTableCellsParams,
) -> Result<MergedRange, ToolError> {
    let row_span = params.row_span.unwrap_or(1);
    let column_span = params.column_span.unwrap_or(1);
    if row_span == 0 || column_span == 0 {
        return Err(ToolError::invalid("row_span and column_span must be at least 1"));
    }
    if !params.unmerge && row_span == 1 && column_span == 1 {
        return Err(ToolError::invalid("A merge needs a range larger than one cell"));
    }

    let presentation = ctx.presentation(&params.presentation_id).await?;
    let (_, table) = find_table(&presentation, &params.table_id)?;
    check_cell(table, &params.table_id, params.row, params.column)?;
    let last_row = params.row.checked_add(row_span - 1);
    let last_column = params.column.checked_add(column_span - 1);
    let (Some(last_row), Some(last_column)) = (last_row, last_column) else {
        return Err(ToolError::invalid(format!(
            "A {}x{} range starting at ({}, {}) does not fit in table '{}'",
            row_span, column_span, params.row, params.column, params.table_id
        )));
    };
    check_cell(table, &params.table_id, last_row, last_column)?;

    let origin = CellLocation {
        row: params.row,
        column: params.column,
    };
    let request = requests::table_cell_range(
        &params.table_id,
        !params.unmerge,
        origin,
        row_span,
        column_span,
    );
    let action = if params.unmerge { "unmerged" } else { "merged" };
    ctx.apply(
        &params.presentation_id,
        vec![request],
        if params.unmerge {
            "Failed to unmerge table cells"
        } else {
            "Failed to merge table cells"
        },
    )
    .await?;

    Ok(MergedRange {
        table_id: params.table_id.clone(),
        action,
        row: params.row,
        column: params.column,
        row_span,
        column_span,
    })
}
