//! Modify table structure tool implementation.

use log::debug;
use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::add_table::MAX_DIMENSION;
use super::{ToolContext, find_table, normalize_choice};
use crate::errors::ToolError;
use crate::requests::{self, CellLocation};

const OPERATIONS: &[&str] = &["INSERT_ROWS", "INSERT_COLUMNS", "DELETE_ROWS", "DELETE_COLUMNS"];
const POSITIONS: &[&str] = &["BEFORE", "AFTER"];

/// Parameters for the modify_table_structure tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ModifyTableStructureParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// Object ID of the table.
    pub table_id: String,
    /// One of insert_rows, insert_columns, delete_rows, delete_columns.
    pub operation: String,
    /// 0-based row or column index the operation is relative to.
    pub index: usize,
    /// How many rows or columns to insert or delete, at most 25. Default: 1.
    #[serde(default)]
    pub count: Option<usize>,
    /// For inserts: "before" or "after" the index. Default: after.
    #[serde(default)]
    pub position: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TableStructureChange {
    pub table_id: String,
    pub operation: String,
    pub count: usize,
    pub rows: usize,
    pub columns: usize,
}

/// Execute the modify_table_structure tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &ModifyTableStructureParams,
) -> Result<TableStructureChange, ToolError> {
    let operation = normalize_choice(&params.operation, OPERATIONS, "operation")?;
    let count = params.count.unwrap_or(1);
    if count == 0 || count > MAX_DIMENSION {
        return Err(ToolError::invalid(format!(
            "count must be between 1 and {}, got {}",
            MAX_DIMENSION, count
        )));
    }
    let position = params.position.as_deref().unwrap_or("after");
    let insert_after = normalize_choice(position, POSITIONS, "position")? == "AFTER";

    let presentation = ctx.presentation(&params.presentation_id).await?;
    let (_, table) = find_table(&presentation, &params.table_id)?;

    let rows = operation.ends_with("ROWS");
    let (noun, size) = if rows {
        ("row", table.rows)
    } else {
        ("column", table.columns)
    };
    if params.index >= size {
        return Err(ToolError::invalid(format!(
            "{} index {} is out of range; table '{}' has {} {}(s), indexes start at 0",
            noun, params.index, params.table_id, size, noun
        )));
    }

    let reference = if rows {
        CellLocation { row: params.index, column: 0 }
    } else {
        CellLocation { row: 0, column: params.index }
    };

    let (batch, new_size) = if operation.starts_with("INSERT") {
        let request = requests::insert_table_dimension(
            &params.table_id,
            rows,
            reference,
            insert_after,
            count,
        );
        (vec![request], size + count)
    } else {
        if count > size - params.index {
            return Err(ToolError::invalid(format!(
                "Cannot delete {} {}(s) starting at {}; table '{}' has {}",
                count, noun, params.index, params.table_id, size
            )));
        }
        if count == size {
            return Err(ToolError::invalid(format!(
                "Cannot delete every {} of table '{}'; use delete_object to remove the table",
                noun, params.table_id
            )));
        }
        // Each delete shifts the rest up, so the same index is removed repeatedly.
        let batch: Vec<_> = (0..count)
            .map(|_| requests::delete_table_dimension(&params.table_id, rows, reference))
            .collect();
        (batch, size - count)
    };

    debug!("{} x{} on table {}", operation, count, params.table_id);
    ctx.apply(&params.presentation_id, batch, "Failed to modify table")
        .await?;

    let (new_rows, new_columns) = if rows {
        (new_size, table.columns)
    } else {
        (table.rows, new_size)
    };

    Ok(TableStructureChange {
        table_id: params.table_id.clone(),
        operation: operation.to_lowercase(),
        count,
        rows: new_rows,
        columns: new_columns,
    })
}
