//! Insert text tool implementation.

use log::debug;
use rmcp::schemars;
use serde::{Deserialize, Serialize};

use slides_core::model::{PageScope, TextContent, find_element};

use super::{ToolContext, check_cell, require_non_empty, utf16_len};
use crate::errors::ToolError;
use crate::requests::{self, CellLocation};

/// Parameters for the insert_text tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct InsertTextParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// Object ID of a shape, text box or table.
    pub object_id: String,
    /// Text to insert.
    pub text: String,
    /// 0-based row, required when object_id is a table.
    #[serde(default)]
    pub row: Option<usize>,
    /// 0-based column, required when object_id is a table.
    #[serde(default)]
    pub column: Option<usize>,
    /// UTF-16 offset to insert at. Default: end of the existing text.
    #[serde(default)]
    pub insertion_index: Option<usize>,
    /// Replace all existing text instead of inserting.
    #[serde(default)]
    pub replace: bool,
}

#[derive(Debug, Serialize)]
pub struct InsertedText {
    pub object_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    pub insertion_index: usize,
    pub replaced: bool,
    /// Inserted length in UTF-16 code units.
    pub length: usize,
}

/// Execute the insert_text tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &InsertTextParams,
) -> Result<InsertedText, ToolError> {
    require_non_empty(&params.object_id, "object_id")?;
    if params.text.is_empty() {
        return Err(ToolError::invalid("text is required"));
    }

    let presentation = ctx.presentation(&params.presentation_id).await?;
    let location = find_element(&presentation, &params.object_id, PageScope::Any)?;
    let element = location.element;

    let (cell, existing) = match (&element.table, &element.shape) {
        (Some(table), _) => {
            let (row, column) = match (params.row, params.column) {
                (Some(row), Some(column)) => (row, column),
                _ => {
                    return Err(ToolError::invalid(format!(
                        "'{}' is a table; row and column are required",
                        params.object_id
                    )));
                }
            };
            check_cell(table, &params.object_id, row, column)?;
            let text = table.cell(row, column).and_then(|c| c.text.as_ref());
            (Some(CellLocation { row, column }), text)
        }
        (None, Some(shape)) => (None, shape.text.as_ref()),
        (None, None) => {
            return Err(ToolError::invalid(format!(
                "Object '{}' is a {:?} and cannot hold text",
                params.object_id,
                element.kind()
            )));
        }
    };

    let current_len = existing.map(editable_len).unwrap_or(0);
    let mut batch = Vec::new();

    let insertion_index = if params.replace {
        if current_len > 0 {
            batch.push(requests::delete_all_text(&params.object_id, cell));
        }
        0
    } else {
        let index = params.insertion_index.unwrap_or(current_len);
        if index > current_len {
            return Err(ToolError::invalid(format!(
                "insertion_index {} is past the end of the text (length {})",
                index, current_len
            )));
        }
        index
    };

    debug!(
        "Inserting {} unit(s) into {} at {}",
        utf16_len(&params.text),
        params.object_id,
        insertion_index
    );
    batch.push(requests::insert_text(&params.object_id, cell, &params.text, insertion_index));

    ctx.apply(&params.presentation_id, batch, "Failed to insert text")
        .await?;

    Ok(InsertedText {
        object_id: params.object_id.clone(),
        row: cell.map(|c| c.row),
        column: cell.map(|c| c.column),
        insertion_index,
        replaced: params.replace,
        length: utf16_len(&params.text),
    })
}

/// UTF-16 length of the text, excluding the trailing newline Slides keeps
/// at the end of every text body.
pub(crate) fn editable_len(text: &TextContent) -> usize {
    let plain = text.plain_text();
    let plain = plain.strip_suffix('\n').unwrap_or(&plain);
    utf16_len(plain)
}
