//! Builders for Slides `batchUpdate` request objects.
//!
//! Positions and sizes come in as points and are sent as EMU.

use serde_json::{Value, json};

use slides_core::{Color, pt_to_emu};

/// Placement of a new element on a page, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// `elementProperties` for a create request.
pub fn element_properties(page_id: &str, placement: Placement) -> Value {
    json!({
        "pageObjectId": page_id,
        "size": {
            "width": { "magnitude": pt_to_emu(placement.width), "unit": "EMU" },
            "height": { "magnitude": pt_to_emu(placement.height), "unit": "EMU" },
        },
        "transform": {
            "scaleX": 1.0,
            "scaleY": 1.0,
            "shearX": 0.0,
            "shearY": 0.0,
            "translateX": pt_to_emu(placement.x),
            "translateY": pt_to_emu(placement.y),
            "unit": "EMU",
        },
    })
}

pub fn create_shape(
    object_id: &str,
    shape_type: &str,
    page_id: &str,
    placement: Placement,
) -> Value {
    json!({
        "createShape": {
            "objectId": object_id,
            "shapeType": shape_type,
            "elementProperties": element_properties(page_id, placement),
        }
    })
}

pub fn create_image(object_id: &str, url: &str, page_id: &str, placement: Placement) -> Value {
    json!({
        "createImage": {
            "objectId": object_id,
            "url": url,
            "elementProperties": element_properties(page_id, placement),
        }
    })
}

pub fn create_video(
    object_id: &str,
    source: &str,
    video_id: &str,
    page_id: &str,
    placement: Placement,
) -> Value {
    json!({
        "createVideo": {
            "objectId": object_id,
            "source": source,
            "id": video_id,
            "elementProperties": element_properties(page_id, placement),
        }
    })
}

pub fn create_table(
    object_id: &str,
    rows: usize,
    columns: usize,
    page_id: &str,
    placement: Placement,
) -> Value {
    json!({
        "createTable": {
            "objectId": object_id,
            "rows": rows,
            "columns": columns,
            "elementProperties": element_properties(page_id, placement),
        }
    })
}

pub fn create_slide(object_id: &str, layout: &str, insertion_index: Option<usize>) -> Value {
    let mut request = json!({
        "createSlide": {
            "objectId": object_id,
            "slideLayoutReference": { "predefinedLayout": layout },
        }
    });
    if let Some(index) = insertion_index {
        request["createSlide"]["insertionIndex"] = json!(index);
    }
    request
}

pub fn duplicate_object(object_id: &str, new_id: &str) -> Value {
    json!({
        "duplicateObject": {
            "objectId": object_id,
            "objectIds": { object_id: new_id },
        }
    })
}

/// Moves slides so the first lands at zero-based `insertion_index`.
pub fn update_slides_position(slide_ids: &[&str], insertion_index: usize) -> Value {
    json!({
        "updateSlidesPosition": {
            "slideObjectIds": slide_ids,
            "insertionIndex": insertion_index,
        }
    })
}

pub fn delete_object(object_id: &str) -> Value {
    json!({ "deleteObject": { "objectId": object_id } })
}

/// Zero-based table cell address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLocation {
    pub row: usize,
    pub column: usize,
}

impl CellLocation {
    fn to_json(self) -> Value {
        json!({ "rowIndex": self.row, "columnIndex": self.column })
    }
}

pub fn insert_text(
    object_id: &str,
    cell: Option<CellLocation>,
    text: &str,
    insertion_index: usize,
) -> Value {
    let mut request = json!({
        "insertText": {
            "objectId": object_id,
            "text": text,
            "insertionIndex": insertion_index,
        }
    });
    if let Some(cell) = cell {
        request["insertText"]["cellLocation"] = cell.to_json();
    }
    request
}

/// Deletes all text in a shape or cell.
pub fn delete_all_text(object_id: &str, cell: Option<CellLocation>) -> Value {
    let mut request = json!({
        "deleteText": {
            "objectId": object_id,
            "textRange": { "type": "ALL" },
        }
    });
    if let Some(cell) = cell {
        request["deleteText"]["cellLocation"] = cell.to_json();
    }
    request
}

pub fn replace_all_text(
    find: &str,
    replace: &str,
    match_case: bool,
    page_ids: Option<&[String]>,
) -> Value {
    let mut request = json!({
        "replaceAllText": {
            "containsText": { "text": find, "matchCase": match_case },
            "replaceText": replace,
        }
    });
    if let Some(ids) = page_ids {
        request["replaceAllText"]["pageObjectIds"] = json!(ids);
    }
    request
}

/// Optional character styling for inserted text.
#[derive(Debug, Clone, Default)]
pub struct TextStyle {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub color: Option<Color>,
}

impl TextStyle {
    pub fn is_empty(&self) -> bool {
        self.bold.is_none()
            && self.italic.is_none()
            && self.font_size.is_none()
            && self.font_family.is_none()
            && self.color.is_none()
    }
}

/// `updateTextStyle` over all text of an object, or `None` when nothing is set.
pub fn update_text_style(object_id: &str, style: &TextStyle) -> Option<Value> {
    let mut body = json!({});
    let mut fields = Vec::new();

    if let Some(bold) = style.bold {
        body["bold"] = json!(bold);
        fields.push("bold");
    }
    if let Some(italic) = style.italic {
        body["italic"] = json!(italic);
        fields.push("italic");
    }
    if let Some(size) = style.font_size {
        body["fontSize"] = json!({ "magnitude": size, "unit": "PT" });
        fields.push("fontSize");
    }
    if let Some(family) = &style.font_family {
        body["fontFamily"] = json!(family);
        fields.push("fontFamily");
    }
    if let Some(color) = style.color {
        body["foregroundColor"] = json!({ "opaqueColor": color.to_opaque_color() });
        fields.push("foregroundColor");
    }

    if fields.is_empty() {
        return None;
    }

    Some(json!({
        "updateTextStyle": {
            "objectId": object_id,
            "textRange": { "type": "ALL" },
            "style": body,
            "fields": fields.join(","),
        }
    }))
}

pub fn update_paragraph_alignment(object_id: &str, alignment: &str) -> Value {
    json!({
        "updateParagraphStyle": {
            "objectId": object_id,
            "textRange": { "type": "ALL" },
            "style": { "alignment": alignment },
            "fields": "alignment",
        }
    })
}

/// Solid fill and/or outline color for a shape.
pub fn update_shape_colors(
    object_id: &str,
    fill: Option<Color>,
    outline: Option<Color>,
) -> Option<Value> {
    let mut properties = json!({});
    let mut fields = Vec::new();

    if let Some(color) = fill {
        properties["shapeBackgroundFill"] = json!({
            "solidFill": { "color": color.to_opaque_color() }
        });
        fields.push("shapeBackgroundFill.solidFill.color");
    }
    if let Some(color) = outline {
        properties["outline"] = json!({
            "outlineFill": { "solidFill": { "color": color.to_opaque_color() } }
        });
        fields.push("outline.outlineFill.solidFill.color");
    }

    if fields.is_empty() {
        return None;
    }

    Some(json!({
        "updateShapeProperties": {
            "objectId": object_id,
            "shapeProperties": properties,
            "fields": fields.join(","),
        }
    }))
}

pub fn set_cell_background(object_id: &str, cell: CellLocation, color: Color) -> Value {
    json!({
        "updateTableCellProperties": {
            "objectId": object_id,
            "tableRange": {
                "location": cell.to_json(),
                "rowSpan": 1,
                "columnSpan": 1,
            },
            "tableCellProperties": {
                "tableCellBackgroundFill": { "solidFill": { "color": color.to_opaque_color() } }
            },
            "fields": "tableCellBackgroundFill.solidFill.color",
        }
    })
}

/// `insertTableRows` / `insertTableColumns`.
pub fn insert_table_dimension(
    table_id: &str,
    rows: bool,
    reference: CellLocation,
    insert_after: bool,
    number: usize,
) -> Value {
    let (key, side) = if rows {
        ("insertTableRows", "insertBelow")
    } else {
        ("insertTableColumns", "insertRight")
    };
    json!({
        key: {
            "tableObjectId": table_id,
            "cellLocation": reference.to_json(),
            side: insert_after,
            "number": number,
        }
    })
}

/// `deleteTableRow` / `deleteTableColumn`.
pub fn delete_table_dimension(table_id: &str, rows: bool, reference: CellLocation) -> Value {
    let key = if rows { "deleteTableRow" } else { "deleteTableColumn" };
    json!({
        key: {
            "tableObjectId": table_id,
            "cellLocation": reference.to_json(),
        }
    })
}

/// `mergeTableCells` / `unmergeTableCells` over a rectangular range.
pub fn table_cell_range(
    table_id: &str,
    merge: bool,
    origin: CellLocation,
    row_span: usize,
    column_span: usize,
) -> Value {
    let key = if merge { "mergeTableCells" } else { "unmergeTableCells" };
    json!({
        key: {
            "objectId": table_id,
            "tableRange": {
                "location": origin.to_json(),
                "rowSpan": row_span,
                "columnSpan": column_span,
            },
        }
    })
}

/// Page background fill. `fill` is a `pageBackgroundFill` value.
pub fn update_page_background(page_id: &str, fill: Value, field: &str) -> Value {
    json!({
        "updatePageProperties": {
            "objectId": page_id,
            "pageProperties": { "pageBackgroundFill": fill },
            "fields": field,
        }
    })
}

pub fn solid_background(color: Color) -> (Value, &'static str) {
    (
        json!({ "solidFill": { "color": color.to_opaque_color() } }),
        "pageBackgroundFill.solidFill.color",
    )
}

pub fn picture_background(content_url: &str) -> (Value, &'static str) {
    (
        json!({ "stretchedPictureFill": { "contentUrl": content_url } }),
        "pageBackgroundFill.stretchedPictureFill.contentUrl",
    )
}

/// Replaces a master page's color scheme.
///
/// `colors` pairs theme color types (`DARK1`, `ACCENT1`, ...) with colors.
pub fn update_color_scheme(master_id: &str, colors: &[(&str, Color)]) -> Value {
    let entries: Vec<Value> = colors
        .iter()
        .map(|(kind, color)| json!({ "type": kind, "color": color }))
        .collect();
    json!({
        "updatePageProperties": {
            "objectId": master_id,
            "pageProperties": { "colorScheme": { "colors": entries } },
            "fields": "colorScheme.colors",
        }
    })
}
