//! Read-only snapshot of a presentation as returned by `presentations.get`.
//!
//! Only the fields the tools look at are modeled; everything else in the API
//! response is ignored during deserialization.

use serde::{Deserialize, Serialize};

use crate::units::magnitude_to_pt;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub presentation_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub revision_id: Option<String>,
    #[serde(default)]
    pub page_size: Option<Size>,
    #[serde(default)]
    pub slides: Vec<Page>,
    #[serde(default)]
    pub layouts: Vec<Page>,
    #[serde(default)]
    pub masters: Vec<Page>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub object_id: String,
    #[serde(default)]
    pub page_type: Option<String>,
    #[serde(default)]
    pub page_elements: Vec<PageElement>,
    #[serde(default)]
    pub slide_properties: Option<SlideProperties>,
    #[serde(default)]
    pub layout_properties: Option<LayoutProperties>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideProperties {
    #[serde(default)]
    pub layout_object_id: Option<String>,
    #[serde(default)]
    pub master_object_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutProperties {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub master_object_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageElement {
    pub object_id: String,
    #[serde(default)]
    pub size: Option<Size>,
    #[serde(default)]
    pub transform: Option<Transform>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub shape: Option<Shape>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub video: Option<Video>,
    #[serde(default)]
    pub table: Option<Table>,
    #[serde(default)]
    pub line: Option<serde_json::Value>,
    #[serde(default)]
    pub element_group: Option<Group>,
    #[serde(default)]
    pub sheets_chart: Option<serde_json::Value>,
    #[serde(default)]
    pub word_art: Option<serde_json::Value>,
}

/// Coarse classification of a page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Shape,
    Image,
    Video,
    Table,
    Line,
    Group,
    SheetsChart,
    WordArt,
    Unknown,
}

impl PageElement {
    pub fn kind(&self) -> ElementKind {
        if self.shape.is_some() {
            ElementKind::Shape
        } else if self.image.is_some() {
            ElementKind::Image
        } else if self.video.is_some() {
            ElementKind::Video
        } else if self.table.is_some() {
            ElementKind::Table
        } else if self.line.is_some() {
            ElementKind::Line
        } else if self.element_group.is_some() {
            ElementKind::Group
        } else if self.sheets_chart.is_some() {
            ElementKind::SheetsChart
        } else if self.word_art.is_some() {
            ElementKind::WordArt
        } else {
            ElementKind::Unknown
        }
    }

    /// Children of a group, empty for every other kind.
    pub fn children(&self) -> &[PageElement] {
        self.element_group
            .as_ref()
            .map(|g| g.children.as_slice())
            .unwrap_or_default()
    }

    /// Bounding box in points, applying scale and translation.
    pub fn bounds_pt(&self) -> Option<Bounds> {
        let size = self.size.as_ref()?;
        let transform = self.transform.clone().unwrap_or_default();
        let unit = transform.unit.as_deref();

        Some(Bounds {
            x: magnitude_to_pt(transform.translate_x, unit),
            y: magnitude_to_pt(transform.translate_y, unit),
            width: size.width.to_pt() * transform.scale_x,
            height: size.height.to_pt() * transform.scale_y,
        })
    }
}

/// Position and size of an element in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Size {
    #[serde(default)]
    pub width: Dimension,
    #[serde(default)]
    pub height: Dimension,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dimension {
    #[serde(default)]
    pub magnitude: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

impl Dimension {
    pub fn to_pt(&self) -> f64 {
        magnitude_to_pt(self.magnitude, self.unit.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    #[serde(default = "one")]
    pub scale_x: f64,
    #[serde(default = "one")]
    pub scale_y: f64,
    #[serde(default)]
    pub translate_x: f64,
    #[serde(default)]
    pub translate_y: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            scale_x: 1.0,
            scale_y: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            unit: None,
        }
    }
}

fn one() -> f64 {
    1.0
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    #[serde(default)]
    pub shape_type: Option<String>,
    #[serde(default)]
    pub text: Option<TextContent>,
    #[serde(default)]
    pub placeholder: Option<Placeholder>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placeholder {
    #[serde(default, rename = "type")]
    pub placeholder_type: Option<String>,
    #[serde(default)]
    pub index: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    #[serde(default)]
    pub text_elements: Vec<TextElement>,
}

impl TextContent {
    /// Concatenated text of all runs and auto-text elements.
    pub fn plain_text(&self) -> String {
        self.text_elements
            .iter()
            .filter_map(|el| {
                el.text_run
                    .as_ref()
                    .or(el.auto_text.as_ref())
                    .map(|run| run.content.as_str())
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    #[serde(default)]
    pub start_index: Option<i64>,
    #[serde(default)]
    pub end_index: Option<i64>,
    #[serde(default)]
    pub text_run: Option<TextRun>,
    #[serde(default)]
    pub auto_text: Option<TextRun>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextRun {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub content_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(default)]
    pub rows: usize,
    #[serde(default)]
    pub columns: usize,
    #[serde(default)]
    pub table_rows: Vec<TableRow>,
}

impl Table {
    /// Cell at a zero-based position, if the table has one there.
    pub fn cell(&self, row: usize, column: usize) -> Option<&TableCell> {
        self.table_rows.get(row)?.table_cells.get(column)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    #[serde(default)]
    pub table_cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    #[serde(default)]
    pub row_span: Option<usize>,
    #[serde(default)]
    pub column_span: Option<usize>,
    #[serde(default)]
    pub text: Option<TextContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub children: Vec<PageElement>,
}
