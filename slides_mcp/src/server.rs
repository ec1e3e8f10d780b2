//! Core MCP server implementation for Google Slides.

use std::sync::Arc;

use log::{debug, info};
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
    handler::server::wrapper::Parameters, model::*, service::RequestContext, tool, tool_handler,
    tool_router, transport::stdio,
};

use slides_core::IdGenerator;

use crate::resources;
use crate::service::SlidesService;
use crate::tools::{
    ToolContext, add_comment, add_image, add_shape, add_table, add_text_box, add_video,
    apply_theme, create_slide, delete_comment, delete_object, duplicate_slide, insert_text,
    list_comments, list_page_objects, list_slides, merge_table_cells, modify_table_structure,
    reply_to_comment, replace_text, resolve_comment, respond, search_text, set_background,
    set_table_cell,
};

/// Error type for MCP server operations.
#[derive(Debug)]
pub enum ServerError {
    /// MCP protocol error
    Mcp(String),
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerError::Mcp(msg) => write!(f, "MCP error: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

/// MCP server for Google Slides.
///
/// Exposes presentation editing as MCP tools, and the outlines of
/// presentations pinned at startup as MCP resources.
#[derive(Clone)]
pub struct SlidesMcpServer {
    service: Arc<dyn SlidesService>,
    ids: Arc<dyn IdGenerator>,
    pinned: Vec<String>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<SlidesMcpServer>,
}

#[tool_router]
impl SlidesMcpServer {
    /// Create a new MCP server over the given service.
    ///
    /// `pinned` presentations are listed as resources.
    pub fn new(
        service: Arc<dyn SlidesService>,
        ids: Arc<dyn IdGenerator>,
        pinned: Vec<String>,
    ) -> Self {
        debug!("Creating MCP server with {} pinned presentation(s)", pinned.len());
        Self {
            service,
            ids,
            pinned,
            tool_router: Self::tool_router(),
        }
    }

    fn context(&self) -> ToolContext<'_> {
        ToolContext::new(self.service.as_ref(), self.ids.as_ref())
    }

    #[tool(description = "List the slides of a presentation with their object IDs, 1-based positions, layout, element count and title text. Also reports the title and page size. Start here to discover slide IDs.")]
    async fn list_slides(
        &self,
        Parameters(params): Parameters<list_slides::ListSlidesParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: list_slides, presentation_id={}", params.presentation_id);
        Ok(respond(list_slides::execute(&self.context(), &params).await))
    }

    #[tool(description = "List the elements on one slide (by slide_index or slide_id) or on a layout or master page (by page_id). Returns object IDs, kinds, position and size in points, placeholder type and a text preview.")]
    async fn list_page_objects(
        &self,
        Parameters(params): Parameters<list_page_objects::ListPageObjectsParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: list_page_objects, presentation_id={}", params.presentation_id);
        Ok(respond(list_page_objects::execute(&self.context(), &params).await))
    }

    #[tool(description = "Create a new slide with a predefined layout (BLANK, TITLE, TITLE_AND_BODY, TITLE_ONLY, SECTION_HEADER, ...). Inserts at a 1-based position or appends at the end.")]
    async fn create_slide(
        &self,
        Parameters(params): Parameters<create_slide::CreateSlideParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: create_slide, layout={:?}, position={:?}", params.layout, params.position);
        Ok(respond(create_slide::execute(&self.context(), &params).await))
    }

    #[tool(description = "Duplicate a slide, identified by 1-based slide_index or slide_id. The copy goes right after the original unless a 1-based target position is given.")]
    async fn duplicate_slide(
        &self,
        Parameters(params): Parameters<duplicate_slide::DuplicateSlideParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: duplicate_slide, slide_index={:?}, slide_id={:?}",
            params.slide_index, params.slide_id
        );
        Ok(respond(duplicate_slide::execute(&self.context(), &params).await))
    }

    #[tool(description = "Delete a slide or a page element (shape, image, table, video, ...) by object ID. Layouts and masters cannot be deleted.")]
    async fn delete_object(
        &self,
        Parameters(params): Parameters<delete_object::DeleteObjectParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: delete_object, object_id={}", params.object_id);
        Ok(respond(delete_object::execute(&self.context(), &params).await))
    }

    #[tool(description = "Add a shape to a slide. Shape types are case-insensitive (rectangle, round_rectangle, ellipse, star_5, right_arrow, ...). Position and size are in points. Optional hex fill and outline colors and text.")]
    async fn add_shape(
        &self,
        Parameters(params): Parameters<add_shape::AddShapeParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: add_shape, shape_type={:?}", params.shape_type);
        Ok(respond(add_shape::execute(&self.context(), &params).await))
    }

    #[tool(description = "Add a text box to a slide with optional font size, font family, hex color, bold, italic and alignment (left, center, right, justified). Position and size are in points.")]
    async fn add_text_box(
        &self,
        Parameters(params): Parameters<add_text_box::AddTextBoxParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: add_text_box, slide_index={:?}, slide_id={:?}",
            params.slide_index, params.slide_id
        );
        Ok(respond(add_text_box::execute(&self.context(), &params).await))
    }

    #[tool(description = "Add an image to a slide from a publicly reachable http(s) URL. Position and size are in points.")]
    async fn add_image(
        &self,
        Parameters(params): Parameters<add_image::AddImageParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: add_image, image_url={}", params.image_url);
        Ok(respond(add_image::execute(&self.context(), &params).await))
    }

    #[tool(description = "Add a YouTube or Google Drive video to a slide, from a video URL or a video_id plus source. Position and size are in points.")]
    async fn add_video(
        &self,
        Parameters(params): Parameters<add_video::AddVideoParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: add_video, video_url={:?}, video_id={:?}", params.video_url, params.video_id);
        Ok(respond(add_video::execute(&self.context(), &params).await))
    }

    #[tool(description = "Insert text into an existing shape or table cell (row and column are 0-based). insertion_index is a UTF-16 offset and defaults to the end of the existing text. Set replace=true to replace all existing text.")]
    async fn insert_text(
        &self,
        Parameters(params): Parameters<insert_text::InsertTextParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: insert_text, object_id={}, replace={}", params.object_id, params.replace);
        Ok(respond(insert_text::execute(&self.context(), &params).await))
    }

    #[tool(description = "Search for text across slides, including table cells and grouped shapes. Case-insensitive by default. Returns the slide, object, UTF-16 start and end indexes and a snippet for each match.")]
    async fn search_text(
        &self,
        Parameters(params): Parameters<search_text::SearchTextParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: search_text, query={}", params.query);
        Ok(respond(search_text::execute(&self.context(), &params).await))
    }

    #[tool(description = "Replace every occurrence of some text, optionally only on given slides (1-based slide_indexes or slide_ids). Case-sensitive by default. Returns the number of occurrences changed.")]
    async fn replace_text(
        &self,
        Parameters(params): Parameters<replace_text::ReplaceTextParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: replace_text, find={}", params.find);
        Ok(respond(replace_text::execute(&self.context(), &params).await))
    }

    #[tool(description = "Add a table with the given number of rows and columns to a slide, optionally filled with initial data given row by row.")]
    async fn add_table(
        &self,
        Parameters(params): Parameters<add_table::AddTableParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: add_table, rows={}, columns={}", params.rows, params.columns);
        Ok(respond(add_table::execute(&self.context(), &params).await))
    }

    #[tool(description = "Insert or delete table rows or columns. operation is insert_rows, insert_columns, delete_rows or delete_columns; index is 0-based; inserts go after the index unless position is 'before'.")]
    async fn modify_table_structure(
        &self,
        Parameters(params): Parameters<modify_table_structure::ModifyTableStructureParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: modify_table_structure, table_id={}, operation={}",
            params.table_id, params.operation
        );
        Ok(respond(modify_table_structure::execute(&self.context(), &params).await))
    }

    #[tool(description = "Replace the text of a table cell and/or set its hex background color. Row and column are 0-based.")]
    async fn set_table_cell(
        &self,
        Parameters(params): Parameters<set_table_cell::SetTableCellParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: set_table_cell, table_id={}, row={}, column={}",
            params.table_id, params.row, params.column
        );
        Ok(respond(set_table_cell::execute(&self.context(), &params).await))
    }

    #[tool(description = "Merge a rectangular range of table cells starting at a 0-based row and column, or unmerge it with unmerge=true.")]
    async fn merge_table_cells(
        &self,
        Parameters(params): Parameters<merge_table_cells::MergeTableCellsParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: merge_table_cells, table_id={}, unmerge={}", params.table_id, params.unmerge);
        Ok(respond(merge_table_cells::execute(&self.context(), &params).await))
    }

    #[tool(description = "Set the background of one slide or all slides (apply_to_all) to exactly one of: a solid hex color, an image URL, or a two-color gradient (gradient_start, gradient_end, gradient_angle in degrees where 0 is left to right and 90 top to bottom). Gradients are rendered to a PNG and uploaded to Drive.")]
    async fn set_background(
        &self,
        Parameters(params): Parameters<set_background::SetBackgroundParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: set_background, apply_to_all={}", params.apply_to_all);
        Ok(respond(set_background::execute(&self.context(), &params).await))
    }

    #[tool(description = "Apply a color theme to the presentation's masters. Presets: light, dark, ocean, forest, sunset, corporate, monochrome. custom_colors overrides individual theme colors such as ACCENT1 with hex values.")]
    async fn apply_theme(
        &self,
        Parameters(params): Parameters<apply_theme::ApplyThemeParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: apply_theme, theme={:?}", params.theme);
        Ok(respond(apply_theme::execute(&self.context(), &params).await))
    }

    #[tool(description = "List comments on the presentation with their replies. Resolved comments are skipped unless include_resolved is true.")]
    async fn list_comments(
        &self,
        Parameters(params): Parameters<list_comments::ListCommentsParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: list_comments, include_resolved={}", params.include_resolved);
        Ok(respond(list_comments::execute(&self.context(), &params).await))
    }

    #[tool(description = "Add a comment to the presentation, optionally quoting some of its text.")]
    async fn add_comment(
        &self,
        Parameters(params): Parameters<add_comment::AddCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: add_comment, presentation_id={}", params.presentation_id);
        Ok(respond(add_comment::execute(&self.context(), &params).await))
    }

    #[tool(description = "Reply to an existing comment.")]
    async fn reply_to_comment(
        &self,
        Parameters(params): Parameters<reply_to_comment::ReplyToCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: reply_to_comment, comment_id={}", params.comment_id);
        Ok(respond(reply_to_comment::execute(&self.context(), &params).await))
    }

    #[tool(description = "Mark a comment as resolved, with an optional closing message.")]
    async fn resolve_comment(
        &self,
        Parameters(params): Parameters<resolve_comment::ResolveCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: resolve_comment, comment_id={}", params.comment_id);
        Ok(respond(resolve_comment::execute(&self.context(), &params).await))
    }

    #[tool(description = "Delete a comment.")]
    async fn delete_comment(
        &self,
        Parameters(params): Parameters<delete_comment::DeleteCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: delete_comment, comment_id={}", params.comment_id);
        Ok(respond(delete_comment::execute(&self.context(), &params).await))
    }

    /// Serve MCP over stdio (stdin/stdout).
    ///
    /// This method blocks until the connection is closed.
    pub async fn serve_stdio(self) -> Result<(), ServerError> {
        info!("Starting Slides MCP server on stdio");
        let service = self
            .serve(stdio())
            .await
            .map_err(|e| ServerError::Mcp(format!("Failed to start server: {}", e)))?;
        service
            .waiting()
            .await
            .map_err(|e| ServerError::Mcp(format!("Server error: {}", e)))?;
        Ok(())
    }
}

#[tool_handler]
impl ServerHandler for SlidesMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Google Slides MCP server. Use list_slides and list_page_objects to discover \
                 slide and object IDs, then the editing tools to change the presentation. \
                 Slide positions start at 1, table rows and columns start at 0, sizes are in points."
                    .into(),
            ),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        debug!("Listing resources");
        let resources = self
            .pinned
            .iter()
            .map(|id| resources::presentation_resource(id))
            .collect();

        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let uri = &request.uri;
        debug!("Reading resource: {}", uri);

        let presentation_id = resources::parse_presentation_uri(uri).ok_or_else(|| {
            McpError::resource_not_found(format!("Invalid resource URI: {}", uri), None)
        })?;

        let presentation = self
            .context()
            .presentation(&presentation_id)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))?;
        let json = serde_json::to_string_pretty(&list_slides::outline(&presentation))
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(json, uri.clone())],
        })
    }
}
