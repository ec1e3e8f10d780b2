//! MCP server command implementation.

use std::sync::Arc;

use log::debug;

use slides_core::TimestampIds;
use slides_mcp::SlidesMcpServer;
use slides_mcp::google::{GoogleClient, GoogleEndpoints};

use crate::errors::CliError;
use crate::ui;

/// Settings for the `mcp` command.
#[derive(Debug)]
pub struct McpOptions {
    pub access_token: String,
    pub slides_api_url: String,
    pub drive_api_url: String,
    pub drive_upload_url: String,
    pub presentations: Vec<String>,
}

/// Start the MCP server on stdio.
pub fn serve(options: McpOptions) -> Result<(), CliError> {
    if options.access_token.trim().is_empty() {
        ui::error_with_details(
            "Missing access token",
            "Pass --access-token or set GOOGLE_ACCESS_TOKEN",
        );
        return Err(CliError::InputError);
    }

    let endpoints = GoogleEndpoints {
        slides: options.slides_api_url.trim_end_matches('/').to_string(),
        drive: options.drive_api_url.trim_end_matches('/').to_string(),
        drive_upload: options.drive_upload_url.trim_end_matches('/').to_string(),
    };
    ui::info(&format!("Using Slides API at {}", endpoints.slides));
    debug!("Drive API at {}, uploads at {}", endpoints.drive, endpoints.drive_upload);

    let client = GoogleClient::new(options.access_token, endpoints);
    let server = SlidesMcpServer::new(
        Arc::new(client),
        Arc::new(TimestampIds::new()),
        options.presentations,
    );

    // Create a tokio runtime for the async MCP server
    let rt = tokio::runtime::Runtime::new().map_err(|e| {
        ui::error_with_details("Failed to create async runtime", &e.to_string());
        CliError::ServerError
    })?;

    rt.block_on(async {
        // Serve over stdio (blocks until connection closes)
        server.serve_stdio().await.map_err(|e| {
            ui::error_with_details("MCP server error", &e.to_string());
            CliError::ServerError
        })
    })
}
