use clap::{Parser, Subcommand};
use std::path::PathBuf;

use slides_mcp::google::{DRIVE_API_BASE, DRIVE_UPLOAD_BASE, SLIDES_API_BASE};

/// Defines the top-level interface for the Slides CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "slides")]
#[command(version, about = "Slides CLI: Google Slides editing over MCP.")]
pub struct SlidesCli {
    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: SlidesCliCommand,
}

/// Defines the available subcommands of the Slides CLI.
#[derive(Subcommand, Debug, PartialEq)]
pub enum SlidesCliCommand {
    /// Start the MCP server on stdio.
    Mcp {
        /// OAuth2 access token with Slides and Drive scopes.
        #[arg(long, env = "GOOGLE_ACCESS_TOKEN", hide_env_values = true)]
        access_token: String,
        /// Base URL of the Slides API.
        #[arg(long, env = "SLIDES_API_URL", default_value = SLIDES_API_BASE)]
        slides_api_url: String,
        /// Base URL of the Drive API.
        #[arg(long, env = "DRIVE_API_URL", default_value = DRIVE_API_BASE)]
        drive_api_url: String,
        /// Base URL of the Drive upload API.
        #[arg(long, env = "DRIVE_UPLOAD_URL", default_value = DRIVE_UPLOAD_BASE)]
        drive_upload_url: String,
        /// Presentation to expose as a resource (can be repeated).
        #[arg(long = "presentation", value_name = "ID")]
        presentations: Vec<String>,
    },
    /// Render a two-color gradient to a PNG file.
    Gradient {
        /// Start color as hex (e.g. "#FF0000").
        #[arg(long)]
        start: String,
        /// End color as hex (e.g. "#0000FF").
        #[arg(long)]
        end: String,
        /// Angle in degrees: 0 left to right, 90 top to bottom.
        #[arg(long, default_value_t = 90.0, allow_negative_numbers = true)]
        angle: f64,
        /// Output file.
        output: PathBuf,
    },
}
