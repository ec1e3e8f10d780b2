mod cli;
mod commands;
mod errors;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use log::debug;

use cli::{SlidesCli, SlidesCliCommand};

fn main() -> ExitCode {
    let cli = SlidesCli::parse();
    initialize_logging(cli.verbose);
    debug!("Running command: {:?}", command_name(&cli.command));

    let result = match cli.command {
        SlidesCliCommand::Mcp {
            access_token,
            slides_api_url,
            drive_api_url,
            drive_upload_url,
            presentations,
        } => commands::serve(commands::McpOptions {
            access_token,
            slides_api_url,
            drive_api_url,
            drive_upload_url,
            presentations,
        }),
        SlidesCliCommand::Gradient {
            start,
            end,
            angle,
            output,
        } => commands::write_gradient(&start, &end, angle, &output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("Command failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn command_name(command: &SlidesCliCommand) -> &'static str {
    match command {
        SlidesCliCommand::Mcp { .. } => "mcp",
        SlidesCliCommand::Gradient { .. } => "gradient",
    }
}

/// Logs go to stderr; stdout is reserved for the MCP protocol.
fn initialize_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).target(env_logger::Target::Stderr);
    if ui::is_console() {
        builder.format_timestamp_secs();
    } else {
        builder.format_timestamp_millis();
    }
    builder.parse_default_env().init();
}
