//! MCP server for editing Google Slides presentations.
//!
//! Tools run against a [`service::SlidesService`]; [`google::GoogleClient`]
//! implements it over the Slides and Drive REST APIs.

pub mod errors;
pub mod google;
pub mod requests;
pub mod resources;
mod server;
pub mod service;
pub mod tools;

pub use server::{ServerError, SlidesMcpServer};
