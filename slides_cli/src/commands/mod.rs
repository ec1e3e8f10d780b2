mod gradient;
mod mcp;

pub use gradient::write_gradient;
pub use mcp::{McpOptions, serve};
