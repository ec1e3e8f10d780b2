//! Styled terminal output. Everything goes to stderr, since stdout carries
//! the MCP protocol when serving.

use console::{Term, style};

pub fn success(message: &str) {
    let _ = Term::stderr().write_line(&format!("{} {}", style("✓").green().bold(), message));
}

pub fn info(message: &str) {
    let _ = Term::stderr().write_line(&format!("{} {}", style("•").cyan(), message));
}

pub fn error(message: &str) {
    let _ = Term::stderr().write_line(&format!(
        "{} {}",
        style("✗").red().bold(),
        style(message).red()
    ));
}

pub fn error_with_details(message: &str, details: &str) {
    error(message);
    let _ = Term::stderr().write_line(&format!("  {}", style(details).dim()));
}

/// Whether stderr is an interactive terminal.
pub fn is_console() -> bool {
    Term::stderr().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_write_without_a_terminal() {
        info("Using Slides API at http://localhost");
        success("done");
        error_with_details("failed", "details");
    }
}
