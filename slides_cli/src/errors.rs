use std::fmt;

/// Failure categories reported by CLI commands. Details are printed by the
/// command before it returns one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliError {
    InputError,
    FileError,
    ServerError,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InputError => write!(f, "Invalid input"),
            CliError::FileError => write!(f, "File error"),
            CliError::ServerError => write!(f, "Server error"),
        }
    }
}

impl std::error::Error for CliError {}
