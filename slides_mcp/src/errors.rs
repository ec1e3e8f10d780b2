//! Error types shared by the remote service and every tool.

use std::error::Error;
use std::fmt;

use slides_core::image::ImageError;
use slides_core::model::LookupError;

/// Failure reported by the remote Slides/Drive service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceError {
    /// HTTP status, when the failure came from an HTTP response.
    pub status: Option<u16>,
    pub message: String,
}

impl ServiceError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        ServiceError {
            status,
            message: message.into(),
        }
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::new(Some(status), message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(None, message)
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "Google API returned status {}: {}", status, self.message),
            None => write!(f, "Google API request failed: {}", self.message),
        }
    }
}

impl Error for ServiceError {}

/// The closed set of failure categories a tool can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Forbidden,
    InvalidArgument,
    RemoteApiFailure,
    Unsupported,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::NotFound => "Not found",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::InvalidArgument => "Invalid argument",
            ErrorKind::RemoteApiFailure => "Remote API failure",
            ErrorKind::Unsupported => "Unsupported",
        };
        f.write_str(name)
    }
}

/// Error returned by tool handlers.
#[derive(Debug)]
pub struct ToolError {
    pub kind: ErrorKind,
    pub detail: String,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl ToolError {
    pub fn new(kind: ErrorKind, detail: impl Into<String>) -> Self {
        ToolError {
            kind,
            detail: detail.into(),
            source: None,
        }
    }

    pub fn invalid(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, detail)
    }

    pub fn unsupported(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unsupported, detail)
    }

    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Classifies a remote failure, prefixing the detail with what was being attempted.
    pub fn remote(context: &str, err: ServiceError) -> Self {
        let kind = classify_remote(&err);
        let detail = match kind {
            ErrorKind::NotFound => {
                format!("{}: the presentation, file or object does not exist", context)
            }
            ErrorKind::Forbidden => format!("{}: access denied by Google", context),
            _ => format!("{}: {}", context, err.message),
        };
        Self::new(kind, detail).with_source(err)
    }
}

fn classify_remote(err: &ServiceError) -> ErrorKind {
    match err.status {
        Some(404) => return ErrorKind::NotFound,
        Some(403) | Some(401) => return ErrorKind::Forbidden,
        Some(400) => return ErrorKind::InvalidArgument,
        _ => {}
    }

    let message = err.message.to_lowercase();
    if message.contains("404") || message.contains("not found") {
        ErrorKind::NotFound
    } else if message.contains("403")
        || message.contains("forbidden")
        || message.contains("permission")
    {
        ErrorKind::Forbidden
    } else {
        ErrorKind::RemoteApiFailure
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.detail)
    }
}

impl Error for ToolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn Error + 'static))
    }
}

impl From<LookupError> for ToolError {
    fn from(err: LookupError) -> Self {
        let kind = match err {
            LookupError::MissingSelector | LookupError::SlideIndexOutOfRange { .. } => {
                ErrorKind::InvalidArgument
            }
            LookupError::SlideNotFound(_) | LookupError::ObjectNotFound(_) => ErrorKind::NotFound,
        };
        ToolError::new(kind, err.to_string()).with_source(err)
    }
}

impl From<ImageError> for ToolError {
    fn from(err: ImageError) -> Self {
        let kind = match err {
            ImageError::InvalidColor(_) => ErrorKind::InvalidArgument,
            ImageError::Encoding(_) => ErrorKind::Unsupported,
        };
        ToolError::new(kind, err.to_string()).with_source(err)
    }
}
