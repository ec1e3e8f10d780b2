//! Resource handling for the Slides MCP server.
//!
//! Presentations pinned at startup are exposed as resources:
//! - `slides://presentation/{id}` - the presentation outline as JSON

use rmcp::model::{AnnotateAble, RawResource, Resource};

/// The URI scheme for Slides resources.
pub const SCHEME: &str = "slides";

/// The resource type for presentations.
pub const PRESENTATION_TYPE: &str = "presentation";

/// Creates a URI for a presentation.
pub fn presentation_uri(presentation_id: &str) -> String {
    format!("{}://{}/{}", SCHEME, PRESENTATION_TYPE, presentation_id)
}

/// Parses a presentation URI and returns the presentation ID.
///
/// Returns `None` if the URI doesn't match the expected format.
pub fn parse_presentation_uri(uri: &str) -> Option<String> {
    let prefix = format!("{}://{}/", SCHEME, PRESENTATION_TYPE);
    uri.strip_prefix(&prefix)
        .filter(|id| !id.is_empty() && !id.contains('/'))
        .map(str::to_string)
}

/// Creates a Resource for a pinned presentation.
pub fn presentation_resource(presentation_id: &str) -> Resource {
    RawResource {
        uri: presentation_uri(presentation_id),
        name: presentation_id.to_string(),
        title: None,
        description: Some(format!("Outline of presentation {}", presentation_id)),
        mime_type: Some("application/json".to_string()),
        size: None,
        icons: None,
        meta: None,
    }
    .no_annotation()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_uri() {
        assert_eq!(presentation_uri("abc123"), "slides://presentation/abc123");
    }

    #[test]
    fn test_parse_presentation_uri() {
        assert_eq!(
            parse_presentation_uri("slides://presentation/abc123"),
            Some("abc123".to_string())
        );
        assert_eq!(parse_presentation_uri("slides://presentation/"), None);
        assert_eq!(parse_presentation_uri("slides://presentation/a/b"), None);
        assert_eq!(parse_presentation_uri("file://presentation/abc"), None);
    }
}
