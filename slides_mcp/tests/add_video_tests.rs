mod helpers;

use helpers::{MockService, PRESENTATION_ID, get_json, get_text, ids, is_error};
use slides_mcp::tools::add_video::{AddVideoParams, execute};
use slides_mcp::tools::{ToolContext, respond};

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_youtube_video_from_url() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);
        let params = AddVideoParams {
            presentation_id: PRESENTATION_ID.to_string(),
            slide_index: Some(1),
            video_url: Some("https://youtu.be/dQw4w9WgXcQ".to_string()),
            ..Default::default()
        };

        let json = get_json(&respond(execute(&ctx, &params).await));

        assert_eq!(json["source"], "YOUTUBE");
        assert_eq!(json["video_id"], "dQw4w9WgXcQ");
        let create = &service.single_batch()[0]["createVideo"];
        assert_eq!(create["objectId"], "video_1");
        assert_eq!(create["source"], "YOUTUBE");
        assert_eq!(create["id"], "dQw4w9WgXcQ");
    }

    #[tokio::test]
    async fn test_add_drive_video_by_id() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);
        let params = AddVideoParams {
            presentation_id: PRESENTATION_ID.to_string(),
            slide_index: Some(1),
            video_id: Some("1AbC".to_string()),
            source: Some("drive".to_string()),
            ..Default::default()
        };

        let json = get_json(&respond(execute(&ctx, &params).await));
        assert_eq!(json["source"], "DRIVE");
    }

    #[tokio::test]
    async fn test_add_video_rejects_unknown_url() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);
        let params = AddVideoParams {
            presentation_id: PRESENTATION_ID.to_string(),
            slide_index: Some(1),
            video_url: Some("https://vimeo.com/1".to_string()),
            ..Default::default()
        };
        let result = respond(execute(&ctx, &params).await);
        assert!(is_error(&result));
        assert!(get_text(&result).contains("Could not extract"));

        let no_source = AddVideoParams {
            presentation_id: PRESENTATION_ID.to_string(),
            slide_index: Some(1),
            video_id: Some("abc".to_string()),
            ..Default::default()
        };
        let result = respond(execute(&ctx, &no_source).await);
        assert_eq!(
            get_text(&result),
            "Invalid argument: source is required when video_id is given"
        );
    }
}
