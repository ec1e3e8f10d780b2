mod helpers;

use helpers::{MockService, PRESENTATION_ID, get_json, get_text, ids, is_error};
use slides_mcp::tools::create_slide::{CreateSlideParams, execute};
use slides_mcp::tools::{ToolContext, respond};

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_slide_appends_blank() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);
        let params = CreateSlideParams {
            presentation_id: PRESENTATION_ID.to_string(),
            ..Default::default()
        };

        let json = get_json(&respond(execute(&ctx, &params).await));

        assert_eq!(json["slide_id"], "slide_1");
        assert_eq!(json["layout"], "BLANK");
        assert_eq!(json["position"], 4);

        let batch = service.single_batch();
        let request = &batch[0]["createSlide"];
        assert_eq!(request["objectId"], "slide_1");
        assert_eq!(request["slideLayoutReference"]["predefinedLayout"], "BLANK");
        assert_eq!(request["insertionIndex"], 3);
    }

    #[tokio::test]
    async fn test_create_slide_layout_is_case_insensitive() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);
        let params = CreateSlideParams {
            presentation_id: PRESENTATION_ID.to_string(),
            layout: Some("title and body".to_string()),
            position: Some(1),
        };

        let json = get_json(&respond(execute(&ctx, &params).await));

        assert_eq!(json["layout"], "TITLE_AND_BODY");
        let batch = service.single_batch();
        assert_eq!(batch[0]["createSlide"]["insertionIndex"], 0);
    }

    #[tokio::test]
    async fn test_create_slide_rejects_bad_input() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);

        let bad_layout = CreateSlideParams {
            presentation_id: PRESENTATION_ID.to_string(),
            layout: Some("fancy".to_string()),
            ..Default::default()
        };
        let result = respond(execute(&ctx, &bad_layout).await);
        assert!(is_error(&result));
        assert!(get_text(&result).starts_with("Invalid argument: Invalid layout 'fancy'"));

        let bad_position = CreateSlideParams {
            presentation_id: PRESENTATION_ID.to_string(),
            position: Some(5),
            ..Default::default()
        };
        let result = respond(execute(&ctx, &bad_position).await);
        assert!(get_text(&result).contains("Valid positions are 1 to 4"));
        assert!(service.batches().is_empty());
    }
}
