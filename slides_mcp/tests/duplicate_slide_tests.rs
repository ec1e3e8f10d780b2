mod helpers;

use helpers::{MockService, PRESENTATION_ID, get_json, get_text, ids, is_error};
use slides_mcp::tools::duplicate_slide::{DuplicateSlideParams, execute};
use slides_mcp::tools::{ToolContext, respond};

#[cfg(test)]
mod tests {
    use super::*;

    fn params(slide_index: usize, position: Option<usize>) -> DuplicateSlideParams {
        DuplicateSlideParams {
            presentation_id: PRESENTATION_ID.to_string(),
            slide_index: Some(slide_index),
            position,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_duplicate_in_place() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);

        let json = get_json(&respond(execute(&ctx, &params(1, None)).await));

        assert_eq!(json["source_slide_id"], "slide_a");
        assert_eq!(json["new_slide_id"], "slide_a_copy_1");
        assert_eq!(json["position"], 2);

        let batch = service.single_batch();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0]["duplicateObject"]["objectId"], "slide_a");
        assert_eq!(batch[0]["duplicateObject"]["objectIds"]["slide_a"], "slide_a_copy_1");
    }

    #[tokio::test]
    async fn test_duplicate_moves_copy_later() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);

        get_json(&respond(execute(&ctx, &params(1, Some(3))).await));

        let batch = service.single_batch();
        let moved = &batch[1]["updateSlidesPosition"];
        assert_eq!(moved["slideObjectIds"][0], "slide_a_copy_1");
        // Arrangement before the move is a, copy, b, c; landing third means before c.
        assert_eq!(moved["insertionIndex"], 3);
    }

    #[tokio::test]
    async fn test_duplicate_moves_copy_to_front() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);

        get_json(&respond(execute(&ctx, &params(3, Some(1))).await));

        let batch = service.single_batch();
        assert_eq!(batch[1]["updateSlidesPosition"]["insertionIndex"], 0);
    }

    #[tokio::test]
    async fn test_duplicate_rejects_bad_position() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);

        let result = respond(execute(&ctx, &params(1, Some(5))).await);

        assert!(is_error(&result));
        assert!(get_text(&result).contains("Valid positions are 1 to 4"));
    }

    #[tokio::test]
    async fn test_duplicate_unknown_slide_id() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);
        let params = DuplicateSlideParams {
            presentation_id: PRESENTATION_ID.to_string(),
            slide_id: Some("slide_z".to_string()),
            ..Default::default()
        };

        let result = respond(execute(&ctx, &params).await);

        assert_eq!(get_text(&result), "Not found: Slide 'slide_z' not found");
    }
}
