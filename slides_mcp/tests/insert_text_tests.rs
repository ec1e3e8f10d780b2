mod helpers;

use helpers::{MockService, PRESENTATION_ID, get_json, get_text, ids, is_error};
use slides_mcp::tools::insert_text::{InsertTextParams, execute};
use slides_mcp::tools::{ToolContext, respond};

#[cfg(test)]
mod tests {
    use super::*;

    fn params(object_id: &str, text: &str) -> InsertTextParams {
        InsertTextParams {
            presentation_id: PRESENTATION_ID.to_string(),
            object_id: object_id.to_string(),
            text: text.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_insert_appends_by_default() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);

        let json = get_json(&respond(execute(&ctx, &params("body_a", "!")).await));

        // "Revenue grew 20% 😀 revenue" is 27 UTF-16 units; the emoji counts twice.
        assert_eq!(json["insertion_index"], 27);
        let batch = service.single_batch();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0]["insertText"]["insertionIndex"], 27);
        assert!(batch[0]["insertText"].get("cellLocation").is_none());
    }

    #[tokio::test]
    async fn test_replace_existing_text() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);
        let mut params = params("body_a", "New body");
        params.replace = true;

        let json = get_json(&respond(execute(&ctx, &params).await));

        assert_eq!(json["replaced"], true);
        let batch = service.single_batch();
        assert_eq!(batch[0]["deleteText"]["textRange"]["type"], "ALL");
        assert_eq!(batch[1]["insertText"]["insertionIndex"], 0);
    }

    #[tokio::test]
    async fn test_replace_empty_cell_skips_delete() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);
        let mut params = params("table_b", "42");
        params.row = Some(1);
        params.column = Some(1);
        params.replace = true;

        get_json(&respond(execute(&ctx, &params).await));

        let batch = service.single_batch();
        assert_eq!(batch.len(), 1);
        let cell = &batch[0]["insertText"]["cellLocation"];
        assert_eq!(cell["rowIndex"], 1);
        assert_eq!(cell["columnIndex"], 1);
    }

    #[tokio::test]
    async fn test_insert_errors() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);

        let result = respond(execute(&ctx, &params("table_b", "x")).await);
        assert!(is_error(&result));
        assert!(get_text(&result).contains("row and column are required"));

        let mut outside = params("table_b", "x");
        outside.row = Some(2);
        outside.column = Some(0);
        let result = respond(execute(&ctx, &outside).await);
        assert!(get_text(&result).contains("outside table 'table_b'"));

        let result = respond(execute(&ctx, &params("image_b", "x")).await);
        assert!(get_text(&result).contains("cannot hold text"));

        let mut past_end = params("body_a", "x");
        past_end.insertion_index = Some(100);
        let result = respond(execute(&ctx, &past_end).await);
        assert!(get_text(&result).contains("past the end of the text"));

        assert!(service.batches().is_empty());
    }
}
