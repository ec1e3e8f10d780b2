mod helpers;

use helpers::{MockService, PRESENTATION_ID, get_json, get_text, ids, is_error};
use slides_mcp::tools::add_text_box::{AddTextBoxParams, execute};
use slides_mcp::tools::{ToolContext, respond};

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_styled_text_box() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);
        let params = AddTextBoxParams {
            presentation_id: PRESENTATION_ID.to_string(),
            slide_index: Some(3),
            text: "Hello".to_string(),
            font_size: Some(24.0),
            bold: Some(true),
            color: Some("#00ff00".to_string()),
            alignment: Some("right".to_string()),
            ..Default::default()
        };

        let json = get_json(&respond(execute(&ctx, &params).await));
        assert_eq!(json["object_id"], "textbox_1");
        assert_eq!(json["slide_id"], "slide_c");

        let batch = service.single_batch();
        assert_eq!(batch.len(), 4);
        assert_eq!(batch[0]["createShape"]["shapeType"], "TEXT_BOX");
        assert_eq!(batch[1]["insertText"]["text"], "Hello");
        assert_eq!(batch[1]["insertText"]["insertionIndex"], 0);

        let style = &batch[2]["updateTextStyle"];
        assert_eq!(style["fields"], "bold,fontSize,foregroundColor");
        assert_eq!(style["style"]["fontSize"]["magnitude"], 24.0);
        assert_eq!(style["style"]["fontSize"]["unit"], "PT");

        assert_eq!(batch[3]["updateParagraphStyle"]["style"]["alignment"], "END");
    }

    #[tokio::test]
    async fn test_plain_text_box_has_no_style_requests() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);
        let params = AddTextBoxParams {
            presentation_id: PRESENTATION_ID.to_string(),
            slide_index: Some(1),
            text: "Plain".to_string(),
            ..Default::default()
        };

        get_json(&respond(execute(&ctx, &params).await));
        assert_eq!(service.single_batch().len(), 2);
    }

    #[tokio::test]
    async fn test_text_box_validation() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);

        let empty = AddTextBoxParams {
            presentation_id: PRESENTATION_ID.to_string(),
            slide_index: Some(1),
            ..Default::default()
        };
        let result = respond(execute(&ctx, &empty).await);
        assert!(is_error(&result));
        assert_eq!(get_text(&result), "Invalid argument: text is required");

        let bad_alignment = AddTextBoxParams {
            presentation_id: PRESENTATION_ID.to_string(),
            slide_index: Some(1),
            text: "x".to_string(),
            alignment: Some("middle".to_string()),
            ..Default::default()
        };
        let result = respond(execute(&ctx, &bad_alignment).await);
        assert!(get_text(&result).contains("Invalid alignment"));

        let bad_size = AddTextBoxParams {
            presentation_id: PRESENTATION_ID.to_string(),
            slide_index: Some(1),
            text: "x".to_string(),
            font_size: Some(0.0),
            ..Default::default()
        };
        assert!(is_error(&respond(execute(&ctx, &bad_size).await)));
    }
}
