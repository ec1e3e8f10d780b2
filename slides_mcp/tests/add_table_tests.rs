mod helpers;

use helpers::{MockService, PRESENTATION_ID, get_json, get_text, ids, is_error};
use slides_mcp::tools::add_table::{AddTableParams, execute};
use slides_mcp::tools::{ToolContext, respond};

#[cfg(test)]
mod tests {
    use super::*;

    fn params(rows: usize, columns: usize, data: Vec<Vec<&str>>) -> AddTableParams {
        AddTableParams {
            presentation_id: PRESENTATION_ID.to_string(),
            slide_index: Some(3),
            rows,
            columns,
            data: data
                .into_iter()
                .map(|row| row.into_iter().map(str::to_string).collect())
                .collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_add_table_with_data() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);

        let json = get_json(&respond(
            execute(&ctx, &params(2, 3, vec![vec!["a", "b"], vec!["", "c"]])).await,
        ));

        assert_eq!(json["object_id"], "table_1");
        assert_eq!(json["cells_filled"], 3);

        let batch = service.single_batch();
        assert_eq!(batch.len(), 4);
        assert_eq!(batch[0]["createTable"]["rows"], 2);
        assert_eq!(batch[0]["createTable"]["columns"], 3);
        assert_eq!(batch[0]["createTable"]["elementProperties"]["pageObjectId"], "slide_c");

        let last = &batch[3]["insertText"];
        assert_eq!(last["objectId"], "table_1");
        assert_eq!(last["text"], "c");
        assert_eq!(last["cellLocation"]["rowIndex"], 1);
        assert_eq!(last["cellLocation"]["columnIndex"], 1);
    }

    #[tokio::test]
    async fn test_add_table_validation() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);

        let result = respond(execute(&ctx, &params(0, 2, vec![])).await);
        assert!(is_error(&result));
        assert_eq!(get_text(&result), "Invalid argument: rows must be between 1 and 25, got 0");

        let result = respond(execute(&ctx, &params(1, 1, vec![vec!["a", "b"]])).await);
        assert!(get_text(&result).contains("data row 0 has 2 value(s)"));

        let result = respond(execute(&ctx, &params(1, 1, vec![vec!["a"], vec!["b"]])).await);
        assert!(get_text(&result).contains("data has 2 row(s)"));

        assert!(service.batches().is_empty());
    }
}
