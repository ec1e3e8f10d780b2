mod helpers;

use helpers::{MockService, PRESENTATION_ID, get_json, get_text, ids, is_error};
use slides_mcp::tools::modify_table_structure::{ModifyTableStructureParams, execute};
use slides_mcp::tools::{ToolContext, respond};

#[cfg(test)]
mod tests {
    use super::*;

    fn params(operation: &str, index: usize) -> ModifyTableStructureParams {
        ModifyTableStructureParams {
            presentation_id: PRESENTATION_ID.to_string(),
            table_id: "table_b".to_string(),
            operation: operation.to_string(),
            index,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_insert_rows_after() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);
        let mut params = params("insert_rows", 0);
        params.count = Some(2);

        let json = get_json(&respond(execute(&ctx, &params).await));

        assert_eq!(json["operation"], "insert_rows");
        assert_eq!(json["rows"], 4);
        assert_eq!(json["columns"], 2);

        let request = &service.single_batch()[0]["insertTableRows"];
        assert_eq!(request["tableObjectId"], "table_b");
        assert_eq!(request["cellLocation"]["rowIndex"], 0);
        assert_eq!(request["insertBelow"], true);
        assert_eq!(request["number"], 2);
    }

    #[tokio::test]
    async fn test_insert_columns_before() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);
        let mut params = params("Insert-Columns", 1);
        params.position = Some("before".to_string());

        let json = get_json(&respond(execute(&ctx, &params).await));

        assert_eq!(json["columns"], 3);
        let request = &service.single_batch()[0]["insertTableColumns"];
        assert_eq!(request["cellLocation"]["columnIndex"], 1);
        assert_eq!(request["insertRight"], false);
    }

    #[tokio::test]
    async fn test_delete_column() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);

        let json = get_json(&respond(execute(&ctx, &params("delete_columns", 1)).await));

        assert_eq!(json["columns"], 1);
        let batch = service.single_batch();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0]["deleteTableColumn"]["cellLocation"]["columnIndex"], 1);
    }

    #[tokio::test]
    async fn test_structure_validation() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);

        let mut all_rows = params("delete_rows", 0);
        all_rows.count = Some(2);
        let result = respond(execute(&ctx, &all_rows).await);
        assert!(is_error(&result));
        assert!(get_text(&result).contains("Cannot delete every row"));

        let result = respond(execute(&ctx, &params("insert_rows", 5)).await);
        assert!(get_text(&result).contains("row index 5 is out of range"));

        let result = respond(execute(&ctx, &params("rotate", 0)).await);
        assert!(get_text(&result).contains("Invalid operation 'rotate'"));

        let mut not_table = params("insert_rows", 0);
        not_table.table_id = "body_a".to_string();
        let result = respond(execute(&ctx, &not_table).await);
        assert_eq!(get_text(&result), "Invalid argument: Object 'body_a' is not a table");

        assert!(service.batches().is_empty());
    }

    #[tokio::test]
    async fn test_huge_counts_are_rejected() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);

        let mut delete = params("delete_rows", 1);
        delete.count = Some(usize::MAX);
        let result = respond(execute(&ctx, &delete).await);
        assert!(is_error(&result));
        assert!(get_text(&result).contains("count must be between 1 and 25"));

        let mut insert = params("insert_columns", 1);
        insert.count = Some(usize::MAX);
        let result = respond(execute(&ctx, &insert).await);
        assert!(get_text(&result).contains("count must be between 1 and 25"));

        let mut past_end = params("delete_rows", 1);
        past_end.count = Some(25);
        let result = respond(execute(&ctx, &past_end).await);
        assert!(get_text(&result).contains("Cannot delete 25 row(s) starting at 1"));

        let result = respond(execute(&ctx, &params("insert_rows", usize::MAX)).await);
        assert!(get_text(&result).contains("out of range"));

        assert!(service.batches().is_empty());
    }

    #[tokio::test]
    async fn test_insert_reports_grown_size() {
        let service = MockService::new();
        let ids = ids();
        let ctx = ToolContext::new(&service, &ids);
        let mut params = params("insert_columns", 1);
        params.count = Some(25);

        let json = get_json(&respond(execute(&ctx, &params).await));

        assert_eq!(json["rows"], 2);
        assert_eq!(json["columns"], 27);
        assert_eq!(service.single_batch()[0]["insertTableColumns"]["number"], 25);
    }
}
