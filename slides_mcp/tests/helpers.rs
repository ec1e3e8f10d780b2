//! Shared test helpers for slides_mcp tests.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use rmcp::model::{CallToolResult, RawContent};
use serde_json::{Value, json};

use slides_core::SequentialIds;
use slides_core::model::Presentation;
use slides_mcp::errors::ServiceError;
use slides_mcp::service::{
    BatchUpdateResponse, Comment, NewComment, NewReply, Reply, SlidesService, UploadedFile,
};

/// Extract the text content from a CallToolResult.
pub fn get_text(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1, "Expected exactly one content item");
    match &result.content[0].raw {
        RawContent::Text(text_content) => text_content.text.clone(),
        _ => panic!("Expected text content"),
    }
}

/// Check if the result is a success.
pub fn is_success(result: &CallToolResult) -> bool {
    result.is_error == Some(false)
}

/// Check if the result is an error.
pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error == Some(true)
}

/// Parse the JSON body of a successful result.
pub fn get_json(result: &CallToolResult) -> Value {
    assert!(is_success(result), "Expected success, got: {}", get_text(result));
    serde_json::from_str(&get_text(result)).expect("Tool output is not JSON")
}

/// Everything the mock has been asked to do.
#[derive(Default)]
pub struct Recorded {
    pub batches: Vec<Vec<Value>>,
    pub uploads: Vec<Upload>,
    pub shares: Vec<String>,
    pub new_comments: Vec<NewComment>,
    pub replies: Vec<(String, NewReply)>,
    pub deleted_comments: Vec<String>,
}

pub struct Upload {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// In-memory `SlidesService` serving a fixed presentation.
pub struct MockService {
    pub presentation: Presentation,
    pub comments: Vec<Comment>,
    pub failure: Option<ServiceError>,
    pub recorded: Mutex<Recorded>,
}

impl MockService {
    pub fn new() -> Self {
        MockService {
            presentation: fixture_presentation(),
            comments: fixture_comments(),
            failure: None,
            recorded: Mutex::new(Recorded::default()),
        }
    }

    /// A service whose every call fails with `error`.
    pub fn failing(error: ServiceError) -> Self {
        MockService {
            failure: Some(error),
            ..Self::new()
        }
    }

    pub fn batches(&self) -> Vec<Vec<Value>> {
        self.recorded.lock().unwrap().batches.clone()
    }

    /// Requests of the only batch sent.
    pub fn single_batch(&self) -> Vec<Value> {
        let batches = self.batches();
        assert_eq!(batches.len(), 1, "Expected exactly one batchUpdate");
        batches.into_iter().next().unwrap()
    }

    fn check(&self) -> Result<(), ServiceError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// Reply a real batchUpdate would give for `request`.
fn reply_for(request: &Value) -> Value {
    const CREATES: &[&str] = &[
        "createSlide",
        "createShape",
        "createImage",
        "createVideo",
        "createTable",
        "duplicateObject",
    ];
    for kind in CREATES {
        if let Some(body) = request.get(*kind) {
            let id = match *kind {
                "duplicateObject" => body["objectIds"]
                    .as_object()
                    .and_then(|m| m.values().next().cloned())
                    .unwrap_or(Value::Null),
                _ => body["objectId"].clone(),
            };
            return json!({ *kind: { "objectId": id } });
        }
    }
    if request.get("replaceAllText").is_some() {
        return json!({ "replaceAllText": { "occurrencesChanged": 3 } });
    }
    json!({})
}

#[async_trait]
impl SlidesService for MockService {
    async fn get_presentation(&self, presentation_id: &str) -> Result<Presentation, ServiceError> {
        self.check()?;
        if presentation_id != self.presentation.presentation_id {
            return Err(ServiceError::http(404, "Requested entity was not found."));
        }
        Ok(self.presentation.clone())
    }

    async fn batch_update(
        &self,
        presentation_id: &str,
        requests: Vec<Value>,
    ) -> Result<BatchUpdateResponse, ServiceError> {
        self.check()?;
        let replies = requests.iter().map(reply_for).collect();
        self.recorded.lock().unwrap().batches.push(requests);
        Ok(BatchUpdateResponse {
            presentation_id: presentation_id.to_string(),
            replies,
        })
    }

    async fn upload_file(
        &self,
        name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedFile, ServiceError> {
        self.check()?;
        self.recorded.lock().unwrap().uploads.push(Upload {
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            bytes,
        });
        Ok(UploadedFile {
            id: "file_1".to_string(),
            name: Some(name.to_string()),
            web_content_link: None,
        })
    }

    async fn share_publicly(&self, file_id: &str) -> Result<(), ServiceError> {
        self.check()?;
        self.recorded.lock().unwrap().shares.push(file_id.to_string());
        Ok(())
    }

    async fn list_comments(
        &self,
        _file_id: &str,
        _include_deleted: bool,
    ) -> Result<Vec<Comment>, ServiceError> {
        self.check()?;
        Ok(self.comments.clone())
    }

    async fn create_comment(
        &self,
        _file_id: &str,
        comment: NewComment,
    ) -> Result<Comment, ServiceError> {
        self.check()?;
        let created = Comment {
            id: "comment_new".to_string(),
            content: comment.content.clone(),
            quoted_file_content: comment.quoted_file_content.clone(),
            ..Default::default()
        };
        self.recorded.lock().unwrap().new_comments.push(comment);
        Ok(created)
    }

    async fn create_reply(
        &self,
        _file_id: &str,
        comment_id: &str,
        reply: NewReply,
    ) -> Result<Reply, ServiceError> {
        self.check()?;
        if !self.comments.iter().any(|c| c.id == comment_id) {
            return Err(ServiceError::http(404, "Comment not found"));
        }
        let created = Reply {
            id: "reply_new".to_string(),
            content: reply.content.clone(),
            action: reply.action.clone(),
            ..Default::default()
        };
        self.recorded
            .lock()
            .unwrap()
            .replies
            .push((comment_id.to_string(), reply));
        Ok(created)
    }

    async fn delete_comment(&self, _file_id: &str, comment_id: &str) -> Result<(), ServiceError> {
        self.check()?;
        if !self.comments.iter().any(|c| c.id == comment_id) {
            return Err(ServiceError::http(404, "Comment not found"));
        }
        self.recorded
            .lock()
            .unwrap()
            .deleted_comments
            .push(comment_id.to_string());
        Ok(())
    }
}

pub fn ids() -> SequentialIds {
    SequentialIds::new()
}

pub const PRESENTATION_ID: &str = "pres_1";

fn text(content: &str) -> Value {
    json!({ "textElements": [{ "startIndex": 0, "textRun": { "content": content } }] })
}

fn shape_element(id: &str, content: &str, x_emu: f64, y_emu: f64) -> Value {
    json!({
        "objectId": id,
        "size": {
            "width": { "magnitude": 3_810_000.0, "unit": "EMU" },
            "height": { "magnitude": 635_000.0, "unit": "EMU" }
        },
        "transform": { "scaleX": 1.0, "scaleY": 1.0, "translateX": x_emu, "translateY": y_emu, "unit": "EMU" },
        "shape": { "shapeType": "TEXT_BOX", "text": text(content) }
    })
}

/// Three slides: a title slide, a slide with a table and a group, and a blank one.
pub fn fixture_presentation() -> Presentation {
    serde_json::from_value(json!({
        "presentationId": PRESENTATION_ID,
        "title": "Quarterly Review",
        "revisionId": "rev_1",
        "pageSize": {
            "width": { "magnitude": 9_144_000.0, "unit": "EMU" },
            "height": { "magnitude": 5_143_500.0, "unit": "EMU" }
        },
        "slides": [
            {
                "objectId": "slide_a",
                "slideProperties": { "layoutObjectId": "layout_title", "masterObjectId": "master_1" },
                "pageElements": [
                    {
                        "objectId": "title_a",
                        "shape": {
                            "shapeType": "TEXT_BOX",
                            "placeholder": { "type": "TITLE" },
                            "text": text("Quarterly Review\n")
                        }
                    },
                    shape_element("body_a", "Revenue grew 20% 😀 revenue\n", 1_270_000.0, 2_540_000.0)
                ]
            },
            {
                "objectId": "slide_b",
                "slideProperties": { "layoutObjectId": "layout_blank", "masterObjectId": "master_1" },
                "pageElements": [
                    {
                        "objectId": "table_b",
                        "table": {
                            "rows": 2,
                            "columns": 2,
                            "tableRows": [
                                { "tableCells": [{ "text": text("Region\n") }, { "text": text("Revenue\n") }] },
                                { "tableCells": [{ "text": text("North\n") }, {}] }
                            ]
                        }
                    },
                    {
                        "objectId": "group_b",
                        "elementGroup": {
                            "children": [shape_element("note_b", "Revenue note\n", 0.0, 0.0)]
                        }
                    },
                    {
                        "objectId": "image_b",
                        "image": { "contentUrl": "https://example.com/a.png" }
                    }
                ]
            },
            {
                "objectId": "slide_c",
                "slideProperties": { "layoutObjectId": "layout_blank", "masterObjectId": "master_1" }
            }
        ],
        "layouts": [
            {
                "objectId": "layout_title",
                "layoutProperties": { "name": "TITLE", "masterObjectId": "master_1" },
                "pageElements": [
                    {
                        "objectId": "layout_title_ph",
                        "shape": { "placeholder": { "type": "TITLE" } }
                    }
                ]
            },
            { "objectId": "layout_blank", "layoutProperties": { "name": "BLANK" } }
        ],
        "masters": [
            { "objectId": "master_1" }
        ]
    }))
    .expect("fixture presentation")
}

pub fn fixture_comments() -> Vec<Comment> {
    serde_json::from_value(json!([
        {
            "id": "comment_1",
            "content": "Check these numbers",
            "author": { "displayName": "Ada" },
            "createdTime": "2024-03-01T12:30:00Z",
            "resolved": false,
            "quotedFileContent": { "value": "Revenue grew 20%" },
            "replies": [
                { "id": "reply_1", "content": "Done", "author": { "emailAddress": "bob@example.com" } }
            ]
        },
        {
            "id": "comment_2",
            "content": "Typo on slide 3",
            "resolved": true
        }
    ]))
    .expect("fixture comments")
}
