//! The remote presentation/file service the tools talk to.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use slides_core::model::Presentation;

use crate::errors::ServiceError;

/// Response of `presentations.batchUpdate`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateResponse {
    #[serde(default)]
    pub presentation_id: String,
    /// One entry per request, in request order. Requests without a reply
    /// produce an empty object.
    #[serde(default)]
    pub replies: Vec<serde_json::Value>,
}

impl BatchUpdateResponse {
    /// Object ID created by the reply at `index` for a request of `kind`
    /// (e.g. `"createShape"`, `"duplicateObject"`).
    pub fn created_object_id(&self, index: usize, kind: &str) -> Option<String> {
        self.replies
            .get(index)?
            .get(kind)?
            .get("objectId")?
            .as_str()
            .map(str::to_string)
    }
}

/// A file stored in Drive.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub web_content_link: Option<String>,
}

impl UploadedFile {
    /// URL Slides can fetch the file from once it is shared.
    pub fn content_url(&self) -> String {
        self.web_content_link.clone().unwrap_or_else(|| {
            format!("https://drive.google.com/uc?export=download&id={}", self.id)
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default)]
    pub anchor: Option<String>,
    #[serde(default)]
    pub quoted_file_content: Option<QuotedContent>,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotedContent {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub action: Option<String>,
}

/// Input for a new comment.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quoted_file_content: Option<QuotedContent>,
}

/// Input for a reply. `action` is `"resolve"` or `"reopen"` when set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewReply {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// Operations the tools need from Google Slides and Drive.
#[async_trait]
pub trait SlidesService: Send + Sync {
    async fn get_presentation(&self, presentation_id: &str) -> Result<Presentation, ServiceError>;

    async fn batch_update(
        &self,
        presentation_id: &str,
        requests: Vec<serde_json::Value>,
    ) -> Result<BatchUpdateResponse, ServiceError>;

    async fn upload_file(
        &self,
        name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedFile, ServiceError>;

    /// Grants `anyone` read access so Slides can fetch the file by URL.
    async fn share_publicly(&self, file_id: &str) -> Result<(), ServiceError>;

    async fn list_comments(
        &self,
        file_id: &str,
        include_deleted: bool,
    ) -> Result<Vec<Comment>, ServiceError>;

    async fn create_comment(
        &self,
        file_id: &str,
        comment: NewComment,
    ) -> Result<Comment, ServiceError>;

    async fn create_reply(
        &self,
        file_id: &str,
        comment_id: &str,
        reply: NewReply,
    ) -> Result<Reply, ServiceError>;

    async fn delete_comment(&self, file_id: &str, comment_id: &str) -> Result<(), ServiceError>;
}
