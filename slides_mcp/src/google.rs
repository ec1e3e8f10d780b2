//! `SlidesService` backed by the Google Slides v1 and Drive v3 REST APIs.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use slides_core::model::Presentation;

use crate::errors::ServiceError;
use crate::service::{
    BatchUpdateResponse, Comment, NewComment, NewReply, Reply, SlidesService, UploadedFile,
};

pub const SLIDES_API_BASE: &str = "https://slides.googleapis.com/v1";
pub const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";
pub const DRIVE_UPLOAD_BASE: &str = "https://www.googleapis.com/upload/drive/v3";

const COMMENT_FIELDS: &str = "id,content,author(displayName,emailAddress),createdTime,modifiedTime,resolved,anchor,quotedFileContent,replies(id,content,author(displayName,emailAddress),createdTime,action)";
const REPLY_FIELDS: &str = "id,content,author(displayName,emailAddress),createdTime,action";
const MULTIPART_BOUNDARY: &str = "slides_mcp_upload_boundary";

/// Endpoints used by [`GoogleClient`].
#[derive(Debug, Clone)]
pub struct GoogleEndpoints {
    pub slides: String,
    pub drive: String,
    pub drive_upload: String,
}

impl Default for GoogleEndpoints {
    fn default() -> Self {
        GoogleEndpoints {
            slides: SLIDES_API_BASE.to_string(),
            drive: DRIVE_API_BASE.to_string(),
            drive_upload: DRIVE_UPLOAD_BASE.to_string(),
        }
    }
}

/// HTTP client authenticated with an OAuth2 access token.
#[derive(Clone)]
pub struct GoogleClient {
    http: Client,
    access_token: String,
    endpoints: GoogleEndpoints,
}

impl GoogleClient {
    pub fn new(access_token: impl Into<String>, endpoints: GoogleEndpoints) -> Self {
        GoogleClient {
            http: Client::new(),
            access_token: access_token.into(),
            endpoints,
        }
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        debug!("Google API: {} {}", method, url);
        self.http
            .request(method, url)
            .bearer_auth(&self.access_token)
    }

    /// `{slides}/presentations/{id}` plus an optional `:method` suffix.
    fn presentation_url(&self, presentation_id: &str, suffix: &str) -> String {
        format!(
            "{}/presentations/{}{}",
            self.endpoints.slides,
            urlencoding::encode(presentation_id),
            suffix
        )
    }

    /// `{drive}/files/{id}` followed by further path segments, each encoded.
    fn drive_file_url(&self, file_id: &str, segments: &[&str]) -> String {
        let mut url = format!("{}/files/{}", self.endpoints.drive, urlencoding::encode(file_id));
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ServiceError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ServiceError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::http(status.as_u16(), api_error_message(&body)));
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ServiceError> {
        self.send(builder)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ServiceError::transport(format!("Failed to parse response: {}", e)))
    }
}

/// Pulls `error.message` out of a Google error body, falling back to the raw text.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

/// Builds a `multipart/related` body: JSON metadata, then the raw file.
fn multipart_related(metadata: &serde_json::Value, mime_type: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(bytes.len() + 512);
    body.extend_from_slice(
        format!(
            "--{b}\r\nContent-Type: application/json; charset=UTF-8\r\n\r\n{meta}\r\n--{b}\r\nContent-Type: {mime}\r\n\r\n",
            b = MULTIPART_BOUNDARY,
            meta = metadata,
            mime = mime_type
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());
    body
}

#[derive(serde::Deserialize)]
struct CommentList {
    #[serde(default)]
    comments: Vec<Comment>,
    #[serde(default, rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[async_trait]
impl SlidesService for GoogleClient {
    async fn get_presentation(&self, presentation_id: &str) -> Result<Presentation, ServiceError> {
        let url = self.presentation_url(presentation_id, "");
        self.send_json(self.request(Method::GET, &url)).await
    }

    async fn batch_update(
        &self,
        presentation_id: &str,
        requests: Vec<serde_json::Value>,
    ) -> Result<BatchUpdateResponse, ServiceError> {
        let url = self.presentation_url(presentation_id, ":batchUpdate");
        debug!("batchUpdate with {} request(s)", requests.len());
        let body = serde_json::json!({ "requests": requests });
        self.send_json(self.request(Method::POST, &url).json(&body))
            .await
    }

    async fn upload_file(
        &self,
        name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedFile, ServiceError> {
        let url = format!(
            "{}/files?uploadType=multipart&fields=id,name,webContentLink",
            self.endpoints.drive_upload
        );
        let metadata = serde_json::json!({ "name": name, "mimeType": mime_type });
        let body = multipart_related(&metadata, mime_type, &bytes);

        self.send_json(
            self.request(Method::POST, &url)
                .header(
                    reqwest::header::CONTENT_TYPE,
                    format!("multipart/related; boundary={}", MULTIPART_BOUNDARY),
                )
                .body(body),
        )
        .await
    }

    async fn share_publicly(&self, file_id: &str) -> Result<(), ServiceError> {
        let url = self.drive_file_url(file_id, &["permissions"]);
        let body = serde_json::json!({ "role": "reader", "type": "anyone" });
        self.send(self.request(Method::POST, &url).json(&body))
            .await
            .map(|_| ())
    }

    async fn list_comments(
        &self,
        file_id: &str,
        include_deleted: bool,
    ) -> Result<Vec<Comment>, ServiceError> {
        let url = self.drive_file_url(file_id, &["comments"]);
        let fields = format!("nextPageToken,comments({})", COMMENT_FIELDS);

        let mut comments = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut query = vec![
                ("fields", fields.clone()),
                ("pageSize", "100".to_string()),
                ("includeDeleted", include_deleted.to_string()),
            ];
            if let Some(token) = &page_token {
                query.push(("pageToken", token.clone()));
            }

            let page: CommentList = self
                .send_json(self.request(Method::GET, &url).query(&query))
                .await?;
            comments.extend(page.comments);

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }
        Ok(comments)
    }

    async fn create_comment(
        &self,
        file_id: &str,
        comment: NewComment,
    ) -> Result<Comment, ServiceError> {
        let url = self.drive_file_url(file_id, &["comments"]);
        self.send_json(
            self.request(Method::POST, &url)
                .query(&[("fields", COMMENT_FIELDS)])
                .json(&comment),
        )
        .await
    }

    async fn create_reply(
        &self,
        file_id: &str,
        comment_id: &str,
        reply: NewReply,
    ) -> Result<Reply, ServiceError> {
        let url = self.drive_file_url(file_id, &["comments", comment_id, "replies"]);
        self.send_json(
            self.request(Method::POST, &url)
                .query(&[("fields", REPLY_FIELDS)])
                .json(&reply),
        )
        .await
    }

    async fn delete_comment(&self, file_id: &str, comment_id: &str) -> Result<(), ServiceError> {
        let url = self.drive_file_url(file_id, &["comments", comment_id]);
        self.send(self.request(Method::DELETE, &url))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GoogleClient {
        GoogleClient::new(
            "token",
            GoogleEndpoints {
                slides: "http://slides.test/v1".to_string(),
                drive: "http://drive.test/v3".to_string(),
                drive_upload: "http://upload.test/v3".to_string(),
            },
        )
    }

    #[test]
    fn test_presentation_url_encodes_id() {
        let client = client();
        assert_eq!(
            client.presentation_url("abc-_.~123", ":batchUpdate"),
            "http://slides.test/v1/presentations/abc-_.~123:batchUpdate"
        );
        assert_eq!(
            client.presentation_url("a b/c", ""),
            "http://slides.test/v1/presentations/a%20b%2Fc"
        );
    }

    #[test]
    fn test_drive_file_url_encodes_each_segment() {
        let client = client();
        assert_eq!(
            client.drive_file_url("file 1", &["comments", "c/2", "replies"]),
            "http://drive.test/v3/files/file%201/comments/c%2F2/replies"
        );
        assert_eq!(client.drive_file_url("f", &[]), "http://drive.test/v3/files/f");
    }

    #[test]
    fn test_api_error_message() {
        let body = r#"{"error":{"code":404,"message":"Requested entity was not found.","status":"NOT_FOUND"}}"#;
        assert_eq!(api_error_message(body), "Requested entity was not found.");
        assert_eq!(api_error_message(" plain text "), "plain text");
    }

    #[test]
    fn test_multipart_related_layout() {
        let metadata = serde_json::json!({ "name": "g.png" });
        let body = multipart_related(&metadata, "image/png", &[1, 2, 3]);
        let text = String::from_utf8_lossy(&body);

        assert!(text.starts_with("--slides_mcp_upload_boundary\r\n"));
        assert!(text.contains(r#"{"name":"g.png"}"#));
        assert!(text.contains("Content-Type: image/png\r\n\r\n"));
        assert!(text.ends_with("\r\n--slides_mcp_upload_boundary--\r\n"));

        let marker = b"image/png\r\n\r\n";
        let at = body.windows(marker.len()).position(|w| w == marker).unwrap() + marker.len();
        assert_eq!(&body[at..at + 3], &[1, 2, 3]);
    }
}
