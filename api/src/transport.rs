//! Byte-level request/response model and the pluggable [`Transport`] seam.
//!
//! DESIGN
//! ======
//! `AdminApi` builds an [`ApiRequest`] from an endpoint and hands it to a
//! transport. Transports own base-URL joining and body encoding, nothing
//! else: no retries, no timeouts, no auth headers.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use crate::error::ApiError;

/// HTTP verbs used by the back-end surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Upper-case verb as it appears on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file attached to a multipart request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Build an upload, defaulting the content type to `application/octet-stream`.
    #[must_use]
    pub fn new(file_name: impl Into<String>, content_type: &str, bytes: Vec<u8>) -> Self {
        let content_type = if content_type.trim().is_empty() {
            "application/octet-stream".to_owned()
        } else {
            content_type.to_owned()
        };
        Self { file_name: file_name.into(), content_type, bytes }
    }
}

/// Value of a single multipart field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartValue {
    Text(String),
    File(Upload),
}

/// One named field of a multipart form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormPart {
    pub name: String,
    pub value: PartValue,
}

impl FormPart {
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: PartValue::Text(value.into()) }
    }

    #[must_use]
    pub fn file(name: impl Into<String>, upload: Upload) -> Self {
        Self { name: name.into(), value: PartValue::File(upload) }
    }

    /// Text content, or `None` for file parts.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            PartValue::Text(text) => Some(text),
            PartValue::File(_) => None,
        }
    }
}

/// Request payload.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<FormPart>),
}

/// A fully resolved request relative to the API base.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path under the API base, always starting with `/`.
    pub path: String,
    pub body: RequestBody,
}

/// Raw response as returned by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends one request and returns the raw response.
///
/// Implementations must not interpret the status code; `AdminApi` does that.
/// The trait is `?Send` because browser fetch futures are not `Send`.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Send `request` and wait for the full response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no HTTP response was received, or
    /// [`ApiError::Encode`] when the body cannot be encoded.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Join a base URL and an endpoint path with exactly one slash between them.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
