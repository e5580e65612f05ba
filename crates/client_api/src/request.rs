//! Request and response values exchanged with the backend.

use reqwest::header::HeaderMap;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::ApiError;

const PDF_MIME: &str = "application/pdf";

/// A fully described HTTP call: method, path, query and body.
///
/// Resource groups build one of these per operation and hand it to
/// [`crate::ApiClient::execute`]. Keeping the description separate from
/// sending makes the wire contract checkable without a server.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

/// Request payload
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(PdfUpload),
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>, body: RequestBody) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path, RequestBody::Empty)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path, RequestBody::Empty)
    }

    /// POST with a JSON body
    pub fn post<T: Serialize + ?Sized>(path: impl Into<String>, body: &T) -> Result<Self, ApiError> {
        Ok(Self::new(
            Method::POST,
            path,
            RequestBody::Json(serde_json::to_value(body)?),
        ))
    }

    /// PUT with a JSON body
    pub fn put<T: Serialize + ?Sized>(path: impl Into<String>, body: &T) -> Result<Self, ApiError> {
        Ok(Self::new(
            Method::PUT,
            path,
            RequestBody::Json(serde_json::to_value(body)?),
        ))
    }

    /// POST with a multipart form body
    pub fn post_multipart(path: impl Into<String>, upload: PdfUpload) -> Self {
        Self::new(Method::POST, path, RequestBody::Multipart(upload))
    }

    /// Append a query parameter
    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// JSON body, if any
    pub fn json_body(&self) -> Option<&Value> {
        match &self.body {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// Fields of the `upload-pdf` multipart form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub title: String,
    pub course_id: String,
    pub author: Option<String>,
}

impl PdfUpload {
    pub fn new(
        file_name: impl Into<String>,
        bytes: Vec<u8>,
        title: impl Into<String>,
        course_id: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            title: title.into(),
            course_id: course_id.into(),
            author: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Read a PDF from disk. The file name part is taken from `path`.
    pub async fn from_path(
        path: &Path,
        title: impl Into<String>,
        course_id: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| ApiError::InvalidUpload(format!("{} has no file name", path.display())))?;
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ApiError::InvalidUpload(format!("{}: {}", path.display(), e)))?;

        Ok(Self::new(file_name, bytes, title, course_id))
    }

    /// Convert into a `multipart/form-data` body
    pub(crate) fn into_form(self) -> Result<Form, ApiError> {
        let file = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(PDF_MIME)?;

        let mut form = Form::new()
            .part("file", file)
            .text("title", self.title)
            .text("course_id", self.course_id);
        if let Some(author) = self.author {
            form = form.text("author", author);
        }
        Ok(form)
    }
}

/// A successful (2xx) backend answer, body parsed but otherwise untouched
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Parsed JSON body; `Null` when empty, a string when not JSON
    pub data: Value,
}

impl ApiResponse {
    /// Decode the body into a typed model
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(T::deserialize(&self.data)?)
    }

    /// Decode the body, consuming the response
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        Ok(serde_json::from_value(self.data)?)
    }
}

/// Parse a raw body the way the browser client does: JSON when possible,
/// text otherwise.
pub(crate) fn parse_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
