//! Immutable client configuration.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Url;
use std::time::Duration;

use crate::ApiError;

/// Origin the EduRAG backend listens on by default
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub(crate) const JSON_CONTENT_TYPE: &str = "application/json";
const DEFAULT_ACCEPT: &str = "application/json, text/plain, */*";

/// Configuration handed to [`crate::ApiClient::new`].
///
/// Built once and never mutated afterwards; every call made through the
/// client reads the same base URL, default headers and timeout.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ApiConfig {
    /// Create a configuration for `base_url`.
    ///
    /// The URL must be an absolute http(s) origin, optionally with a path
    /// prefix, and carry no query or fragment. A trailing slash is dropped.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        let parsed = Url::parse(&base_url)
            .map_err(|e| ApiError::InvalidConfig(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ApiError::InvalidConfig(format!(
                "{base_url}: expected an http(s) origin"
            )));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ApiError::InvalidConfig(format!(
                "{base_url}: base URL cannot carry a query or fragment"
            )));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        })
    }

    /// Set a per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Headers sent with every request unless the request sets its own.
    ///
    /// `Content-Type` defaults to JSON; multipart uploads replace it.
    pub fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(DEFAULT_ACCEPT));
        headers
    }

    /// Absolute URL for an API path plus optional query pairs.
    ///
    /// `path` is appended to the base URL's path; `?` and `#` inside it are
    /// escaped rather than starting a query or fragment.
    pub fn url_for(&self, path: &str, query: &[(String, String)]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::InvalidConfig(format!("{}: {e}", self.base_url)))?;
        let joined = format!("{}{}", url.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}
