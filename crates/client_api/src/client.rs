//! The shared HTTP client and the resource-group accessors.

use std::sync::Arc;

use crate::request::{parse_body, ApiRequest, ApiResponse, RequestBody};
use crate::resources::{
    AnalyticsApi, CoursesApi, EnrollmentsApi, EvaluationsApi, MaterialsApi, RagApi, StudentsApi,
};
use crate::{ApiConfig, ApiError};

/// API client for the EduRAG backend.
///
/// Cloning is cheap: clones share the connection pool and configuration.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Arc<ApiConfig>,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client from an explicit configuration
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().default_headers(config.default_headers());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            config: Arc::new(config),
            http: builder.build()?,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn courses(&self) -> CoursesApi<'_> {
        CoursesApi::new(self)
    }

    pub fn materials(&self) -> MaterialsApi<'_> {
        MaterialsApi::new(self)
    }

    pub fn rag(&self) -> RagApi<'_> {
        RagApi::new(self)
    }

    pub fn analytics(&self) -> AnalyticsApi<'_> {
        AnalyticsApi::new(self)
    }

    pub fn students(&self) -> StudentsApi<'_> {
        StudentsApi::new(self)
    }

    pub fn enrollments(&self) -> EnrollmentsApi<'_> {
        EnrollmentsApi::new(self)
    }

    pub fn evaluations(&self) -> EvaluationsApi<'_> {
        EvaluationsApi::new(self)
    }

    /// Send exactly one HTTP request and return the parsed answer.
    ///
    /// Non-2xx answers become [`ApiError::Status`] with the original status
    /// and body. Nothing is retried.
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.config.url_for(&request.path, &request.query)?;
        tracing::debug!(method = %request.method, path = %request.path, "Sending API request");

        let builder = self.http.request(request.method.clone(), url);
        let builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(upload) => builder.multipart(upload.into_form()?),
        };

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(method = %request.method, path = %request.path, error = %e, "API request failed");
            ApiError::Transport(e)
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;
        let data = parse_body(&bytes);

        if !status.is_success() {
            tracing::warn!(
                method = %request.method,
                path = %request.path,
                status = %status,
                "API returned an error status"
            );
            return Err(ApiError::Status { status, body: data });
        }

        tracing::debug!(method = %request.method, path = %request.path, status = %status, "API request completed");
        Ok(ApiResponse {
            status,
            headers,
            data,
        })
    }

    /// Backend liveness check on `GET /health`.
    ///
    /// Any failure, including an unreachable backend, reads as `false`.
    pub async fn ping(&self) -> Result<bool, ApiError> {
        let url = self.config.url_for("/health", &[])?;
        match self.http.get(url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }
}
