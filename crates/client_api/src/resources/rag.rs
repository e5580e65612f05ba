//! `/api/rag`: question answering over course materials.

use crate::models::RagQuery;
use crate::{ApiClient, ApiError, ApiRequest, ApiResponse};

/// Ask a question. Unset filters are sent as `null`, not left out.
pub fn query(
    question: impl Into<String>,
    course_id: Option<String>,
    material_id: Option<String>,
) -> Result<ApiRequest, ApiError> {
    query_with(&RagQuery {
        question: question.into(),
        course_id,
        material_id,
        top_k: None,
    })
}

pub fn query_with(query: &RagQuery) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/api/rag/query", query)
}

pub fn health() -> ApiRequest {
    ApiRequest::get("/api/rag/health")
}

/// RAG calls on a shared client
#[derive(Debug, Clone, Copy)]
pub struct RagApi<'a> {
    client: &'a ApiClient,
}

impl<'a> RagApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn query(
        &self,
        question: impl Into<String>,
        course_id: Option<String>,
        material_id: Option<String>,
    ) -> Result<ApiResponse, ApiError> {
        self.client
            .execute(query(question, course_id, material_id)?)
            .await
    }

    pub async fn query_with(&self, rag_query: &RagQuery) -> Result<ApiResponse, ApiError> {
        self.client.execute(query_with(rag_query)?).await
    }

    pub async fn health(&self) -> Result<ApiResponse, ApiError> {
        self.client.execute(health()).await
    }
}
