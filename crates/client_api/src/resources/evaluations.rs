//! `/api/evaluations`: quality reviews of uploaded materials.

use serde::Serialize;
use std::fmt::Display;

use crate::{ApiClient, ApiError, ApiRequest, ApiResponse};

/// Materials still waiting for a review, optionally for one course.
/// A `None` limit keeps the backend's default.
pub fn pending(limit: Option<u32>, course_id: Option<&str>) -> ApiRequest {
    let mut request = ApiRequest::get("/api/evaluations/pending");
    if let Some(limit) = limit {
        request = request.with_query("limit", limit);
    }
    if let Some(course_id) = course_id {
        request = request.with_query("course_id", course_id);
    }
    request
}

pub fn create<T: Serialize + ?Sized>(data: &T) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/api/evaluations", data)
}

pub fn get_by_material(material_id: impl Display) -> ApiRequest {
    ApiRequest::get(format!("/api/evaluations/material/{material_id}"))
}

pub fn stats() -> ApiRequest {
    ApiRequest::get("/api/evaluations/stats")
}

pub fn delete(id: impl Display) -> ApiRequest {
    ApiRequest::delete(format!("/api/evaluations/{id}"))
}

#[derive(Debug, Clone, Copy)]
pub struct EvaluationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> EvaluationsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn pending(
        &self,
        limit: Option<u32>,
        course_id: Option<&str>,
    ) -> Result<ApiResponse, ApiError> {
        self.client.execute(pending(limit, course_id)).await
    }

    pub async fn create<T: Serialize + ?Sized>(&self, data: &T) -> Result<ApiResponse, ApiError> {
        self.client.execute(create(data)?).await
    }

    pub async fn get_by_material(&self, material_id: impl Display) -> Result<ApiResponse, ApiError> {
        self.client.execute(get_by_material(material_id)).await
    }

    pub async fn stats(&self) -> Result<ApiResponse, ApiError> {
        self.client.execute(stats()).await
    }

    pub async fn delete(&self, id: impl Display) -> Result<ApiResponse, ApiError> {
        self.client.execute(delete(id)).await
    }
}
