//! `/api/courses` and course enrollment.

use serde::Serialize;
use std::fmt::Display;

use crate::models::EnrollmentCreate;
use crate::{ApiClient, ApiError, ApiRequest, ApiResponse};

pub fn get_all() -> ApiRequest {
    ApiRequest::get("/api/courses")
}

pub fn get_by_id(id: impl Display) -> ApiRequest {
    ApiRequest::get(format!("/api/courses/{id}"))
}

/// Materials attached to a course
pub fn get_materials(id: impl Display) -> ApiRequest {
    ApiRequest::get(format!("/api/courses/{id}/materials"))
}

/// Enroll a student. The status is always `"active"`.
pub fn enroll(student_id: impl Display, course_id: impl Display) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(
        "/api/enrollments",
        &EnrollmentCreate::active(student_id.to_string(), course_id.to_string()),
    )
}

pub fn create<T: Serialize + ?Sized>(data: &T) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/api/courses", data)
}

pub fn update<T: Serialize + ?Sized>(id: impl Display, data: &T) -> Result<ApiRequest, ApiError> {
    ApiRequest::put(format!("/api/courses/{id}"), data)
}

pub fn delete(id: impl Display) -> ApiRequest {
    ApiRequest::delete(format!("/api/courses/{id}"))
}

/// Course calls on a shared client
#[derive(Debug, Clone, Copy)]
pub struct CoursesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CoursesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<ApiResponse, ApiError> {
        self.client.execute(get_all()).await
    }

    pub async fn get_by_id(&self, id: impl Display) -> Result<ApiResponse, ApiError> {
        self.client.execute(get_by_id(id)).await
    }

    pub async fn get_materials(&self, id: impl Display) -> Result<ApiResponse, ApiError> {
        self.client.execute(get_materials(id)).await
    }

    pub async fn enroll(
        &self,
        student_id: impl Display,
        course_id: impl Display,
    ) -> Result<ApiResponse, ApiError> {
        self.client.execute(enroll(student_id, course_id)?).await
    }

    pub async fn create<T: Serialize + ?Sized>(&self, data: &T) -> Result<ApiResponse, ApiError> {
        self.client.execute(create(data)?).await
    }

    pub async fn update<T: Serialize + ?Sized>(
        &self,
        id: impl Display,
        data: &T,
    ) -> Result<ApiResponse, ApiError> {
        self.client.execute(update(id, data)?).await
    }

    pub async fn delete(&self, id: impl Display) -> Result<ApiResponse, ApiError> {
        self.client.execute(delete(id)).await
    }
}
