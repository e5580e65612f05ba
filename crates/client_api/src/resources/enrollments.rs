//! `/api/enrollments`.
//!
//! Creating an enrollment for a student is usually done through
//! [`crate::resources::CoursesApi::enroll`]; this group adds listing and
//! removal.

use serde::Serialize;
use std::fmt::Display;

use crate::{ApiClient, ApiError, ApiRequest, ApiResponse};

pub fn get_all() -> ApiRequest {
    ApiRequest::get("/api/enrollments")
}

pub fn create<T: Serialize + ?Sized>(data: &T) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/api/enrollments", data)
}

pub fn delete(id: impl Display) -> ApiRequest {
    ApiRequest::delete(format!("/api/enrollments/{id}"))
}

#[derive(Debug, Clone, Copy)]
pub struct EnrollmentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> EnrollmentsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<ApiResponse, ApiError> {
        self.client.execute(get_all()).await
    }

    pub async fn create<T: Serialize + ?Sized>(&self, data: &T) -> Result<ApiResponse, ApiError> {
        self.client.execute(create(data)?).await
    }

    pub async fn delete(&self, id: impl Display) -> Result<ApiResponse, ApiError> {
        self.client.execute(delete(id)).await
    }
}
