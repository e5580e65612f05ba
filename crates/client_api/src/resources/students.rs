//! `/api/students`: full CRUD.

use serde::Serialize;
use std::fmt::Display;

use crate::{ApiClient, ApiError, ApiRequest, ApiResponse};

pub fn get_all() -> ApiRequest {
    ApiRequest::get("/api/students")
}

pub fn create<T: Serialize + ?Sized>(data: &T) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/api/students", data)
}

pub fn get_by_id(id: impl Display) -> ApiRequest {
    ApiRequest::get(format!("/api/students/{id}"))
}

pub fn update<T: Serialize + ?Sized>(id: impl Display, data: &T) -> Result<ApiRequest, ApiError> {
    ApiRequest::put(format!("/api/students/{id}"), data)
}

pub fn delete(id: impl Display) -> ApiRequest {
    ApiRequest::delete(format!("/api/students/{id}"))
}

#[derive(Debug, Clone, Copy)]
pub struct StudentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> StudentsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<ApiResponse, ApiError> {
        self.client.execute(get_all()).await
    }

    pub async fn create<T: Serialize + ?Sized>(&self, data: &T) -> Result<ApiResponse, ApiError> {
        self.client.execute(create(data)?).await
    }

    pub async fn get_by_id(&self, id: impl Display) -> Result<ApiResponse, ApiError> {
        self.client.execute(get_by_id(id)).await
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
