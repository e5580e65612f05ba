//! `/api/materials`, including PDF upload.

use serde::Serialize;
use std::fmt::Display;

use crate::request::PdfUpload;
use crate::resources::courses;
use crate::{ApiClient, ApiError, ApiRequest, ApiResponse};

pub fn get_all() -> ApiRequest {
    ApiRequest::get("/api/materials")
}

pub fn get_by_id(id: impl Display) -> ApiRequest {
    ApiRequest::get(format!("/api/materials/{id}"))
}

/// Same request as [`courses::get_materials`]
pub fn get_by_course(course_id: impl Display) -> ApiRequest {
    courses::get_materials(course_id)
}

/// Multipart upload; the JSON content type is replaced by `multipart/form-data`
pub fn upload_pdf(upload: PdfUpload) -> ApiRequest {
    ApiRequest::post_multipart("/api/materials/upload-pdf", upload)
}

pub fn create<T: Serialize + ?Sized>(data: &T) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/api/materials", data)
}

pub fn delete(id: impl Display) -> ApiRequest {
    ApiRequest::delete(format!("/api/materials/{id}"))
}

/// Material calls on a shared client
#[derive(Debug, Clone, Copy)]
pub struct MaterialsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> MaterialsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<ApiResponse, ApiError> {
        self.client.execute(get_all()).await
    }

    pub async fn get_by_id(&self, id: impl Display) -> Result<ApiResponse, ApiError> {
        self.client.execute(get_by_id(id)).await
    }

    pub async fn get_by_course(&self, course_id: impl Display) -> Result<ApiResponse, ApiError> {
        self.client.execute(get_by_course(course_id)).await
    }

    pub async fn upload_pdf(&self, upload: PdfUpload) -> Result<ApiResponse, ApiError> {
        tracing::info!(
            file = %upload.file_name,
            bytes = upload.bytes.len(),
            course_id = %upload.course_id,
            "Uploading PDF material"
        );
        self.client.execute(upload_pdf(upload)).await
    }

    pub async fn create<T: Serialize + ?Sized>(&self, data: &T) -> Result<ApiResponse, ApiError> {
        self.client.execute(create(data)?).await
    }

    pub async fn delete(&self, id: impl Display) -> Result<ApiResponse, ApiError> {
        self.client.execute(delete(id)).await
    }
}
