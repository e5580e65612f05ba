//! # client_api
//!
//! REST client for the EduRAG backend.
//!
//! A single [`ApiClient`], built from an explicit [`ApiConfig`], serves a set
//! of resource groups. Every operation issues exactly one HTTP request and
//! hands back the response untouched; nothing is cached, retried or
//! deduplicated.
//!
//! ## Resource groups
//! - **courses**: list, get, materials of a course, enroll a student
//! - **materials**: list, get, by course, PDF upload (multipart), create, delete
//! - **rag**: question answering, health
//! - **analytics**: stats, detailed, course activity, student progress
//! - **students**: list, create, get, update, delete
//! - **enrollments**: list, create, delete
//! - **evaluations**: pending, create, by material, stats, delete
//!
//! ## Example
//!
//! ```no_run
//! use client_api::prelude::*;
//!
//! # async fn demo() -> Result<(), ApiError> {
//! let client = ApiClient::new(ApiConfig::default())?;
//! let answer = client.rag().query("What is a monad?", None, None).await?;
//! let answer: RagAnswer = answer.json()?;
//! println!("{}", answer.answer);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod request;
pub mod resources;

pub use client::ApiClient;
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use request::{ApiRequest, ApiResponse, PdfUpload, RequestBody};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::models::*;
    pub use crate::{ApiClient, ApiConfig, ApiError, ApiRequest, ApiResponse, PdfUpload};
}
