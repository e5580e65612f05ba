//! Resource groups.
//!
//! Each submodule covers one backend entity type. It exposes plain request
//! builders (`courses::get_all()` returns an [`crate::ApiRequest`]) and a
//! borrowed group type (`CoursesApi`) whose async methods send those requests
//! through the shared [`crate::ApiClient`].

pub mod analytics;
pub mod courses;
pub mod enrollments;
pub mod evaluations;
pub mod materials;
pub mod rag;
pub mod students;

pub use analytics::AnalyticsApi;
pub use courses::CoursesApi;
pub use enrollments::EnrollmentsApi;
pub use evaluations::EvaluationsApi;
pub use materials::MaterialsApi;
pub use rag::RagApi;
pub use students::StudentsApi;
