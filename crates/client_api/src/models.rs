//! Typed request and response models.
//!
//! The client never requires these: every call accepts any `Serialize` body
//! and returns the raw JSON. They exist so callers can decode responses with
//! [`crate::ApiResponse::json`] and build payloads without hand-written JSON.
//! Fields the backend adds later land in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Enrollment status. Enrolling through the client always sends `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    #[default]
    Active,
    Inactive,
    Completed,
    Dropped,
}

/// Course as returned by `/api/courses`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: Value,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub syllabus: Option<String>,
    #[serde(default)]
    pub credits: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCreate {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syllabus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<i64>,
}

/// Partial course update; unset fields are left out of the body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syllabus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<i64>,
}

/// Uploaded course document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: Value,
    pub course_id: Value,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub processing_status: Option<String>,
    #[serde(default)]
    pub chunks_count: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialCreate {
    pub title: String,
    pub course_id: String,
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

impl MaterialCreate {
    /// A PDF material with only the required fields set
    pub fn pdf(title: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            course_id: course_id.into(),
            mime_type: "application/pdf".to_string(),
            author: None,
            file_url: None,
            raw_text: None,
        }
    }
}

/// Body of `POST /api/enrollments`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentCreate {
    pub student_id: String,
    pub course_id: String,
    pub status: EnrollmentStatus,
}

impl EnrollmentCreate {
    pub fn active(student_id: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            course_id: course_id.into(),
            status: EnrollmentStatus::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: Value,
    pub student_id: Value,
    pub course_id: Value,
    #[serde(default)]
    pub status: Option<EnrollmentStatus>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: Value,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub cohort: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentCreate {
    pub name: String,
    pub email: String,
    pub cohort: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cohort: Option<String>,
}

/// Body of `POST /api/rag/query`.
///
/// `course_id` and `material_id` are always serialised, as `null` when
/// unset, which the backend reads as "search all materials".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RagQuery {
    pub question: String,
    pub course_id: Option<String>,
    pub material_id: Option<String>,
    /// Number of chunks to retrieve; the backend default applies when unset
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub top_k: Option<u32>,
}

impl RagQuery {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            course_id: None,
            material_id: None,
            top_k: None,
        }
    }

    pub fn in_course(mut self, course_id: impl Into<String>) -> Self {
        self.course_id = Some(course_id.into());
        self
    }

    pub fn in_material(mut self, material_id: impl Into<String>) -> Self {
        self.material_id = Some(material_id.into());
        self
    }

    pub fn top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RagSource {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub page: Option<Value>,
}

/// Answer of `POST /api/rag/query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RagAnswer {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<RagSource>,
    #[serde(default)]
    pub chunks_used: Option<u32>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Answer of `GET /api/rag/health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RagHealth {
    pub status: String,
    #[serde(default)]
    pub total_chunks: Option<u64>,
    #[serde(default)]
    pub total_materials: Option<u64>,
    #[serde(default)]
    pub processed_materials: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RagHealth {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Answer of `GET /api/analytics/stats`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub courses: u64,
    #[serde(default)]
    pub students: u64,
    #[serde(default)]
    pub materials: u64,
    #[serde(default)]
    pub queries: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationCreate {
    pub material_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluated_by: Option<String>,
    /// Score from 0 to 10
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coherence_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure_score: Option<f64>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub id: Value,
    pub material_id: Value,
    pub score: f64,
    #[serde(default)]
    pub coherence_score: Option<f64>,
    #[serde(default)]
    pub structure_score: Option<f64>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationStats {
    pub total_evaluations: u64,
    pub avg_score: f64,
    pub total_pending: u64,
    pub evaluations_today: u64,
    #[serde(default)]
    pub avg_coherence: Option<f64>,
    #[serde(default)]
    pub avg_structure: Option<f64>,
}
