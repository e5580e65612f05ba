//! Wire Contract Tests
//!
//! Runs every client operation against a recording mock backend and checks
//! the method, path, headers and body that actually went over the wire.

mod common;

use axum::http::{Method, StatusCode};
use client_api::prelude::*;
use common::MockBackend;
use serde_json::json;
use tokio_test::assert_ok;

/// Every resource-group call maps to exactly one request with the documented method and path
#[tokio::test]
async fn test_every_call_hits_documented_endpoint() {
    let backend = MockBackend::start().await;
    let client = backend.client();
    let data = json!({"name": "x"});

    assert_ok!(client.courses().get_all().await);
    assert_ok!(client.courses().get_by_id(42).await);
    assert_ok!(client.courses().get_materials(42).await);
    assert_ok!(client.courses().enroll("s-1", "c-1").await);
    assert_ok!(client.materials().get_all().await);
    assert_ok!(client.materials().get_by_id("m-1").await);
    assert_ok!(client.materials().get_by_course("c-1").await);
    assert_ok!(client.materials().create(&data).await);
    assert_ok!(client.materials().delete("m-1").await);
    assert_ok!(client.rag().query("q", None, None).await);
    assert_ok!(client.rag().health().await);
    assert_ok!(client.analytics().get_stats().await);
    assert_ok!(client.analytics().get_detailed().await);
    assert_ok!(client.analytics().get_course_activity().await);
    assert_ok!(client.analytics().get_student_progress().await);
    assert_ok!(client.students().get_all().await);
    assert_ok!(client.students().create(&data).await);
    assert_ok!(client.students().get_by_id(7).await);
    assert_ok!(client.students().update(7, &data).await);
    assert_ok!(client.students().delete(7).await);

    let expected = [
        (Method::GET, "/api/courses"),
        (Method::GET, "/api/courses/42"),
        (Method::GET, "/api/courses/42/materials"),
        (Method::POST, "/api/enrollments"),
        (Method::GET, "/api/materials"),
        (Method::GET, "/api/materials/m-1"),
        (Method::GET, "/api/courses/c-1/materials"),
        (Method::POST, "/api/materials"),
        (Method::DELETE, "/api/materials/m-1"),
        (Method::POST, "/api/rag/query"),
        (Method::GET, "/api/rag/health"),
        (Method::GET, "/api/analytics/stats"),
        (Method::GET, "/api/analytics/detailed"),
        (Method::GET, "/api/analytics/course-activity"),
        (Method::GET, "/api/analytics/student-progress"),
        (Method::GET, "/api/students"),
        (Method::POST, "/api/students"),
        (Method::GET, "/api/students/7"),
        (Method::PUT, "/api/students/7"),
        (Method::DELETE, "/api/students/7"),
    ];

    let recorded = backend.requests();
    assert_eq!(recorded.len(), expected.len());
    for (request, (method, path)) in recorded.iter().zip(expected.iter()) {
        assert_eq!(&request.method, method, "method for {path}");
        assert_eq!(request.path, *path);
    }
}

/// Supplementary groups: enrollments, evaluations, course writes
#[tokio::test]
async fn test_supplementary_groups() {
    let backend = MockBackend::start().await;
    let client = backend.client();

    assert_ok!(client.enrollments().get_all().await);
    assert_ok!(client.enrollments().delete(12).await);
    assert_ok!(client.evaluations().pending(Some(5), Some("c-9")).await);
    assert_ok!(client.evaluations().get_by_material("m-3").await);
    assert_ok!(client.evaluations().stats().await);
    assert_ok!(client.evaluations().delete("e-1").await);
    assert_ok!(
        client
            .courses()
            .update("c-1", &CourseUpdate {
                credits: Some(4),
                ..Default::default()
            })
            .await
    );

    let recorded = backend.requests();
    assert_eq!(recorded[0].path, "/api/enrollments");
    assert_eq!(recorded[1].method, Method::DELETE);
    assert_eq!(recorded[1].path, "/api/enrollments/12");
    assert_eq!(recorded[2].path, "/api/evaluations/pending");
    assert_eq!(recorded[2].query.as_deref(), Some("limit=5&course_id=c-9"));
    assert_eq!(recorded[3].path, "/api/evaluations/material/m-3");
    assert_eq!(recorded[4].path, "/api/evaluations/stats");
    assert_eq!(recorded[5].path, "/api/evaluations/e-1");
    assert_eq!(recorded[6].method, Method::PUT);
    assert_eq!(recorded[6].json(), json!({"credits": 4}));
}

/// Enrolling always sends status "active", whatever the ids
#[tokio::test]
async fn test_enroll_sends_active_status() {
    let backend = MockBackend::start().await;
    let client = backend.client();

    for (student, course) in [("s-1", "c-1"), ("active", "inactive"), ("", "0")] {
        client.courses().enroll(student, course).await.unwrap();
        let body = backend.last().json();
        assert_eq!(body["status"], "active");
        assert_eq!(body["student_id"], student);
        assert_eq!(body["course_id"], course);
    }
}

/// A bare RAG question sends explicit nulls for both filters
#[tokio::test]
async fn test_rag_query_sends_null_filters() {
    let backend = MockBackend::start().await;
    let client = backend.client();

    client.rag().query("x", None, None).await.unwrap();

    let body = backend.last().json();
    assert_eq!(
        body,
        json!({"question": "x", "course_id": null, "material_id": null})
    );
    let object = body.as_object().unwrap();
    assert!(object.contains_key("course_id"));
    assert!(object.contains_key("material_id"));
}

/// top_k only appears when the caller sets it
#[tokio::test]
async fn test_rag_query_with_top_k() {
    let backend = MockBackend::start().await;
    let client = backend.client();

    let query = RagQuery::new("x").in_material("m-9").top_k(8);
    client.rag().query_with(&query).await.unwrap();

    let body = backend.last().json();
    assert_eq!(body["material_id"], "m-9");
    assert!(body["course_id"].is_null());
    assert_eq!(body["top_k"], 8);
}

/// PDF upload is multipart; everything else keeps the JSON default
#[tokio::test]
async fn test_upload_overrides_json_content_type() {
    let backend = MockBackend::start().await;
    let client = backend.client();

    client.materials().get_all().await.unwrap();
    let upload = PdfUpload::new("notes.pdf", b"%PDF-1.7".to_vec(), "Lecture 1", "c-1")
        .with_author("Dr. Ruiz");
    client.materials().upload_pdf(upload).await.unwrap();
    client.students().create(&json!({"name": "Lin"})).await.unwrap();

    let recorded = backend.requests();
    assert_eq!(recorded[0].content_type.as_deref(), Some("application/json"));

    let upload = &recorded[1];
    assert_eq!(upload.path, "/api/materials/upload-pdf");
    let content_type = upload.content_type.as_deref().unwrap();
    assert!(
        content_type.starts_with("multipart/form-data; boundary="),
        "got {content_type}"
    );
    let text = upload.body_text();
    assert!(text.contains("name=\"file\"; filename=\"notes.pdf\""));
    assert!(text.contains("name=\"title\""));
    assert!(text.contains("Lecture 1"));
    assert!(text.contains("name=\"course_id\""));
    assert!(text.contains("Dr. Ruiz"));

    assert_eq!(recorded[2].content_type.as_deref(), Some("application/json"));
}

/// Both ways of asking for a course's materials produce the same request
#[tokio::test]
async fn test_course_materials_identical_from_both_groups() {
    let backend = MockBackend::start().await;
    let client = backend.client();

    client.courses().get_materials(42).await.unwrap();
    client.materials().get_by_course(42).await.unwrap();

    let recorded = backend.requests();
    assert_eq!(recorded.len(), 2);
    for request in &recorded {
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/api/courses/42/materials");
        assert!(request.body.is_empty());
    }
}

/// Responses come back untouched and decode into typed models on request
#[tokio::test]
async fn test_response_body_is_returned_untransformed() {
    let stats = json!({"courses": 4, "students": 30, "materials": 12, "queries": 99, "extra": "kept"});
    let backend = MockBackend::start_with(StatusCode::OK, stats.clone()).await;
    let client = backend.client();

    let response = client.analytics().get_stats().await.unwrap();
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data, stats);

    let typed: Stats = response.json().unwrap();
    assert_eq!(typed.students, 30);
    assert_eq!(typed.queries, 99);
}
