//! `/api/analytics`: read-only aggregates.

use crate::{ApiClient, ApiError, ApiRequest, ApiResponse};

pub fn get_stats() -> ApiRequest {
    ApiRequest::get("/api/analytics/stats")
}

pub fn get_detailed() -> ApiRequest {
    ApiRequest::get("/api/analytics/detailed")
}

pub fn get_course_activity() -> ApiRequest {
    ApiRequest::get("/api/analytics/course-activity")
}

pub fn get_student_progress() -> ApiRequest {
    ApiRequest::get("/api/analytics/student-progress")
}

#[derive(Debug, Clone, Copy)]
pub struct AnalyticsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AnalyticsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_stats(&self) -> Result<ApiResponse, ApiError> {
        self.client.execute(get_stats()).await
    }

    pub async fn get_detailed(&self) -> Result<ApiResponse, ApiError> {
        self.client.execute(get_detailed()).await
    }

    pub async fn get_course_activity(&self) -> Result<ApiResponse, ApiError> {
        self.client.execute(get_course_activity()).await
    }

    pub async fn get_student_progress(&self) -> Result<ApiResponse, ApiError> {
        self.client.execute(get_student_progress()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[test]
    fn test_all_analytics_calls_are_reads() {
        let requests = [
            get_stats(),
            get_detailed(),
            get_course_activity(),
            get_student_progress(),
        ];
        for request in &requests {
            assert_eq!(request.method, Method::GET);
            assert!(request.path.starts_with("/api/analytics/"));
        }
        assert_eq!(requests[2].path, "/api/analytics/course-activity");
    }
}
