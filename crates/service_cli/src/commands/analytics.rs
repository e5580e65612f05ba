//! Analytics command implementation

use clap::Subcommand;
use client_api::ApiClient;
use serde_json::Value;

#[derive(Subcommand, Debug)]
pub enum AnalyticsCommand {
    /// Totals of courses, students, materials and queries
    Stats,

    /// Detailed analytics
    Detailed,

    /// Activity per course
    CourseActivity,

    /// Progress per student
    StudentProgress,
}

/// Run the analytics command
pub async fn run(client: &ApiClient, command: AnalyticsCommand) -> anyhow::Result<Value> {
    let analytics = client.analytics();
    let response = match command {
        AnalyticsCommand::Stats => analytics.get_stats().await?,
        AnalyticsCommand::Detailed => analytics.get_detailed().await?,
        AnalyticsCommand::CourseActivity => analytics.get_course_activity().await?,
        AnalyticsCommand::StudentProgress => analytics.get_student_progress().await?,
    };
    Ok(response.data)
}
