//! Enrollments command implementation

use clap::Subcommand;
use client_api::models::EnrollmentCreate;
use client_api::ApiClient;
use serde_json::Value;

#[derive(Subcommand, Debug)]
pub enum EnrollmentsCommand {
    /// List all enrollments
    List,

    /// Create an active enrollment
    Create {
        #[arg(long)]
        student_id: String,

        #[arg(long)]
        course_id: String,
    },

    /// Delete an enrollment
    Delete { id: String },
}

/// Run the enrollments command
pub async fn run(client: &ApiClient, command: EnrollmentsCommand) -> anyhow::Result<Value> {
    let enrollments = client.enrollments();
    let response = match command {
        EnrollmentsCommand::List => enrollments.get_all().await?,
        EnrollmentsCommand::Create {
            student_id,
            course_id,
        } => {
            enrollments
                .create(&EnrollmentCreate::active(student_id, course_id))
                .await?
        }
        EnrollmentsCommand::Delete { id } => enrollments.delete(id).await?,
    };
    Ok(response.data)
}
