//! Courses command implementation

use clap::Subcommand;
use client_api::models::{CourseCreate, CourseUpdate};
use client_api::ApiClient;
use serde_json::Value;

#[derive(Subcommand, Debug)]
pub enum CoursesCommand {
    /// List all courses
    List,

    /// Show one course
    Get { id: String },

    /// List the materials of a course
    Materials { id: String },

    /// Enroll a student in a course (status is always "active")
    Enroll {
        #[arg(long)]
        student_id: String,

        #[arg(long)]
        course_id: String,
    },

    /// Create a course
    Create {
        #[arg(long)]
        code: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        syllabus: Option<String>,

        #[arg(long)]
        credits: Option<i64>,
    },

    /// Update a course; only the given fields are sent
    Update {
        id: String,

        #[arg(long)]
        code: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        syllabus: Option<String>,

        #[arg(long)]
        credits: Option<i64>,
    },

    /// Delete a course
    Delete { id: String },
}

/// Run the courses command
pub async fn run(client: &ApiClient, command: CoursesCommand) -> anyhow::Result<Value> {
    let courses = client.courses();
    let response = match command {
        CoursesCommand::List => courses.get_all().await?,
        CoursesCommand::Get { id } => courses.get_by_id(id).await?,
        CoursesCommand::Materials { id } => courses.get_materials(id).await?,
        CoursesCommand::Enroll {
            student_id,
            course_id,
        } => courses.enroll(student_id, course_id).await?,
        CoursesCommand::Create {
            code,
            name,
            syllabus,
            credits,
        } => {
            let course = CourseCreate {
                code,
                name,
                syllabus,
                credits,
            };
            courses.create(&course).await?
        }
        CoursesCommand::Update {
            id,
            code,
            name,
            syllabus,
            credits,
        } => {
            let changes = CourseUpdate {
                code,
                name,
                syllabus,
                credits,
            };
            courses.update(id, &changes).await?
        }
        CoursesCommand::Delete { id } => courses.delete(id).await?,
    };
    Ok(response.data)
}
