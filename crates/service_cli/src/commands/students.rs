//! Students command implementation

use clap::Subcommand;
use client_api::models::{StudentCreate, StudentUpdate};
use client_api::ApiClient;
use serde_json::Value;

#[derive(Subcommand, Debug)]
pub enum StudentsCommand {
    /// List all students
    List,

    /// Show one student
    Get { id: String },

    /// Register a student
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        cohort: String,
    },

    /// Update a student; only the given fields are sent
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        cohort: Option<String>,
    },

    /// Delete a student
    Delete { id: String },
}

/// Run the students command
pub async fn run(client: &ApiClient, command: StudentsCommand) -> anyhow::Result<Value> {
    let students = client.students();
    let response = match command {
        StudentsCommand::List => students.get_all().await?,
        StudentsCommand::Get { id } => students.get_by_id(id).await?,
        StudentsCommand::Create {
            name,
            email,
            cohort,
        } => {
            students
                .create(&StudentCreate {
                    name,
                    email,
                    cohort,
                })
                .await?
        }
        StudentsCommand::Update {
            id,
            name,
            email,
            cohort,
        } => {
            students
                .update(
                    id,
                    &StudentUpdate {
                        name,
                        email,
                        cohort,
                    },
                )
                .await?
        }
        StudentsCommand::Delete { id } => students.delete(id).await?,
    };
    Ok(response.data)
}
