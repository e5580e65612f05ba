//! Materials command implementation

use clap::Subcommand;
use client_api::models::MaterialCreate;
use client_api::{ApiClient, PdfUpload};
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum MaterialsCommand {
    /// List all materials
    List,

    /// Show one material
    Get { id: String },

    /// List the materials of a course
    ByCourse { course_id: String },

    /// Upload a PDF as multipart/form-data
    Upload {
        /// Path to the PDF file
        file: PathBuf,

        #[arg(long)]
        title: String,

        #[arg(long)]
        course_id: String,

        #[arg(long)]
        author: Option<String>,
    },

    /// Register a material without a file
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        course_id: String,

        #[arg(long, default_value = "application/pdf")]
        mime_type: String,

        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        file_url: Option<String>,
    },

    /// Delete a material
    Delete { id: String },
}

/// Run the materials command
pub async fn run(client: &ApiClient, command: MaterialsCommand) -> anyhow::Result<Value> {
    let materials = client.materials();
    let response = match command {
        MaterialsCommand::List => materials.get_all().await?,
        MaterialsCommand::Get { id } => materials.get_by_id(id).await?,
        MaterialsCommand::ByCourse { course_id } => materials.get_by_course(course_id).await?,
        MaterialsCommand::Upload {
            file,
            title,
            course_id,
            author,
        } => {
            let mut upload = PdfUpload::from_path(&file, title, course_id).await?;
            if let Some(author) = author {
                upload = upload.with_author(author);
            }
            info!(file = %file.display(), bytes = upload.bytes.len(), "Read upload");
            materials.upload_pdf(upload).await?
        }
        MaterialsCommand::Create {
            title,
            course_id,
            mime_type,
            author,
            file_url,
        } => {
            let material = MaterialCreate {
                mime_type,
                author,
                file_url,
                ..MaterialCreate::pdf(title, course_id)
            };
            materials.create(&material).await?
        }
        MaterialsCommand::Delete { id } => materials.delete(id).await?,
    };
    Ok(response.data)
}
