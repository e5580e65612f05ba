//! RAG command implementation

use clap::Subcommand;
use client_api::models::RagQuery;
use client_api::ApiClient;
use serde_json::Value;

#[derive(Subcommand, Debug)]
pub enum RagCommand {
    /// Ask a question, optionally scoped to a course or material
    Query {
        question: String,

        #[arg(long)]
        course_id: Option<String>,

        #[arg(long)]
        material_id: Option<String>,

        /// Number of chunks to retrieve
        #[arg(long)]
        top_k: Option<u32>,
    },

    /// Vector store health
    Health,
}

/// Run the rag command
pub async fn run(client: &ApiClient, command: RagCommand) -> anyhow::Result<Value> {
    let rag = client.rag();
    let response = match command {
        RagCommand::Query {
            question,
            course_id,
            material_id,
            top_k: None,
        } => rag.query(question, course_id, material_id).await?,
        RagCommand::Query {
            question,
            course_id,
            material_id,
            top_k,
        } => {
            let query = RagQuery {
                question,
                course_id,
                material_id,
                top_k,
            };
            rag.query_with(&query).await?
        }
        RagCommand::Health => rag.health().await?,
    };
    Ok(response.data)
}
