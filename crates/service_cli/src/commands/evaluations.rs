//! Evaluations command implementation

use anyhow::Context;
use clap::Subcommand;
use client_api::models::EvaluationCreate;
use client_api::ApiClient;
use serde_json::Value;

use super::parse_json;

#[derive(Subcommand, Debug)]
pub enum EvaluationsCommand {
    /// Materials still waiting for an evaluation
    Pending {
        #[arg(long)]
        limit: Option<u32>,

        /// Only materials of this course
        #[arg(long)]
        course_id: Option<String>,
    },

    /// Store an evaluation given as a JSON document
    Create {
        /// e.g. '{"material_id": "m1", "score": 8.5}'
        #[arg(long)]
        data: String,
    },

    /// Evaluations of one material
    ByMaterial { material_id: String },

    /// Aggregate evaluation statistics
    Stats,

    /// Delete an evaluation
    Delete { id: String },
}

/// Run the evaluations command
pub async fn run(client: &ApiClient, command: EvaluationsCommand) -> anyhow::Result<Value> {
    let evaluations = client.evaluations();
    let response = match command {
        EvaluationsCommand::Pending { limit, course_id } => {
            evaluations.pending(limit, course_id.as_deref()).await?
        }
        EvaluationsCommand::Create { data } => {
            let evaluation: EvaluationCreate = serde_json::from_value(parse_json(&data)?)
                .context("--data does not describe an evaluation")?;
            evaluations.create(&evaluation).await?
        }
        EvaluationsCommand::ByMaterial { material_id } => {
            evaluations.get_by_material(material_id).await?
        }
        EvaluationsCommand::Stats => evaluations.stats().await?,
        EvaluationsCommand::Delete { id } => evaluations.delete(id).await?,
    };
    Ok(response.data)
}
