//! EduRAG CLI - command-line access to the EduRAG backend
//!
//! # Commands
//!
//! - `edurag routes` - List the frontend route table
//! - `edurag resolve <path>` - Resolve a path to its route and view
//! - `edurag courses|materials|rag|analytics|students|enrollments|evaluations ...`
//!   - Call the backend and print the response body as JSON
//!
//! Response bodies go to stdout, logs go to stderr.

use clap::{Parser, Subcommand};
use client_api::{ApiClient, ApiConfig};
use infra_config::{build_settings, CliOverrides, ClientSettings, Environment};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{
    analytics::AnalyticsCommand, courses::CoursesCommand, enrollments::EnrollmentsCommand,
    evaluations::EvaluationsCommand, materials::MaterialsCommand, rag::RagCommand,
    students::StudentsCommand,
};

/// EduRAG command-line client
#[derive(Parser, Debug)]
#[command(name = "edurag")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Backend origin, e.g. http://localhost:8000
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Base path of the frontend history
    #[arg(long, global = true)]
    history_base: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the frontend routes in declaration order
    Routes,

    /// Resolve a frontend path to its route and view
    Resolve {
        /// Path, optionally with query and fragment (e.g. /courses/3?tab=files)
        path: String,
    },

    /// Courses and their materials
    #[command(subcommand)]
    Courses(CoursesCommand),

    /// Course materials and PDF uploads
    #[command(subcommand)]
    Materials(MaterialsCommand),

    /// Question answering over course materials
    #[command(subcommand)]
    Rag(RagCommand),

    /// Platform statistics
    #[command(subcommand)]
    Analytics(AnalyticsCommand),

    /// Student records
    #[command(subcommand)]
    Students(StudentsCommand),

    /// Course enrollments
    #[command(subcommand)]
    Enrollments(EnrollmentsCommand),

    /// Material evaluations
    #[command(subcommand)]
    Evaluations(EvaluationsCommand),
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config_file: self.config.clone(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            history_base: self.history_base.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

fn init_tracing(log_level: &str, environment: Environment) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if environment.is_production() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn api_client(settings: &ClientSettings) -> anyhow::Result<ApiClient> {
    let mut config = ApiConfig::new(settings.base_url.as_str())?;
    if let Some(secs) = settings.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(ApiClient::new(config)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = build_settings(&cli.overrides())?;

    init_tracing(settings.log_level.as_filter_str(), settings.environment);

    tracing::debug!(
        base_url = %settings.base_url,
        history_base = %settings.history_base,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let output = match cli.command {
        Commands::Routes => commands::routes::list(&settings.history_base),
        Commands::Resolve { path } => commands::routes::resolve(&settings.history_base, &path)?,
        Commands::Courses(cmd) => commands::courses::run(&api_client(&settings)?, cmd).await?,
        Commands::Materials(cmd) => commands::materials::run(&api_client(&settings)?, cmd).await?,
        Commands::Rag(cmd) => commands::rag::run(&api_client(&settings)?, cmd).await?,
        Commands::Analytics(cmd) => commands::analytics::run(&api_client(&settings)?, cmd).await?,
        Commands::Students(cmd) => commands::students::run(&api_client(&settings)?, cmd).await?,
        Commands::Enrollments(cmd) => {
            commands::enrollments::run(&api_client(&settings)?, cmd).await?
        }
        Commands::Evaluations(cmd) => {
            commands::evaluations::run(&api_client(&settings)?, cmd).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_map_to_overrides() {
        let cli = Cli::try_parse_from([
            "edurag",
            "--base-url",
            "http://api.test:9000",
            "--timeout-secs",
            "5",
            "routes",
            "--log-level",
            "debug",
        ])
        .unwrap();

        let overrides = cli.overrides();
        assert_eq!(overrides.base_url.as_deref(), Some("http://api.test:9000"));
        assert_eq!(overrides.timeout_secs, Some(5));
        assert_eq!(overrides.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Commands::Routes));
    }

    #[test]
    fn test_nested_subcommand_parses() {
        let cli = Cli::try_parse_from([
            "edurag", "rag", "query", "What is RAG?", "--course-id", "c1", "--top-k", "3",
        ])
        .unwrap();

        match cli.command {
            Commands::Rag(RagCommand::Query {
                question,
                course_id,
                material_id,
                top_k,
            }) => {
                assert_eq!(question, "What is RAG?");
                assert_eq!(course_id.as_deref(), Some("c1"));
                assert_eq!(material_id, None);
                assert_eq!(top_k, Some(3));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_environment_is_read_only_by_settings() {
        std::env::set_var(infra_config::ENV_HISTORY_BASE, "/from-env");

        let cli = Cli::try_parse_from(["edurag", "routes"]).unwrap();
        assert_eq!(cli.overrides().history_base, None);

        let settings = build_settings(&cli.overrides()).unwrap();
        assert_eq!(settings.history_base, "/from-env");

        let cli = Cli::try_parse_from(["edurag", "--history-base", "/flag", "routes"]).unwrap();
        assert_eq!(build_settings(&cli.overrides()).unwrap().history_base, "/flag");
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["edurag", "courses"]).is_err());
    }

    #[test]
    fn test_settings_from_file_and_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            b"base_url = \"http://file.test:8000\"\ntimeout_secs = 30\n",
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "edurag",
            "--config",
            file.path().to_str().unwrap(),
            "--timeout-secs",
            "2",
            "routes",
        ])
        .unwrap();
        let settings = build_settings(&cli.overrides()).unwrap();
        assert_eq!(settings.timeout_secs, Some(2));

        let client = api_client(&settings).unwrap();
        assert_eq!(client.config().timeout(), Some(Duration::from_secs(2)));
    }
}
