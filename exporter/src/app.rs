//! Core application

use anyhow::{Context, Result};

use crate::core::cli::{self, CliConfig, Commands};
use crate::core::config::AppConfig;
use crate::core::constants::{COMPLETION_MESSAGE, CRATE_TARGET, ENV_LOG};
use crate::data;
use crate::domain::export::MetricsExporter;

pub struct CoreApp {
    pub config: AppConfig,
    pub exporter: MetricsExporter,
}

impl CoreApp {
    /// Run the application with CLI argument parsing
    pub async fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        Self::init_logging();

        tracing::debug!("Application starting");

        let (cli_config, command) = cli::parse();
        tracing::trace!(command = ?command, "Parsed command");

        match command {
            Some(Commands::Config) => Self::print_config(&cli_config),
            Some(Commands::Run) | None => {
                let app = Self::init(&cli_config).await?;
                let message = app.handle((), ()).await?;
                tracing::debug!(ack = message, "Invocation complete");
                Ok(())
            }
        }
    }

    async fn init(cli: &CliConfig) -> Result<Self> {
        let config = AppConfig::load(cli)?;
        Self::from_config(config).await
    }

    /// Build the storage handle and exporter for an already-loaded config
    pub async fn from_config(config: AppConfig) -> Result<Self> {
        let storage = data::init_storage(&config.storage)
            .await
            .context("Failed to initialize storage")?;
        let exporter = MetricsExporter::new(&config.zendesk, &config.export, storage)
            .context("Failed to initialize exporter")?;
        Ok(Self { config, exporter })
    }

    /// Invocation entry point: event and context are accepted and ignored.
    ///
    /// Returns a static acknowledgment once both objects are written.
    pub async fn handle<E, C>(&self, _event: E, _context: C) -> Result<&'static str> {
        let summary = self.exporter.run().await.context("Export failed")?;
        tracing::debug!(summary = ?summary, "Export summary");
        Ok(COMPLETION_MESSAGE)
    }

    fn print_config(cli: &CliConfig) -> Result<()> {
        let config = AppConfig::load(cli)?;
        let rendered = serde_json::to_string_pretty(&config.redacted_json())
            .context("Failed to render configuration")?;
        println!("{}", rendered);
        Ok(())
    }

    fn init_logging() {
        let default_filter = format!("info,{}=info", CRATE_TARGET);

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(default_filter);

        tracing_subscriber::fmt()
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .compact()
            .with_env_filter(filter)
            .init();
    }
}
