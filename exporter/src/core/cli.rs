use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};

use std::path::PathBuf;

use super::config::{LabelStyle, StorageBackend};
use super::constants::{
    ENV_AWS_REGION, ENV_CONFIG, ENV_LABELS, ENV_OUTPUT_DIR, ENV_S3_BUCKET_NAME, ENV_S3_ENDPOINT,
    ENV_STORAGE, ENV_STRICT_SLOTS, ENV_ZENDESK_TOKEN, ENV_ZENDESK_URL, ENV_ZENDESK_VIEW,
};

#[derive(Parser)]
#[command(name = "zendesk-export")]
#[command(version, about = "Export a Zendesk view to object storage", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Zendesk base URL (e.g. https://acme.zendesk.com)
    #[arg(long, global = true, env = ENV_ZENDESK_URL)]
    pub url: Option<String>,

    /// Zendesk view identifier
    #[arg(long, global = true, env = ENV_ZENDESK_VIEW)]
    pub view: Option<String>,

    /// Zendesk credential (base64-encoded into a Basic authorization header)
    #[arg(long, global = true, env = ENV_ZENDESK_TOKEN, hide_env_values = true)]
    pub token: Option<String>,

    /// Storage backend (s3 or filesystem)
    #[arg(long, global = true, env = ENV_STORAGE, value_parser = parse_storage_backend)]
    pub storage: Option<StorageBackend>,

    /// Destination S3 bucket
    #[arg(long, global = true, env = ENV_S3_BUCKET_NAME)]
    pub bucket: Option<String>,

    /// AWS region for the S3 client
    #[arg(long, global = true, env = ENV_AWS_REGION)]
    pub region: Option<String>,

    /// Custom S3 endpoint for S3-compatible services
    #[arg(long, global = true, env = ENV_S3_ENDPOINT)]
    pub s3_endpoint: Option<String>,

    /// Output directory when using the filesystem backend
    #[arg(long, global = true, env = ENV_OUTPUT_DIR)]
    pub output_dir: Option<String>,

    /// Column label style (snake or title)
    #[arg(long, global = true, env = ENV_LABELS, value_parser = parse_label_style)]
    pub labels: Option<LabelStyle>,

    /// Fail when a record does not carry exactly four custom field slots
    /// (`--strict-slots`, or `--strict-slots=false` to override the config file)
    #[arg(
        long,
        global = true,
        env = ENV_STRICT_SLOTS,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub strict_slots: Option<bool>,
}

/// Parse storage backend from CLI/env string
fn parse_storage_backend(s: &str) -> Result<StorageBackend, String> {
    match s.to_lowercase().as_str() {
        "s3" => Ok(StorageBackend::S3),
        "filesystem" | "fs" => Ok(StorageBackend::Filesystem),
        _ => Err(format!(
            "Invalid storage backend '{}'. Valid options: s3, filesystem",
            s
        )),
    }
}

/// Parse column label style from CLI/env string
fn parse_label_style(s: &str) -> Result<LabelStyle, String> {
    match s.to_lowercase().as_str() {
        "snake" => Ok(LabelStyle::Snake),
        "title" => Ok(LabelStyle::Title),
        _ => Err(format!(
            "Invalid label style '{}'. Valid options: snake, title",
            s
        )),
    }
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run one export (default command)
    Run,
    /// Print the resolved configuration (token redacted) and exit
    Config,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub config: Option<PathBuf>,
    pub url: Option<String>,
    pub view: Option<String>,
    pub token: Option<String>,
    pub storage: Option<StorageBackend>,
    pub bucket: Option<String>,
    pub region: Option<String>,
    pub s3_endpoint: Option<String>,
    pub output_dir: Option<String>,
    pub labels: Option<LabelStyle>,
    pub strict_slots: Option<bool>,
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Option<Commands>) {
    let cli = Cli::parse();
    let config = CliConfig {
        config: cli.config,
        url: cli.url,
        view: cli.view,
        token: cli.token,
        storage: cli.storage,
        bucket: cli.bucket,
        region: cli.region,
        s3_endpoint: cli.s3_endpoint,
        output_dir: cli.output_dir,
        labels: cli.labels,
        strict_slots: cli.strict_slots,
    };
    (config, cli.command)
}
