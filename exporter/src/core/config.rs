use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::utils::file::expand_path;

use super::cli::CliConfig;
use super::constants::{
    COLUMN_COUNT, CONFIG_FILE_NAME, DEFAULT_OUTPUT_DIR, SNAKE_CASE_LABELS, TITLE_CASE_LABELS,
};
use super::secret::Secret;

// =============================================================================
// Storage Backend Enum
// =============================================================================

/// Object storage backend the export is written to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    S3,
    Filesystem,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::S3 => write!(f, "s3"),
            StorageBackend::Filesystem => write!(f, "filesystem"),
        }
    }
}

// =============================================================================
// Column Label Style Enum
// =============================================================================

/// Casing of the column labels written next to the data table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// `date_created`, `ticket_id`, ...
    #[default]
    Snake,
    /// `Date Created`, `Ticket ID`, ...
    Title,
}

impl LabelStyle {
    pub fn labels(&self) -> [&'static str; COLUMN_COUNT] {
        match self {
            LabelStyle::Snake => SNAKE_CASE_LABELS,
            LabelStyle::Title => TITLE_CASE_LABELS,
        }
    }
}

impl fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelStyle::Snake => write!(f, "snake"),
            LabelStyle::Title => write!(f, "title"),
        }
    }
}

// =============================================================================
// File Config Structures (JSON config file)
// =============================================================================

/// View identifiers are numeric in Zendesk but accepted as strings too
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ViewIdFileConfig {
    Number(u64),
    Text(String),
}

impl fmt::Display for ViewIdFileConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewIdFileConfig::Number(n) => write!(f, "{}", n),
            ViewIdFileConfig::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Zendesk configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ZendeskFileConfig {
    pub url: Option<String>,
    pub view: Option<ViewIdFileConfig>,
    pub token: Option<Secret>,
}

/// Storage configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StorageFileConfig {
    pub backend: Option<StorageBackend>,
    pub bucket: Option<String>,
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub path: Option<String>,
}

/// Export configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ExportFileConfig {
    pub labels: Option<LabelStyle>,
    pub strict_slots: Option<bool>,
}

/// Raw file configuration (all fields optional)
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileConfig {
    pub zendesk: Option<ZendeskFileConfig>,
    pub storage: Option<StorageFileConfig>,
    pub export: Option<ExportFileConfig>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl FileConfig {
    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::trace!(config = ?config, "Parsed config file");
        Ok(config)
    }

    /// Warn about unknown fields in the config
    fn warn_unknown_fields(&self) {
        if let serde_json::Value::Object(map) = &self.extra
            && !map.is_empty()
        {
            let keys_str: String = map
                .keys()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(
                fields = %keys_str,
                "Unknown fields in config file (possible typos)"
            );
        }
    }
}

// =============================================================================
// Final Config Structures (runtime)
// =============================================================================

/// Zendesk API configuration (final/runtime)
#[derive(Debug, Clone)]
pub struct ZendeskConfig {
    /// Base URL without trailing slash
    pub url: String,
    pub view: String,
    pub token: Secret,
}

/// S3 configuration (final/runtime)
#[derive(Debug, Clone)]
pub struct S3Config {
    pub bucket: String,
    pub region: Option<String>,
    pub endpoint: Option<String>,
}

/// Storage configuration (final/runtime)
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub s3: Option<S3Config>,
    pub filesystem_path: PathBuf,
}

/// Export configuration (final/runtime)
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportConfig {
    pub labels: LabelStyle,
    pub strict_slots: bool,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub zendesk: ZendeskConfig,
    pub storage: StorageConfig,
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from all sources
    ///
    /// Priority (lowest to highest):
    /// 1. Defaults
    /// 2. Local directory config OR CLI-specified config path
    /// 3. CLI arguments (which include env var fallbacks via clap)
    pub fn load(cli: &CliConfig) -> Result<Self> {
        tracing::debug!("Loading application configuration");

        let config_path = if let Some(ref path) = cli.config {
            let expanded = expand_path(&path.to_string_lossy());
            if !expanded.exists() {
                anyhow::bail!("Config file not found: {}", expanded.display());
            }
            Some(expanded)
        } else {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() { Some(local) } else { None }
        };

        let file_config = match config_path {
            Some(path) => {
                let config = FileConfig::load_from_file(&path)?;
                config.warn_unknown_fields();
                tracing::debug!(config = %path.display(), "Config file loaded");
                config
            }
            None => FileConfig::default(),
        };

        Self::from_sources(cli, file_config)
    }

    /// Layer CLI/env values over a parsed file config and validate the result
    pub fn from_sources(cli: &CliConfig, file_config: FileConfig) -> Result<Self> {
        let file_zendesk = file_config.zendesk.unwrap_or_default();
        let file_storage = file_config.storage.unwrap_or_default();
        let file_export = file_config.export.unwrap_or_default();

        // zendesk: CLI/env overrides file config, no defaults
        let url = cli
            .url
            .clone()
            .or(file_zendesk.url)
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .unwrap_or_default();
        let view = cli
            .view
            .clone()
            .or_else(|| file_zendesk.view.map(|v| v.to_string()))
            .map(|v| v.trim().to_string())
            .unwrap_or_default();
        let token = cli
            .token
            .clone()
            .map(Secret::new)
            .or(file_zendesk.token)
            .unwrap_or_else(|| Secret::new(""));

        let backend = cli.storage.or(file_storage.backend).unwrap_or_default();

        // Only build S3 config when a non-empty bucket is known
        let s3 = cli
            .bucket
            .clone()
            .or(file_storage.bucket)
            .filter(|b| !b.trim().is_empty())
            .map(|bucket| S3Config {
                bucket,
                region: cli.region.clone().or(file_storage.region),
                endpoint: cli.s3_endpoint.clone().or(file_storage.endpoint),
            });

        let filesystem_path = expand_path(
            &cli.output_dir
                .clone()
                .or(file_storage.path)
                .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
        );

        let export = ExportConfig {
            labels: cli.labels.or(file_export.labels).unwrap_or_default(),
            strict_slots: cli
                .strict_slots
                .or(file_export.strict_slots)
                .unwrap_or(false),
        };

        let config = Self {
            zendesk: ZendeskConfig { url, view, token },
            storage: StorageConfig {
                backend,
                s3,
                filesystem_path,
            },
            export,
        };

        config.validate()?;

        tracing::debug!(
            url = %config.zendesk.url,
            view = %config.zendesk.view,
            storage = %config.storage.backend,
            labels = %config.export.labels,
            strict_slots = config.export.strict_slots,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Validate the configuration for consistency and correctness
    fn validate(&self) -> Result<()> {
        if self.zendesk.url.is_empty() {
            anyhow::bail!("Configuration error: zendesk.url (ZENDESK_URL) is required");
        }
        if !self.zendesk.url.starts_with("http://") && !self.zendesk.url.starts_with("https://") {
            anyhow::bail!(
                "Configuration error: zendesk.url must start with http:// or https:// (got '{}')",
                self.zendesk.url
            );
        }
        if self.zendesk.view.is_empty() {
            anyhow::bail!("Configuration error: zendesk.view (ZENDESK_VIEW) is required");
        }
        if self.zendesk.view.contains('/') {
            anyhow::bail!(
                "Configuration error: zendesk.view must be a single path segment (got '{}')",
                self.zendesk.view
            );
        }
        if self.zendesk.token.is_empty() {
            anyhow::bail!("Configuration error: zendesk.token (ZENDESK_TOKEN) is required");
        }

        if self.storage.backend == StorageBackend::S3 && self.storage.s3.is_none() {
            anyhow::bail!(
                "Configuration error: storage.bucket (S3_BUCKET_NAME) is required when storage.backend is 's3'"
            );
        }

        Ok(())
    }

    /// Resolved configuration as JSON, with the token redacted
    pub fn redacted_json(&self) -> serde_json::Value {
        serde_json::json!({
            "zendesk": {
                "url": self.zendesk.url,
                "view": self.zendesk.view,
                "token": self.zendesk.token.to_string(),
            },
            "storage": {
                "backend": self.storage.backend,
                "bucket": self.storage.s3.as_ref().map(|s3| &s3.bucket),
                "region": self.storage.s3.as_ref().and_then(|s3| s3.region.as_ref()),
                "endpoint": self.storage.s3.as_ref().and_then(|s3| s3.endpoint.as_ref()),
                "path": self.storage.filesystem_path.display().to_string(),
            },
            "export": {
                "labels": self.export.labels,
                "strict_slots": self.export.strict_slots,
            },
        })
    }
}
