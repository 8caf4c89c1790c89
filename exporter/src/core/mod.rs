//! Core application infrastructure

pub mod cli;
pub mod config;
pub mod constants;
pub mod secret;

pub use crate::app::CoreApp;
pub use cli::{CliConfig, Commands};
pub use config::{AppConfig, ExportConfig, StorageConfig, ZendeskConfig};
pub use secret::Secret;
