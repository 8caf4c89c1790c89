//! Zendesk view export job
//!
//! Pulls a paginated Zendesk view, flattens it into a table and writes both
//! the raw and the tabular form to object storage.

pub mod app;
pub mod core;
pub mod data;
pub mod domain;
pub mod utils;
