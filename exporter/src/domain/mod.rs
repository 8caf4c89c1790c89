//! Domain logic: the Zendesk API surface and the export pipeline

pub mod export;
pub mod zendesk;
