//! Zendesk view execution API

mod client;
mod error;
mod types;

pub use client::{ZendeskClient, basic_authorization, view_execute_url};
pub use error::ZendeskError;
pub use types::{CustomField, Organization, PageResponse, Ticket, TicketRecord, User, ViewRow};
