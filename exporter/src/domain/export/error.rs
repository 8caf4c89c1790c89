use thiserror::Error;

use crate::data::StorageError;
use crate::domain::zendesk::ZendeskError;

/// Errors that abort an export run
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Zendesk request failed: {0}")]
    Zendesk(#[from] ZendeskError),

    #[error("Pagination loop: next_page {url} was already fetched in this run")]
    PaginationLoop { url: String },

    #[error("Ticket {ticket_id} references unknown organization {organization_id}")]
    UnknownOrganization { ticket_id: u64, organization_id: u64 },

    #[error("Ticket {ticket_id} references unknown assignee {assignee_id}")]
    UnknownAssignee { ticket_id: u64, assignee_id: u64 },

    #[error("Ticket {ticket_id} has {found} custom field slots, expected {expected}")]
    SlotCount {
        ticket_id: u64,
        expected: usize,
        found: usize,
    },

    #[error("Failed to serialize export: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {key}: {source}")]
    Storage {
        key: &'static str,
        #[source]
        source: StorageError,
    },
}
