//! Per-run accumulation of view pages

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::zendesk::{PageResponse, ViewRow};

/// Everything collected during one export run.
///
/// Serializes as the raw export: `{ rows, organizations: {id: name}, users: {id: name} }`,
/// with each row written back exactly as the view sent it.
/// Lookups are keyed by id in ascending order so identical input always
/// produces identical bytes.
#[derive(Debug, Default, Serialize)]
pub struct ExportState {
    pub rows: Vec<ViewRow>,
    pub organizations: BTreeMap<u64, String>,
    pub users: BTreeMap<u64, String>,
}

impl ExportState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page's rows and merge its lookups (last write wins)
    pub fn absorb(&mut self, page: PageResponse) {
        self.rows.extend(page.rows);
        self.organizations
            .extend(page.organizations.into_iter().map(|org| (org.id, org.name)));
        self.users
            .extend(page.users.into_iter().map(|user| (user.id, user.name)));
    }
}
