//! Projection of ticket records into the flat data table

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::constants::{COLUMN_COUNT, CUSTOM_FIELD_SLOTS};
use crate::domain::zendesk::{CustomField, TicketRecord};

use super::error::ExportError;
use super::state::ExportState;

/// Slot of the `type` custom field
const SLOT_TYPE: usize = 0;
/// Slot of the `trello card` custom field
const SLOT_TRELLO_CARD: usize = 1;
/// Slot of the `reason code` custom field (uses the raw value)
const SLOT_REASON_CODE: usize = 2;
/// Slot of the `product area` custom field
const SLOT_PRODUCT_AREA: usize = 3;

/// How custom field slots are checked before projection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlotPolicy {
    /// Index into whatever the view sends; missing slots are absent
    #[default]
    Positional,
    /// Every record must carry exactly [`CUSTOM_FIELD_SLOTS`] slots
    Strict,
}

impl SlotPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Positional }
    }
}

/// One table cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(u64),
    /// Non-string custom field value, kept as sent
    Raw(serde_json::Value),
}

impl Cell {
    fn empty() -> Self {
        Cell::Text(String::new())
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

/// Fixed 9-cell row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TabularRow(pub [Cell; COLUMN_COUNT]);

/// Tabular export: `{ data: [[9 cells]...], fields: [9 labels] }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataTable {
    pub data: Vec<TabularRow>,
    pub fields: [&'static str; COLUMN_COUNT],
}

/// Date part of an ISO-8601 timestamp: everything before the first `T`
pub fn date_part(created: &str) -> &str {
    created.split_once('T').map_or(created, |(date, _)| date)
}

fn slot_name(record: &TicketRecord, index: usize) -> Cell {
    match record.slot(index) {
        Some(CustomField {
            name: Some(name), ..
        }) => Cell::Text(name.clone()),
        _ => Cell::empty(),
    }
}

fn slot_value(record: &TicketRecord, index: usize) -> Cell {
    match record.slot(index).and_then(|field| field.value.as_ref()) {
        Some(serde_json::Value::String(value)) => Cell::Text(value.clone()),
        Some(serde_json::Value::Null) | None => Cell::empty(),
        Some(other) => Cell::Raw(other.clone()),
    }
}

/// Project one record using the accumulated lookups
pub fn project_record(
    record: &TicketRecord,
    organizations: &BTreeMap<u64, String>,
    users: &BTreeMap<u64, String>,
    policy: SlotPolicy,
) -> Result<TabularRow, ExportError> {
    let ticket_id = record.ticket.id;

    if policy == SlotPolicy::Strict && record.custom_fields.len() != CUSTOM_FIELD_SLOTS {
        return Err(ExportError::SlotCount {
            ticket_id,
            expected: CUSTOM_FIELD_SLOTS,
            found: record.custom_fields.len(),
        });
    }

    let assignee = match record.assignee_id {
        Some(assignee_id) => users
            .get(&assignee_id)
            .map(|name| Cell::from(name.as_str()))
            .ok_or_else(|| ExportError::UnknownAssignee {
                ticket_id,
                assignee_id,
            })?,
        None => Cell::empty(),
    };

    let organization = match record.organization_id {
        Some(organization_id) => organizations
            .get(&organization_id)
            .map(|name| Cell::from(name.as_str()))
            .ok_or_else(|| ExportError::UnknownOrganization {
                ticket_id,
                organization_id,
            })?,
        None => Cell::empty(),
    };

    Ok(TabularRow([
        Cell::from(date_part(&record.created)),
        Cell::Number(ticket_id),
        assignee,
        Cell::from(record.ticket.subject.as_deref().unwrap_or_default()),
        organization,
        slot_name(record, SLOT_TYPE),
        slot_name(record, SLOT_TRELLO_CARD),
        slot_value(record, SLOT_REASON_CODE),
        slot_name(record, SLOT_PRODUCT_AREA),
    ]))
}

impl ExportState {
    /// Project every accumulated record, in input order
    pub fn to_table(
        &self,
        fields: [&'static str; COLUMN_COUNT],
        policy: SlotPolicy,
    ) -> Result<DataTable, ExportError> {
        let data = self
            .rows
            .iter()
            .map(|row| project_record(row.record(), &self.organizations, &self.users, policy))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DataTable { data, fields })
    }
}
