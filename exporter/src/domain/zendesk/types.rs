//! Wire types of the `views/{id}/execute.json` response

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One positional custom field slot; `null` slots deserialize to `None` in the record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomField {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ticket {
    pub id: u64,
    #[serde(default)]
    pub subject: Option<String>,
}

/// The fields of a view row the exporter reads
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TicketRecord {
    pub created: String,
    pub ticket: Ticket,
    #[serde(default)]
    pub assignee_id: Option<u64>,
    #[serde(default)]
    pub organization_id: Option<u64>,
    #[serde(default)]
    pub custom_fields: Vec<Option<CustomField>>,
}

impl TicketRecord {
    /// Custom field slot by position; out-of-range slots are absent
    pub fn slot(&self, index: usize) -> Option<&CustomField> {
        self.custom_fields.get(index).and_then(Option::as_ref)
    }
}

/// A view row exactly as sent, plus its typed [`TicketRecord`].
///
/// Serializes back to the original JSON (same keys, same order, nulls kept).
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow {
    raw: serde_json::Value,
    record: TicketRecord,
}

impl ViewRow {
    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }

    pub fn record(&self) -> &TicketRecord {
        &self.record
    }
}

impl TryFrom<serde_json::Value> for ViewRow {
    type Error = serde_json::Error;

    fn try_from(raw: serde_json::Value) -> Result<Self, Self::Error> {
        let record = TicketRecord::deserialize(&raw)?;
        Ok(Self { raw, record })
    }
}

impl<'de> Deserialize<'de> for ViewRow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl Serialize for ViewRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Organization {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

/// One page of a view execution
#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse {
    pub rows: Vec<ViewRow>,
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub next_page: Option<String>,
}

impl PageResponse {
    /// Continuation URL, treating `null`, absent and `""` alike
    pub fn next_page_url(&self) -> Option<&str> {
        self.next_page.as_deref().filter(|url| !url.is_empty())
    }
}
