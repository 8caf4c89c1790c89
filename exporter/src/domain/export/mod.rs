//! Export pipeline
//!
//! - `state` - per-run accumulation of rows and lookups
//! - `table` - projection of records into 9-cell rows
//! - `exporter` - `MetricsExporter`, the fetch → project → write run
//! - `error` - `ExportError`

mod error;
mod exporter;
mod state;
mod table;

pub use error::ExportError;
pub use exporter::{ExportSummary, MetricsExporter};
pub use state::ExportState;
pub use table::{Cell, DataTable, SlotPolicy, TabularRow, date_part, project_record};
