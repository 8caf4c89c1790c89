// =============================================================================
// Application Identity
// =============================================================================

/// Crate name as seen by tracing targets
pub const CRATE_TARGET: &str = "zendesk_exporter";

/// HTTP User-Agent sent to the Zendesk API
pub const USER_AGENT: &str = concat!("zendesk-export/", env!("CARGO_PKG_VERSION"));

/// Static acknowledgment returned by the invocation handler
pub const COMPLETION_MESSAGE: &str = "Hello from Lambda";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "zendesk-export.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "ZENDESK_EXPORT_CONFIG";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "ZENDESK_EXPORT_LOG";

// =============================================================================
// Environment Variables - Zendesk
// =============================================================================

/// Credential string, base64-encoded into the Basic authorization header
pub const ENV_ZENDESK_TOKEN: &str = "ZENDESK_TOKEN";

/// Base API URL, e.g. `https://acme.zendesk.com`
pub const ENV_ZENDESK_URL: &str = "ZENDESK_URL";

/// View identifier to execute
pub const ENV_ZENDESK_VIEW: &str = "ZENDESK_VIEW";

// =============================================================================
// Environment Variables - Storage
// =============================================================================

/// Destination bucket name
pub const ENV_S3_BUCKET_NAME: &str = "S3_BUCKET_NAME";

/// Storage backend (s3 or filesystem)
pub const ENV_STORAGE: &str = "ZENDESK_EXPORT_STORAGE";

/// AWS region override
pub const ENV_AWS_REGION: &str = "AWS_REGION";

/// Custom S3 endpoint (MinIO, LocalStack, ...)
pub const ENV_S3_ENDPOINT: &str = "ZENDESK_EXPORT_S3_ENDPOINT";

/// Output directory for the filesystem backend
pub const ENV_OUTPUT_DIR: &str = "ZENDESK_EXPORT_OUTPUT_DIR";

// =============================================================================
// Environment Variables - Export
// =============================================================================

/// Column label style (snake or title)
pub const ENV_LABELS: &str = "ZENDESK_EXPORT_LABELS";

/// Reject records whose custom field list is not exactly the expected length
pub const ENV_STRICT_SLOTS: &str = "ZENDESK_EXPORT_STRICT_SLOTS";

// =============================================================================
// Defaults
// =============================================================================

/// Default output directory for the filesystem backend
pub const DEFAULT_OUTPUT_DIR: &str = "./export";

// =============================================================================
// Zendesk API
// =============================================================================

/// Path template of the view execution endpoint (`{base}` / `{view}` are substituted)
pub const VIEW_EXECUTE_PATH: &str = "/api/v2/views/{view}/execute.json";

/// Number of positional custom field slots the view is expected to emit
pub const CUSTOM_FIELD_SLOTS: usize = 4;

// =============================================================================
// Object Keys
// =============================================================================

/// Object key of the raw accumulated export
pub const RAW_DATA_KEY: &str = "data/zendesk_raw_data.json";

/// Object key of the tabular projection
pub const DATA_TABLES_KEY: &str = "data/zendesk_data_tables.json";

/// Content type of both written objects
pub const JSON_CONTENT_TYPE: &str = "application/json";

// =============================================================================
// Column Labels
// =============================================================================

/// Number of cells in a tabular row
pub const COLUMN_COUNT: usize = 9;

/// Column labels in snake_case
pub const SNAKE_CASE_LABELS: [&str; COLUMN_COUNT] = [
    "date_created",
    "ticket_id",
    "assignee_name",
    "ticket_subject",
    "organization",
    "type",
    "trello_card",
    "reason_code",
    "product_area",
];

/// Column labels in Title Case
pub const TITLE_CASE_LABELS: [&str; COLUMN_COUNT] = [
    "Date Created",
    "Ticket ID",
    "Assignee Name",
    "Ticket Subject",
    "Organization",
    "Type",
    "Trello Card",
    "Reason Code",
    "Product Area",
];
