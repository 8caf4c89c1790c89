use thiserror::Error;

/// Errors talking to the Zendesk API
#[derive(Error, Debug)]
pub enum ZendeskError {
    #[error("Invalid Zendesk credential: {0}")]
    Credential(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GET {url} returned {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Malformed view response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
