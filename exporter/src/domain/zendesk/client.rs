use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};

use crate::core::constants::{USER_AGENT, VIEW_EXECUTE_PATH};
use crate::core::secret::Secret;

use super::error::ZendeskError;
use super::types::PageResponse;

/// Longest error body kept in a status error message
const ERROR_BODY_LIMIT: usize = 512;

/// `Basic <base64(token)>`, whatever scheme the token itself uses
pub fn basic_authorization(token: &Secret) -> String {
    format!("Basic {}", STANDARD.encode(token.expose()))
}

/// `{base}/api/v2/views/{view}/execute.json`
pub fn view_execute_url(base_url: &str, view: &str) -> String {
    format!(
        "{}{}",
        base_url.trim_end_matches('/'),
        VIEW_EXECUTE_PATH.replace("{view}", view)
    )
}

/// Authenticated client for view execution pages
#[derive(Debug, Clone)]
pub struct ZendeskClient {
    http: reqwest::Client,
}

impl ZendeskClient {
    pub fn new(token: &Secret) -> Result<Self, ZendeskError> {
        if token.is_empty() {
            return Err(ZendeskError::Credential("token is empty".to_string()));
        }

        let mut authorization = HeaderValue::from_str(&basic_authorization(token))
            .map_err(|e| ZendeskError::Credential(e.to_string()))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { http })
    }

    /// GET one page and decode it
    pub async fn fetch_page(&self, url: &str) -> Result<PageResponse, ZendeskError> {
        tracing::debug!(url, "Fetching view page");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let mut body = resp.text().await.unwrap_or_default();
            if body.len() > ERROR_BODY_LIMIT {
                let mut end = ERROR_BODY_LIMIT;
                while !body.is_char_boundary(end) {
                    end -= 1;
                }
                body.truncate(end);
            }
            return Err(ZendeskError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let page: PageResponse = resp.json().await.map_err(|source| {
            if source.is_decode() {
                ZendeskError::Decode {
                    url: url.to_string(),
                    source,
                }
            } else {
                ZendeskError::Http(source)
            }
        })?;

        tracing::debug!(
            url,
            rows = page.rows.len(),
            organizations = page.organizations.len(),
            users = page.users.len(),
            has_next = page.next_page_url().is_some(),
            "Fetched view page"
        );

        Ok(page)
    }
}
