use super::DocumentStore;
use crate::common::{Config, DocumentType, LegalDocument, StoreError};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Deserialize;

const SELECT_COLUMNS: &str = "content,version,effective_from";

/// Client for the hosted table service (PostgREST over HTTP).
#[derive(Clone, Debug)]
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
    table: String,
}

/// Error body PostgREST sends back with non-2xx responses.
#[derive(Deserialize, Default)]
struct ErrorPayload {
    message: Option<String>,
    details: Option<String>,
}

impl RestStore {
    pub fn new(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            table: table.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.store_url.clone(),
            config.store_anon_key.clone(),
            config.documents_table.clone(),
        )
    }

    pub fn table_url(&self) -> Result<String, StoreError> {
        if self.base_url.trim().is_empty() {
            return Err(StoreError::NotConfigured("store url"));
        }
        if self.anon_key.trim().is_empty() {
            return Err(StoreError::NotConfigured("access key"));
        }

        Ok(format!("{}/rest/v1/{}", self.base_url, self.table))
    }

    fn query_params(doc_type: DocumentType) -> [(&'static str, String); 3] {
        [
            ("select", SELECT_COLUMNS.to_string()),
            ("type", format!("eq.{}", doc_type.tag())),
            ("is_active", "eq.true".to_string()),
        ]
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DocumentStore for RestStore {
    async fn fetch_active(
        &self,
        doc_type: DocumentType,
    ) -> Result<Option<LegalDocument>, StoreError> {
        let url = self.table_url()?;
        tracing::debug!("querying {url} for {doc_type}");

        let response = self
            .client
            .get(&url)
            .query(&Self::query_params(doc_type))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(rejection(status.as_u16(), &body));
        }

        parse_rows(&body)
    }
}

fn rejection(status: u16, body: &str) -> StoreError {
    let payload: ErrorPayload = serde_json::from_str(body).unwrap_or_default();
    let message = payload
        .message
        .or(payload.details)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("request failed with status {status}")
            } else {
                body.trim().to_string()
            }
        });

    StoreError::Rejected { status, message }
}

/// Zero or one row, like a `maybeSingle` select. More than one is the store's fault.
fn parse_rows(body: &str) -> Result<Option<LegalDocument>, StoreError> {
    let mut rows: Vec<LegalDocument> =
        serde_json::from_str(body).map_err(|e| StoreError::Decode(e.to_string()))?;

    match rows.len() {
        0 => Ok(None),
        1 => Ok(rows.pop()),
        n => Err(StoreError::Ambiguous(n)),
    }
}
