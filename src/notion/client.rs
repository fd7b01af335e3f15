//! HTTP client for the Notion REST API

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::{json, Value};

use super::error::NotionError;
use super::types::{Block, BlockChildrenResponse, QueryResponse};
use crate::config::NotionConfig;

/// Client for the Notion REST API
///
/// Constructed once at startup and injected into whatever needs it.
/// Every call re-queries the API; nothing is cached here, and failed
/// calls surface immediately without retries.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    api_base: String,
    database_id: String,
}

impl NotionClient {
    /// Create a client from configuration
    pub fn new(config: &NotionConfig) -> Result<Self, NotionError> {
        if config.token.is_empty() {
            return Err(NotionError::MissingConfig("notion.token (NOTION_TOKEN)"));
        }
        if config.database_id.is_empty() {
            return Err(NotionError::MissingConfig(
                "notion.database_id (NOTION_DATABASE_ID)",
            ));
        }

        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| NotionError::MissingConfig("notion.token contains invalid characters"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let version = HeaderValue::from_str(&config.version)
            .map_err(|_| NotionError::MissingConfig("notion.version contains invalid characters"))?;
        headers.insert("Notion-Version", version);

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            database_id: config.database_id.clone(),
        })
    }

    /// Query the posts database, filtered to published rows, newest first
    ///
    /// Returns raw page objects; rows are decoded and validated by the
    /// caller so one malformed row drops that row only.
    pub async fn query_posts(&self) -> Result<Vec<Value>, NotionError> {
        let url = format!("{}/databases/{}/query", self.api_base, self.database_id);
        let mut results = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut body = json!({
                "filter": {
                    "property": "Published",
                    "checkbox": { "equals": true }
                },
                "sorts": [{
                    "property": "Date",
                    "direction": "descending"
                }]
            });
            if let Some(ref c) = cursor {
                body["start_cursor"] = json!(c);
            }

            let page: QueryResponse = self.post_json(&url, &body).await?;
            results.extend(page.results);

            match page.next_cursor {
                Some(c) if page.has_more => cursor = Some(c),
                _ => break,
            }
        }

        tracing::debug!("Fetched {} post rows from Notion", results.len());
        Ok(results)
    }

    /// Fetch the single published row whose Slug equals `slug`
    pub async fn find_post_by_slug(&self, slug: &str) -> Result<Value, NotionError> {
        let url = format!("{}/databases/{}/query", self.api_base, self.database_id);
        let body = json!({
            "filter": {
                "and": [
                    { "property": "Slug", "rich_text": { "equals": slug } },
                    { "property": "Published", "checkbox": { "equals": true } }
                ]
            }
        });

        let mut page: QueryResponse = self.post_json(&url, &body).await?;
        if page.results.is_empty() {
            return Err(NotionError::PostNotFound(slug.to_string()));
        }
        Ok(page.results.swap_remove(0))
    }

    /// List the content blocks of a page, following pagination cursors
    pub async fn block_children(&self, page_id: &str) -> Result<Vec<Block>, NotionError> {
        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut url = format!(
                "{}/blocks/{}/children?page_size=100",
                self.api_base, page_id
            );
            if let Some(ref c) = cursor {
                url.push_str("&start_cursor=");
                url.push_str(c);
            }

            let response = self.http.get(&url).send().await?;
            let page: BlockChildrenResponse = Self::decode(response).await?;
            blocks.extend(page.results);

            match page.next_cursor {
                Some(c) if page.has_more => cursor = Some(c),
                _ => break,
            }
        }

        Ok(blocks)
    }

    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        body: &Value,
    ) -> Result<T, NotionError> {
        let response = self.http.post(url).json(body).send().await?;
        Self::decode(response).await
    }

    /// Turn a non-success response into an error, decode the body otherwise
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, NotionError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NotionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
