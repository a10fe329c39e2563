use super::aql::AqlQuery;
use crate::ports::outbound::{ArtifactListing, EntryType, ListingEntry, ListingQuery, RawStats};
use crate::shared::error::InventoryError;
use crate::shared::Result;
use anyhow::Context;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

/// Longest upstream error body echoed back to the user
const MAX_ERROR_DETAILS_LENGTH: usize = 500;

/// HTTP basic-auth credentials
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct StorageInfo {
    repo: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AqlResponse {
    results: Option<Vec<AqlItem>>,
}

#[derive(Debug, Deserialize)]
struct AqlItem {
    #[serde(default)]
    path: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    item_type: Option<String>,
    #[serde(default)]
    stats: Vec<AqlStat>,
}

#[derive(Debug, Deserialize)]
struct AqlStat {
    downloaded: Option<String>,
    #[serde(default)]
    downloads: u64,
}

impl From<AqlItem> for ListingEntry {
    fn from(item: AqlItem) -> Self {
        let entry_type = match item.item_type.as_deref() {
            Some("folder") => EntryType::Folder,
            _ => EntryType::File,
        };
        let stats = item.stats.into_iter().next().map(|stat| RawStats {
            downloaded: stat.downloaded,
            downloads: stat.downloads,
        });
        ListingEntry {
            path: item.path,
            name: item.name,
            entry_type,
            stats,
        }
    }
}

/// Parses an AQL response body into listing entries
fn parse_listing(url: &str, body: &str) -> Result<Vec<ListingEntry>> {
    let response: AqlResponse =
        serde_json::from_str(body).map_err(|e| InventoryError::MalformedListing {
            url: url.to_string(),
            details: e.to_string(),
        })?;
    let results = response
        .results
        .ok_or_else(|| InventoryError::MalformedListing {
            url: url.to_string(),
            details: "No results found in AQL response".to_string(),
        })?;
    Ok(results.into_iter().map(ListingEntry::from).collect())
}

/// Physical repository name from a storage API body, when it differs
fn parse_repository_mapping(requested: &str, body: &str) -> Option<String> {
    let info: StorageInfo = serde_json::from_str(body).ok()?;
    info.repo
        .filter(|actual| !actual.is_empty() && actual != requested)
}

fn truncate_details(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_DETAILS_LENGTH) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

/// Artifactory client implementing the ArtifactListing port
///
/// Uses the storage API to resolve physical repository names and the AQL
/// search endpoint to list cached items. One request per call, no retries.
pub struct ArtifactoryClient {
    client: Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl ArtifactoryClient {
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

    /// Creates a client for one Artifactory service
    ///
    /// # Arguments
    /// * `base_url` - Service root, e.g. `https://host/artifactory`
    /// * `credentials` - Optional basic-auth credentials
    /// * `timeout` - Per-request timeout
    pub fn new(
        base_url: impl Into<String>,
        credentials: Option<Credentials>,
        timeout: Duration,
    ) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("cache-inventory/{}", version);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            credentials,
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some(credentials) => {
                request.basic_auth(&credentials.username, Some(&credentials.password))
            }
            None => request,
        }
    }

    /// Turns non-success statuses into typed errors
    fn check_status(url: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(InventoryError::AuthenticationFailed {
                url: url.to_string(),
            }
            .into());
        }
        let body = response.text().unwrap_or_default();
        Err(InventoryError::UpstreamStatus {
            url: url.to_string(),
            status: status.as_u16(),
            details: truncate_details(body.trim()),
        }
        .into())
    }

    fn fetch_repository_info(&self, url: &str) -> Result<String> {
        let response = self
            .authorized(self.client.get(url))
            .send()
            .with_context(|| format!("Failed to reach {}", url))?;
        Ok(Self::check_status(url, response)?.text()?)
    }
}

impl ArtifactListing for ArtifactoryClient {
    fn resolve_repository(&self, requested: &str) -> String {
        let url = format!(
            "{}/api/storage/{}",
            self.base_url,
            urlencoding::encode(requested)
        );
        match self.fetch_repository_info(&url) {
            Ok(body) => parse_repository_mapping(requested, &body)
                .unwrap_or_else(|| requested.to_string()),
            Err(e) => {
                tracing::debug!(error = %e, "storage lookup failed, keeping requested repository name");
                requested.to_string()
            }
        }
    }

    fn list_artifacts(&self, query: &ListingQuery) -> Result<Vec<ListingEntry>> {
        let url = format!("{}/api/search/aql", self.base_url);
        let aql = AqlQuery::for_listing(query).to_string();
        tracing::debug!(query = %aql, "AQL query");

        let response = self
            .authorized(self.client.post(&url))
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(aql)
            .send()
            .with_context(|| format!("Failed to reach {}", url))?;
        let body = Self::check_status(&url, response)?
            .text()
            .with_context(|| format!("Failed to read response body from {}", url))?;

        parse_listing(&url, &body)
    }
}
