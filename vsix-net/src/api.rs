//! Marketplace metadata queries.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, ACCEPT, USER_AGENT};
use reqwest::Client;
use tracing::{debug, error};
use vsix_common::config::Config;
use vsix_common::error::{Result, VsixError};
use vsix_common::model::gallery::{QueryRequest, QueryResponse, API_VERSION_ACCEPT};
use vsix_common::model::ExtensionId;

use crate::validation::validate_url;

const REQUEST_TIMEOUT_SECS: u64 = 300;
const CONNECT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT_STRING: &str = "vsix extension installer (Rust; +https://github.com/vsix-tools/vsix)";

fn build_client(accept: &str) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, USER_AGENT_STRING.parse().unwrap());
    headers.insert(ACCEPT, accept.parse().unwrap());
    Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .default_headers(headers)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| VsixError::Api(format!("Failed to build HTTP client: {e}")))
}

/// Client for metadata queries, pinning the gallery API version.
pub(crate) fn build_api_client() -> Result<Client> {
    build_client(API_VERSION_ACCEPT)
}

/// Client for asset downloads.
pub(crate) fn build_download_client() -> Result<Client> {
    build_client("*/*")
}

/// Resolves the latest published version of `id` via the gallery query
/// endpoint.
///
/// Transport failures and non-2xx statuses are propagated unmodified; a
/// well-formed response missing the expected version path is a
/// [`VsixError::Metadata`].
pub async fn query_latest_version(config: &Config, id: &ExtensionId) -> Result<String> {
    let url = config.extension_query_url();
    debug!("Querying marketplace metadata for '{}' at {}", id, url);
    validate_url(&url)?;

    let client = build_api_client()?;
    let body = QueryRequest::for_identifier(&id.to_string());
    let response = client.post(&url).json(&body).send().await.map_err(|e| {
        error!("HTTP request failed for {}: {}", url, e);
        VsixError::Http(Arc::new(e))
    })?;

    let status = response.status();
    if !status.is_success() {
        let body_text = response
            .text()
            .await
            .unwrap_or_else(|e| format!("(Failed to read response body: {e})"));
        debug!(
            "Metadata query to {} returned non-success status {}: {}",
            url, status, body_text
        );
        return Err(VsixError::Api(format!("HTTP status {status} from {url}")));
    }

    let parsed: QueryResponse = response
        .json()
        .await
        .map_err(|e| VsixError::Http(Arc::new(e)))?;
    match parsed.latest_version() {
        Some(version) => {
            debug!("Resolved '{}' to latest version {}", id, version);
            Ok(version.to_string())
        }
        None => Err(VsixError::Metadata(format!(
            "Marketplace response for '{id}' contains no version information"
        ))),
    }
}
