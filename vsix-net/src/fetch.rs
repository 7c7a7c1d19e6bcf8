//! Resolve-and-download pipeline for marketplace packages.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use tokio::fs::File as TokioFile;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error};
use vsix_common::cache::Cache;
use vsix_common::config::Config;
use vsix_common::error::{Result, VsixError};
use vsix_common::model::ExtensionId;

use crate::api::{build_download_client, query_latest_version};
use crate::validation::validate_url;

const VSIX_ASSET_NAME: &str = "Microsoft.VisualStudio.Services.VSIXPackage";

/// Downloads the `.vsix` package for `id`, returning the local artifact path.
///
/// The version is resolved first: an explicit version short-circuits the
/// metadata query entirely. The cache is then probed under the
/// version-suffixed key; a hit returns immediately with no further network
/// activity unless `force_refresh` is set.
pub async fn fetch(
    config: &Config,
    id: &ExtensionId,
    explicit_version: Option<&str>,
    force_refresh: bool,
) -> Result<PathBuf> {
    let version = match explicit_version {
        Some(v) => {
            debug!("Using explicit version {} for '{}'", v, id);
            v.to_string()
        }
        None => query_latest_version(config, id).await?,
    };

    let cache = Cache::new(config)?;
    let artifact_path = cache.artifact_path(id, &version);

    if !force_refresh && artifact_path.is_file() {
        debug!("Using cached artifact: {}", artifact_path.display());
        return Ok(artifact_path);
    }

    let url = asset_url(config, id, &version);
    validate_url(&url)?;

    debug!("Downloading '{}' version {} from {}", id, version, url);
    let client = build_download_client()?;
    download_asset(&client, &url, &artifact_path).await?;
    Ok(artifact_path)
}

/// Per-publisher gallery asset URL, or the `artifact_domain` variant when the
/// config overrides the download host.
fn asset_url(config: &Config, id: &ExtensionId, version: &str) -> String {
    let base = match &config.artifact_domain {
        Some(domain) => domain.trim_end_matches('/').to_string(),
        None => format!("https://{}.gallery.vsassets.io", id.publisher()),
    };
    format!(
        "{base}/_apis/public/gallery/publisher/{}/extension/{}/{version}/assetbyname/{VSIX_ASSET_NAME}",
        id.publisher(),
        id.name(),
    )
}

async fn download_asset(client: &Client, url: &str, final_path: &Path) -> Result<()> {
    let temp_filename = format!(
        ".{}.download",
        final_path.file_name().unwrap_or_default().to_string_lossy()
    );
    let temp_path = final_path.with_file_name(temp_filename);
    if temp_path.exists() {
        if let Err(e) = fs::remove_file(&temp_path) {
            tracing::warn!(
                "Could not remove existing temporary file {}: {}",
                temp_path.display(),
                e
            );
        }
    }

    let response = client.get(url).send().await.map_err(|e| {
        debug!("HTTP request failed for {url}: {e}");
        VsixError::Http(Arc::new(e))
    })?;
    let status = response.status();
    debug!("Received HTTP status: {} for {}", status, url);

    if !status.is_success() {
        let body_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response body".to_string());
        error!("HTTP error {} for URL {}: {}", status, url, body_text);
        let artifact_name = final_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        return match status {
            StatusCode::NOT_FOUND => Err(VsixError::DownloadError(
                artifact_name,
                url.to_string(),
                "Package not found (404)".to_string(),
            )),
            _ => Err(VsixError::DownloadError(
                artifact_name,
                url.to_string(),
                format!("HTTP error {status}"),
            )),
        };
    }

    let mut temp_file = TokioFile::create(&temp_path).await.map_err(|e| {
        VsixError::IoError(format!(
            "Failed to create temp file {}: {}",
            temp_path.display(),
            e
        ))
    })?;
    let content = response
        .bytes()
        .await
        .map_err(|e| VsixError::Http(Arc::new(e)))?;
    temp_file.write_all(&content).await.map_err(|e| {
        VsixError::IoError(format!(
            "Failed to write download to {}: {}",
            temp_path.display(),
            e
        ))
    })?;
    temp_file.flush().await.map_err(|e| {
        VsixError::IoError(format!(
            "Failed to flush download to {}: {}",
            temp_path.display(),
            e
        ))
    })?;
    drop(temp_file);

    fs::rename(&temp_path, final_path).map_err(|e| {
        VsixError::IoError(format!(
            "Failed to move temp file {} to {}: {}",
            temp_path.display(),
            final_path.display(),
            e
        ))
    })?;
    debug!(
        "Moved downloaded package to final location: {}",
        final_path.display()
    );
    Ok(())
}
