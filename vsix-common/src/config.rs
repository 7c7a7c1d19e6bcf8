// vsix-common/src/config.rs
use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::Result;

const DEFAULT_API_BASE_URL: &str = "https://marketplace.visualstudio.com/_apis/public/gallery";
const DEFAULT_EXTENSIONS_DIR: &str = "extensions";
const DEFAULT_EDITOR_BIN: &str = "codium";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the marketplace gallery API.
    pub api_base_url: String,
    /// When set, asset downloads go through this host instead of the
    /// per-publisher `<publisher>.gallery.vsassets.io` gallery domain.
    pub artifact_domain: Option<String>,
    /// Directory holding downloaded `.vsix` artifacts.
    pub extensions_dir: PathBuf,
    /// External editor command used to install extensions.
    pub editor_bin: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        debug!("Loading vsix configuration");

        let api_base_url = env::var("VSIX_API_BASE_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                debug!(
                    "VSIX_API_BASE_URL not set or empty, falling back to default: {}",
                    DEFAULT_API_BASE_URL
                );
                DEFAULT_API_BASE_URL.to_string()
            });

        let artifact_domain = env::var("VSIX_ARTIFACT_DOMAIN").ok().filter(|s| !s.is_empty());

        let extensions_dir = env::var("VSIX_EXTENSIONS_DIR")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXTENSIONS_DIR));

        let editor_bin = env::var("VSIX_EDITOR")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_EDITOR_BIN.to_string());

        debug!(
            "Configuration loaded: api_base_url={}, extensions_dir={}, editor_bin={}",
            api_base_url,
            extensions_dir.display(),
            editor_bin
        );
        Ok(Self {
            api_base_url,
            artifact_domain,
            extensions_dir,
            editor_bin,
        })
    }

    pub fn extensions_dir(&self) -> &Path {
        &self.extensions_dir
    }

    /// Endpoint for marketplace metadata queries.
    pub fn extension_query_url(&self) -> String {
        format!("{}/extensionquery", self.api_base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_url_joins_endpoint_without_double_slash() {
        let config = Config {
            api_base_url: "https://marketplace.visualstudio.com/_apis/public/gallery/".to_string(),
            artifact_domain: None,
            extensions_dir: PathBuf::from(DEFAULT_EXTENSIONS_DIR),
            editor_bin: DEFAULT_EDITOR_BIN.to_string(),
        };
        assert_eq!(
            config.extension_query_url(),
            "https://marketplace.visualstudio.com/_apis/public/gallery/extensionquery"
        );
    }
}
