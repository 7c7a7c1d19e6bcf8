//! Wire types for the marketplace gallery API.

use serde::{Deserialize, Serialize};

/// Filter type selecting extensions by their qualified `publisher.name`.
pub const FILTER_TYPE_EXTENSION_NAME: u32 = 7;
/// Fixed flag set requesting version information in query results.
pub const QUERY_FLAGS: u32 = 914;
/// Accept header value pinning the gallery API version.
pub const API_VERSION_ACCEPT: &str = "application/json;api-version=3.0-preview.1";

#[derive(Debug, Serialize)]
pub struct QueryRequest {
    pub filters: Vec<QueryFilter>,
    pub flags: u32,
}

#[derive(Debug, Serialize)]
pub struct QueryFilter {
    pub criteria: Vec<QueryCriterion>,
}

#[derive(Debug, Serialize)]
pub struct QueryCriterion {
    #[serde(rename = "filterType")]
    pub filter_type: u32,
    pub value: String,
}

impl QueryRequest {
    /// Query body selecting a single extension by qualified identifier.
    pub fn for_identifier(identifier: &str) -> Self {
        Self {
            filters: vec![QueryFilter {
                criteria: vec![QueryCriterion {
                    filter_type: FILTER_TYPE_EXTENSION_NAME,
                    value: identifier.to_string(),
                }],
            }],
            flags: QUERY_FLAGS,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<QueryResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub extensions: Vec<GalleryExtension>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GalleryExtension {
    #[serde(default)]
    pub versions: Vec<GalleryVersion>,
}

#[derive(Debug, Deserialize)]
pub struct GalleryVersion {
    pub version: String,
}

impl QueryResponse {
    /// First listed version of the first matched extension, i.e. the latest
    /// published version. `None` when any element of the
    /// `results[0].extensions[0].versions[0]` path is absent.
    pub fn latest_version(&self) -> Option<&str> {
        self.results
            .first()?
            .extensions
            .first()?
            .versions
            .first()
            .map(|v| v.version.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_gallery_wire_format() {
        let body =
            serde_json::to_value(QueryRequest::for_identifier("publisher.extension")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "filters": [{"criteria": [{"filterType": 7, "value": "publisher.extension"}]}],
                "flags": 914,
            })
        );
    }

    #[test]
    fn extracts_first_listed_version() {
        let response: QueryResponse = serde_json::from_str(
            r#"{"results":[{"extensions":[{"versions":[{"version":"1.0.0"},{"version":"0.9.0"}]}]}]}"#,
        )
        .unwrap();
        assert_eq!(response.latest_version(), Some("1.0.0"));
    }

    #[test]
    fn missing_path_elements_yield_none() {
        for raw in [
            r#"{}"#,
            r#"{"results":[]}"#,
            r#"{"results":[{"extensions":[]}]}"#,
            r#"{"results":[{"extensions":[{"versions":[]}]}]}"#,
        ] {
            let response: QueryResponse = serde_json::from_str(raw).unwrap();
            assert_eq!(response.latest_version(), None, "input: {raw}");
        }
    }
}
