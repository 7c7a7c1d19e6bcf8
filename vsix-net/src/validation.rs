// vsix-net/src/validation.rs
use url::Url;
use vsix_common::error::{Result, VsixError};

/// Validates a URL before any request is issued. HTTPS is required for
/// remote hosts; plain HTTP is accepted for loopback addresses only.
pub fn validate_url(url_str: &str) -> Result<()> {
    let url = Url::parse(url_str)
        .map_err(|e| VsixError::ValidationError(format!("Failed to parse URL '{url_str}': {e}")))?;
    match url.scheme() {
        "https" => Ok(()),
        "http" => {
            let host = url.host_str().unwrap_or_default();
            if host == "localhost" || host == "127.0.0.1" || host == "::1" {
                Ok(())
            } else {
                Err(VsixError::ValidationError(format!(
                    "Invalid URL scheme for '{url_str}': plain http is only allowed for loopback hosts"
                )))
            }
        }
        other => Err(VsixError::ValidationError(format!(
            "Invalid URL scheme for '{url_str}': Must be https, but got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https() {
        assert!(validate_url("https://marketplace.visualstudio.com/_apis").is_ok());
    }

    #[test]
    fn accepts_http_loopback() {
        assert!(validate_url("http://127.0.0.1:8080/query").is_ok());
        assert!(validate_url("http://localhost/query").is_ok());
    }

    #[test]
    fn rejects_remote_http_and_other_schemes() {
        assert!(matches!(
            validate_url("http://marketplace.visualstudio.com/_apis"),
            Err(VsixError::ValidationError(_))
        ));
        assert!(matches!(
            validate_url("ftp://example.com/file.vsix"),
            Err(VsixError::ValidationError(_))
        ));
        assert!(matches!(
            validate_url("not a url"),
            Err(VsixError::ValidationError(_))
        ));
    }
}
