// vsix/src/install.rs
//! Editor invocation and artifact cleanup.

use std::fs;
use std::path::Path;
use std::process::Command as StdCommand;

use tracing::{debug, warn};
use vsix_common::config::Config;
use vsix_common::error::{Result, VsixError};

/// Invokes the configured editor to install the downloaded package,
/// synchronously. A non-zero exit is an installation error carrying the
/// editor's stderr.
pub fn install(config: &Config, artifact_path: &Path) -> Result<()> {
    debug!(
        "Running {} --install-extension {}",
        config.editor_bin,
        artifact_path.display()
    );
    let output = StdCommand::new(&config.editor_bin)
        .arg("--install-extension")
        .arg(artifact_path)
        .output()
        .map_err(|e| {
            VsixError::CommandExec(format!("Failed to run '{}': {}", config.editor_bin, e))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(VsixError::Install(format!(
            "'{} --install-extension {}' failed with {}: {}",
            config.editor_bin,
            artifact_path.display(),
            output.status,
            stderr.trim()
        )));
    }
    Ok(())
}

/// Best-effort removal of the downloaded artifact after a successful install.
/// Failure is logged and does not affect the exit status.
pub fn cleanup(artifact_path: &Path) {
    match fs::remove_file(artifact_path) {
        Ok(()) => debug!("Removed {}", artifact_path.display()),
        Err(e) => warn!("Could not remove {}: {}", artifact_path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::tempdir;

    use super::*;

    fn config_with_editor(editor_bin: &str) -> Config {
        Config {
            api_base_url: "https://marketplace.visualstudio.com/_apis/public/gallery".to_string(),
            artifact_domain: None,
            extensions_dir: PathBuf::from("extensions"),
            editor_bin: editor_bin.to_string(),
        }
    }

    #[test]
    fn zero_exit_is_success() {
        let config = config_with_editor("true");
        assert!(install(&config, Path::new("some.vsix")).is_ok());
    }

    #[test]
    fn nonzero_exit_is_installation_error() {
        let config = config_with_editor("false");
        let err = install(&config, Path::new("some.vsix")).unwrap_err();
        assert!(matches!(err, VsixError::Install(_)), "got: {err}");
    }

    #[test]
    fn missing_editor_binary_is_command_exec_error() {
        let config = config_with_editor("vsix-test-editor-that-does-not-exist");
        let err = install(&config, Path::new("some.vsix")).unwrap_err();
        assert!(matches!(err, VsixError::CommandExec(_)), "got: {err}");
    }

    #[test]
    fn cleanup_removes_artifact() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("publisher.extension-1.0.0.vsix");
        fs::write(&artifact, "bytes").unwrap();

        cleanup(&artifact);
        assert!(!artifact.exists());
    }

    #[test]
    fn cleanup_tolerates_missing_artifact() {
        let dir = tempdir().unwrap();
        cleanup(&dir.path().join("never-downloaded.vsix"));
    }
}
