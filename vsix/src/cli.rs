// vsix/src/cli.rs
//! Defines the command-line argument structure using clap.
use clap::{ArgAction, Parser};
use colored::Colorize;
use tracing::debug;
use vsix_common::config::Config;
use vsix_common::error::Result;
use vsix_common::model::ExtensionId;

use crate::install;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = "vsix", bin_name = "vsix")]
pub struct CliArgs {
    /// Extension identifier in the form `publisher.extension`
    pub identifier: Option<String>,

    /// Download a specific version instead of the latest
    #[arg(long, value_name = "VERSION")]
    pub install_version: Option<String>,

    /// Re-download the package even if it is already cached
    #[arg(long)]
    pub force: bool,

    /// Fetch the package without invoking the editor; keeps the artifact
    #[arg(long)]
    pub download_only: bool,

    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl CliArgs {
    pub async fn run(&self, config: &Config, identifier: &str) -> Result<()> {
        let id: ExtensionId = identifier.parse()?;

        println!("{} extension: {}", "Fetching".bold(), id);
        let artifact_path =
            vsix_net::fetch(config, &id, self.install_version.as_deref(), self.force).await?;
        println!("Downloaded to: {}", artifact_path.display());

        if self.download_only {
            debug!("--download-only set; skipping editor invocation");
            return Ok(());
        }

        println!("Installing extension with {}...", config.editor_bin);
        install::install(config, &artifact_path)?;
        println!("{} installed successfully", id.to_string().green());

        // Cleanup only runs after a successful install; failure is non-fatal.
        install::cleanup(&artifact_path);
        Ok(())
    }
}
