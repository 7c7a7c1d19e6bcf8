// vsix/src/main.rs
use std::process;

use clap::Parser;
use colored::Colorize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use vsix_common::config::Config;

mod cli;
mod install;

use cli::CliArgs;

#[tokio::main]
async fn main() {
    let cli_args = CliArgs::parse();

    let level_filter = match cli_args.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("VSIX_LOG")
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .without_time()
        .try_init();

    let Some(identifier) = cli_args.identifier.as_deref() else {
        eprintln!("Please provide an extension identifier as an argument");
        eprintln!("Example: vsix publisher.extension-name");
        process::exit(1);
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: Could not load config: {}", "Error".red().bold(), e);
            process::exit(1);
        }
    };

    if let Err(e) = cli_args.run(&config, identifier).await {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}
