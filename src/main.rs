//! Link-Harvest main entry point
//!
//! This is the command-line interface for the Link-Harvest link collector.

use anyhow::Context;
use clap::{CommandFactory, Parser};
use link_harvest::config::{load_config_with_hash, Config};
use link_harvest::crawler::harvest;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Link-Harvest: an outbound link collector
///
/// Fetches a page, visits every link it makes to another site, and writes
/// the links with their titles and descriptions to a Markdown file.
#[derive(Parser, Debug)]
#[command(name = "link-harvest")]
#[command(version = "1.0.0")]
#[command(about = "Collects a page's outbound links into a Markdown list", long_about = None)]
struct Cli {
    /// URL of the page to collect links from
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the link list here instead of the configured path
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(url) = cli.url.as_deref() else {
        println!("{}", usage_message());
        return Ok(());
    };

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = load_configuration(cli.config.as_deref())?;
    apply_overrides(&mut config, &cli);

    match harvest(config, url).await {
        Ok(report) => {
            tracing::info!(
                "Harvest of {} complete: {} links ({} failed) written to {}",
                report.root_url,
                report.link_count,
                report.failed_count,
                report.output_path.display()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e).with_context(|| format!("failed to harvest links from {}", url))
        }
    }
}

/// Text printed instead of running when no URL is given
fn usage_message() -> String {
    format!(
        "Please provide a URL as a command-line argument.\n\n{}",
        Cli::command().render_help()
    )
}

/// Applies command-line settings that take precedence over the config file
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(output) = &cli.output {
        config.output.path = output.to_string_lossy().into_owned();
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("link_harvest=info,warn"),
            1 => EnvFilter::new("link_harvest=debug,info"),
            2 => EnvFilter::new("link_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file if one was given, defaults otherwise
fn load_configuration(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    Ok(config)
}
