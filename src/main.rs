use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::path::Path;

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

use toolshed::catalog::{self, Summary};
use toolshed::timestamp::GitTimestamps;

fn setup_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting catalog run");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }
    if config.debug {
        println!("{}", "Debug mode enabled".yellow());
    }

    match &cli.command {
        // Default: build with configured paths
        None => handle_build_command(None, None, config),
        Some(Commands::Build { root, output }) => {
            handle_build_command(root.as_deref(), output.as_deref(), config)
        }
        Some(Commands::Check { root }) => handle_check_command(root.as_deref(), config),
    }
}

fn handle_build_command(root: Option<&Path>, output: Option<&Path>, config: &Config) -> Result<()> {
    let root = root.map(Path::to_path_buf).unwrap_or_else(|| config.tools_root.clone());
    let output = output.map(Path::to_path_buf).unwrap_or_else(|| config.output.clone());

    info!("Building catalog from {}", root.display());
    println!("{} {}", "Scanning:".cyan(), root.display());

    let catalog = catalog::generate(&root, &GitTimestamps).context("Failed to generate catalog")?;
    catalog
        .write_to(&output)
        .context(format!("Failed to write catalog to {}", output.display()))?;

    print_summary(&Summary::of(&catalog));
    println!("{} {}", "Wrote:".green(), output.display());
    Ok(())
}

fn handle_check_command(root: Option<&Path>, config: &Config) -> Result<()> {
    let root = root.map(Path::to_path_buf).unwrap_or_else(|| config.tools_root.clone());

    info!("Checking tools under {}", root.display());
    println!("{} {}", "Scanning:".cyan(), root.display());

    let catalog = catalog::generate(&root, &GitTimestamps).context("Failed to generate catalog")?;

    print_summary(&Summary::of(&catalog));
    println!("{}", "Check complete, nothing written".cyan());
    Ok(())
}

fn print_summary(summary: &Summary) {
    println!("{} {} tools", "Cataloged:".green(), summary.total);
    for line in &summary.categories {
        println!(
            "  {}: {} tools, {} with dependencies",
            line.category, line.tools, line.with_dependencies
        );
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments first so verbosity can shape the log filter
    let cli = Cli::parse();
    setup_logging(cli.is_verbose());

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Catalog run failed")?;

    Ok(())
}
