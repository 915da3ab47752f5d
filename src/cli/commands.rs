//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - build: generate the catalog and write it to disk
//! - check: run the pipeline without writing anything

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Toolshed - community tool catalog generator
#[derive(Parser, Debug)]
#[command(name = "toolshed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the catalog and write it to disk
    Build {
        /// Tools root directory (overrides config)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Output file path (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the full pipeline without writing the catalog
    Check {
        /// Tools root directory (overrides config)
        #[arg(short, long)]
        root: Option<PathBuf>,
    },
}
