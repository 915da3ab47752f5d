//! CLI module for toolshed - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for building and
//! checking the catalog.

pub mod commands;

pub use commands::Cli;
