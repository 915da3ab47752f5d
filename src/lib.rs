//! Toolshed - community tool catalog generator
//!
//! Walks a directory tree of community-submitted tool folders, validates
//! each one against a small set of structural rules, and emits the
//! aggregated JSON registry consumed by the downstream application.

pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod processor;
pub mod scanner;
pub mod timestamp;

pub use error::{Result, ToolshedError};
