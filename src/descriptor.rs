//! Tool descriptor parsing.
//!
//! Every tool directory carries a `metadata.json` file describing the
//! tool. All fields are optional; missing values fall back to defaults
//! derived from the directory itself.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ToolshedError};

/// Fixed name of the per-tool descriptor file.
pub const DESCRIPTOR_FILE: &str = "metadata.json";

/// Parsed contents of a `metadata.json` descriptor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolDescriptor {
    /// Display name; the folder name is used when absent.
    pub name: Option<String>,

    /// Free-form description shown in the downstream application.
    #[serde(default)]
    pub description: String,

    /// Opaque identifier assigned by the submitter.
    pub id: Option<String>,
}

impl ToolDescriptor {
    /// Read and parse a descriptor file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ToolshedError::MalformedDescriptor(format!("{}: {}", path.display(), e)))
    }
}
