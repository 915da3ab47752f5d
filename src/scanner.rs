//! Directory tree scanning.
//!
//! Finds the authoritative category set (immediate subdirectories of the
//! tools root) and every tool descriptor anywhere under it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::descriptor::DESCRIPTOR_FILE;
use crate::error::{Result, ToolshedError};

/// List immediate subdirectory names of the tools root, sorted ascending.
///
/// This set decides which category keys exist in the catalog,
/// independent of which categories contain valid tools.
pub fn discover_categories(root: &Path) -> Result<Vec<String>> {
    if !root.is_dir() {
        return Err(ToolshedError::RootNotFound(root.display().to_string()));
    }

    let mut categories = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            categories.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    categories.sort();
    Ok(categories)
}

/// Find every descriptor file under the root, at any depth.
///
/// Traversal order is unspecified; ordering is imposed later by the
/// aggregator. Unreadable entries are skipped with a warning.
pub fn discover_descriptors(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ToolshedError::RootNotFound(root.display().to_string()));
    }

    let pattern = root.join("**").join(DESCRIPTOR_FILE);
    let pattern = pattern.to_string_lossy().into_owned();
    let entries = glob::glob(&pattern).map_err(|e| ToolshedError::Scan(e.to_string()))?;

    let mut descriptors = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => descriptors.push(path),
            Ok(_) => {}
            Err(e) => log::warn!("Skipping unreadable entry: {}", e),
        }
    }
    Ok(descriptors)
}
