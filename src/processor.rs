//! Per-tool processing.
//!
//! Converts one descriptor path into a catalog record. Every failure
//! here is per-tool: it is logged, the tool is dropped, and the run
//! continues. Only the scanner reports fatal conditions.

use std::fs;
use std::path::{Component, Path};

use crate::catalog::ToolRecord;
use crate::descriptor::{DESCRIPTOR_FILE, ToolDescriptor};
use crate::error::{Result, ToolshedError};
use crate::timestamp::{TimestampOutcome, TimestampSource, now_iso};

/// Extension assumed for categories outside the known set.
const DEFAULT_EXTENSION: &str = "py";

/// A successfully processed tool, ready for aggregation.
#[derive(Debug, Clone)]
pub struct ProcessedTool {
    pub category: String,
    pub record: ToolRecord,
}

/// Expected main-file extension for the known host applications.
fn extension_for(category: &str) -> Option<&'static str> {
    match category {
        "blender" | "revit" | "rhino" => Some("py"),
        _ => None,
    }
}

/// Main-file name a tool in the given category must ship.
///
/// Unknown categories warn and fall back to `tool.py`; the tool is
/// still processed.
pub fn main_file_name(category: &str) -> String {
    match extension_for(category) {
        Some(ext) => format!("tool.{}", ext),
        None => {
            log::warn!(
                "Unknown software type '{}', expecting tool.{}",
                category,
                DEFAULT_EXTENSION
            );
            format!("tool.{}", DEFAULT_EXTENSION)
        }
    }
}

/// Process one descriptor path into a catalog record.
///
/// Returns `None` on any per-tool failure; the cause is logged.
pub fn process(
    root: &Path,
    descriptor_path: &Path,
    timestamps: &dyn TimestampSource,
) -> Option<ProcessedTool> {
    match process_inner(root, descriptor_path, timestamps) {
        Ok(tool) => {
            log::info!("Processed tool '{}' ({})", tool.record.name, tool.category);
            Some(tool)
        }
        Err(e) => {
            log::error!("Skipping {}: {}", descriptor_path.display(), e);
            None
        }
    }
}

fn process_inner(
    root: &Path,
    descriptor_path: &Path,
    timestamps: &dyn TimestampSource,
) -> Result<ProcessedTool> {
    let category = derive_category(root, descriptor_path)?;

    let tool_dir = descriptor_path.parent().ok_or_else(|| {
        ToolshedError::PathStructure(format!("{} has no parent directory", descriptor_path.display()))
    })?;
    let folder = tool_dir
        .file_name()
        .ok_or_else(|| {
            ToolshedError::PathStructure(format!("{} has no folder name", tool_dir.display()))
        })?
        .to_string_lossy()
        .to_string();

    let descriptor = ToolDescriptor::load(descriptor_path)?;
    let name = descriptor
        .name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| folder.clone());

    let main_file = main_file_name(&category);
    if !tool_dir.join(&main_file).is_file() {
        return Err(ToolshedError::MissingMainFile(format!(
            "tool '{}' is missing {}",
            name, main_file
        )));
    }

    let dependencies = collect_dependencies(tool_dir, &main_file)?;
    let updated_at = resolve_updated_at(tool_dir, &name, timestamps);

    Ok(ProcessedTool {
        category,
        record: ToolRecord {
            name,
            description: descriptor.description,
            folder,
            updated_at,
            dependencies,
            id: descriptor.id.filter(|id| !id.is_empty()),
        },
    })
}

/// Category is the first path component below the tools root.
fn derive_category(root: &Path, descriptor_path: &Path) -> Result<String> {
    let relative = descriptor_path.strip_prefix(root).map_err(|_| {
        ToolshedError::PathStructure(format!(
            "{} is not under the tools root {}",
            descriptor_path.display(),
            root.display()
        ))
    })?;

    let mut components = relative.components();
    let first = components.next();
    // A descriptor directly under the root has no category directory.
    if components.next().is_none() {
        return Err(ToolshedError::PathStructure(format!(
            "{} sits directly under the tools root, expected <category>/<tool>/{}",
            descriptor_path.display(),
            DESCRIPTOR_FILE
        )));
    }

    match first {
        Some(Component::Normal(name)) => Ok(name.to_string_lossy().to_string()),
        _ => Err(ToolshedError::PathStructure(format!(
            "{} has no usable category segment",
            descriptor_path.display()
        ))),
    }
}

/// Every regular file shipped alongside the descriptor and main file,
/// sorted by name for stable output.
fn collect_dependencies(tool_dir: &Path, main_file: &str) -> Result<Vec<String>> {
    let mut dependencies = Vec::new();
    for entry in fs::read_dir(tool_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().to_string();
        if file_name == DESCRIPTOR_FILE || file_name == main_file {
            continue;
        }
        dependencies.push(file_name);
    }
    dependencies.sort();
    Ok(dependencies)
}

fn resolve_updated_at(tool_dir: &Path, name: &str, timestamps: &dyn TimestampSource) -> String {
    match timestamps.last_modified(tool_dir) {
        TimestampOutcome::Found(ts) => ts,
        TimestampOutcome::NoHistory => {
            log::warn!("Tool '{}' has no history, using current time", name);
            now_iso()
        }
        TimestampOutcome::Failed(reason) => {
            log::warn!(
                "Timestamp lookup failed for '{}' ({}), using current time",
                name,
                reason
            );
            now_iso()
        }
    }
}
