//! Catalog assembly and serialization.
//!
//! The aggregator owns the growing `tools` mapping and is the only
//! component that mutates it: seed one empty list per discovered
//! category, fold processor results in, sort, stamp, serialize.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::processor::{self, ProcessedTool};
use crate::scanner;
use crate::timestamp::{TimestampSource, now_iso};

/// Static schema version stamped into every generated catalog.
pub const CATALOG_VERSION: &str = "1.0";

/// One tool entry in the generated catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    pub name: String,
    pub description: String,
    pub folder: String,
    pub updated_at: String,

    /// Extra files shipped alongside the main tool file. The key is
    /// omitted from the output when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,

    /// Submitter-assigned identifier. Omitted when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// The aggregated registry written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub version: String,
    pub generated_at: String,
    pub tools: BTreeMap<String, Vec<ToolRecord>>,
}

impl Catalog {
    /// Serialize with 2-space indentation for reviewable diffs.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the catalog to a file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let mut json = self.to_json_pretty()?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }

    /// Total number of records across all categories.
    pub fn len(&self) -> usize {
        self.tools.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Folds processed tools into the catalog document.
#[derive(Debug)]
pub struct Aggregator {
    tools: BTreeMap<String, Vec<ToolRecord>>,
}

impl Aggregator {
    /// Seed one empty list per discovered category.
    pub fn new(categories: &[String]) -> Self {
        let tools = categories
            .iter()
            .map(|category| (category.clone(), Vec::new()))
            .collect();
        Self { tools }
    }

    /// Append a processed tool to its category list.
    ///
    /// A category outside the discovered set means the processor derived
    /// something the scanner never listed; the record is dropped with a
    /// warning rather than silently growing the key set.
    pub fn fold(&mut self, tool: ProcessedTool) {
        match self.tools.get_mut(&tool.category) {
            Some(list) => list.push(tool.record),
            None => log::warn!(
                "Dropping tool '{}': category '{}' is not a directory under the tools root",
                tool.record.name,
                tool.category
            ),
        }
    }

    /// Sort each category list by display name and stamp the document.
    ///
    /// The comparison lowercases both names and breaks ties on the raw
    /// string, which keeps the sort idempotent.
    pub fn finish(mut self) -> Catalog {
        for list in self.tools.values_mut() {
            list.sort_by(|a, b| {
                a.name
                    .to_lowercase()
                    .cmp(&b.name.to_lowercase())
                    .then_with(|| a.name.cmp(&b.name))
            });
        }
        Catalog {
            version: CATALOG_VERSION.to_string(),
            generated_at: now_iso(),
            tools: self.tools,
        }
    }
}

/// Per-category line in the run summary.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub category: String,
    pub tools: usize,
    pub with_dependencies: usize,
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone)]
pub struct Summary {
    pub total: usize,
    pub categories: Vec<CategoryCount>,
}

impl Summary {
    pub fn of(catalog: &Catalog) -> Self {
        let categories = catalog
            .tools
            .iter()
            .map(|(category, list)| CategoryCount {
                category: category.clone(),
                tools: list.len(),
                with_dependencies: list.iter().filter(|t| !t.dependencies.is_empty()).count(),
            })
            .collect();
        Self {
            total: catalog.len(),
            categories,
        }
    }
}

/// Run the full pipeline: discover categories and descriptors, process
/// each descriptor, aggregate.
///
/// Per-tool failures are logged and skipped inside the processor; only
/// root-level filesystem problems surface as errors here.
pub fn generate(root: &Path, timestamps: &dyn TimestampSource) -> Result<Catalog> {
    let categories = scanner::discover_categories(root)?;
    let descriptors = scanner::discover_descriptors(root)?;
    log::info!(
        "Discovered {} categories and {} descriptors under {}",
        categories.len(),
        descriptors.len(),
        root.display()
    );

    let mut aggregator = Aggregator::new(&categories);
    for descriptor in &descriptors {
        if let Some(tool) = processor::process(root, descriptor, timestamps) {
            aggregator.fold(tool);
        }
    }
    Ok(aggregator.finish())
}
