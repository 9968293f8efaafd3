use crate::application::read_models::{PercentagesView, RotReadModel};
use crate::ports::outbound::RotFormatter;
use crate::rot_analysis::domain::{Category, RotResult};
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a RotResult,
    summary: BTreeMap<Category, PercentagesView>,
    metadata: Metadata<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata<'a> {
    tool: &'a str,
    tool_version: &'a str,
    timestamp: &'a str,
    package: PackageRef<'a>,
}

#[derive(Debug, Serialize)]
struct PackageRef<'a> {
    name: &'a str,
    version: &'a str,
}

/// JsonFormatter adapter for the machine-readable report
///
/// Category counters are emitted at the top level under their npm keys,
/// next to a `summary` block of percentages and a `metadata` block.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl RotFormatter for JsonFormatter {
    fn format(&self, model: &RotReadModel) -> Result<String> {
        let report = JsonReport {
            result: &model.result,
            summary: model
                .rows
                .iter()
                .map(|row| (row.category, row.percentages))
                .collect(),
            metadata: Metadata {
                tool: &model.metadata.tool_name,
                tool_version: &model.metadata.tool_version,
                timestamp: &model.metadata.timestamp,
                package: PackageRef {
                    name: &model.package.name,
                    version: &model.package.version,
                },
            },
        };

        let mut json = serde_json::to_string_pretty(&report)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON report: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
