//! Builder for constructing RotReadModel from the analysis response

use super::category_view::{CategoryRowView, OutdatedListView, OutdatedPackageView, PercentagesView};
use super::rot_read_model::{PackageView, ReportMetadataView, RotReadModel};
use crate::application::dto::AnalysisResponse;
use crate::rot_analysis::domain::{CategoryCounters, PackageInfo, RotResult};
use crate::rot_analysis::services::percentage;
use chrono::Utc;

/// Name reported in the JSON metadata block
const TOOL_NAME: &str = "rodeps";

/// Builder for constructing RotReadModel from the analysis response
pub struct RotReadModelBuilder;

impl RotReadModelBuilder {
    /// Builds a RotReadModel stamped with the current time
    ///
    /// # Arguments
    /// * `response` - The finished analysis
    /// * `include_details` - Whether to list outdated packages per category (`--long`)
    pub fn build(response: &AnalysisResponse, include_details: bool) -> RotReadModel {
        Self::build_at(response, include_details, Utc::now().to_rfc3339())
    }

    /// Builds a RotReadModel with an explicit timestamp
    pub fn build_at(
        response: &AnalysisResponse,
        include_details: bool,
        timestamp: String,
    ) -> RotReadModel {
        let rows = Self::build_rows(&response.result);
        let summary = Self::percentages_of(response.result.all());
        let outdated_lists = if include_details {
            Self::build_outdated_lists(&response.result)
        } else {
            Vec::new()
        };

        RotReadModel {
            metadata: ReportMetadataView {
                tool_name: TOOL_NAME.to_string(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                timestamp,
            },
            package: Self::build_package(&response.package_info),
            result: response.result.clone(),
            rows,
            summary,
            outdated_lists,
        }
    }

    fn build_package(info: &PackageInfo) -> PackageView {
        PackageView {
            name: info.name().to_string(),
            version: info.version().to_string(),
        }
    }

    fn build_rows(result: &RotResult) -> Vec<CategoryRowView> {
        result
            .iter()
            .map(|(category, counters)| CategoryRowView {
                category,
                installed: counters.installed,
                outdated: counters.outdated,
                outdated_wanted: counters.outdated_wanted,
                outdated_latest: counters.outdated_latest,
                percentages: Self::percentages_of(counters),
            })
            .collect()
    }

    /// Percentages of a category
    pub fn percentages_of(counters: &CategoryCounters) -> PercentagesView {
        PercentagesView {
            rotten_deps_percentage: percentage(counters.installed, counters.outdated),
            rotten_wanted_deps_percentage: percentage(counters.installed, counters.outdated_wanted),
            rotten_latest_deps_percentage: percentage(counters.installed, counters.outdated_latest),
        }
    }

    /// Lists categories with at least one outdated package. The aggregate
    /// holds no package mapping and is never listed.
    fn build_outdated_lists(result: &RotResult) -> Vec<OutdatedListView> {
        result
            .iter()
            .filter(|(category, counters)| !category.is_aggregate() && counters.has_outdated())
            .map(|(category, counters)| OutdatedListView {
                category,
                packages: counters
                    .packages
                    .iter()
                    .map(|(name, versions)| OutdatedPackageView {
                        name: name.clone(),
                        current: versions.current.clone(),
                        wanted: versions.wanted.clone(),
                        latest: versions.latest.clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}
