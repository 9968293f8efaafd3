use crate::rot_analysis::domain::{PackageInfo, RotResult};

/// AnalysisResponse - Internal response DTO from the rot analysis use case
///
/// Holds the finished counters; formatting is left to the adapters.
#[derive(Debug, Clone)]
pub struct AnalysisResponse {
    /// Analyzed package (or the `unknown` sentinel)
    pub package_info: PackageInfo,
    /// Per-category counters
    pub result: RotResult,
    /// Number of outdated entries left out because of an unknown category
    pub skipped_entries: usize,
}

impl AnalysisResponse {
    pub fn new(package_info: PackageInfo, result: RotResult, skipped_entries: usize) -> Self {
        Self {
            package_info,
            result,
            skipped_entries,
        }
    }
}
