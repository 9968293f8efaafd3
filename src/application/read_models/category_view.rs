//! Per-category views used by both formatters

use crate::rot_analysis::domain::Category;
use serde::{Deserialize, Serialize};

/// The three rot percentages of a category
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentagesView {
    /// outdated / installed
    pub rotten_deps_percentage: f64,
    /// outdatedWanted / installed
    pub rotten_wanted_deps_percentage: f64,
    /// outdatedLatest / installed
    pub rotten_latest_deps_percentage: f64,
}

/// One row of the score table
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRowView {
    pub category: Category,
    pub installed: u64,
    pub outdated: u64,
    pub outdated_wanted: u64,
    pub outdated_latest: u64,
    pub percentages: PercentagesView,
}

/// Outdated packages of one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutdatedListView {
    pub category: Category,
    pub packages: Vec<OutdatedPackageView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutdatedPackageView {
    pub name: String,
    pub current: Option<String>,
    pub wanted: Option<String>,
    pub latest: Option<String>,
}
