//! Rot read model for query operations
//!
//! This module provides the main read model struct that aggregates
//! all report data in a render-ready format.

use super::category_view::{CategoryRowView, OutdatedListView, PercentagesView};
use crate::rot_analysis::domain::RotResult;

/// Main read model for the rot report
///
/// Percentages are derived here, at report time, and never stored in the
/// domain result.
#[derive(Debug, Clone)]
pub struct RotReadModel {
    /// Tool and timestamp information
    pub metadata: ReportMetadataView,
    /// Analyzed package
    pub package: PackageView,
    /// Raw counters, serialized as-is in the JSON document
    pub result: RotResult,
    /// One row per category, aggregate first
    pub rows: Vec<CategoryRowView>,
    /// Percentages of the aggregate row
    pub summary: PercentagesView,
    /// Outdated packages per category; empty unless details were requested
    pub outdated_lists: Vec<OutdatedListView>,
}

/// View representation of report metadata
#[derive(Debug, Clone)]
pub struct ReportMetadataView {
    /// Name of the tool that produced the report
    pub tool_name: String,
    /// Version of the tool
    pub tool_version: String,
    /// RFC 3339 timestamp of the run
    pub timestamp: String,
}

/// View representation of the analyzed package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageView {
    pub name: String,
    pub version: String,
}
