//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs built from the analysis
//! response, shared by the JSON and table formatters.

pub mod category_view;
pub mod rot_read_model;
pub mod rot_read_model_builder;

pub use category_view::{CategoryRowView, OutdatedListView, OutdatedPackageView, PercentagesView};
pub use rot_read_model::{PackageView, ReportMetadataView, RotReadModel};
pub use rot_read_model_builder::RotReadModelBuilder;
