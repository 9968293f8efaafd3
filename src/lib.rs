//! rodeps - rotten dependencies reporter for npm projects
//!
//! This library measures how outdated the dependencies of an npm project
//! are, per dependency category, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`rot_analysis`): Counters, categories and the pure aggregator
//! - **Application Layer** (`application`): Use case, DTOs, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): npm process runner, filesystem, console and formatters
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use rodeps::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create use case with injected adapters
//! let use_case = AnalyzeRotUseCase::new(
//!     FileSystemManifestReader::new(),
//!     ProcessCommandRunner::new(),
//!     StderrProgressReporter::new(false),
//! );
//!
//! // Execute
//! let request = AnalysisRequest::for_project(PathBuf::from("."));
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let model = RotReadModelBuilder::build(&response, true);
//! let output = TableFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod rot_analysis;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
    pub use crate::adapters::outbound::filesystem::FileSystemManifestReader;
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TableFormatter};
    pub use crate::adapters::outbound::process::ProcessCommandRunner;
    pub use crate::application::dto::{AnalysisRequest, AnalysisResponse, FlagSet, OutputFormat};
    pub use crate::application::read_models::{RotReadModel, RotReadModelBuilder};
    pub use crate::application::use_cases::AnalyzeRotUseCase;
    pub use crate::ports::outbound::{
        CommandInvocation, CommandOutput, CommandRunner, ManifestReader, OutputPresenter,
        ProgressReporter, RotFormatter,
    };
    pub use crate::rot_analysis::domain::{
        Category, CategoryCounters, OutdatedVersions, PackageInfo, RotResult,
    };
    pub use crate::rot_analysis::services::{percentage, Aggregator};
    pub use crate::shared::Result;
}
