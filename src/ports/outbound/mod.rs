/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (npm, file system, console).
pub mod command_runner;
pub mod formatter;
pub mod manifest_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use command_runner::{CommandInvocation, CommandOutput, CommandRunner};
pub use formatter::RotFormatter;
pub use manifest_reader::ManifestReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
