/// Console adapters for diagnostics (stderr) and the report itself (stdout)
mod progress_reporter;
mod stdout_presenter;

pub use progress_reporter::StderrProgressReporter;
pub use stdout_presenter::StdoutPresenter;
