/// Process adapters for running the package manager
mod command_runner;

pub use command_runner::ProcessCommandRunner;
