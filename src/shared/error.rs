use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// The amount of rotten dependencies is reported in the output payload,
/// never through the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report produced
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing manifest, failed query, bad config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the rotten dependencies analysis.
#[derive(Debug, Error)]
pub enum RodepsError {
    #[error("package.json file not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse package.json file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that package.json contains valid JSON")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("`{query}` failed\nDetails: {details}\n\n💡 Hint: Run the command manually in the project directory to inspect its output")]
    QueryFailed { query: String, details: String },

    #[error("`{query}` timed out after {timeout:?}\n\n💡 Hint: Increase `timeout_secs` in rodeps.config.yml if the project is large")]
    QueryTimeout { query: String, timeout: Duration },

    #[error("Failed to start `{program}`\nDetails: {details}\n\n💡 Hint: Make sure npm is installed and on your PATH, or set `npm_command` in rodeps.config.yml")]
    CommandSpawnError { program: String, details: String },

    #[error("Invalid config: {message}\n\n💡 Hint: {hint}")]
    InvalidConfig { message: String, hint: String },
}
