use crate::rot_analysis::domain::default_npm_command;
use std::path::PathBuf;
use std::time::Duration;

/// Default bound for each npm query
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(60);

/// AnalysisRequest - Internal request DTO for the rot analysis use case
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Directory containing package.json; npm runs here
    pub project_path: PathBuf,
    /// npm binary to invoke
    pub npm_command: String,
    /// Bound applied to each npm query
    pub query_timeout: Duration,
}

impl AnalysisRequest {
    pub fn new(project_path: PathBuf, npm_command: String, query_timeout: Duration) -> Self {
        Self {
            project_path,
            npm_command,
            query_timeout,
        }
    }

    /// Request with the platform npm binary and the default timeout
    pub fn for_project(project_path: PathBuf) -> Self {
        Self::new(
            project_path,
            default_npm_command().to_string(),
            DEFAULT_QUERY_TIMEOUT,
        )
    }
}
