/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod analysis_request;
mod analysis_response;
mod flag_set;
mod output_format;

pub use analysis_request::{AnalysisRequest, DEFAULT_QUERY_TIMEOUT};
pub use analysis_response::AnalysisResponse;
pub use flag_set::FlagSet;
pub use output_format::OutputFormat;
