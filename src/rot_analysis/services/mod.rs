mod aggregator;
mod lenient_json;
mod percentage;

pub use aggregator::{AggregationOutcome, Aggregator, SkippedEntry};
pub use lenient_json::parse_lenient;
pub use percentage::{percentage, percentage_from_strs};
