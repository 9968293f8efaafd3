/// Domain layer - categories, counters and the pure aggregation logic
///
/// Nothing in this module performs I/O; npm output reaches it as parsed JSON.
pub mod domain;
pub mod services;
