/// Crate-wide Result alias. Typed failures live in [`super::error::RodepsError`]
/// and are converted into `anyhow::Error` at the point they are raised.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
