use crate::shared::Result;
use anyhow::Context;

/// Share of `outdated` in `installed`, in percent, rounded to two decimals.
///
/// Returns `0.0` when either side is zero. Rounding is half away from zero.
pub fn percentage(installed: u64, outdated: u64) -> f64 {
    if installed == 0 || outdated == 0 {
        return 0.0;
    }

    let raw = outdated as f64 * 100.0 / installed as f64;
    (raw * 100.0).round() / 100.0
}

/// Same as [`percentage`] for counts given as decimal text (e.g. read back from a report).
pub fn percentage_from_strs(installed: &str, outdated: &str) -> Result<f64> {
    let installed: u64 = installed
        .trim()
        .parse()
        .with_context(|| format!("Invalid installed count: {:?}", installed))?;
    let outdated: u64 = outdated
        .trim()
        .parse()
        .with_context(|| format!("Invalid outdated count: {:?}", outdated))?;

    Ok(percentage(installed, outdated))
}
