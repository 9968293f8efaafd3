use crate::rot_analysis::domain::{Category, OutdatedVersions, RotResult};
use serde_json::Value;

/// An outdated entry that could not be attributed to a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Package name (the key in the outdated listing)
    pub package: String,
    /// Declared `type`, if the entry had a string one
    pub declared_type: Option<String>,
}

/// Aggregation output: the filled result plus every entry left out of it
#[derive(Debug, Clone)]
pub struct AggregationOutcome {
    pub result: RotResult,
    pub skipped: Vec<SkippedEntry>,
}

/// Aggregator service folding npm reports into per-category counters
///
/// This service contains pure business logic. It has no I/O dependencies;
/// reporting skipped entries is left to the caller.
pub struct Aggregator;

impl Aggregator {
    /// Folds both npm reports into `result`
    ///
    /// # Arguments
    /// * `result` - A fresh result; counts are accumulated onto it
    /// * `installed_tree` - Parsed `npm ls --long --json` output
    /// * `outdated_listing` - Parsed `npm outdated --json --long` output
    ///
    /// # Returns
    /// The filled result and the outdated entries whose `type` was not recognized
    pub fn aggregate(
        mut result: RotResult,
        installed_tree: &Value,
        outdated_listing: &Value,
    ) -> AggregationOutcome {
        Self::count_installed(&mut result, installed_tree);
        let skipped = Self::count_outdated(&mut result, outdated_listing);

        AggregationOutcome { result, skipped }
    }

    fn count_installed(result: &mut RotResult, installed_tree: &Value) {
        for category in Category::TRACKED {
            let count = installed_tree
                .get(category.key())
                .map(Self::entry_count)
                .unwrap_or(0);

            result.counters_mut(category).add_installed(count);
            result.counters_mut(Category::All).add_installed(count);
        }
    }

    fn entry_count(section: &Value) -> u64 {
        match section {
            Value::Object(map) => map.len() as u64,
            Value::Array(items) => items.len() as u64,
            _ => 0,
        }
    }

    fn count_outdated(result: &mut RotResult, outdated_listing: &Value) -> Vec<SkippedEntry> {
        let mut skipped = Vec::new();

        let Some(entries) = outdated_listing.as_object() else {
            return skipped;
        };

        for (package, entry) in entries {
            let declared_type = entry.get("type").and_then(Value::as_str);

            let Some(category) = declared_type.and_then(Category::tracked_from_key) else {
                skipped.push(SkippedEntry {
                    package: package.clone(),
                    declared_type: declared_type.map(String::from),
                });
                continue;
            };

            let versions = Self::versions_of(entry);

            result.counters_mut(Category::All).record_outdated(&versions);

            let counters = result.counters_mut(category);
            counters.record_outdated(&versions);
            // Last write wins if npm ever repeats a key
            counters.packages.insert(package.clone(), versions);
        }

        skipped
    }

    fn versions_of(entry: &Value) -> OutdatedVersions {
        let field = |name: &str| entry.get(name).and_then(Value::as_str).map(String::from);
        OutdatedVersions::new(field("current"), field("wanted"), field("latest"))
    }
}
