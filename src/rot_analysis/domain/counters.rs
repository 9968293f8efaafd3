use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Versions reported by `npm outdated` for one package.
///
/// npm omits `current` for packages that are declared but not installed,
/// so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutdatedVersions {
    #[serde(default)]
    pub current: Option<String>,
    #[serde(default)]
    pub wanted: Option<String>,
    #[serde(default)]
    pub latest: Option<String>,
}

impl OutdatedVersions {
    pub fn new(current: Option<String>, wanted: Option<String>, latest: Option<String>) -> Self {
        Self {
            current,
            wanted,
            latest,
        }
    }

    /// Installed version lags behind what the declared range resolves to
    pub fn is_behind_wanted(&self) -> bool {
        self.current != self.wanted
    }

    /// The declared range itself lags behind the newest published version
    pub fn is_behind_latest(&self) -> bool {
        self.wanted != self.latest
    }
}

/// Counters for a single category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCounters {
    pub installed: u64,
    pub outdated: u64,
    pub outdated_wanted: u64,
    pub outdated_latest: u64,
    #[serde(default)]
    pub packages: BTreeMap<String, OutdatedVersions>,
}

impl CategoryCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_outdated(&self) -> bool {
        self.outdated > 0
    }

    pub(crate) fn add_installed(&mut self, count: u64) {
        self.installed += count;
    }

    /// Counts one outdated entry. Does not touch the package mapping.
    pub(crate) fn record_outdated(&mut self, versions: &OutdatedVersions) {
        self.outdated += 1;
        if versions.is_behind_wanted() {
            self.outdated_wanted += 1;
        }
        if versions.is_behind_latest() {
            self.outdated_latest += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn versions(current: &str, wanted: &str, latest: &str) -> OutdatedVersions {
        OutdatedVersions::new(
            Some(current.to_string()),
            Some(wanted.to_string()),
            Some(latest.to_string()),
        )
    }

    #[test]
    fn test_new_counters_are_zeroed() {
        let counters = CategoryCounters::new();
        assert_eq!(counters.installed, 0);
        assert_eq!(counters.outdated, 0);
        assert_eq!(counters.outdated_wanted, 0);
        assert_eq!(counters.outdated_latest, 0);
        assert!(counters.packages.is_empty());
        assert!(!counters.has_outdated());
    }

    #[test]
    fn test_record_outdated_behind_latest_only() {
        let mut counters = CategoryCounters::new();
        counters.record_outdated(&versions("1.0.0", "1.0.0", "1.2.0"));

        assert_eq!(counters.outdated, 1);
        assert_eq!(counters.outdated_wanted, 0);
        assert_eq!(counters.outdated_latest, 1);
    }

    #[test]
    fn test_record_outdated_behind_wanted_only() {
        let mut counters = CategoryCounters::new();
        counters.record_outdated(&versions("0.1.0", "0.2.0", "0.2.0"));

        assert_eq!(counters.outdated, 1);
        assert_eq!(counters.outdated_wanted, 1);
        assert_eq!(counters.outdated_latest, 0);
    }

    #[test]
    fn test_missing_current_counts_as_behind_wanted() {
        let missing = OutdatedVersions::new(None, Some("1.0.0".to_string()), Some("1.0.0".to_string()));
        assert!(missing.is_behind_wanted());
        assert!(!missing.is_behind_latest());
    }

    #[test]
    fn test_all_missing_versions_compare_equal() {
        let empty = OutdatedVersions::default();
        assert!(!empty.is_behind_wanted());
        assert!(!empty.is_behind_latest());
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let mut counters = CategoryCounters::new();
        counters.add_installed(2);
        counters.record_outdated(&versions("1.0.0", "1.1.0", "2.0.0"));

        let json = serde_json::to_value(&counters).unwrap();
        assert_eq!(json["installed"], 2);
        assert_eq!(json["outdated"], 1);
        assert_eq!(json["outdatedWanted"], 1);
        assert_eq!(json["outdatedLatest"], 1);
        assert!(json["packages"].as_object().unwrap().is_empty());
    }
}
