use serde::{Deserialize, Serialize};

/// Dependency category as declared in package.json, plus the synthetic `all` aggregate.
///
/// Variant order drives the ordering of every report (JSON keys and table rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    All,
    Dependencies,
    DevDependencies,
    OptionalDependencies,
    PeerDependencies,
}

impl Category {
    /// The real manifest sections, in report order. Excludes `All`.
    pub const TRACKED: [Category; 4] = [
        Category::Dependencies,
        Category::DevDependencies,
        Category::OptionalDependencies,
        Category::PeerDependencies,
    ];

    /// Every category including the aggregate, in report order.
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Dependencies,
        Category::DevDependencies,
        Category::OptionalDependencies,
        Category::PeerDependencies,
    ];

    /// Key used by npm and by the JSON report
    pub fn key(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Dependencies => "dependencies",
            Category::DevDependencies => "devDependencies",
            Category::OptionalDependencies => "optionalDependencies",
            Category::PeerDependencies => "peerDependencies",
        }
    }

    /// Resolves the `type` field of an outdated entry.
    ///
    /// Only the four real sections match; `"all"` is not a declarable type.
    pub fn tracked_from_key(key: &str) -> Option<Category> {
        Self::TRACKED.into_iter().find(|c| c.key() == key)
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, Category::All)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
