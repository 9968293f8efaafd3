use super::category::Category;
use super::counters::CategoryCounters;
use serde::{Deserialize, Serialize};

/// Counters for every category of a single run.
///
/// Built fresh for each run, filled by the aggregator and then only read.
/// `all.installed` is the sum of the installed counts of the four real
/// sections; `outdated <= installed` is expected but not enforced because
/// both numbers come from independent npm queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotResult {
    all: CategoryCounters,
    dependencies: CategoryCounters,
    dev_dependencies: CategoryCounters,
    optional_dependencies: CategoryCounters,
    peer_dependencies: CategoryCounters,
}

impl RotResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counters(&self, category: Category) -> &CategoryCounters {
        match category {
            Category::All => &self.all,
            Category::Dependencies => &self.dependencies,
            Category::DevDependencies => &self.dev_dependencies,
            Category::OptionalDependencies => &self.optional_dependencies,
            Category::PeerDependencies => &self.peer_dependencies,
        }
    }

    pub(crate) fn counters_mut(&mut self, category: Category) -> &mut CategoryCounters {
        match category {
            Category::All => &mut self.all,
            Category::Dependencies => &mut self.dependencies,
            Category::DevDependencies => &mut self.dev_dependencies,
            Category::OptionalDependencies => &mut self.optional_dependencies,
            Category::PeerDependencies => &mut self.peer_dependencies,
        }
    }

    pub fn all(&self) -> &CategoryCounters {
        &self.all
    }

    /// Iterates every category, aggregate first
    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryCounters)> {
        Category::ALL.into_iter().map(move |c| (c, self.counters(c)))
    }
}
