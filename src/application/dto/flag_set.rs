/// FlagSet - the boolean switches accepted on the command line
///
/// All default to false. Built once at startup and never mutated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagSet {
    /// Include per-category lists of outdated packages
    pub long: bool,
    /// Print step-by-step diagnostics to stderr
    pub verbose: bool,
    /// Emit a JSON document instead of tables
    pub json: bool,
}

impl FlagSet {
    pub fn new(long: bool, verbose: bool, json: bool) -> Self {
        Self {
            long,
            verbose,
            json,
        }
    }

    /// Switches a behavior on when either side enables it
    pub fn union(self, other: FlagSet) -> FlagSet {
        FlagSet {
            long: self.long || other.long,
            verbose: self.verbose || other.verbose,
            json: self.json || other.json,
        }
    }
}
