/// Read-only npm queries the analysis depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManagerQuery {
    /// `ls --long --json`: installed packages grouped by manifest section
    InstalledTree,
    /// `outdated --json --long`: packages whose installed version is not the resolved target
    OutdatedListing,
}

impl PackageManagerQuery {
    pub fn args(&self) -> &'static [&'static str] {
        match self {
            PackageManagerQuery::InstalledTree => &["ls", "--long", "--json"],
            PackageManagerQuery::OutdatedListing => &["outdated", "--json", "--long"],
        }
    }

    /// Full command line for messages, e.g. `npm ls --long --json`
    pub fn command_line(&self, program: &str) -> String {
        format!("{} {}", program, self.args().join(" "))
    }

    /// Short label used in progress output
    pub fn label(&self) -> &'static str {
        match self {
            PackageManagerQuery::InstalledTree => "ls",
            PackageManagerQuery::OutdatedListing => "outdated",
        }
    }
}

/// Name of the npm binary on the current platform
pub fn default_npm_command() -> &'static str {
    if cfg!(windows) {
        "npm.cmd"
    } else {
        "npm"
    }
}
