/// Manifest file expected at the project root
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Sentinel used when the manifest cannot tell us who we are analyzing
pub const UNKNOWN: &str = "unknown";

/// Name and version of the analyzed package, as read from package.json
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    name: String,
    version: String,
}

impl PackageInfo {
    pub fn new(name: String, version: String) -> Self {
        Self { name, version }
    }

    /// Fallback used when the manifest is unreadable
    pub fn unknown() -> Self {
        Self::new(UNKNOWN.to_string(), UNKNOWN.to_string())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl std::fmt::Display for PackageInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}
