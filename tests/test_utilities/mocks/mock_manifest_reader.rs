use std::path::Path;
use rodeps::prelude::*;

/// Mock ManifestReader for testing
pub struct MockManifestReader {
    pub exists: bool,
    pub package_info: Option<PackageInfo>,
}

impl MockManifestReader {
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            exists: true,
            package_info: Some(PackageInfo::new(name.to_string(), version.to_string())),
        }
    }

    /// package.json is present but cannot be parsed
    pub fn unreadable() -> Self {
        Self {
            exists: true,
            package_info: None,
        }
    }

    pub fn missing() -> Self {
        Self {
            exists: false,
            package_info: None,
        }
    }
}

impl ManifestReader for MockManifestReader {
    fn manifest_exists(&self, _project_path: &Path) -> bool {
        self.exists
    }

    fn read_package_info(&self, _project_path: &Path) -> Result<PackageInfo> {
        match &self.package_info {
            Some(info) => Ok(info.clone()),
            None => anyhow::bail!("Mock package.json read failure"),
        }
    }
}
