use crate::rot_analysis::domain::PackageInfo;
use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for probing the project's package.json
pub trait ManifestReader {
    /// Returns whether package.json exists in the project directory
    fn manifest_exists(&self, project_path: &Path) -> bool;

    /// Reads the analyzed package's name and version
    ///
    /// Fields absent from the manifest are reported as `"unknown"`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - package.json cannot be read (missing, permissions, not a regular file)
    /// - package.json is not valid JSON
    fn read_package_info(&self, project_path: &Path) -> Result<PackageInfo>;
}
