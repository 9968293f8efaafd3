use crate::ports::outbound::ManifestReader;
use crate::rot_analysis::domain::package_info::UNKNOWN;
use crate::rot_analysis::domain::{PackageInfo, MANIFEST_FILE_NAME};
use crate::shared::error::RodepsError;
use crate::shared::Result;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Maximum manifest size (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemManifestReader adapter for reading package.json
pub struct FileSystemManifestReader;

impl FileSystemManifestReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemManifestReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemManifestReader {
    /// Reads a file after checking that it is a regular file of sane size.
    /// Symbolic links are rejected.
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", MANIFEST_FILE_NAME, e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. Symbolic links are not followed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", MANIFEST_FILE_NAME, e))
    }

    fn string_field(manifest: &Value, field: &str) -> String {
        manifest
            .get(field)
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN)
            .to_string()
    }
}

impl ManifestReader for FileSystemManifestReader {
    fn manifest_exists(&self, project_path: &Path) -> bool {
        project_path.join(MANIFEST_FILE_NAME).exists()
    }

    fn read_package_info(&self, project_path: &Path) -> Result<PackageInfo> {
        let manifest_path = project_path.join(MANIFEST_FILE_NAME);

        let content =
            self.safe_read_file(&manifest_path)
                .map_err(|e| RodepsError::FileReadError {
                    path: manifest_path.clone(),
                    details: e.to_string(),
                })?;

        let manifest: Value =
            serde_json::from_str(&content).map_err(|e| RodepsError::ManifestParseError {
                path: manifest_path.clone(),
                details: e.to_string(),
            })?;

        Ok(PackageInfo::new(
            Self::string_field(&manifest, "name"),
            Self::string_field(&manifest, "version"),
        ))
    }
}
