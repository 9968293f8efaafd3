/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
mod test_utilities;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Create a project with a package.json but no way to reach npm.
fn create_manifest_only_project(dir: &std::path::Path) {
    fs::write(
        dir.join("package.json"),
        r#"{ "name": "demo", "version": "1.2.3" }"#,
    )
    .unwrap();
}

/// Write the auto-discovered config file.
fn write_config(dir: &std::path::Path, content: &str) {
    fs::write(dir.join("rodeps.config.yml"), content).unwrap();
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_invalid_yaml_is_an_application_error() {
        let dir = TempDir::new().unwrap();
        create_manifest_only_project(dir.path());
        write_config(dir.path(), "invalid: yaml: [[[broken");

        cargo_bin_cmd!("rodeps")
            .current_dir(dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let dir = TempDir::new().unwrap();
        create_manifest_only_project(dir.path());
        write_config(dir.path(), "timeout_secs: 0\n");

        cargo_bin_cmd!("rodeps")
            .current_dir(dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("timeout_secs must be between 1 and 600"));
    }

    #[test]
    fn test_empty_npm_command_is_rejected() {
        let dir = TempDir::new().unwrap();
        create_manifest_only_project(dir.path());
        write_config(dir.path(), "npm_command: \"\"\n");

        cargo_bin_cmd!("rodeps")
            .current_dir(dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("npm_command must not be empty"));
    }

    #[test]
    fn test_missing_npm_binary_is_an_application_error() {
        let dir = TempDir::new().unwrap();
        create_manifest_only_project(dir.path());
        write_config(dir.path(), "npm_command: rodeps-no-such-npm\n");

        cargo_bin_cmd!("rodeps")
            .current_dir(dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to start `rodeps-no-such-npm`"));
    }
}

// ============================================================================
// CLI + Config Merge Tests
// ============================================================================

#[cfg(unix)]
mod merge_tests {
    use super::test_utilities::fake_npm::{create_project, FakeNpm};
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_config_json_switches_output_mode() {
        let dir = TempDir::new().unwrap();
        create_project(dir.path(), &FakeNpm::default(), "json: true\n");

        let output = cargo_bin_cmd!("rodeps")
            .current_dir(dir.path())
            .output()
            .unwrap();

        assert!(output.status.success());
        let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(parsed["all"]["installed"], 4);
    }

    #[test]
    fn test_config_long_lists_outdated_packages() {
        let dir = TempDir::new().unwrap();
        create_project(dir.path(), &FakeNpm::default(), "long: true\n");

        cargo_bin_cmd!("rodeps")
            .current_dir(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("List of outdated dependencies:"));
    }

    #[test]
    fn test_config_false_does_not_override_cli_flag() {
        let dir = TempDir::new().unwrap();
        create_project(dir.path(), &FakeNpm::default(), "json: false\n");

        let output = cargo_bin_cmd!("rodeps")
            .current_dir(dir.path())
            .arg("--json")
            .output()
            .unwrap();

        assert!(output.status.success());
        assert!(serde_json::from_slice::<Value>(&output.stdout).is_ok());
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        create_project(dir.path(), &FakeNpm::default(), "format: markdown\n");

        cargo_bin_cmd!("rodeps")
            .current_dir(dir.path())
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Unknown config field 'format' will be ignored",
            ));
    }

    #[test]
    fn test_verbose_mentions_discovered_config() {
        let dir = TempDir::new().unwrap();
        create_project(dir.path(), &FakeNpm::default(), "verbose: true\n");

        cargo_bin_cmd!("rodeps")
            .current_dir(dir.path())
            .assert()
            .success()
            .stderr(predicate::str::contains("Auto-discovered config file"));
    }
}
