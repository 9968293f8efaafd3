//! Throwaway npm stand-in for end-to-end tests (Unix only)

use std::fs;
use std::path::{Path, PathBuf};

pub const INSTALLED_TREE: &str = r#"{
  "name": "demo",
  "version": "1.2.3",
  "dependencies": { "express": {}, "lodash": {} },
  "devDependencies": { "jest": {} },
  "optionalDependencies": {},
  "peerDependencies": { "react": {} }
}"#;

pub const OUTDATED_LISTING: &str = r#"{
  "lodash": { "current": "4.17.0", "wanted": "4.17.21", "latest": "4.17.21", "type": "dependencies" },
  "jest": { "current": "28.0.0", "wanted": "28.1.3", "latest": "29.7.0", "type": "devDependencies" },
  "left-pad": { "current": "1.0.0", "wanted": "1.3.0", "latest": "1.3.0", "type": "bundledDependencies" }
}"#;

/// Canned behavior of the fake binary
pub struct FakeNpm<'a> {
    pub installed_tree: &'a str,
    pub installed_stderr: &'a str,
    pub installed_exit: i32,
    pub outdated_listing: &'a str,
    pub outdated_exit: i32,
}

impl Default for FakeNpm<'_> {
    fn default() -> Self {
        Self {
            installed_tree: INSTALLED_TREE,
            installed_stderr: "",
            installed_exit: 0,
            outdated_listing: OUTDATED_LISTING,
            outdated_exit: 1,
        }
    }
}

impl FakeNpm<'_> {
    /// Writes the script into `dir` and returns its absolute path
    #[cfg(unix)]
    pub fn install(&self, dir: &Path) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            "#!/bin/sh\n\
             case \"$1\" in\n\
             ls)\n\
             cat <<'RODEPS_JSON'\n{}\nRODEPS_JSON\n\
             printf '%s' '{}' 1>&2\n\
             exit {}\n\
             ;;\n\
             outdated)\n\
             cat <<'RODEPS_JSON'\n{}\nRODEPS_JSON\n\
             exit {}\n\
             ;;\n\
             esac\n\
             exit 64\n",
            self.installed_tree,
            self.installed_stderr,
            self.installed_exit,
            self.outdated_listing,
            self.outdated_exit
        );

        let path = dir.join("fake-npm");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }
}

/// Writes package.json and a config pointing `npm_command` at the fake npm
#[cfg(unix)]
pub fn create_project(dir: &Path, fake: &FakeNpm<'_>, extra_config: &str) {
    fs::write(
        dir.join("package.json"),
        r#"{ "name": "demo", "version": "1.2.3" }"#,
    )
    .unwrap();

    let npm = fake.install(dir);
    let config = format!("npm_command: \"{}\"\n{}", npm.display(), extra_config);
    fs::write(dir.join("rodeps.config.yml"), config).unwrap();
}
