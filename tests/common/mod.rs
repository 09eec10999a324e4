//! Common test utilities for skilldeploy integration tests

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Bundles every test environment knows about
pub const BUNDLES: &[&str] = &["alpha", "beta", "gamma", "delta", "epsilon"];

/// An isolated environment: catalog, skills directory, home and config
#[allow(dead_code)]
pub struct TestEnv {
    /// Temporary directory holding everything below
    pub temp: TempDir,
    /// Local catalog checkout
    pub source: PathBuf,
    /// Skills directory
    pub target: PathBuf,
    /// Fake home directory
    pub home: PathBuf,
    /// Empty working directory for the binary
    pub cwd: PathBuf,
    /// Scratch base (TMPDIR) for the binary
    pub tmp: PathBuf,
    /// Configuration file
    pub config: PathBuf,
}

impl TestEnv {
    /// Environment whose catalog contains every bundle in [`BUNDLES`]
    pub fn new() -> Self {
        Self::with_catalog(BUNDLES)
    }

    /// Environment whose catalog contains only `present`
    pub fn with_catalog(present: &[&str]) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path();
        let env = Self {
            source: root.join("catalog"),
            target: root.join("skills"),
            home: root.join("home"),
            cwd: root.join("cwd"),
            tmp: root.join("tmp"),
            config: root.join("config.yaml"),
            temp,
        };

        for dir in [&env.source, &env.home, &env.cwd, &env.tmp] {
            fs::create_dir_all(dir).expect("Failed to create directory");
        }
        for name in present {
            write_bundle(&env.source, name);
        }
        env.write_config("dependency_managers: []\n");
        env
    }

    /// Replace the config file; the bundle list is always [`BUNDLES`]
    pub fn write_config(&self, extra: &str) {
        let bundles = BUNDLES.join(", ");
        fs::write(
            &self.config,
            format!("bundles: [{bundles}]\nauto_install: false\n{extra}"),
        )
        .expect("Failed to write config");
    }

    /// Binary with HOME, TMPDIR, cwd and config pointed into this environment
    pub fn cmd(&self) -> Command {
        let mut cmd = skilldeploy_cmd();
        cmd.current_dir(&self.cwd)
            .env("HOME", &self.home)
            .env("USERPROFILE", &self.home)
            .env("TMPDIR", &self.tmp)
            .env("SKILLDEPLOY_CONFIG", &self.config)
            .env_remove("SKILLDEPLOY_TARGET_DIR")
            .env_remove("SKILLDEPLOY_REPOSITORY")
            .env_remove("SKILLDEPLOY_LOG");
        cmd
    }

    /// Same environment as [`TestEnv::cmd`] on a plain `std::process::Command`,
    /// for tests that need to signal a running process
    #[allow(dead_code)]
    pub fn std_cmd(&self) -> std::process::Command {
        let mut cmd = skilldeploy_std_cmd();
        cmd.current_dir(&self.cwd)
            .env("HOME", &self.home)
            .env("USERPROFILE", &self.home)
            .env("TMPDIR", &self.tmp)
            .env("SKILLDEPLOY_CONFIG", &self.config)
            .env_remove("SKILLDEPLOY_TARGET_DIR")
            .env_remove("SKILLDEPLOY_REPOSITORY")
            .env_remove("SKILLDEPLOY_LOG");
        cmd
    }

    /// `install --source <catalog> --target <skills> ...`
    pub fn install(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("install")
            .arg("--source")
            .arg(&self.source)
            .arg("--target")
            .arg(&self.target);
        cmd
    }

    /// `uninstall --target <skills> ...`
    pub fn uninstall(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("uninstall").arg("--target").arg(&self.target);
        cmd
    }

    pub fn installed(&self, name: &str) -> bool {
        self.target.join(name).is_dir()
    }

    /// Names of installed bundles, sorted
    pub fn installed_names(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.target) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Entries left in the scratch base
    pub fn scratch_entries(&self) -> usize {
        fs::read_dir(&self.tmp).map(Iterator::count).unwrap_or(0)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a bundle payload: marker file plus a nested document
pub fn write_bundle(root: &Path, name: &str) {
    let dir = root.join(name);
    fs::create_dir_all(dir.join("docs")).expect("Failed to create bundle directory");
    fs::write(dir.join("SKILL.md"), format!("# {name}\n")).expect("Failed to write SKILL.md");
    fs::write(dir.join("docs/guide.md"), format!("Guide for {name}\n"))
        .expect("Failed to write guide");
}

/// Relative paths of every file under `root`, sorted
#[allow(dead_code)]
pub fn file_set(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            e.path()
                .strip_prefix(root)
                .ok()
                .map(|p| p.to_string_lossy().replace('\\', "/"))
        })
        .collect();
    files.sort();
    files
}

/// Turn `root` into a git repository with everything under it committed
#[allow(dead_code)]
pub fn commit_all(root: &Path) {
    let repo = git2::Repository::init(root).expect("Failed to init git repository");
    let mut index = repo.index().expect("Failed to open index");
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .expect("Failed to stage files");
    index.write().expect("Failed to write index");
    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let signature =
        git2::Signature::now("Test", "test@example.com").expect("Failed to create signature");
    repo.commit(Some("HEAD"), &signature, &signature, "Add bundles", &tree, &[])
        .expect("Failed to commit");
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn skilldeploy_cmd() -> Command {
    Command::cargo_bin("skilldeploy").expect("Failed to find skilldeploy binary")
}

#[allow(deprecated, dead_code)]
pub fn skilldeploy_std_cmd() -> std::process::Command {
    use assert_cmd::cargo::CommandCargoExt;

    std::process::Command::cargo_bin("skilldeploy").expect("Failed to find skilldeploy binary")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creation() {
        let env = TestEnv::new();
        assert!(env.source.join("alpha/SKILL.md").is_file());
        assert!(env.config.is_file());
        assert!(env.installed_names().is_empty());
    }
}
