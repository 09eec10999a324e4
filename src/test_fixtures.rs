//! Test fixtures for catalog, target and settings setup.
//!
//! ```ignore
//! use crate::test_fixtures::{create_catalog, test_settings};
//!
//! #[test]
//! fn my_test() {
//!     // Local working copy with two bundles
//!     let (_temp, source) = create_catalog(&["alpha", "beta"]);
//!
//!     // Settings whose registry is exactly those bundles
//!     let target = create_temp_dir();
//!     let settings = test_settings(&["alpha", "beta"], target.path());
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::{ConfigFile, Overrides, Registry, Settings};

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::source::scratch::temp_dir_base())
        .expect("Failed to create temp directory")
}

/// Write a bundle payload: a marker file plus a nested document.
///
/// # Panics
///
/// Panics if any file cannot be written.
pub fn write_bundle(root: &Path, name: &str) {
    let dir = root.join(name);
    fs::create_dir_all(dir.join("docs")).expect("Failed to create bundle directory");
    fs::write(dir.join("SKILL.md"), format!("# {name}\n")).expect("Failed to write SKILL.md");
    fs::write(dir.join("docs/guide.md"), format!("Guide for {name}\n"))
        .expect("Failed to write guide");
}

/// Create a local working copy containing the given bundles.
///
/// Returns the `TempDir` (which cleans up on drop) and the catalog root.
#[must_use]
pub fn create_catalog(names: &[&str]) -> (TempDir, PathBuf) {
    let temp = create_temp_dir();
    let root = temp.path().to_path_buf();
    for name in names {
        write_bundle(&root, name);
    }
    (temp, root)
}

/// Initialize a git repository at `path` and commit the given bundles.
///
/// # Panics
///
/// Panics if any git step fails.
pub fn commit_catalog(path: &Path, names: &[&str]) {
    let repo = git2::Repository::init(path).expect("Failed to init git repository");
    for name in names {
        write_bundle(path, name);
    }

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

/// Registry made of the given names.
#[must_use]
pub fn test_registry(names: &[&str]) -> Registry {
    Registry::new(names.iter().copied()).expect("Invalid test registry")
}

/// Settings with the given registry, installing into `target`.
#[must_use]
pub fn test_settings(names: &[&str], target: &Path) -> Settings {
    let file = ConfigFile {
        bundles: Some(names.iter().map(ToString::to_string).collect()),
        ..ConfigFile::default()
    };
    let overrides = Overrides {
        target_dir: Some(target.to_path_buf()),
        ..Overrides::default()
    };
    Settings::resolve(file, overrides, None).expect("Invalid test settings")
}

/// Relative paths of every file under `root`, sorted.
#[must_use]
pub fn file_set(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(std::result::Result::ok)
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
