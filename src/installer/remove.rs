//! Bundle removal

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::BundleId;
use crate::error::{Result, write_failed};
use crate::ui::{Outcome, Reporter};

/// Remove a file, symlink or directory tree; absent paths are fine
///
/// Returns whether anything was removed.
pub fn remove_path(path: &Path) -> Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(write_failed(path, &e)),
    };

    let removed = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    removed.map_err(|e| write_failed(path, &e))?;
    Ok(true)
}

/// Remove one installed bundle
pub fn remove_bundle(target_dir: &Path, bundle: &BundleId) -> Result<Outcome> {
    let path = target_dir.join(bundle);
    if remove_path(&path)? {
        tracing::debug!(path = %path.display(), "removed bundle");
        Ok(Outcome::Removed)
    } else {
        Ok(Outcome::Skipped {
            reason: format!("not installed at {}", path.display()),
        })
    }
}

/// Remove every bundle in order, recording each outcome
pub fn remove_bundles(target_dir: &Path, bundles: &[&BundleId], reporter: &mut Reporter) {
    for bundle in bundles {
        let outcome = remove_bundle(target_dir, bundle).unwrap_or_else(|e| Outcome::Failed {
            reason: e.to_string(),
        });
        reporter.record(bundle.as_str(), outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{create_temp_dir, write_bundle};

    #[test]
    fn test_remove_installed_bundle() {
        let target = create_temp_dir();
        write_bundle(target.path(), "alpha");
        let alpha = BundleId::new("alpha").unwrap();

        assert_eq!(remove_bundle(target.path(), &alpha).unwrap(), Outcome::Removed);
        assert!(!target.path().join("alpha").exists());
        assert!(target.path().is_dir());
    }

    #[test]
    fn test_absent_bundle_is_skipped() {
        let target = create_temp_dir();
        let alpha = BundleId::new("alpha").unwrap();
        assert!(matches!(
            remove_bundle(target.path(), &alpha).unwrap(),
            Outcome::Skipped { .. }
        ));
    }

    #[test]
    fn test_remove_bundles_continues_past_absent_entries() {
        let target = create_temp_dir();
        write_bundle(target.path(), "beta");
        let alpha = BundleId::new("alpha").unwrap();
        let beta = BundleId::new("beta").unwrap();

        let mut reporter = Reporter::silent();
        remove_bundles(target.path(), &[&alpha, &beta], &mut reporter);

        assert_eq!(reporter.skipped_count(), 1);
        assert_eq!(reporter.removed_count(), 1);
        assert_eq!(reporter.warnings().len(), 1);
        assert!(reporter.warnings()[0].contains("alpha"));
        assert!(!target.path().join("beta").exists());
    }

    #[test]
    fn test_remove_plain_file() {
        let target = create_temp_dir();
        let file = target.path().join("stray");
        fs::write(&file, "x").unwrap();
        assert!(remove_path(&file).unwrap());
        assert!(!remove_path(&file).unwrap());
    }
}
