//! Local working copy detection

use std::path::{Path, PathBuf};

use crate::config::{Registry, Settings};
use crate::error::{Result, SkillError};

/// How many ancestors of the executable's directory are searched
const EXE_ANCESTOR_DEPTH: usize = 3;

/// Where bundle payloads will come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// A working copy already on disk
    Local(PathBuf),
    /// The catalog has to be cloned
    NeedsFetch,
}

impl SourceLocation {
    pub fn needs_fetch(&self) -> bool {
        matches!(self, SourceLocation::NeedsFetch)
    }
}

/// Whether `dir` holds at least one known bundle with its marker file
pub fn is_working_copy(dir: &Path, registry: &Registry, marker_file: &str) -> bool {
    registry
        .iter()
        .any(|id| dir.join(id).join(marker_file).is_file())
}

/// Default places to look for a working copy, in order
pub fn candidate_dirs() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd);
    }

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.extend(exe_dir.ancestors().take(EXE_ANCESTOR_DEPTH + 1).map(Path::to_path_buf));
    }

    candidates
}

/// Path with symlinks and `..` resolved as far as it exists on disk
fn comparable(path: &Path) -> PathBuf {
    for ancestor in path.ancestors() {
        if let Ok(resolved) = ancestor.canonicalize() {
            let rest = path.strip_prefix(ancestor).unwrap_or(Path::new(""));
            return resolved.join(rest);
        }
    }
    path.to_path_buf()
}

/// Whether one directory is, or lies inside, the other
///
/// A source overlapping the target would have its bundles deleted by the
/// delete-then-copy reinstall.
pub fn overlaps(a: &Path, b: &Path) -> bool {
    let (a, b) = (comparable(a), comparable(b));
    a.starts_with(&b) || b.starts_with(&a)
}

/// Classify the invocation context as local or needing a fetch
///
/// An explicit directory must be a working copy that does not overlap the
/// target directory; it never falls back to fetching. Candidates that overlap
/// the target are skipped, since installed bundles carry the marker file too.
pub fn locate(
    explicit: Option<&Path>,
    candidates: &[PathBuf],
    settings: &Settings,
) -> Result<SourceLocation> {
    let registry = &settings.registry;
    let marker_file = settings.marker_file.as_str();
    let target = settings.target_dir.as_path();

    if let Some(dir) = explicit {
        let dir = std::path::absolute(dir)?;
        if overlaps(&dir, target) {
            return Err(SkillError::SourceOverlapsTarget {
                catalog: dir.display().to_string(),
                target: target.display().to_string(),
            });
        }
        if is_working_copy(&dir, registry, marker_file) {
            return Ok(SourceLocation::Local(dir));
        }
        return Err(SkillError::SourceNotFound {
            path: dir.display().to_string(),
        });
    }

    Ok(candidates
        .iter()
        .filter(|dir| {
            let skip = overlaps(dir, target);
            if skip {
                tracing::debug!(dir = %dir.display(), "candidate overlaps the target directory");
            }
            !skip
        })
        .find(|dir| is_working_copy(dir, registry, marker_file))
        .map_or(SourceLocation::NeedsFetch, |dir| {
            SourceLocation::Local(dir.clone())
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{create_catalog, create_temp_dir, test_registry, test_settings, write_bundle};

    #[test]
    fn test_working_copy_needs_marker() {
        let registry = test_registry(&["alpha", "beta"]);
        let temp = create_temp_dir();
        std::fs::create_dir_all(temp.path().join("alpha")).unwrap();
        assert!(!is_working_copy(temp.path(), &registry, "SKILL.md"));

        std::fs::write(temp.path().join("alpha/SKILL.md"), "# alpha").unwrap();
        assert!(is_working_copy(temp.path(), &registry, "SKILL.md"));
    }

    #[test]
    fn test_unknown_bundle_dirs_do_not_count() {
        let registry = test_registry(&["alpha"]);
        let (_temp, root) = create_catalog(&["other"]);
        assert!(!is_working_copy(&root, &registry, "SKILL.md"));
    }

    #[test]
    fn test_first_matching_candidate_wins() {
        let target = create_temp_dir();
        let settings = test_settings(&["alpha"], target.path());
        let empty = create_temp_dir();
        let (_a, first) = create_catalog(&["alpha"]);
        let (_b, second) = create_catalog(&["alpha"]);

        let candidates = vec![empty.path().to_path_buf(), first.clone(), second];
        let location = locate(None, &candidates, &settings).unwrap();
        assert_eq!(location, SourceLocation::Local(first));
    }

    #[test]
    fn test_no_candidate_needs_fetch() {
        let target = create_temp_dir();
        let settings = test_settings(&["alpha"], target.path());
        let empty = create_temp_dir();
        let location = locate(None, &[empty.path().to_path_buf()], &settings).unwrap();
        assert!(location.needs_fetch());
    }

    #[test]
    fn test_explicit_source_must_be_working_copy() {
        let target = create_temp_dir();
        let settings = test_settings(&["alpha"], target.path());
        let empty = create_temp_dir();
        let err = locate(Some(empty.path()), &[], &settings).unwrap_err();
        assert!(matches!(err, SkillError::SourceNotFound { .. }));
    }

    #[test]
    fn test_explicit_source_skips_candidates() {
        let target = create_temp_dir();
        let settings = test_settings(&["alpha"], target.path());
        let (_a, explicit) = create_catalog(&["alpha"]);
        let (_b, other) = create_catalog(&["alpha"]);
        let location = locate(Some(&explicit), &[other], &settings).unwrap();
        assert_eq!(location, SourceLocation::Local(explicit));
    }

    #[test]
    fn test_candidates_include_current_dir() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(candidate_dirs().first(), Some(&cwd));
    }

    #[test]
    fn test_explicit_source_overlapping_target_is_fatal() {
        let target = create_temp_dir();
        write_bundle(target.path(), "alpha");
        let settings = test_settings(&["alpha"], target.path());

        let err = locate(Some(target.path()), &[], &settings).unwrap_err();
        assert!(matches!(err, SkillError::SourceOverlapsTarget { .. }));

        let inner = settings.target_dir.join("alpha");
        let err = locate(Some(&inner), &[], &settings).unwrap_err();
        assert!(matches!(err, SkillError::SourceOverlapsTarget { .. }));
    }

    #[test]
    fn test_target_inside_explicit_source_is_fatal() {
        let (_temp, root) = create_catalog(&["alpha"]);
        let settings = test_settings(&["alpha"], &root.join("out"));
        let err = locate(Some(&root), &[], &settings).unwrap_err();
        assert!(matches!(err, SkillError::SourceOverlapsTarget { .. }));
    }

    #[test]
    fn test_candidate_equal_to_target_is_skipped() {
        let target = create_temp_dir();
        write_bundle(target.path(), "alpha");
        let settings = test_settings(&["alpha"], target.path());
        let (_b, catalog) = create_catalog(&["alpha"]);

        let candidates = vec![target.path().to_path_buf()];
        assert!(locate(None, &candidates, &settings).unwrap().needs_fetch());

        let candidates = vec![target.path().to_path_buf(), catalog.clone()];
        assert_eq!(
            locate(None, &candidates, &settings).unwrap(),
            SourceLocation::Local(catalog)
        );
    }

    #[test]
    fn test_overlaps() {
        let temp = create_temp_dir();
        let root = temp.path();
        std::fs::create_dir_all(root.join("a")).unwrap();
        assert!(overlaps(root, root));
        assert!(overlaps(&root.join("a"), root));
        assert!(overlaps(root, &root.join("a/b")));
        assert!(overlaps(&root.join("a/../b"), &root.join("b/c")));
        assert!(!overlaps(&root.join("a"), &root.join("b")));
        assert!(!overlaps(&root.join("ab"), &root.join("a")));
    }
}
