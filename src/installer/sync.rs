//! Mirror a bundle directory into the target

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::exclude::ExclusionRules;
use crate::error::{Result, SkillError, read_failed, write_failed};
use crate::ui::ProgressReporter;

fn walk_error(err: walkdir::Error) -> SkillError {
    SkillError::FileReadFailed {
        path: err
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        reason: err.to_string(),
    }
}

/// Bundle-relative paths to copy, with excluded subtrees pruned
fn collect_entries(source: &Path, rules: &ExclusionRules) -> Result<Vec<(PathBuf, bool)>> {
    let walker = WalkDir::new(source)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            !entry
                .path()
                .strip_prefix(source)
                .is_ok_and(|rel| rules.is_excluded(rel))
        });

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry.map_err(walk_error)?;
        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        entries.push((relative.to_path_buf(), entry.file_type().is_dir()));
    }
    Ok(entries)
}

/// Copy `source` into `target`, which must not exist yet
///
/// Returns the number of files copied.
pub fn copy_bundle(
    source: &Path,
    target: &Path,
    rules: &ExclusionRules,
    progress: &mut dyn ProgressReporter,
) -> Result<usize> {
    let entries = collect_entries(source, rules)?;
    let file_count = entries.iter().filter(|(_, is_dir)| !is_dir).count();
    progress.init_file_progress(file_count as u64);

    fs::create_dir_all(target).map_err(|e| write_failed(target, &e))?;

    for (relative, is_dir) in &entries {
        let from = source.join(relative);
        let to = target.join(relative);

        if *is_dir {
            fs::create_dir_all(&to).map_err(|e| write_failed(&to, &e))?;
            continue;
        }

        progress.update_file(&relative.to_string_lossy());
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent).map_err(|e| write_failed(parent, &e))?;
        }
        fs::copy(&from, &to).map_err(|e| {
            if from.is_file() {
                write_failed(&to, &e)
            } else {
                read_failed(&from, &e)
            }
        })?;
    }

    Ok(file_count)
}
