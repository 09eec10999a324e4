//! Catalog cloning

use std::path::Path;

use git2::{FetchOptions, RemoteCallbacks, build::RepoBuilder};

use super::auth::setup_auth_callbacks;
use super::error::interpret_git_error;
use super::url::{is_local_url, normalize_ssh_url};
use crate::error::{Result, SkillError};

/// Clone `url` into `target`
///
/// Remote URLs are fetched with depth 1. When `branch` is given only that
/// branch is checked out; otherwise the remote's default branch is used.
pub fn clone(url: &str, target: &Path, branch: Option<&str>) -> Result<()> {
    let mut callbacks = RemoteCallbacks::new();
    setup_auth_callbacks(&mut callbacks);

    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(callbacks);
    if !is_local_url(url) {
        fetch_options.depth(1);
    }

    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_options);
    if let Some(branch) = branch {
        builder.branch(branch);
    }

    let url_to_clone = normalize_ssh_url(url);
    tracing::debug!(url = %url_to_clone, ?branch, target = %target.display(), "cloning");

    builder
        .clone(url_to_clone.as_ref(), target)
        .map_err(|e| SkillError::GitCloneFailed {
            url: url.to_string(),
            reason: interpret_git_error(&e),
        })?;
    Ok(())
}
