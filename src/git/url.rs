//! Repository URL handling for libgit2

use std::borrow::Cow;
use std::path::Path;

/// Rewrite SCP-style `git@host:owner/repo.git` as `ssh://git@host/owner/repo.git`
pub fn normalize_ssh_url(url: &str) -> Cow<'_, str> {
    if !url.starts_with("git@") {
        return Cow::Borrowed(url);
    }

    match url.split_once(':') {
        Some((host, path)) if path.starts_with('/') => Cow::Owned(format!("ssh://{host}{path}")),
        Some((host, path)) => Cow::Owned(format!("ssh://{host}/{path}")),
        None => Cow::Borrowed(url),
    }
}

/// Whether the URL points at the local filesystem
///
/// libgit2 does not support shallow fetches from local transports.
pub fn is_local_url(url: &str) -> bool {
    url.starts_with("file://") || Path::new(url).is_absolute() || Path::new(url).exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scp_style_is_rewritten() {
        assert_eq!(
            normalize_ssh_url("git@github.com:skilldeploy/skill-bundles.git"),
            "ssh://git@github.com/skilldeploy/skill-bundles.git"
        );
    }

    #[test]
    fn test_scp_style_with_absolute_path() {
        assert_eq!(
            normalize_ssh_url("git@host:/srv/bundles.git"),
            "ssh://git@host/srv/bundles.git"
        );
    }

    #[test]
    fn test_https_untouched() {
        let url = "https://github.com/skilldeploy/skill-bundles.git";
        assert!(matches!(normalize_ssh_url(url), Cow::Borrowed(_)));
    }

    #[test]
    fn test_local_detection() {
        assert!(is_local_url("file:///srv/bundles"));
        assert!(!is_local_url("https://github.com/skilldeploy/skill-bundles.git"));
        let dir = tempfile::tempdir().unwrap();
        assert!(is_local_url(dir.path().to_str().unwrap()));
    }
}
