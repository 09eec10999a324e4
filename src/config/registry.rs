//! Bundle registry: the ordered catalog of installable bundles
//!
//! The registry order defines the 1-based numbering shown in menus, so new
//! bundles are only ever appended to [`DEFAULT_BUNDLES`].

use std::collections::HashSet;
use std::fmt;

use crate::error::{Result, SkillError};

/// Bundles shipped with the catalog, in menu order
pub const DEFAULT_BUNDLES: &[&str] = &[
    "software-architecture",
    "project-templates",
    "ux-psychology",
    "prompt-engineering",
    "code-review",
];

/// Validated bundle name
///
/// A bundle identifier is used verbatim as a directory name under both the
/// source root and the target directory, so it may never contain path
/// separators or refer to a parent directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BundleId(String);

impl BundleId {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();

        let reason = if trimmed.is_empty() {
            Some("name is empty")
        } else if trimmed == "." || trimmed == ".." {
            Some("name refers to a directory alias")
        } else if trimmed.contains(['/', '\\']) {
            Some("name contains a path separator")
        } else if trimmed.contains(':') {
            Some("name contains a drive or scheme separator")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(SkillError::InvalidBundleName {
                name,
                reason: reason.to_string(),
            }),
            None => Ok(Self(trimmed.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BundleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<std::path::Path> for BundleId {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}

/// Immutable, ordered list of known bundles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    bundles: Vec<BundleId>,
}

impl Registry {
    /// Build a registry, rejecting invalid or duplicate names
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut bundles = Vec::new();

        for name in names {
            let id = BundleId::new(name)?;
            if !seen.insert(id.clone()) {
                return Err(SkillError::DuplicateBundle {
                    name: id.to_string(),
                });
            }
            bundles.push(id);
        }

        Ok(Self { bundles })
    }

    /// The built-in catalog
    pub fn builtin() -> Self {
        Self {
            bundles: DEFAULT_BUNDLES
                .iter()
                .map(|name| BundleId((*name).to_string()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BundleId> {
        self.bundles.iter()
    }

    /// Look up a bundle by its 1-based menu number
    pub fn by_number(&self, number: usize) -> Option<&BundleId> {
        number.checked_sub(1).and_then(|idx| self.bundles.get(idx))
    }

    /// Look up a bundle by name
    pub fn find(&self, name: &str) -> Option<&BundleId> {
        let name = name.trim();
        self.bundles.iter().find(|b| b.as_str() == name)
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a BundleId;
    type IntoIter = std::slice::Iter<'a, BundleId>;

    fn into_iter(self) -> Self::IntoIter {
        self.bundles.iter()
    }
}
