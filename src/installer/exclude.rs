//! Exclusion rules applied while copying a bundle
//!
//! A pattern without `/` is matched against every path component name
//! (`node_modules` excludes that directory at any depth, `*.log` any log
//! file). A pattern containing `/` is matched against the path relative to the
//! bundle root (`docs/drafts/**`).

use std::path::Path;

use wax::{CandidatePath, Glob, Pattern};

use crate::error::{Result, SkillError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Name,
    RelativePath,
}

#[derive(Debug, Clone)]
struct Rule {
    glob: Glob<'static>,
    scope: Scope,
}

/// Compiled exclusion patterns plus the root files they may never remove
///
/// Protected files are the bundle marker and the dependency manifests, so an
/// exclusion like `*.json` cannot silently disable the dependency step.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    rules: Vec<Rule>,
    protected: Vec<String>,
}

impl ExclusionRules {
    /// Compile `patterns`; an invalid glob is a configuration error
    pub fn new<I, S, P, T>(patterns: I, protected: P) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        P: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut rules = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref().trim().trim_end_matches('/');
            if pattern.is_empty() {
                continue;
            }
            let glob = Glob::new(pattern)
                .map_err(|e| SkillError::InvalidExcludePattern {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                })?
                .into_owned();
            let scope = if pattern.contains('/') {
                Scope::RelativePath
            } else {
                Scope::Name
            };
            rules.push(Rule { glob, scope });
        }

        Ok(Self {
            rules,
            protected: protected.into_iter().map(Into::into).collect(),
        })
    }

    /// Whether a bundle-relative path must not be copied
    pub fn is_excluded(&self, relative: &Path) -> bool {
        let normalized = relative.to_string_lossy().replace('\\', "/");
        if self.protected.iter().any(|p| *p == normalized) {
            return false;
        }

        let name = relative
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.rules.iter().any(|rule| {
            let candidate = match rule.scope {
                Scope::Name => name.as_str(),
                Scope::RelativePath => normalized.as_str(),
            };
            rule.glob.matched(&CandidatePath::from(candidate)).is_some()
        })
    }
}
