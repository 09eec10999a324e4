//! Source resolution
//!
//! This module handles:
//! - Detecting a local working copy of the bundle catalog ([`local`])
//! - Fetching the catalog into a [`ScratchArea`] when none is found
//! - Exposing the result as a single [`SourceRoot`]
//!
//! ## Module Organization
//!
//! - `local.rs`: working copy predicate and candidate directories
//! - `scratch.rs`: scratch area with interrupt-safe cleanup

pub mod local;
pub mod scratch;

use std::path::{Path, PathBuf};

pub use local::{SourceLocation, candidate_dirs, locate};
pub use scratch::ScratchArea;

use crate::config::Settings;
use crate::error::{Result, SkillError};
use crate::git;

/// Where a source root came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Local,
    Fetched,
}

/// Directory holding one subdirectory per bundle
///
/// A fetched root owns its scratch area; dropping the root removes it.
#[derive(Debug)]
pub struct SourceRoot {
    path: PathBuf,
    provenance: Provenance,
    _scratch: Option<ScratchArea>,
}

impl SourceRoot {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// Payload directory for one bundle
    pub fn bundle_dir(&self, bundle: impl AsRef<Path>) -> PathBuf {
        self.path.join(bundle)
    }
}

/// Turn a located source into a usable root, fetching when needed
pub fn resolve(location: SourceLocation, settings: &Settings) -> Result<SourceRoot> {
    match location {
        SourceLocation::Local(path) => {
            tracing::debug!(path = %path.display(), "using local working copy");
            Ok(SourceRoot {
                path,
                provenance: Provenance::Local,
                _scratch: None,
            })
        }
        SourceLocation::NeedsFetch => fetch(settings),
    }
}

fn fetch(settings: &Settings) -> Result<SourceRoot> {
    let scratch = ScratchArea::create()?;
    let catalog = scratch.path().join("catalog");

    git::clone(&settings.repository, &catalog, settings.branch.as_deref())?;

    if !local::is_working_copy(&catalog, &settings.registry, &settings.marker_file) {
        return Err(SkillError::SourceEmpty {
            path: settings.repository.clone(),
        });
    }

    Ok(SourceRoot {
        path: catalog,
        provenance: Provenance::Fetched,
        _scratch: Some(scratch),
    })
}
