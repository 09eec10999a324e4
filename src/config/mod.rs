//! Configuration handling for skilldeploy
//!
//! This module contains:
//! - [`registry`]: the bundle catalog (`BundleId`, `Registry`)
//! - `config.yaml`: optional user configuration, merged with CLI flags and
//!   environment variables into a resolved [`Settings`] value
//!
//! Precedence is CLI flag > environment variable > config file > default.
//! Flag/environment precedence is handled by clap (`env = ...`), so this
//! module only merges the already-resolved overrides with the file.

pub mod registry;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillError};
use crate::installer::ExclusionRules;

pub use registry::{BundleId, Registry};

/// Remote catalog cloned when no local working copy is found
pub const DEFAULT_REPOSITORY: &str = "https://github.com/skilldeploy/skill-bundles.git";

/// File whose presence marks a bundle directory
pub const DEFAULT_MARKER_FILE: &str = "SKILL.md";

/// Program re-invoked inside the Linux compatibility subsystem
pub const DEFAULT_BRIDGE_PROGRAM: &str = "skilldeploy";

/// Host assistant directory under the home directory
const DEFAULT_TARGET_SUBDIR: &str = ".claude/skills";

const CONFIG_DIR_NAME: &str = "skilldeploy";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Paths never copied into an installed bundle
pub const DEFAULT_EXCLUDES: &[&str] = &[
    ".git",
    ".DS_Store",
    "Thumbs.db",
    "*.log",
    "node_modules",
    "__pycache__",
    ".venv",
];

/// An external package manager run inside an installed bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyManager {
    /// Manifest file at the bundle root that triggers the step (e.g. `package.json`)
    pub manifest: String,
    /// Program and arguments, run with the bundle directory as working directory
    pub command: Vec<String>,
}

impl DependencyManager {
    pub fn npm() -> Self {
        Self {
            manifest: "package.json".to_string(),
            command: vec!["npm".to_string(), "install".to_string()],
        }
    }
}

/// Contents of `config.yaml`; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub repository: Option<String>,
    pub branch: Option<String>,
    pub target_dir: Option<String>,
    pub bundles: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub marker_file: Option<String>,
    pub auto_install: Option<bool>,
    pub bridge_program: Option<String>,
    pub dependency_managers: Option<Vec<DependencyManager>>,
}

impl ConfigFile {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration
    ///
    /// An explicitly requested file must exist. The default location
    /// (`<config dir>/skilldeploy/config.yaml`) is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(SkillError::ConfigNotFound {
                        path: path.display().to_string(),
                    });
                }
                path.to_path_buf()
            }
            None => match default_config_path() {
                Some(path) if path.is_file() => path,
                _ => {
                    tracing::debug!("no configuration file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        tracing::debug!(path = %path.display(), "loading configuration");
        let content = fs::read_to_string(&path).map_err(|e| SkillError::ConfigReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            SkillError::ConfigParseFailed { reason, .. } => SkillError::ConfigParseFailed {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }
}

/// Default location of the user configuration file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Values that come from CLI flags or the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub target_dir: Option<PathBuf>,
    pub repository: Option<String>,
    pub branch: Option<String>,
    pub no_auto_install: bool,
}

/// Fully resolved configuration for one invocation
#[derive(Debug, Clone)]
pub struct Settings {
    pub registry: Registry,
    pub repository: String,
    pub branch: Option<String>,
    pub target_dir: PathBuf,
    pub exclude: Vec<String>,
    /// `exclude` compiled, with the marker and dependency manifests protected
    pub exclusion_rules: ExclusionRules,
    pub marker_file: String,
    pub auto_install: bool,
    pub bridge_program: String,
    pub dependency_managers: Vec<DependencyManager>,
}

impl Settings {
    /// Merge overrides with the config file and built-in defaults
    pub fn resolve(file: ConfigFile, overrides: Overrides, home: Option<&Path>) -> Result<Self> {
        let registry = match file.bundles {
            Some(names) => Registry::new(names)?,
            None => Registry::builtin(),
        };

        let target_dir = match (overrides.target_dir, file.target_dir) {
            (Some(dir), _) => dir,
            (None, Some(dir)) => expand_home(&dir, home)?,
            (None, None) => home
                .map(|h| h.join(DEFAULT_TARGET_SUBDIR))
                .ok_or(SkillError::HomeDirNotFound)?,
        };
        let target_dir = std::path::absolute(&target_dir).map_err(|e| SkillError::IoError {
            message: format!("Failed to resolve {}: {}", target_dir.display(), e),
        })?;

        let exclude = file
            .exclude
            .unwrap_or_else(|| DEFAULT_EXCLUDES.iter().map(ToString::to_string).collect());
        let marker_file = file
            .marker_file
            .unwrap_or_else(|| DEFAULT_MARKER_FILE.to_string());
        let dependency_managers = file
            .dependency_managers
            .unwrap_or_else(|| vec![DependencyManager::npm()]);

        let protected = std::iter::once(marker_file.clone())
            .chain(dependency_managers.iter().map(|m| m.manifest.clone()));
        let exclusion_rules = ExclusionRules::new(&exclude, protected)?;

        Ok(Self {
            registry,
            repository: overrides
                .repository
                .or(file.repository)
                .unwrap_or_else(|| DEFAULT_REPOSITORY.to_string()),
            branch: overrides.branch.or(file.branch),
            target_dir,
            exclude,
            exclusion_rules,
            marker_file,
            auto_install: !overrides.no_auto_install && file.auto_install.unwrap_or(true),
            bridge_program: file
                .bridge_program
                .unwrap_or_else(|| DEFAULT_BRIDGE_PROGRAM.to_string()),
            dependency_managers,
        })
    }
}

/// Expand a leading `~` against the home directory
fn expand_home(value: &str, home: Option<&Path>) -> Result<PathBuf> {
    let rest = match value.strip_prefix('~') {
        Some(rest) => rest,
        None => return Ok(PathBuf::from(value)),
    };

    let home = home.ok_or(SkillError::HomeDirNotFound)?;
    let rest = rest.trim_start_matches(['/', '\\']);
    if rest.is_empty() {
        Ok(home.to_path_buf())
    } else {
        Ok(home.join(rest))
    }
}
