//! Error types and handling for skilldeploy
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostic codes and
//! remediation hints. Every variant here is fatal for the invocation; per-bundle
//! problems are recorded as outcomes by the reporter instead.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for skilldeploy operations
#[derive(Error, Diagnostic, Debug)]
pub enum SkillError {
    // Prerequisite errors
    #[error("Required tool '{tool}' was not found")]
    #[diagnostic(code(skilldeploy::prereq::missing))]
    MissingPrerequisite {
        tool: String,
        #[help]
        remediation: String,
    },

    // Source errors
    #[error("No bundle catalog found at: {path}")]
    #[diagnostic(
        code(skilldeploy::source::not_found),
        help("Point --source at a checkout whose bundle directories contain a SKILL.md file")
    )]
    SourceNotFound { path: String },

    #[error("Bundle catalog at '{path}' contains none of the known bundles")]
    #[diagnostic(
        code(skilldeploy::source::empty),
        help("Check --repo/--branch, or the 'bundles' list in your configuration")
    )]
    SourceEmpty { path: String },

    #[error("Bundle catalog at '{catalog}' overlaps the skills directory '{target}'")]
    #[diagnostic(
        code(skilldeploy::source::overlaps_target),
        help(
            "Installed skills cannot be their own source. Run from the catalog checkout, \
             or pass --source <DIR> and --target <DIR> that do not contain each other"
        )
    )]
    SourceOverlapsTarget { catalog: String, target: String },

    // Git errors
    #[error("Failed to clone repository: {url}: {reason}")]
    #[diagnostic(
        code(skilldeploy::git::clone_failed),
        help(
            "Check your network connection and that the repository is reachable, \
             or pass --source <DIR> to install from a local checkout"
        )
    )]
    GitCloneFailed { url: String, reason: String },

    #[error("Git operation failed: {message}")]
    #[diagnostic(code(skilldeploy::git::operation_failed))]
    GitOperationFailed { message: String },

    // Bridge errors
    #[error("Linux compatibility subsystem is not available: {reason}")]
    #[diagnostic(
        code(skilldeploy::bridge::unavailable),
        help(
            "Provision WSL from an elevated PowerShell with 'wsl --install -d Ubuntu', \
             restart, finish the distribution setup, then run this command again"
        )
    )]
    BridgeUnavailable { reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(skilldeploy::config::not_found),
        help("Check the --config path or the SKILLDEPLOY_CONFIG environment variable")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(skilldeploy::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(skilldeploy::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid bundle name '{name}': {reason}")]
    #[diagnostic(
        code(skilldeploy::config::invalid_bundle),
        help("Bundle names are plain directory names such as 'code-review'")
    )]
    InvalidBundleName { name: String, reason: String },

    #[error("Invalid exclude pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(skilldeploy::config::invalid_exclude),
        help("Exclude patterns are globs such as '*.log', 'node_modules' or 'docs/drafts/**'")
    )]
    InvalidExcludePattern { pattern: String, reason: String },

    #[error("Bundle '{name}' is listed more than once")]
    #[diagnostic(code(skilldeploy::config::duplicate_bundle))]
    DuplicateBundle { name: String },

    #[error("Could not determine the home directory")]
    #[diagnostic(
        code(skilldeploy::config::no_home),
        help("Pass --target <DIR> or set SKILLDEPLOY_TARGET_DIR")
    )]
    HomeDirNotFound,

    // File system errors
    #[error("Failed to read: {path}: {reason}")]
    #[diagnostic(code(skilldeploy::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write: {path}: {reason}")]
    #[diagnostic(code(skilldeploy::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(skilldeploy::fs::io_error))]
    IoError { message: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(skilldeploy::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // Terminal errors
    #[error("Failed to read input: {message}")]
    #[diagnostic(code(skilldeploy::ui::prompt_failed))]
    PromptFailed { message: String },

    #[error("Interrupted")]
    #[diagnostic(code(skilldeploy::ui::interrupted))]
    Interrupted,
}

impl SkillError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SkillError::Interrupted => 130,
            _ => 1,
        }
    }
}

/// Creates a missing-prerequisite error with remediation text
pub fn missing_prerequisite(tool: impl Into<String>, remediation: impl Into<String>) -> SkillError {
    SkillError::MissingPrerequisite {
        tool: tool.into(),
        remediation: remediation.into(),
    }
}

/// Creates a write error for a path
pub fn write_failed(path: &std::path::Path, err: &std::io::Error) -> SkillError {
    SkillError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a read error for a path
pub fn read_failed(path: &std::path::Path, err: &std::io::Error) -> SkillError {
    SkillError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

impl From<std::io::Error> for SkillError {
    fn from(err: std::io::Error) -> Self {
        SkillError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SkillError {
    fn from(err: serde_yaml::Error) -> Self {
        SkillError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<git2::Error> for SkillError {
    fn from(err: git2::Error) -> Self {
        SkillError::GitOperationFailed {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for SkillError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationInterrupted => SkillError::Interrupted,
            other => SkillError::PromptFailed {
                message: other.to_string(),
            },
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SkillError>;
