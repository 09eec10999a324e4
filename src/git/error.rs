//! Git error interpretation
//!
//! Turns libgit2 errors into short messages a user can act on.

use git2::{Error, ErrorClass};

/// Coarse failure categories shown to users
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureKind {
    RepositoryNotFound,
    AuthenticationFailed,
    PermissionDenied,
    Network,
    Certificate,
    Other,
}

type FailureCheck = fn(&str, ErrorClass) -> bool;

const CLASSIFICATIONS: &[(FailureCheck, FailureKind)] = &[
    (
        |msg, _| msg.contains("not found") || msg.contains("404") || msg.contains("does not exist"),
        FailureKind::RepositoryNotFound,
    ),
    (
        |msg, _| msg.contains("authentication") || msg.contains("credentials"),
        FailureKind::AuthenticationFailed,
    ),
    (
        |msg, _| msg.contains("permission denied") || msg.contains("access denied"),
        FailureKind::PermissionDenied,
    ),
    (
        |msg, class| {
            class == ErrorClass::Net
                || msg.contains("connection")
                || msg.contains("network")
                || msg.contains("resolve")
                || msg.contains("timed out")
                || msg.contains("timeout")
        },
        FailureKind::Network,
    ),
    (
        |msg, class| {
            (class == ErrorClass::Http || class == ErrorClass::Ssl)
                && (msg.contains("certificate") || msg.contains("ssl"))
        },
        FailureKind::Certificate,
    ),
];

fn classify(msg: &str, class: ErrorClass) -> FailureKind {
    CLASSIFICATIONS
        .iter()
        .find(|(check, _)| check(msg, class))
        .map_or(FailureKind::Other, |(_, kind)| *kind)
}

/// Interpret a git2 error and provide a more user-friendly message
pub fn interpret_git_error(err: &Error) -> String {
    let lowered = err.message().to_lowercase();

    match classify(&lowered, err.class()) {
        FailureKind::RepositoryNotFound => "Repository not found".to_string(),
        FailureKind::AuthenticationFailed => "Authentication failed".to_string(),
        FailureKind::PermissionDenied => "Permission denied".to_string(),
        FailureKind::Network => format!("Network error: {}", err.message()),
        FailureKind::Certificate => format!("TLS error: {}", err.message()),
        FailureKind::Other => err.message().to_string(),
    }
}
