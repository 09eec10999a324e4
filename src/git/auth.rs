//! Git authentication callbacks
//!
//! Credentials come from git's own setup: the SSH agent, keys under
//! `~/.ssh/`, and configured credential helpers. This is why fetching the
//! catalog still expects a git installation even though libgit2 does the clone.

use git2::{Cred, CredentialType, Error, ErrorClass, ErrorCode, RemoteCallbacks};

const SSH_KEY_NAMES: &[&str] = &["id_ed25519", "id_rsa", "id_ecdsa"];

fn auth_failed(message: &str) -> Error {
    Error::new(ErrorCode::Auth, ErrorClass::Http, message)
}

fn try_ssh_key_files(username: &str) -> Result<Cred, Error> {
    let ssh_dir = dirs::home_dir().unwrap_or_default().join(".ssh");

    for key_name in SSH_KEY_NAMES {
        let private_key = ssh_dir.join(key_name);
        if !private_key.exists() {
            continue;
        }
        let public_key = ssh_dir.join(format!("{key_name}.pub"));
        let public_key_path = public_key.exists().then_some(public_key.as_path());

        if let Ok(cred) = Cred::ssh_key(username, public_key_path, &private_key, None) {
            return Ok(cred);
        }
    }

    Err(auth_failed("SSH key not found"))
}

fn try_credential_helper(url: &str, username_from_url: Option<&str>) -> Result<Cred, Error> {
    let config = git2::Config::open_default().or_else(|_| git2::Config::new())?;

    if let Ok(cred) = Cred::credential_helper(&config, url, username_from_url) {
        return Ok(cred);
    }

    // Public repositories accept an anonymous user
    Cred::userpass_plaintext(username_from_url.unwrap_or("git"), "")
}

/// Install credential callbacks on a fetch
pub fn setup_auth_callbacks(callbacks: &mut RemoteCallbacks) {
    callbacks.credentials(|url, username_from_url, allowed_types| {
        if allowed_types.contains(CredentialType::DEFAULT) {
            return Cred::default();
        }

        if allowed_types.contains(CredentialType::SSH_KEY) {
            let username = username_from_url.unwrap_or("git");
            return Cred::ssh_key_from_agent(username).or_else(|_| try_ssh_key_files(username));
        }

        if allowed_types.contains(CredentialType::USER_PASS_PLAINTEXT) {
            return try_credential_helper(url, username_from_url);
        }

        Err(auth_failed("authentication failed"))
    });
}
