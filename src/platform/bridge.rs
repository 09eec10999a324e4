//! Linux compatibility bridge (WSL)
//!
//! When `--wsl` is given, the whole operation is re-issued inside the
//! subsystem and its exit status becomes ours. Nothing is touched on the
//! native side in that case.

use crate::error::{Result, SkillError};

use super::{CommandSpec, HostPlatform};

/// Subsystem launcher
pub const WSL_PROGRAM: &str = "wsl.exe";

/// `wsl.exe --list` writes UTF-16LE; handle both encodings
pub fn decode_wsl_output(bytes: &[u8]) -> String {
    let looks_utf16 = bytes.len() >= 2 && bytes.iter().skip(1).step_by(2).any(|b| *b == 0);
    let text = if looks_utf16 {
        let units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    };
    text.trim_start_matches('\u{feff}').to_string()
}

/// Registered distribution names
pub fn list_distributions(host: &dyn HostPlatform) -> Result<Vec<String>> {
    if !host.has_program(WSL_PROGRAM) {
        return Err(SkillError::BridgeUnavailable {
            reason: format!("{WSL_PROGRAM} was not found on this system"),
        });
    }

    let outcome = host
        .capture(&CommandSpec::new(WSL_PROGRAM).args(["--list", "--quiet"]))
        .map_err(|e| SkillError::BridgeUnavailable {
            reason: format!("failed to query {WSL_PROGRAM}: {e}"),
        })?;

    // wsl.exe exits non-zero when no distribution is installed
    if !outcome.success() {
        return Err(SkillError::BridgeUnavailable {
            reason: "no Linux distributions are registered".to_string(),
        });
    }

    Ok(decode_wsl_output(&outcome.stdout)
        .lines()
        .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == '\0'))
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect())
}

/// Re-run the operation inside the default distribution
///
/// Returns the exit code of the delegated run.
pub fn delegate(host: &dyn HostPlatform, program: &str, forwarded: &[String]) -> Result<i32> {
    let distributions = list_distributions(host)?;
    let Some(default) = distributions.first() else {
        return Err(SkillError::BridgeUnavailable {
            reason: "no Linux distributions are registered".to_string(),
        });
    };
    tracing::debug!(distribution = %default, "delegating into WSL");

    let script = shell_words::join(std::iter::once(program).chain(forwarded.iter().map(String::as_str)));
    let spec = CommandSpec::new(WSL_PROGRAM).args(["-e", "sh", "-lc"]).arg(script);

    let outcome = host.run(&spec).map_err(|e| SkillError::BridgeUnavailable {
        reason: format!("failed to start {WSL_PROGRAM}: {e}"),
    })?;

    Ok(outcome.code.unwrap_or(1))
}
