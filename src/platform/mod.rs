//! Host platform capabilities
//!
//! This module handles:
//! - Operating system detection ([`HostOs`])
//! - The [`HostPlatform`] capability trait: home directory, program lookup,
//!   subprocess invocation
//! - The Linux compatibility bridge ([`bridge`])
//! - External tool checks ([`prereq`])
//!
//! Everything that differs between Windows, macOS and Linux goes through
//! [`HostPlatform`], so the install and uninstall pipelines are written once.

use std::path::PathBuf;
use std::process::{Command, Stdio};

pub mod bridge;
pub mod prereq;

/// Operating system family of the running host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Windows,
    MacOs,
    Linux,
    Other,
}

impl HostOs {
    pub fn current() -> Self {
        if cfg!(windows) {
            HostOs::Windows
        } else if cfg!(target_os = "macos") {
            HostOs::MacOs
        } else if cfg!(target_os = "linux") {
            HostOs::Linux
        } else {
            HostOs::Other
        }
    }
}

/// A subprocess to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Build from an argv list; `None` when the list is empty
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone()).args(args.iter().cloned()))
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Shell-style rendering for messages
    pub fn display(&self) -> String {
        let mut words = vec![self.program.as_str()];
        words.extend(self.args.iter().map(String::as_str));
        shell_words::join(words)
    }
}

/// Result of a finished subprocess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Exit code; `None` when terminated by a signal
    pub code: Option<i32>,
    /// Captured stdout (empty for inherited stdio)
    pub stdout: Vec<u8>,
}

impl CommandOutcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Human-readable exit description
    pub fn describe(&self) -> String {
        match self.code {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Capabilities the pipelines need from the host
pub trait HostPlatform {
    fn os(&self) -> HostOs;

    fn home_dir(&self) -> Option<PathBuf>;

    /// Resolve a program on PATH
    fn find_program(&self, name: &str) -> Option<PathBuf>;

    /// Run with inherited stdio and wait for completion
    fn run(&self, command: &CommandSpec) -> std::io::Result<CommandOutcome>;

    /// Run with stdout captured and stderr discarded
    fn capture(&self, command: &CommandSpec) -> std::io::Result<CommandOutcome>;

    fn has_program(&self, name: &str) -> bool {
        self.find_program(name).is_some()
    }
}

/// The real host
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPlatform;

impl SystemPlatform {
    fn command(&self, spec: &CommandSpec) -> Command {
        // Resolve through PATH/PATHEXT so `npm` finds `npm.cmd` on Windows
        let program = self
            .find_program(&spec.program)
            .unwrap_or_else(|| PathBuf::from(&spec.program));
        let mut command = Command::new(program);
        command.args(&spec.args);
        if let Some(ref dir) = spec.cwd {
            command.current_dir(dir);
        }
        command
    }
}

impl HostPlatform for SystemPlatform {
    fn os(&self) -> HostOs {
        HostOs::current()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn find_program(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }

    fn run(&self, spec: &CommandSpec) -> std::io::Result<CommandOutcome> {
        tracing::debug!(command = %spec.display(), cwd = ?spec.cwd, "running");
        let status = self.command(spec).status()?;
        Ok(CommandOutcome {
            code: status.code(),
            stdout: Vec::new(),
        })
    }

    fn capture(&self, spec: &CommandSpec) -> std::io::Result<CommandOutcome> {
        tracing::debug!(command = %spec.display(), "capturing");
        let output = self
            .command(spec)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;
        Ok(CommandOutcome {
            code: output.status.code(),
            stdout: output.stdout,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_spec_display_quotes_arguments() {
        let spec = CommandSpec::new("sh").args(["-lc", "skilldeploy install --all"]);
        assert_eq!(spec.display(), "sh -lc 'skilldeploy install --all'");
    }

    #[test]
    fn test_command_spec_from_argv() {
        let argv = vec!["npm".to_string(), "install".to_string()];
        let spec = CommandSpec::from_argv(&argv).unwrap();
        assert_eq!(spec.program, "npm");
        assert_eq!(spec.args, vec!["install"]);
        assert!(CommandSpec::from_argv(&[]).is_none());
    }

    #[test]
    fn test_outcome_describe() {
        let ok = CommandOutcome {
            code: Some(0),
            stdout: Vec::new(),
        };
        let signalled = CommandOutcome {
            code: None,
            stdout: Vec::new(),
        };
        assert!(ok.success());
        assert_eq!(ok.describe(), "exit status 0");
        assert!(!signalled.success());
        assert_eq!(signalled.describe(), "terminated by signal");
    }

    #[test]
    fn test_fake_platform_records_calls() {
        let host = fake::FakePlatform::with_all_tools();
        host.push_outcome("npm", 3, b"");
        let outcome = host.run(&CommandSpec::new("npm").arg("install")).unwrap();
        assert_eq!(outcome.code, Some(3));
        assert_eq!(host.calls_to("npm").len(), 1);
        assert!(host.run(&CommandSpec::new("missing")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_system_platform_capture() {
        let outcome = SystemPlatform
            .capture(&CommandSpec::new("sh").args(["-c", "printf hello"]))
            .unwrap();
        assert!(outcome.success());
        assert_eq!(outcome.stdout, b"hello");
    }
}
