//! Host session boundary.
//!
//! The statistics host executes two kinds of submitted work on our behalf:
//! shell commands (pip invocations wrapped in the host's command syntax) and
//! R program blocks (routed through the host's R plugin). Both are blocking
//! calls with captured output; the host imposes no timeout, and neither do we.

use anyhow::{Context, Result};
use std::process::Command;

/// Captured result of one submitted command.
///
/// `success` reflects the process exit status. A command that ran and failed
/// is still `Ok(HostOutput { success: false, .. })`; `Err` from a session
/// method means the process could not be spawned at all.
#[derive(Debug, Clone)]
pub struct HostOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

#[cfg_attr(test, mockall::automock)]
pub trait HostSession: Send + Sync {
    /// Submit a shell command line to the host environment.
    fn run_shell(&self, command: &str) -> Result<HostOutput>;

    /// Submit an R program block to the host's R engine.
    fn run_r_program(&self, program: &str) -> Result<HostOutput>;
}

/// Session that runs submitted work as local subprocesses.
///
/// Inside the host application the same trait is backed by the host's own
/// submission API; standalone, shell lines go through the platform shell and
/// R programs through `Rscript`.
pub struct RealHostSession;

impl RealHostSession {
    fn capture(output: std::process::Output) -> HostOutput {
        HostOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl HostSession for RealHostSession {
    #[tracing::instrument(skip(self))]
    fn run_shell(&self, command: &str) -> Result<HostOutput> {
        #[cfg(windows)]
        let output = Command::new("cmd")
            .args(["/C", command])
            .output()
            .context("Failed to run shell command")?;
        #[cfg(not(windows))]
        let output = Command::new("sh")
            .args(["-c", command])
            .output()
            .context("Failed to run shell command")?;

        Ok(Self::capture(output))
    }

    #[tracing::instrument(skip(self, program))]
    fn run_r_program(&self, program: &str) -> Result<HostOutput> {
        let output = Command::new("Rscript")
            .args(["--vanilla", "-e", program])
            .output()
            .context("Failed to run R program")?;

        Ok(Self::capture(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_run_shell_captures_stdout() {
        let session = RealHostSession;
        let out = session.run_shell("echo hello").unwrap();
        assert!(out.success);
        assert_eq!(out.stdout.trim(), "hello");
        assert!(out.stderr.is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn test_run_shell_reports_failure() {
        let session = RealHostSession;
        let out = session.run_shell("echo oops >&2; exit 3").unwrap();
        assert!(!out.success);
        assert_eq!(out.stderr.trim(), "oops");
    }
}
