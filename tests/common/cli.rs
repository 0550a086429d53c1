//! Shared helpers for end-to-end tests: a throwaway workspace and a
//! runner for the `nt` binary.

use std::path::Path;
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary directory acting as the working directory for `nt`.
pub struct NtWorkspace {
    dir: TempDir,
}

impl NtWorkspace {
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp workspace"),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Captured output of one `nt` invocation.
pub struct CmdOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run `nt` inside the workspace and capture its output.
///
/// `label` names the step in panic messages when the binary itself
/// cannot be executed.
pub fn run_nt<I, S>(workspace: &NtWorkspace, args: I, label: &str) -> CmdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let output = Command::cargo_bin("nt")
        .expect("nt binary built")
        .current_dir(workspace.path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run nt for step '{label}': {e}"));

    CmdOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
