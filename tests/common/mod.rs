//! Shared testing utilities for tunshell-install CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("tunshell-install").expect("Failed to locate tunshell-install binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    /// Write a session file with the standard test keys and return its path.
    pub fn write_session(&self) -> PathBuf {
        self.write_session_content(
            "initiator_key = \"abc\"\nremote_key = \"xyz\"\nencryption_secret = \"s3cr3t\"\n",
        )
    }

    pub fn write_session_content(&self, content: &str) -> PathBuf {
        let path = self.work_dir().join("session.toml");
        fs::write(&path, content).expect("Failed to write session file");
        path
    }
}
