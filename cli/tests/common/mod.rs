//! Common test utilities for integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory the `mycopy` binary runs in.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Create a new fixture with a fresh, empty directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Absolute path of `name` inside the fixture directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `content` to `name` and return its absolute path.
    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// A `mycopy` command whose working directory is the fixture directory
    /// and whose diagnostic logging is off.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("mycopy");
        cmd.current_dir(self.dir.path()).env_remove("MYCOPY_LOG");
        cmd
    }

    /// Names of all entries in the fixture directory, sorted.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.dir.path())
            .expect("Failed to read directory")
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Check that a file exists and holds exactly `expected`.
    pub fn assert_file_bytes(&self, path: &Path, expected: &[u8]) {
        assert!(path.exists(), "File does not exist: {:?}", path);
        let actual = fs::read(path).expect("Failed to read file");
        assert_eq!(actual, expected, "File content mismatch");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// The line printed before a copy starts.
pub fn announcement(src: &Path, dst: &Path) -> String {
    format!(
        "Copying contents from file '{}' to '{}'.",
        src.display(),
        dst.display()
    )
}

/// Whether the tests run as root, where permission bits are not enforced.
#[cfg(unix)]
pub fn running_as_root() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail
    unsafe { libc::geteuid() == 0 }
}
