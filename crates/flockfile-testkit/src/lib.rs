//! Test utilities for flockfile
//!
//! Shared helpers for the lock tests: scratch directories that live inside the
//! workspace and lookup of the helper binaries built from `examples/`.

use std::path::PathBuf;
use std::process::{Command, ExitStatus};
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// Lock files are created inside it, so every test gets a fresh path that no
/// other test can contend on.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or if `.tmp/` or the
/// temporary subdirectory cannot be created.
///
/// # Examples
///
/// ```rust
/// use flockfile_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let lock_path = temp.path().join("test.lock");
/// std::fs::write(&lock_path, "").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = workspace_root.join(".tmp");

    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Get path to an example binary built alongside the test binary
///
/// `cargo test` builds the package's examples into `target/<profile>/examples/`,
/// one level up from the `deps/` directory holding the test executable.
///
/// # Examples
///
/// ```no_run
/// use flockfile_testkit::example_bin;
/// use std::process::Command;
///
/// fn test_with_example() {
///     let status = Command::new(example_bin("lock_holder"))
///         .arg("test.lock")
///         .arg("marker.txt")
///         .arg("0")
///         .status()
///         .unwrap();
///     assert!(status.success());
/// }
/// ```
pub fn example_bin(name: &str) -> PathBuf {
    let mut path = std::env::current_exe().expect("Failed to get current executable path");

    // target/debug/deps/test_binary -> target/debug/examples/
    path.pop();
    path.pop();
    path.push("examples");
    path.push(name);

    path
}

/// Runs an example binary to completion with the given arguments
///
/// # Panics
///
/// Panics if the binary cannot be spawned.
pub fn run_example<I, S>(name: &str, args: I) -> ExitStatus
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(example_bin(name))
        .args(args)
        .status()
        .unwrap_or_else(|e| panic!("Failed to execute {}: {}", name, e))
}
