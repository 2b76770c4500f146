//! Test helpers for behavioral specifications.
//!
//! Provides helpers for running the demonstration harness binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the demo harness binary
pub fn spectra_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spectra-demo"));
    cmd.env_remove("SPECTRA_CONFIG")
        .env_remove("SPECTRA_LOG")
        .env_remove("NO_COLOR");
    cmd
}

/// Creates a temp directory holding (empty) spec files with the given names.
///
/// The harness compiles spec bodies in; the files only need to exist.
pub fn temp_project(files: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    for file in files {
        fs::write(dir.path().join(file), "").unwrap();
    }
    dir
}

/// Writes a spectra.toml into `dir`.
pub fn write_config(dir: &TempDir, content: &str) {
    fs::write(dir.path().join("spectra.toml"), content).unwrap();
}
