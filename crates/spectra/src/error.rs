// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration errors and process exit codes.
//!
//! These abort a run before any spec tree is built. Spec failures are never
//! errors; they only show up in the report.

use std::path::PathBuf;

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("must supply at least one file")]
    NoFiles,

    #[error("file {} does not exist", path.display())]
    MissingFile { path: PathBuf },

    #[error("no spec suite registered for {}", path.display())]
    UnknownSuite { path: PathBuf },

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every counted spec passed.
    Success = 0,
    /// At least one counted spec failed.
    Failures = 1,
    /// The run could not start.
    ConfigError = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}
