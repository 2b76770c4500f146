// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runner configuration.
//!
//! Options come from an optional spectra.toml and the command line; files
//! given on the command line replace the configured list. Without an
//! explicit path, spectra.toml is looked up from the working directory
//! upward, stopping at the git root.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Config file name searched for by [`discover`].
pub const CONFIG_FILE: &str = "spectra.toml";

/// Keys recognized in spectra.toml.
const KNOWN_KEYS: &[&str] = &["files", "cover"];

/// What to run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunnerOptions {
    /// Spec files, run in order.
    pub files: Vec<PathBuf>,
    /// Paths to instrument for coverage. Accepted but not supported.
    pub cover: Option<PathBuf>,
}

impl RunnerOptions {
    pub fn new(files: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            cover: None,
        }
    }

    /// Reject options that cannot start a run.
    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(Error::NoFiles);
        }
        Ok(())
    }
}

/// Parse config content, returning the options and any unknown top-level keys.
pub fn parse(content: &str, path: &Path) -> Result<(RunnerOptions, Vec<String>)> {
    let parse_error = |source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    };
    let table: toml::Table = toml::from_str(content).map_err(parse_error)?;

    let unknown = table
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .cloned()
        .collect();

    let options = toml::Value::Table(table)
        .try_into()
        .map_err(parse_error)?;
    Ok((options, unknown))
}

/// Load config from `path`, logging a warning for each unknown key.
pub fn load_with_warnings(path: &Path) -> Result<RunnerOptions> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let (options, unknown) = parse(&content, path)?;
    for key in unknown {
        tracing::warn!("unknown key `{}` in {}", key, path.display());
    }
    Ok(options)
}

/// Find spectra.toml in `start_dir` or its nearest ancestor, without
/// leaving the enclosing git checkout.
pub fn discover(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
