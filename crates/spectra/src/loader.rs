// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spec file loading.
//!
//! Spec code is compiled into the harness binary, so "loading" a file means
//! looking up the declaration registered for its path.

use std::path::{Path, PathBuf};

use crate::declaration::Declaration;
use crate::error::{Error, Result};

/// Produces the root declaration for a spec file.
pub trait SpecLoader {
    fn load(&self, file: &Path) -> Result<Declaration>;
}

impl<F> SpecLoader for F
where
    F: Fn(&Path) -> Result<Declaration>,
{
    fn load(&self, file: &Path) -> Result<Declaration> {
        self(file)
    }
}

type Factory = Box<dyn Fn() -> Declaration>;

/// Maps spec file paths, as given on the command line, to declarations.
#[derive(Default)]
pub struct Registry {
    suites: Vec<(PathBuf, Factory)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` for `path`. A later registration for the same
    /// path replaces the earlier one.
    pub fn register<F>(mut self, path: impl Into<PathBuf>, factory: F) -> Self
    where
        F: Fn() -> Declaration + 'static,
    {
        let path = path.into();
        self.suites.retain(|(existing, _)| *existing != path);
        self.suites.push((path, Box::new(factory)));
        self
    }

    /// Registered paths, in registration order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.suites.iter().map(|(path, _)| path.as_path())
    }
}

impl SpecLoader for Registry {
    fn load(&self, file: &Path) -> Result<Declaration> {
        let factory = self
            .suites
            .iter()
            .find(|(path, _)| path == file)
            .map(|(_, factory)| factory)
            .ok_or_else(|| Error::UnknownSuite {
                path: file.to_path_buf(),
            })?;
        Ok(factory())
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
