// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spec runner.
//!
//! Builds one spec tree per file, waits for the host to declare that
//! asynchronous work has settled, then finalizes and reports.

use std::path::{Path, PathBuf};

use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::config::RunnerOptions;
use crate::declaration;
use crate::error::{Error, Result};
use crate::finalize::{self, Summary};
use crate::loader::SpecLoader;
use crate::report;
use crate::spec::Spec;

/// Runs spec files and collects their trees.
pub struct Runner {
    options: RunnerOptions,
    root: Option<PathBuf>,
    specs: Vec<Spec>,
    summary: Option<Summary>,
}

impl Runner {
    pub fn new(options: RunnerOptions) -> Self {
        Self {
            options,
            root: None,
            specs: Vec::new(),
            summary: None,
        }
    }

    /// Resolve relative spec paths against `root` instead of the process
    /// working directory.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Root specs, one per file, in file order.
    pub fn specs(&self) -> &[Spec] {
        &self.specs
    }

    /// Validate the options, check that every file exists, load every
    /// declaration, then build each file's tree.
    ///
    /// Spec bodies run synchronously here. Nothing is built if any file is
    /// missing or cannot be loaded.
    pub fn start(&mut self, loader: &dyn SpecLoader) -> Result<()> {
        self.options.validate()?;
        if let Some(ref cover) = self.options.cover {
            tracing::warn!(
                "coverage is not supported, ignoring cover path {}",
                cover.display()
            );
        }

        for file in &self.options.files {
            if !self.resolve(file).exists() {
                return Err(Error::MissingFile { path: file.clone() });
            }
        }

        let declarations = self
            .options
            .files
            .iter()
            .map(|file| {
                tracing::debug!("loading {}", file.display());
                loader.load(file)
            })
            .collect::<Result<Vec<_>>>()?;

        for (file, declaration) in self.options.files.iter().zip(declarations) {
            let root = declaration::build(None, file.display().to_string(), declaration);
            self.specs.push(root);
        }
        Ok(())
    }

    /// Finalize all trees. Call once asynchronous work has settled; later
    /// calls return the same summary.
    pub fn finish(&mut self) -> Summary {
        *self
            .summary
            .get_or_insert_with(|| finalize::finalize(&self.specs))
    }

    /// Finalize if needed, then write the report.
    pub fn report(
        &mut self,
        format: OutputFormat,
        writer: &mut dyn WriteColor,
    ) -> anyhow::Result<Summary> {
        let summary = self.finish();
        report::format_report_to(writer, format, &self.specs, &summary)?;
        Ok(summary)
    }

    fn resolve(&self, file: &Path) -> PathBuf {
        match self.root {
            Some(ref root) => root.join(file),
            None => file.to_path_buf(),
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
