// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::color::ColorMode;
use crate::config::RunnerOptions;

/// Run behavior specifications and report which ones passed
#[derive(Parser, Debug)]
#[command(name = "spectra")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Spec files to run, in order
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Path to cover (accepted for compatibility, not supported)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub cover: Option<PathBuf>,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "SPECTRA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Merge command-line options over those from a config file.
    pub fn runner_options(&self, config: RunnerOptions) -> RunnerOptions {
        RunnerOptions {
            files: if self.files.is_empty() {
                config.files
            } else {
                self.files.clone()
            },
            cover: self.cover.clone().or(config.cover),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
