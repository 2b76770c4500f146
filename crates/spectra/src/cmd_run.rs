// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness entry point.
//!
//! A harness binary registers its spec suites and calls [`main`] (or
//! [`main_with_settle`] when specs wait on deferred callbacks).

use anyhow::Context;
use clap::Parser;
use termcolor::StandardStream;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::{self, RunnerOptions};
use crate::error::ExitCode;
use crate::loader::SpecLoader;
use crate::runner::Runner;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SPECTRA_LOG";

/// Parse arguments, run the specs, and report.
pub fn main(loader: &dyn SpecLoader) -> std::process::ExitCode {
    main_with_settle(loader, || {})
}

/// Like [`main`], calling `settle` after the spec bodies ran and before the
/// trees are finalized.
pub fn main_with_settle(loader: &dyn SpecLoader, settle: impl FnOnce()) -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli, loader, settle) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("spectra: {:#}", err);
            ExitCode::ConfigError.into()
        }
    }
}

/// Run the specs named by `cli`.
pub fn run(cli: &Cli, loader: &dyn SpecLoader, settle: impl FnOnce()) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    // Explicit --config, then discovery
    let config_path = cli.config.clone().or_else(|| config::discover(&cwd));
    let config = match config_path {
        Some(path) => config::load_with_warnings(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => RunnerOptions::default(),
    };

    let mut runner = Runner::new(cli.runner_options(config)).with_root(&cwd);
    runner.start(loader)?;

    settle();

    let mut stdout = StandardStream::stdout(cli.color.resolve(cli.no_color));
    let summary = runner.report(cli.output, &mut stdout)?;

    Ok(if summary.has_failures() {
        ExitCode::Failures
    } else {
        ExitCode::Success
    })
}

/// Log to stderr, filtered by `SPECTRA_LOG` (default `warn`, or `debug`
/// when verbose).
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
