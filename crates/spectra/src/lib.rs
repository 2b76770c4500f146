// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A minimal behavior-specification runner.
//!
//! Specs are declared as nested [`Suite`]s of named bodies. Each body runs
//! once, records assertions on its [`Spec`], and signals completion, either
//! immediately or later from asynchronous callbacks. After the host decides
//! that asynchronous work has settled, [`finalize`] turns the trees into
//! pass/fail counts and a report.

pub mod assert;
pub mod cli;
pub mod cmd_run;
pub mod color;
pub mod config;
pub mod declaration;
pub mod error;
pub mod finalize;
pub mod loader;
pub mod report;
pub mod runner;
pub mod spec;
pub mod token;

#[cfg(test)]
pub mod test_utils;

pub use assert::{AssertionError, AssertionKind, Truthy};
pub use declaration::{Declaration, Suite, build};
pub use error::{Error, ExitCode};
pub use finalize::{Summary, finalize};
pub use loader::{Registry, SpecLoader};
pub use runner::Runner;
pub use spec::{Signal, Spec};
pub use token::Token;
