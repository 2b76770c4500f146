// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Demonstration harness.
//!
//! Registers the bundled example suites and runs whichever files are named
//! on the command line.

mod suites;

fn main() -> std::process::ExitCode {
    let registry = suites::registry();
    spectra::cmd_run::main_with_settle(&registry, suites::settle)
}
