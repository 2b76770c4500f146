// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::io::Write;

use termcolor::{ColorSpec, WriteColor};

use crate::color::scheme;
use crate::finalize::Summary;
use crate::spec::Spec;

use super::{EMPTY_WARNING, ReportFormatter, UNFINISHED_WARNING, indent};

/// Text format report formatter.
///
/// Depth-first, pre-order: each spec prints its title, then its assertion
/// counts and failure messages, then any warnings, then its children one
/// level deeper.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format_to(
        &self,
        writer: &mut dyn WriteColor,
        specs: &[Spec],
        summary: &Summary,
    ) -> anyhow::Result<()> {
        for spec in specs {
            write_spec(writer, spec, 0)?;
        }

        write_colored(
            writer,
            &scheme::pass(),
            &format!("Success: {}", summary.passed()),
        )?;
        if summary.failed > 0 {
            write_colored(writer, &scheme::fail(), &format!("Failure: {}", summary.failed))?;
        }
        Ok(())
    }
}

fn write_spec(writer: &mut dyn WriteColor, spec: &Spec, depth: usize) -> std::io::Result<()> {
    let title_color = if spec.has_failures() {
        scheme::failed_title()
    } else {
        scheme::title()
    };
    write_colored(writer, &title_color, &indent(spec.title(), depth))?;

    if spec.has_assertions() {
        let failures = spec.failures();
        writeln!(
            writer,
            "{}",
            indent(&format!("success: {}", spec.success_count()), depth + 1)
        )?;
        let failure_color = if failures.is_empty() {
            ColorSpec::new()
        } else {
            scheme::fail()
        };
        write_colored(
            writer,
            &failure_color,
            &indent(&format!("failure: {}", spec.failure_count()), depth + 1),
        )?;
        for failure in failures {
            writeln!(writer, "{}", indent(&failure.message, depth + 2))?;
        }
    }

    if spec.is_empty() {
        write_colored(writer, &scheme::warning(), &indent(EMPTY_WARNING, depth + 1))?;
    }
    if !spec.is_done() {
        write_colored(
            writer,
            &scheme::warning(),
            &indent(UNFINISHED_WARNING, depth + 1),
        )?;
    }

    for child in spec.children() {
        write_spec(writer, &child, depth + 1)?;
    }
    Ok(())
}

fn write_colored(writer: &mut dyn WriteColor, color: &ColorSpec, line: &str) -> std::io::Result<()> {
    writer.set_color(color)?;
    write!(writer, "{}", line)?;
    writer.reset()?;
    writeln!(writer)
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
