// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report output.
//!
//! Renders finished spec trees as indented text or JSON.

mod json;
mod text;

use termcolor::{Buffer, WriteColor};

use crate::cli::OutputFormat;
use crate::finalize::Summary;
use crate::spec::Spec;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Warning printed under specs with no assertions and no children.
pub const EMPTY_WARNING: &str =
    "Spec appears to be empty. Specs must contain assertions or child specs.";

/// Warning printed under specs whose completion signals did not match.
pub const UNFINISHED_WARNING: &str = "Spec did not finish. Did you use the spec callback?";

/// Trait for formatting spec trees into various output formats.
pub trait ReportFormatter {
    /// Write the report for `specs` to `writer`.
    fn format_to(
        &self,
        writer: &mut dyn WriteColor,
        specs: &[Spec],
        summary: &Summary,
    ) -> anyhow::Result<()>;

    /// Render the report into an uncolored string.
    fn format(&self, specs: &[Spec], summary: &Summary) -> anyhow::Result<String> {
        let mut buffer = Buffer::no_color();
        self.format_to(&mut buffer, specs, summary)?;
        Ok(String::from_utf8(buffer.into_inner())?)
    }
}

fn formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Write a report in `format` to `writer`.
pub fn format_report_to(
    writer: &mut dyn WriteColor,
    format: OutputFormat,
    specs: &[Spec],
    summary: &Summary,
) -> anyhow::Result<()> {
    formatter(format).format_to(writer, specs, summary)
}

/// Render a report in `format` to a string.
pub fn format_report(
    format: OutputFormat,
    specs: &[Spec],
    summary: &Summary,
) -> anyhow::Result<String> {
    formatter(format).format(specs, summary)
}

/// Indent every line of `s` by two spaces per `depth` level.
pub fn indent(s: &str, depth: usize) -> String {
    let prefix = "  ".repeat(depth);
    let mut out = String::with_capacity(s.len() + prefix.len());
    for (i, line) in s.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&prefix);
        out.push_str(line);
    }
    out
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
