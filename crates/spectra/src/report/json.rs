// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use std::io::Write;

use serde::Serialize;
use termcolor::WriteColor;

use crate::assert::AssertionError;
use crate::finalize::Summary;
use crate::spec::Spec;
use crate::token::Token;

use super::ReportFormatter;

/// JSON format report formatter.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport {
    specs: Vec<JsonSpec>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSpec {
    title: String,
    success: usize,
    failure: usize,
    done: bool,
    empty: bool,
    failed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    failures: Vec<AssertionError>,
    expected: Vec<Token>,
    observed: Vec<Token>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<JsonSpec>,
}

#[derive(Serialize)]
struct JsonSummary {
    processed: usize,
    passed: usize,
    failed: usize,
}

impl From<&Spec> for JsonSpec {
    fn from(spec: &Spec) -> Self {
        JsonSpec {
            title: spec.title().to_string(),
            success: spec.success_count(),
            failure: spec.failure_count(),
            done: spec.is_done(),
            empty: spec.is_empty(),
            failed: spec.is_failed(),
            failures: spec.failures(),
            expected: spec.expected(),
            observed: spec.observed(),
            children: spec.children().iter().map(JsonSpec::from).collect(),
        }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_to(
        &self,
        writer: &mut dyn WriteColor,
        specs: &[Spec],
        summary: &Summary,
    ) -> anyhow::Result<()> {
        let report = JsonReport {
            specs: specs.iter().map(JsonSpec::from).collect(),
            summary: JsonSummary {
                processed: summary.processed,
                passed: summary.passed(),
                failed: summary.failed,
            },
        };
        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
