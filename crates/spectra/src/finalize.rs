// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure aggregation over finished spec trees.
//!
//! Runs once, after all synchronous declaration and all asynchronous
//! completion callbacks have settled. Childless specs are always counted.
//! Grouping specs are counted only when they fail on their own, and inherit
//! their children's failures through [`Spec::has_failures`].

use serde::Serialize;

use crate::spec::Spec;

/// Pass/fail totals over counted specs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Counted specs: every childless spec, plus failing grouping specs.
    pub processed: usize,
    /// Counted specs that failed.
    pub failed: usize,
}

impl Summary {
    pub fn passed(&self) -> usize {
        self.processed - self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Finalize every tree in `roots`, in order.
pub fn finalize(roots: &[Spec]) -> Summary {
    let mut summary = Summary::default();
    for root in roots {
        finalize_spec(root, &mut summary);
    }
    tracing::debug!(
        "finalized {} specs, {} failed",
        summary.processed,
        summary.failed
    );
    summary
}

/// Post-order walk. Returns whether anything in the subtree failed.
fn finalize_spec(spec: &Spec, summary: &mut Summary) -> bool {
    let mut subtree_failed = false;
    for child in spec.children() {
        subtree_failed |= finalize_spec(&child, summary);
    }

    if !spec.is_done() || spec.is_empty() {
        spec.mark_failed();
    }
    let failed = spec.is_failed();

    if failed || !spec.has_children() {
        summary.processed += 1;
        if failed {
            summary.failed += 1;
        }
    }

    if failed {
        tracing::debug!("spec failed: {}", spec.title());
    }
    spec.set_subtree_failed(subtree_failed);
    subtree_failed || failed
}

#[cfg(test)]
#[path = "finalize_tests.rs"]
mod tests;
