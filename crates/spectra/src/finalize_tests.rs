// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::declaration::{Declaration, Suite, build};
use crate::test_utils::{child, root_spec};

#[test]
fn passing_leaf_is_counted() {
    let root = root_spec(|spec| {
        spec.equal(1 + 1, 2);
        spec.done();
    });

    let summary = finalize(std::slice::from_ref(&root));
    assert_eq!(summary, Summary { processed: 1, failed: 0 });
    assert!(!root.is_failed());
}

#[test]
fn unfinished_leaf_fails_despite_passing_assertion() {
    let root = root_spec(|spec| spec.equal(1, 1));

    let summary = finalize(std::slice::from_ref(&root));
    assert_eq!(summary.failed, 1);
    assert!(root.is_failed());
}

#[test]
fn empty_leaf_fails() {
    let root = root_spec(|spec| spec.done());

    let summary = finalize(std::slice::from_ref(&root));
    assert_eq!(summary.failed, 1);
    assert!(root.is_failed());
}

#[test]
fn failed_assertion_fails_finished_leaf() {
    let root = root_spec(|spec| {
        spec.fail("nope");
        spec.done();
    });

    finalize(std::slice::from_ref(&root));
    assert!(root.is_failed());
}

#[test]
fn grouping_specs_are_not_counted() {
    let root = build(
        None,
        "file.spec",
        Suite::new()
            .spec("a", |s| {
                s.ok(true);
                s.done();
            })
            .group(
                "group",
                Suite::new()
                    .spec("b", |s| {
                        s.ok(true);
                        s.done();
                    })
                    .spec("c", |s| s.ok(false)),
            )
            .into(),
    );

    let summary = finalize(std::slice::from_ref(&root));
    assert_eq!(summary, Summary { processed: 3, failed: 1 });
    assert_eq!(summary.passed(), 2);
}

#[test]
fn failure_propagates_to_ancestors_without_failing_them() {
    let root = build(
        None,
        "file.spec",
        Suite::new()
            .group("group", Suite::new().spec("bad", |s| s.fail("x")))
            .spec("good", |s| {
                s.ok(true);
                s.done();
            })
            .into(),
    );

    finalize(std::slice::from_ref(&root));

    let group = child(&root, "group");
    assert!(!root.is_failed());
    assert!(root.has_failures());
    assert!(!group.is_failed());
    assert!(group.has_failures());
    assert!(!child(&root, "good").has_failures());
}

#[test]
fn unfinished_grouping_spec_is_counted_as_failed() {
    let root = root_spec(|spec| {
        spec.expect(["never"]);
        spec.nest(Suite::new().spec("leaf", |s| {
            s.ok(true);
            s.done();
        }));
    });

    let summary = finalize(std::slice::from_ref(&root));
    assert!(root.is_failed());
    assert_eq!(summary, Summary { processed: 2, failed: 1 });
    assert_eq!(summary.passed(), 1);
}

#[test]
fn grouping_spec_with_failed_assertion_is_counted() {
    let root = root_spec(|spec| {
        spec.fail("parent assertion");
        spec.nest(Suite::new().spec("leaf", |s| {
            s.ok(true);
            s.done();
        }));
    });

    let summary = finalize(std::slice::from_ref(&root));
    assert!(root.is_failed());
    assert!(!child(&root, "leaf").is_failed());
    assert_eq!(summary, Summary { processed: 2, failed: 1 });
    assert!(summary.has_failures());
}

#[test]
fn passing_grouping_spec_with_assertions_is_not_counted() {
    let root = root_spec(|spec| {
        spec.ok(true);
        spec.nest(Suite::new().spec("leaf", |s| {
            s.ok(true);
            s.done();
        }));
    });

    let summary = finalize(std::slice::from_ref(&root));
    assert!(!root.is_failed());
    assert_eq!(summary, Summary { processed: 1, failed: 0 });
}

#[test]
fn failed_iff_assertion_failed_or_empty_or_unfinished() {
    let root = build(
        None,
        "file.spec",
        Suite::new()
            .spec("passing", |s| {
                s.ok(true);
                s.done();
            })
            .spec("failing", |s| {
                s.ok(false);
                s.done();
            })
            .spec("empty", |_| {})
            .spec("unfinished", |s| s.ok(true))
            .entry("bare", Declaration::Other)
            .into(),
    );

    finalize(std::slice::from_ref(&root));

    for spec in root.children() {
        let own_failure = spec.failure_count() > 0 || spec.is_empty() || !spec.is_done();
        assert_eq!(spec.is_failed(), own_failure, "{}", spec.title());
    }
    assert!(!child(&root, "passing").is_failed());
}

#[test]
fn summary_spans_all_roots() {
    let a = root_spec(|s| {
        s.ok(true);
        s.done();
    });
    let b = root_spec(|s| s.ok(true));

    let summary = finalize(&[a, b]);
    assert_eq!(summary, Summary { processed: 2, failed: 1 });
    assert!(summary.has_failures());
}

#[test]
fn empty_forest_has_no_failures() {
    let summary = finalize(&[]);
    assert_eq!(summary, Summary::default());
    assert!(!summary.has_failures());
}
