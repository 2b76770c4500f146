// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::declaration::{Suite, build};
use crate::finalize::finalize;

fn render(roots: &[Spec]) -> serde_json::Value {
    let summary = finalize(roots);
    let text = JsonFormatter.format(roots, &summary).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn json_report_has_tree_and_summary() {
    let root = build(
        None,
        "math.spec",
        Suite::new()
            .spec("adds numbers", |spec| {
                spec.equal(1 + 1, 2);
                spec.done();
            })
            .spec("wrong", |spec| {
                spec.equal(1, 2);
                spec.done();
            })
            .into(),
    );

    let json = render(&[root]);

    let spec = &json["specs"][0];
    assert_eq!(spec["title"], "math.spec");
    assert_eq!(spec["done"], true);
    assert_eq!(spec["expected"], serde_json::json!([{ "kind": "map" }]));

    let adds = &spec["children"][0];
    assert_eq!(adds["title"], "adds numbers");
    assert_eq!(adds["success"], 1);
    assert_eq!(adds["failed"], false);
    assert!(adds.get("failures").is_none());
    assert!(adds.get("children").is_none());

    let wrong = &spec["children"][1];
    assert_eq!(wrong["failed"], true);
    assert_eq!(wrong["failures"][0]["kind"], "equal");
    assert_eq!(wrong["failures"][0]["message"], "1 == 2");

    assert_eq!(
        json["summary"],
        serde_json::json!({ "processed": 2, "passed": 1, "failed": 1 })
    );
}

#[test]
fn json_labels_serialize_with_kind() {
    let root = build(
        None,
        "events.spec",
        crate::declaration::Declaration::function(|spec| {
            spec.expect(["tick"]);
            spec.done_with("tick");
        }),
    );

    let json = render(&[root]);
    assert_eq!(
        json["specs"][0]["observed"],
        serde_json::json!([{ "kind": "label", "label": "tick" }])
    );
}
