// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Example spec suites.
//!
//! Asynchronous work is simulated with a queue of deferred callbacks that
//! the harness drains before finalizing.

use std::cell::RefCell;
use std::collections::VecDeque;

use spectra::{Declaration, Registry, Suite};

thread_local! {
    static PENDING: RefCell<VecDeque<Box<dyn FnOnce()>>> = RefCell::new(VecDeque::new());
}

/// Queue `callback` to run during [`settle`].
fn defer(callback: impl FnOnce() + 'static) {
    PENDING.with(|pending| pending.borrow_mut().push_back(Box::new(callback)));
}

/// Run deferred callbacks, including ones they queue, until none remain.
pub fn settle() {
    while let Some(callback) = PENDING.with(|pending| pending.borrow_mut().pop_front()) {
        callback();
    }
}

pub fn registry() -> Registry {
    Registry::new()
        .register("arithmetic.spec", arithmetic)
        .register("events.spec", events)
        .register("broken.spec", broken)
        .register("fixtures.spec", fixtures)
}

fn arithmetic() -> Declaration {
    Suite::new()
        .spec("adds numbers", |spec| {
            spec.equal(1 + 1, 2);
            spec.done();
        })
        .spec("multiplies", |spec| {
            spec.equal(3 * 4, 12);
            spec.strict_equal(&(2 * 2), &4);
            spec.done();
        })
        .group(
            "parsing",
            Suite::new()
                .spec("parses integers", |spec| {
                    spec.strict_equal(&"42".parse::<i32>().ok(), &Some(42));
                    spec.done();
                })
                .spec("rejects garbage", |spec| {
                    spec.throws(|| "forty-two".parse::<i32>());
                    spec.done();
                }),
        )
        .into()
}

fn events() -> Declaration {
    Declaration::function(|root| {
        root.nest(
            Suite::new()
                .spec("ticks in order", |spec| {
                    spec.expect(["tick", "tock"]);
                    let tick = spec.clone();
                    defer(move || tick.done_with("tick"));
                    let tock = spec.clone();
                    defer(move || tock.done_with("tock"));
                })
                .spec("finishes later", |spec| {
                    let spec = spec.clone();
                    defer(move || {
                        spec.deep_equal(&vec![1, 2, 3], &[1, 2, 3]);
                        spec.done();
                    });
                }),
        );
    })
}

fn broken() -> Declaration {
    Suite::new()
        .spec("wrong sum", |spec| {
            spec.equal(1 + 1, 3);
            spec.done();
        })
        .spec("empty", |_spec| {})
        .spec("never finishes", |spec| {
            spec.ok(true);
        })
        .spec("out of order", |spec| {
            spec.expect(["first", "second"]);
            let late = spec.clone();
            defer(move || {
                late.done_with("second");
                late.done_with("first");
            });
        })
        .into()
}

fn fixtures() -> Declaration {
    Declaration::function(|root| {
        root.fail("fixture directory missing");
        root.nest(Suite::new().spec("indexes past the end", |spec| {
            spec.throws(|| {
                element(&[], 3);
            });
            spec.done();
        }));
    })
}

fn element(items: &[i32], index: usize) -> i32 {
    items[index]
}
