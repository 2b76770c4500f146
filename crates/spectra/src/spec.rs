// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The spec tree node.
//!
//! A [`Spec`] is a cheap handle to shared node state. Spec bodies receive a
//! `&Spec` and may clone it into callbacks that fire later; the clone refers
//! to the same node. Handles are `!Send`, so every mutation of a tree stays
//! on the thread that built it.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::assert::{Assertion, AssertionError};
use crate::declaration::{self, Suite};
use crate::token::{CompletionTracker, Token};

/// A completion signal sent to a spec.
pub enum Signal {
    /// "I'm done", with no argument.
    Empty,
    /// One named asynchronous event arrived.
    Label(String),
    /// Declare nested sub-specs; completion is satisfied automatically.
    Mapping(Suite),
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Empty => f.write_str("Empty"),
            Signal::Label(label) => f.debug_tuple("Label").field(label).finish(),
            Signal::Mapping(suite) => f.debug_tuple("Mapping").field(&suite.keys()).finish(),
        }
    }
}

/// A named unit of behavior under test.
#[derive(Clone)]
pub struct Spec {
    inner: Rc<SpecInner>,
}

struct SpecInner {
    title: String,
    parent: Option<Weak<SpecInner>>,
    state: RefCell<SpecState>,
}

#[derive(Default)]
struct SpecState {
    children: Vec<Spec>,
    good: Vec<Assertion>,
    bad: Vec<Assertion>,
    completion: CompletionTracker,
    failed: bool,
    subtree_failed: bool,
}

impl Spec {
    /// Create a spec and append it to `parent`'s children.
    pub(crate) fn new(parent: Option<&Spec>, title: impl Into<String>) -> Self {
        let spec = Spec {
            inner: Rc::new(SpecInner {
                title: title.into(),
                parent: parent.map(|p| Rc::downgrade(&p.inner)),
                state: RefCell::new(SpecState::default()),
            }),
        };
        if let Some(parent) = parent {
            parent.inner.state.borrow_mut().children.push(spec.clone());
        }
        spec
    }

    pub fn title(&self) -> &str {
        &self.inner.title
    }

    /// The owning spec, or `None` for a root.
    pub fn parent(&self) -> Option<Spec> {
        let parent = self.inner.parent.as_ref()?.upgrade()?;
        Some(Spec { inner: parent })
    }

    /// Children in declaration order.
    pub fn children(&self) -> Vec<Spec> {
        self.inner.state.borrow().children.clone()
    }

    pub fn has_children(&self) -> bool {
        !self.inner.state.borrow().children.is_empty()
    }

    /// Distance from the root (roots are at depth 0).
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(spec) = current {
            depth += 1;
            current = spec.parent();
        }
        depth
    }

    pub fn success_count(&self) -> usize {
        self.inner.state.borrow().good.len()
    }

    pub fn failure_count(&self) -> usize {
        self.inner.state.borrow().bad.len()
    }

    /// Errors captured from failed assertions, in the order they failed.
    pub fn failures(&self) -> Vec<AssertionError> {
        let state = self.inner.state.borrow();
        state.bad.iter().filter_map(|a| a.error.clone()).collect()
    }

    pub fn has_assertions(&self) -> bool {
        let state = self.inner.state.borrow();
        !state.good.is_empty() || !state.bad.is_empty()
    }

    pub fn expected(&self) -> Vec<Token> {
        self.inner.state.borrow().completion.expected().to_vec()
    }

    pub fn observed(&self) -> Vec<Token> {
        self.inner.state.borrow().completion.observed().to_vec()
    }

    /// True once the observed tokens match the expected ones.
    pub fn is_done(&self) -> bool {
        self.inner.state.borrow().completion.is_done()
    }

    /// True when the spec did no work: no children, no assertions, and no
    /// real completion expectation.
    pub fn is_empty(&self) -> bool {
        let state = self.inner.state.borrow();
        state.children.is_empty()
            && state.good.is_empty()
            && state.bad.is_empty()
            && state.completion.is_trivial()
    }

    /// Own failure state. Set by a failing assertion, and by finalize for
    /// specs that are empty or unfinished. Never reset.
    pub fn is_failed(&self) -> bool {
        self.inner.state.borrow().failed
    }

    /// True if this spec or any descendant failed. Meaningful after finalize.
    pub fn has_failures(&self) -> bool {
        let state = self.inner.state.borrow();
        state.failed || state.subtree_failed
    }

    /// Declare the exact sequence of labels this spec will receive.
    pub fn expect<I>(&self, tokens: I)
    where
        I: IntoIterator,
        I::Item: Into<Token>,
    {
        self.inner.state.borrow_mut().completion.expect(tokens);
    }

    /// Deliver a completion signal.
    pub fn signal(&self, signal: Signal) {
        match signal {
            Signal::Empty => {
                let mut state = self.inner.state.borrow_mut();
                state.completion.expect_default(Token::Empty);
                state.completion.observe(Token::Empty);
            }
            Signal::Label(label) => {
                self.inner
                    .state
                    .borrow_mut()
                    .completion
                    .observe(Token::Label(label));
            }
            Signal::Mapping(suite) => declaration::attach(self, suite),
        }
    }

    /// Signal completion with no argument.
    pub fn done(&self) {
        self.signal(Signal::Empty);
    }

    /// Signal that the named event arrived.
    pub fn done_with(&self, label: impl Into<String>) {
        self.signal(Signal::Label(label.into()));
    }

    /// Declare nested sub-specs.
    pub fn nest(&self, suite: Suite) {
        self.signal(Signal::Mapping(suite));
    }

    /// True if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Spec) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn record(&self, assertion: Assertion) {
        let mut state = self.inner.state.borrow_mut();
        if assertion.error.is_some() {
            state.failed = true;
            state.bad.push(assertion);
        } else {
            state.good.push(assertion);
        }
    }

    /// Record the map-marker pair for a mapping-shaped body.
    pub(crate) fn observe_mapping(&self) {
        let mut state = self.inner.state.borrow_mut();
        state.completion.expect_default(Token::Map);
        state.completion.observe(Token::Map);
    }

    pub(crate) fn mark_failed(&self) {
        self.inner.state.borrow_mut().failed = true;
    }

    pub(crate) fn set_subtree_failed(&self, failed: bool) {
        self.inner.state.borrow_mut().subtree_failed = failed;
    }
}

impl fmt::Debug for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("Spec")
            .field("title", &self.inner.title)
            .field("children", &state.children)
            .field("good", &state.good.len())
            .field("bad", &state.bad.len())
            .field("expected", &state.completion.expected())
            .field("observed", &state.completion.observed())
            .field("failed", &state.failed)
            .finish()
    }
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod tests;
