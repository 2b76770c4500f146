// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spec declarations and the tree builder.
//!
//! A declaration is resolved once, when it is built: a function body runs
//! immediately with its spec, a mapping turns each entry into a child spec,
//! and anything else leaves the spec without a body. Malformed declarations
//! never raise; they surface in the report as empty or unfinished specs.

use std::fmt;

use crate::spec::Spec;

/// A spec body.
pub type SpecFn = Box<dyn FnOnce(&Spec)>;

/// The shape of a spec declaration.
pub enum Declaration {
    /// A body that receives its spec.
    Function(SpecFn),
    /// Named sub-specs, in declaration order.
    Mapping(Suite),
    /// Anything else. Builds a spec with no body.
    Other,
}

impl Declaration {
    pub fn function<F>(body: F) -> Self
    where
        F: FnOnce(&Spec) + 'static,
    {
        Declaration::Function(Box::new(body))
    }
}

impl From<Suite> for Declaration {
    fn from(suite: Suite) -> Self {
        Declaration::Mapping(suite)
    }
}

impl fmt::Debug for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declaration::Function(_) => f.write_str("Function(..)"),
            Declaration::Mapping(suite) => f.debug_tuple("Mapping").field(&suite.keys()).finish(),
            Declaration::Other => f.write_str("Other"),
        }
    }
}

/// An ordered mapping of names to declarations.
///
/// ```ignore
/// let suite = Suite::new()
///     .spec("adds numbers", |spec| {
///         spec.equal(1 + 1, 2);
///         spec.done();
///     })
///     .group("strings", Suite::new().spec("concat", |spec| {
///         spec.equal(format!("{}{}", "a", "b"), "ab");
///         spec.done();
///     }));
/// ```
#[derive(Default)]
pub struct Suite {
    entries: Vec<(String, Declaration)>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a spec with a function body.
    pub fn spec<F>(self, name: impl Into<String>, body: F) -> Self
    where
        F: FnOnce(&Spec) + 'static,
    {
        self.entry(name, Declaration::function(body))
    }

    /// Add a nested group of specs.
    pub fn group(self, name: impl Into<String>, suite: Suite) -> Self {
        self.entry(name, Declaration::Mapping(suite))
    }

    /// Add an entry of any shape.
    pub fn entry(mut self, name: impl Into<String>, declaration: Declaration) -> Self {
        self.entries.push((name.into(), declaration));
        self
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Declaration)> for Suite {
    fn from_iter<I: IntoIterator<Item = (S, Declaration)>>(iter: I) -> Self {
        Suite {
            entries: iter
                .into_iter()
                .map(|(name, declaration)| (name.into(), declaration))
                .collect(),
        }
    }
}

/// Build a spec from `declaration`, attaching it to `parent` when given.
///
/// Function bodies run exactly once, before this returns.
pub fn build(parent: Option<&Spec>, name: impl Into<String>, declaration: Declaration) -> Spec {
    let spec = Spec::new(parent, name);
    match declaration {
        Declaration::Function(body) => {
            tracing::debug!("running spec body: {}", spec.title());
            body(&spec);
        }
        Declaration::Mapping(suite) => attach(&spec, suite),
        Declaration::Other => {
            tracing::debug!("spec has no body: {}", spec.title());
        }
    }
    spec
}

/// Build every entry of `suite` as a child of `spec`, then record the
/// map-marker on it.
pub(crate) fn attach(spec: &Spec, suite: Suite) {
    tracing::debug!("{}: {} sub-specs", spec.title(), suite.len());
    for (name, declaration) in suite.entries {
        build(Some(spec), name, declaration);
    }
    spec.observe_mapping();
}

#[cfg(test)]
#[path = "declaration_tests.rs"]
mod tests;
