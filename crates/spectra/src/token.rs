// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Completion tokens and the when/done matching model.
//!
//! Every spec carries two token lists. The *expected* list records what the
//! spec declared it will eventually receive; the *observed* list records what
//! it actually received. Matching is evaluated lazily: nothing is enforced
//! while tokens arrive, the lists are only compared when someone asks.

use std::fmt;

use serde::Serialize;

/// A single completion token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "label", rename_all = "snake_case")]
pub enum Token {
    /// A completion signal that carried no argument.
    Empty,
    /// A named asynchronous event.
    Label(String),
    /// A completion signal that carried a keyed sub-spec mapping.
    Map,
}

impl Token {
    /// Create a label token.
    pub fn label(label: impl Into<String>) -> Self {
        Token::Label(label.into())
    }
}

impl From<&str> for Token {
    fn from(label: &str) -> Self {
        Token::Label(label.to_string())
    }
}

impl From<String> for Token {
    fn from(label: String) -> Self {
        Token::Label(label)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Empty => write!(f, "<done>"),
            Token::Label(label) => write!(f, "{:?}", label),
            Token::Map => write!(f, "<map>"),
        }
    }
}

/// The expected/observed token lists of one spec.
///
/// Both lists are append-only.
#[derive(Debug, Default, Clone)]
pub struct CompletionTracker {
    expected: Vec<Token>,
    observed: Vec<Token>,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append tokens to the expected list.
    pub fn expect<I>(&mut self, tokens: I)
    where
        I: IntoIterator,
        I::Item: Into<Token>,
    {
        self.expected.extend(tokens.into_iter().map(Into::into));
    }

    /// Push `token` onto the expected list only if nothing was declared yet.
    pub fn expect_default(&mut self, token: Token) {
        if self.expected.is_empty() {
            self.expected.push(token);
        }
    }

    /// Record a received token.
    pub fn observe(&mut self, token: Token) {
        self.observed.push(token);
    }

    pub fn expected(&self) -> &[Token] {
        &self.expected
    }

    pub fn observed(&self) -> &[Token] {
        &self.observed
    }

    /// True once at least one token arrived and the observed sequence equals
    /// the expected one, element for element and in order.
    pub fn is_done(&self) -> bool {
        !self.observed.is_empty() && self.expected == self.observed
    }

    /// True when the spec declared no real expectation: nothing at all, or
    /// the single marker a bare signal registers on its own.
    pub fn is_trivial(&self) -> bool {
        matches!(self.expected.as_slice(), [] | [Token::Empty] | [Token::Map])
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
