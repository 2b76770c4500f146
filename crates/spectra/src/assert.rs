// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion recording.
//!
//! Every assertion method on [`Spec`] evaluates a predicate and records the
//! outcome on that spec. Failures are captured, never raised, so a spec body
//! keeps running after a failed assertion.

use std::any::Any;
use std::fmt::{Debug, Display};
use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;

use crate::spec::Spec;

/// The fixed set of assertion kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssertionKind {
    Equal,
    NotEqual,
    DeepEqual,
    NotDeepEqual,
    StrictEqual,
    NotStrictEqual,
    Fail,
    Ok,
    Throws,
    DoesNotThrow,
    IfError,
}

impl AssertionKind {
    pub fn name(self) -> &'static str {
        match self {
            AssertionKind::Equal => "equal",
            AssertionKind::NotEqual => "not_equal",
            AssertionKind::DeepEqual => "deep_equal",
            AssertionKind::NotDeepEqual => "not_deep_equal",
            AssertionKind::StrictEqual => "strict_equal",
            AssertionKind::NotStrictEqual => "not_strict_equal",
            AssertionKind::Fail => "fail",
            AssertionKind::Ok => "ok",
            AssertionKind::Throws => "throws",
            AssertionKind::DoesNotThrow => "does_not_throw",
            AssertionKind::IfError => "if_error",
        }
    }
}

/// The error captured from a failed assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct AssertionError {
    pub kind: AssertionKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

impl AssertionError {
    pub fn new(kind: AssertionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    fn with_values(mut self, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self.actual = Some(actual.into());
        self
    }
}

/// One recorded assertion outcome. `error` is set only for failures.
#[derive(Debug, Clone, PartialEq)]
pub struct Assertion {
    pub kind: AssertionKind,
    pub error: Option<AssertionError>,
}

/// Values with a truthiness, for [`Spec::ok`].
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl<T> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl Truthy for &str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

macro_rules! truthy_int {
    ($($ty:ty),*) => {
        $(impl Truthy for $ty {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

truthy_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

/// Return values of closures passed to [`Spec::throws`].
///
/// A closure "throws" when it panics or returns an error.
pub trait Outcome {
    /// The error message, if this outcome is a failure.
    fn into_error(self) -> Option<String>;
}

impl Outcome for () {
    fn into_error(self) -> Option<String> {
        None
    }
}

impl<T, E: Display> Outcome for Result<T, E> {
    fn into_error(self) -> Option<String> {
        self.err().map(|e| e.to_string())
    }
}

type Check = Result<(), AssertionError>;

pub(crate) fn check_equal<A, B>(actual: A, expected: B) -> Check
where
    A: PartialEq<B> + Debug,
    B: Debug,
{
    if actual == expected {
        return Ok(());
    }
    Err(mismatch(AssertionKind::Equal, "==", &actual, &expected))
}

pub(crate) fn check_not_equal<A, B>(actual: A, expected: B) -> Check
where
    A: PartialEq<B> + Debug,
    B: Debug,
{
    if actual != expected {
        return Ok(());
    }
    Err(mismatch(AssertionKind::NotEqual, "!=", &actual, &expected))
}

pub(crate) fn check_deep_equal<A, B>(actual: &A, expected: &B, negate: bool) -> Check
where
    A: Serialize + ?Sized,
    B: Serialize + ?Sized,
{
    let kind = if negate {
        AssertionKind::NotDeepEqual
    } else {
        AssertionKind::DeepEqual
    };
    let (actual, expected) = match (serde_json::to_value(actual), serde_json::to_value(expected)) {
        (Ok(a), Ok(e)) => (a, e),
        (Err(e), _) | (_, Err(e)) => {
            return Err(AssertionError::new(
                kind,
                format!("values could not be compared: {}", e),
            ));
        }
    };
    if (actual == expected) != negate {
        return Ok(());
    }
    let op = if negate { "notDeepEqual" } else { "deepEqual" };
    Err(AssertionError::new(kind, format!("{} {} {}", actual, op, expected))
        .with_values(expected.to_string(), actual.to_string()))
}

pub(crate) fn check_strict_equal<T>(actual: &T, expected: &T, negate: bool) -> Check
where
    T: PartialEq + Debug + ?Sized,
{
    if (actual == expected) != negate {
        return Ok(());
    }
    if negate {
        Err(mismatch(AssertionKind::NotStrictEqual, "!==", actual, expected))
    } else {
        Err(mismatch(AssertionKind::StrictEqual, "===", actual, expected))
    }
}

pub(crate) fn check_ok<T: Truthy + Debug>(value: &T) -> Check {
    if value.is_truthy() {
        return Ok(());
    }
    Err(AssertionError::new(
        AssertionKind::Ok,
        format!("{:?} == true", value),
    ))
}

pub(crate) fn check_throws<F, R>(body: F) -> Check
where
    F: FnOnce() -> R,
    R: Outcome,
{
    match run_guarded(body) {
        Err(_) => Ok(()),
        Ok(()) => Err(AssertionError::new(
            AssertionKind::Throws,
            "Missing expected exception.",
        )),
    }
}

pub(crate) fn check_does_not_throw<F, R>(body: F) -> Check
where
    F: FnOnce() -> R,
    R: Outcome,
{
    run_guarded(body).map_err(|message| {
        AssertionError::new(
            AssertionKind::DoesNotThrow,
            format!("Got unwanted exception: {}", message),
        )
    })
}

pub(crate) fn check_if_error<E: Display>(error: Option<E>) -> Check {
    match error {
        None => Ok(()),
        Some(error) => Err(AssertionError::new(AssertionKind::IfError, error.to_string())),
    }
}

fn mismatch<A, B>(kind: AssertionKind, op: &str, actual: &A, expected: &B) -> AssertionError
where
    A: Debug + ?Sized,
    B: Debug + ?Sized,
{
    AssertionError::new(kind, format!("{:?} {} {:?}", actual, op, expected))
        .with_values(format!("{:?}", expected), format!("{:?}", actual))
}

/// Run `body`, turning a panic or an error return into `Err(message)`.
///
/// The panic hook is silenced for the duration of the call, so an expected
/// panic does not print to stderr.
fn run_guarded<F, R>(body: F) -> Result<(), String>
where
    F: FnOnce() -> R,
    R: Outcome,
{
    let hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = panic::catch_unwind(AssertUnwindSafe(body));
    panic::set_hook(hook);

    match result {
        Ok(outcome) => match outcome.into_error() {
            Some(message) => Err(message),
            None => Ok(()),
        },
        Err(payload) => Err(panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic".to_string()
    }
}

impl Spec {
    fn check(&self, kind: AssertionKind, result: Check) {
        let error = result.err();
        if let Some(ref error) = error {
            tracing::debug!("{}: {} failed: {}", self.title(), kind.name(), error);
        }
        self.record(Assertion { kind, error });
    }

    /// Loose equality: `actual == expected`, across types that compare.
    pub fn equal<A, B>(&self, actual: A, expected: B)
    where
        A: PartialEq<B> + Debug,
        B: Debug,
    {
        self.check(AssertionKind::Equal, check_equal(actual, expected));
    }

    pub fn not_equal<A, B>(&self, actual: A, expected: B)
    where
        A: PartialEq<B> + Debug,
        B: Debug,
    {
        self.check(AssertionKind::NotEqual, check_not_equal(actual, expected));
    }

    /// Structural equality of the serialized forms. Values of different
    /// types with the same shape compare equal.
    pub fn deep_equal<A, B>(&self, actual: &A, expected: &B)
    where
        A: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        self.check(
            AssertionKind::DeepEqual,
            check_deep_equal(actual, expected, false),
        );
    }

    pub fn not_deep_equal<A, B>(&self, actual: &A, expected: &B)
    where
        A: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        self.check(
            AssertionKind::NotDeepEqual,
            check_deep_equal(actual, expected, true),
        );
    }

    /// Equality between two values of the same type.
    pub fn strict_equal<T>(&self, actual: &T, expected: &T)
    where
        T: PartialEq + Debug + ?Sized,
    {
        self.check(
            AssertionKind::StrictEqual,
            check_strict_equal(actual, expected, false),
        );
    }

    pub fn not_strict_equal<T>(&self, actual: &T, expected: &T)
    where
        T: PartialEq + Debug + ?Sized,
    {
        self.check(
            AssertionKind::NotStrictEqual,
            check_strict_equal(actual, expected, true),
        );
    }

    /// Record an unconditional failure.
    pub fn fail(&self, message: impl Into<String>) {
        self.check(
            AssertionKind::Fail,
            Err(AssertionError::new(AssertionKind::Fail, message)),
        );
    }

    pub fn ok<T: Truthy + Debug>(&self, value: T) {
        self.check(AssertionKind::Ok, check_ok(&value));
    }

    /// Passes if `body` panics or returns `Err`.
    pub fn throws<F, R>(&self, body: F)
    where
        F: FnOnce() -> R,
        R: Outcome,
    {
        self.check(AssertionKind::Throws, check_throws(body));
    }

    pub fn does_not_throw<F, R>(&self, body: F)
    where
        F: FnOnce() -> R,
        R: Outcome,
    {
        self.check(AssertionKind::DoesNotThrow, check_does_not_throw(body));
    }

    /// Passes if `error` is `None`.
    pub fn if_error<E: Display>(&self, error: Option<E>) {
        self.check(AssertionKind::IfError, check_if_error(error));
    }
}

#[cfg(test)]
#[path = "assert_tests.rs"]
mod tests;
