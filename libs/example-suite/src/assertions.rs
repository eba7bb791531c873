//! Assertion primitive used by the example cases.
//!
//! Unlike `assert_eq!`, `assert_equal` does not panic. A mismatch is returned
//! as a value so a harness can attribute it to the case that produced it.

use std::fmt::Debug;
use thiserror::Error;

/// Outcome of a single case body.
pub type CaseResult = Result<(), AssertionMismatch>;

/// Raised when an expected value and an actual value differ.
///
/// Both sides are kept in their `Debug` form so the error stays `'static`
/// regardless of what was compared.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("assertion failed: expected {expected}, actual {actual}")]
pub struct AssertionMismatch {
    pub expected: String,
    pub actual: String,
}

impl AssertionMismatch {
    pub fn new<E: Debug, A: Debug>(expected: &E, actual: &A) -> Self {
        Self {
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        }
    }
}

/// Assert that `actual` equals `expected`.
///
/// # Errors
///
/// Returns [`AssertionMismatch`] carrying both values when `expected != actual`.
pub fn assert_equal<E, A>(expected: E, actual: A) -> CaseResult
where
    E: PartialEq<A> + Debug,
    A: Debug,
{
    if expected == actual {
        Ok(())
    } else {
        Err(AssertionMismatch::new(&expected, &actual))
    }
}
