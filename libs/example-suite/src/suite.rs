//! The example assertion suite.
//!
//! Three independent cases: a passing sum, an intentionally failing sum that
//! is skipped by default, and a map over a fixed sequence. Each case is also
//! mirrored as a native `#[test]` below, so `cargo test` and `example-runner`
//! report the same outcomes.

use crate::assertions::{assert_equal, CaseResult};
use crate::types::{SkipDirective, TestCase};

pub const FAILING_REASON: &str = "It fails";

pub fn passing() -> CaseResult {
    assert_equal(3, 1 + 2)
}

// Remove the skip directive in `cases()` to see a failing case reported.
pub fn failing() -> CaseResult {
    assert_equal(5, 2 + 2)
}

pub fn using_standard_library() -> CaseResult {
    let numbers = [1, 2, 3];
    let actual_strings = to_decimal_strings(&numbers);
    let expected_strings = vec!["1", "2", "3"];
    assert_equal(expected_strings, actual_strings)
}

/// Decimal text form of each element, same order and length as the input.
pub fn to_decimal_strings(numbers: &[i32]) -> Vec<String> {
    numbers.iter().map(|n| n.to_string()).collect()
}

/// All cases in declaration order.
pub fn cases() -> Vec<TestCase> {
    vec![
        TestCase::new("passing", passing),
        TestCase::new("failing", failing).skipped(SkipDirective::because(FAILING_REASON)),
        TestCase::new("using_standard_library", using_standard_library),
    ]
}

pub fn find(name: &str) -> Option<TestCase> {
    cases().into_iter().find(|case| case.name == name)
}
