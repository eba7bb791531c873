pub mod assertions;
pub mod suite;
pub mod types;

pub use assertions::{assert_equal, AssertionMismatch, CaseResult};
pub use types::{SkipDirective, SuiteReport, TestCase, TestResult, TestStatus};
