use crate::assertions::CaseResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Declarative "do not run" marker attached to a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipDirective {
    pub reason: Option<&'static str>,
}

impl SkipDirective {
    pub const fn because(reason: &'static str) -> Self {
        Self { reason: Some(reason) }
    }
}

/// A parameterless, independently executable case.
#[derive(Debug, Clone, Copy)]
pub struct TestCase {
    pub name: &'static str,
    pub skip: Option<SkipDirective>,
    pub body: fn() -> CaseResult,
}

impl TestCase {
    pub const fn new(name: &'static str, body: fn() -> CaseResult) -> Self {
        Self { name, skip: None, body }
    }

    pub fn skipped(mut self, directive: SkipDirective) -> Self {
        self.skip = Some(directive);
        self
    }

    pub fn is_skipped(&self) -> bool {
        self.skip.is_some()
    }

    /// Invoke the body directly, ignoring any skip directive.
    pub fn run(&self) -> CaseResult {
        (self.body)()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub name: String,
    pub status: TestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub execution_time_ms: u64,
}

/// Aggregated outcome of one suite run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
    pub results: Vec<TestResult>,
}

impl SuiteReport {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn total(&self) -> u32 {
        self.passed + self.failed + self.skipped
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
