/// Execution Engine - Runs Suite Cases in Isolation
///
/// **Core Responsibility:**
/// Decide which cases run, invoke them, and capture raw outcomes.
///
/// **Architectural Boundary:**
/// - Engine knows HOW to run a case (blocking task, panic capture, timing)
/// - Engine does NOT assign statuses or counts
/// - Engine returns raw outputs for the Evaluator to judge
///
/// **Isolation:**
/// Every case runs on its own blocking task. A mismatch or a panic ends that
/// case only; the remaining cases still run.

use crate::config::HarnessConfig;
use chrono::{DateTime, Utc};
use example_suite::{AssertionMismatch, TestCase};
use futures_util::future::join_all;
use std::any::Any;
use std::time::Instant;
use tokio::task::JoinError;
use tracing::{debug, info, warn};

/// What happened when a case was (or was not) invoked
#[derive(Debug, Clone, PartialEq)]
pub enum CaseOutcome {
    Completed,
    Mismatch(AssertionMismatch),
    Panicked(String),
    Skipped(Option<String>),
}

/// Raw output for a single case.
/// Produced by the engine, consumed by the evaluator
#[derive(Debug, Clone)]
pub struct TestExecutionOutput {
    pub name: String,
    pub outcome: CaseOutcome,
    pub execution_time_ms: u64,
}

/// Raw outputs of one suite run, stamped with the moment it began
#[derive(Debug, Clone)]
pub struct SuiteRun {
    pub started_at: DateTime<Utc>,
    pub outputs: Vec<TestExecutionOutput>,
}

/// A case selected by the filter, with the decision whether to invoke it
#[derive(Debug, Clone, Copy)]
pub struct PlannedCase {
    pub case: TestCase,
    pub run: bool,
}

/// Apply the name filter and the skip directives.
///
/// Skip-directive cases stay in the plan (so they are reported as skipped)
/// unless `include_ignored` forces them to run.
pub fn plan(cases: &[TestCase], config: &HarnessConfig) -> Vec<PlannedCase> {
    cases
        .iter()
        .filter(|case| config.selects(case.name))
        .map(|case| PlannedCase {
            case: *case,
            run: config.include_ignored || !case.is_skipped(),
        })
        .collect()
}

/// Run every planned case. Output order always matches `cases` order.
pub async fn execute_suite(cases: &[TestCase], config: &HarnessConfig) -> SuiteRun {
    let started_at = Utc::now();
    let planned = plan(cases, config);

    info!(
        discovered = cases.len(),
        selected = planned.len(),
        parallel = config.parallel,
        include_ignored = config.include_ignored,
        "Executing suite"
    );

    let outputs = if config.parallel {
        join_all(planned.into_iter().map(execute_planned)).await
    } else {
        let mut outputs = Vec::with_capacity(planned.len());
        for planned_case in planned {
            outputs.push(execute_planned(planned_case).await);
        }
        outputs
    };

    SuiteRun { started_at, outputs }
}

async fn execute_planned(planned: PlannedCase) -> TestExecutionOutput {
    let name = planned.case.name.to_string();

    if !planned.run {
        let reason = planned
            .case
            .skip
            .and_then(|directive| directive.reason)
            .map(str::to_string);
        debug!(case = %name, reason = ?reason, "Skipping case");
        return TestExecutionOutput {
            name,
            outcome: CaseOutcome::Skipped(reason),
            execution_time_ms: 0,
        };
    }

    execute_case(planned.case).await
}

/// Invoke a single case on a blocking task, ignoring its skip directive
pub async fn execute_case(case: TestCase) -> TestExecutionOutput {
    let name = case.name.to_string();
    debug!(case = %name, "Running case");

    let start = Instant::now();
    let joined = tokio::task::spawn_blocking(move || case.run()).await;
    let execution_time_ms = start.elapsed().as_millis() as u64;

    let outcome = match joined {
        Ok(Ok(())) => CaseOutcome::Completed,
        Ok(Err(mismatch)) => CaseOutcome::Mismatch(mismatch),
        Err(e) => {
            let message = join_error_message(e);
            warn!(case = %name, error = %message, "Case panicked");
            CaseOutcome::Panicked(message)
        }
    };

    TestExecutionOutput {
        name,
        outcome,
        execution_time_ms,
    }
}

fn join_error_message(error: JoinError) -> String {
    if error.is_panic() {
        panic_message(error.into_panic())
    } else {
        error.to_string()
    }
}

fn panic_message(payload: Box<dyn Any + Send + 'static>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "case panicked".to_string()
    }
}
