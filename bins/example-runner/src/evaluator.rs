/// Evaluator - Turns Raw Case Outcomes into a Suite Report
///
/// **Core Responsibility:**
/// Map each engine output to a status and aggregate the counts.
///
/// **Status Rules:**
/// - Completed → Passed
/// - Assertion mismatch → Failed (message carries expected and actual)
/// - Panic → Failed (message carries the panic payload)
/// - Skip directive honored → Skipped (message carries the reason, if any)
///
/// A report is successful when no case failed. Skipped cases never count
/// against success.

use crate::engine::{CaseOutcome, SuiteRun, TestExecutionOutput};
use example_suite::{SuiteReport, TestResult, TestStatus};
use tracing::{debug, info};
use uuid::Uuid;

/// Evaluate a single case output
pub fn evaluate_case(output: &TestExecutionOutput) -> TestResult {
    let (status, message) = match &output.outcome {
        CaseOutcome::Completed => (TestStatus::Passed, None),
        CaseOutcome::Mismatch(mismatch) => (TestStatus::Failed, Some(mismatch.to_string())),
        CaseOutcome::Panicked(message) => {
            (TestStatus::Failed, Some(format!("panicked: {}", message)))
        }
        CaseOutcome::Skipped(reason) => (TestStatus::Skipped, reason.clone()),
    };

    TestResult {
        name: output.name.clone(),
        status,
        message,
        execution_time_ms: output.execution_time_ms,
    }
}

/// Aggregate a run's outputs into the final report.
/// `started_at` comes from the run, not from evaluation time
pub fn aggregate_results(run: &SuiteRun) -> SuiteReport {
    let outputs = &run.outputs;
    let mut report = SuiteReport {
        run_id: Uuid::new_v4(),
        started_at: run.started_at,
        passed: 0,
        failed: 0,
        skipped: 0,
        results: Vec::with_capacity(outputs.len()),
    };

    for output in outputs {
        let result = evaluate_case(output);

        match result.status {
            TestStatus::Passed => report.passed += 1,
            TestStatus::Failed => report.failed += 1,
            TestStatus::Skipped => report.skipped += 1,
        }

        debug!(
            case = %result.name,
            status = ?result.status,
            execution_ms = result.execution_time_ms,
            "Case evaluated"
        );

        report.results.push(result);
    }

    info!(
        run_id = %report.run_id,
        passed = report.passed,
        failed = report.failed,
        skipped = report.skipped,
        "Evaluation complete"
    );

    report
}

/// Render a report for the terminal
pub fn render_text(report: &SuiteReport) -> String {
    let mut lines = Vec::with_capacity(report.results.len() + 2);

    for result in &report.results {
        let line = match result.status {
            TestStatus::Passed => format!("  ✓ {} ({}ms)", result.name, result.execution_time_ms),
            TestStatus::Failed => format!(
                "  ✗ {}: {}",
                result.name,
                result.message.as_deref().unwrap_or("failed")
            ),
            TestStatus::Skipped => match &result.message {
                Some(reason) => format!("  - {} (skipped: {})", result.name, reason),
                None => format!("  - {} (skipped)", result.name),
            },
        };
        lines.push(line);
    }

    lines.push(String::new());
    lines.push(format!(
        "{} cases: {} passed, {} failed, {} skipped",
        report.total(),
        report.passed,
        report.failed,
        report.skipped
    ));

    lines.join("\n")
}
