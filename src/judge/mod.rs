//! Test-case judging for the kernels.
//!
//! A case passes when the kernel's output equals the expected text after
//! trimming surrounding whitespace on both sides. With a time limit set, a
//! case whose run reaches the limit fails regardless of its output. Judging a
//! batch stops at the first case that is rejected or runs out of time.

pub mod samples;

use crate::driver::{self, DriverSettings, Kernel};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub expected: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl TestCase {
    pub fn new(input: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            expected: expected.into(),
            label: None,
        }
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    WrongAnswer,
    InvalidInput,
    TimeLimitExceeded,
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Accepted => "accepted",
            Verdict::WrongAnswer => "wrong_answer",
            Verdict::InvalidInput => "invalid_input",
            Verdict::TimeLimitExceeded => "time_limit_exceeded",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseResult {
    /// 1-based position of the case in its batch
    pub case_number: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub passed: bool,
    pub verdict: Verdict,
    pub elapsed_micros: u64,
    pub expected: String,
    pub actual: String,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JudgeReport {
    pub kernel: Kernel,
    pub verdict: Verdict,
    pub cases: Vec<CaseResult>,
    pub total_elapsed_micros: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit_micros: Option<u64>,
}

impl JudgeReport {
    pub fn passed_count(&self) -> usize {
        self.cases.iter().filter(|c| c.passed).count()
    }

    /// One line per case followed by a summary line
    pub fn render_text(&self) -> String {
        let mut lines: Vec<String> = self
            .cases
            .iter()
            .map(|case| {
                let name = case
                    .label
                    .as_deref()
                    .map(|l| format!(" ({})", l))
                    .unwrap_or_default();
                let mut line = format!(
                    "{} case {}{}: {} [{}us]",
                    self.kernel, case.case_number, name, case.verdict, case.elapsed_micros
                );
                if !case.passed {
                    match &case.error_message {
                        Some(msg) => line.push_str(&format!(" - {}", msg)),
                        None => line.push_str(&format!(
                            " - expected '{}', got '{}'",
                            case.expected.trim(),
                            case.actual.trim()
                        )),
                    }
                }
                line
            })
            .collect();
        lines.push(format!(
            "{}: {} ({}/{} passed)",
            self.kernel,
            self.verdict,
            self.passed_count(),
            self.cases.len()
        ));
        lines.join("\n")
    }
}

fn as_micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

/// Run one case and classify the outcome.
///
/// A run whose duration reaches `time_limit` is `time_limit_exceeded`; a zero
/// limit therefore fails every case.
pub fn judge_case(
    kernel: Kernel,
    case_number: usize,
    case: &TestCase,
    settings: &DriverSettings,
    time_limit: Option<Duration>,
) -> CaseResult {
    let start = Instant::now();
    let outcome = driver::run(kernel, &case.input, settings);
    let duration = start.elapsed();
    let elapsed = as_micros(duration);

    let (verdict, actual, error_message) = match outcome {
        Ok(actual) if time_limit.is_some_and(|limit| duration >= limit) => {
            let limit = time_limit.map(as_micros).unwrap_or_default();
            let message = format!("ran for {}us, limit is {}us", elapsed, limit);
            (Verdict::TimeLimitExceeded, actual, Some(message))
        }
        Ok(actual) => {
            let verdict = if actual.trim() == case.expected.trim() {
                Verdict::Accepted
            } else {
                Verdict::WrongAnswer
            };
            (verdict, actual, None)
        }
        Err(e) => {
            let message = e.user_message();
            (Verdict::InvalidInput, message.clone(), Some(message))
        }
    };

    debug!(%kernel, case_number, %verdict, elapsed, "case judged");
    CaseResult {
        case_number,
        label: case.label.clone(),
        passed: verdict.is_accepted(),
        verdict,
        elapsed_micros: elapsed,
        expected: case.expected.clone(),
        actual,
        error_message,
    }
}

/// Judge a batch of cases in order.
///
/// The overall verdict is `accepted` only if every case passes. The first
/// wrong answer sets `wrong_answer`; rejected input or a run out of time sets
/// its own verdict and ends the batch.
pub fn judge_cases(
    kernel: Kernel,
    cases: &[TestCase],
    settings: &DriverSettings,
    time_limit: Option<Duration>,
) -> JudgeReport {
    let start = Instant::now();
    let mut verdict = Verdict::Accepted;
    let mut results = Vec::with_capacity(cases.len());

    for (i, case) in cases.iter().enumerate() {
        let result = judge_case(kernel, i + 1, case, settings, time_limit);
        let case_verdict = result.verdict;
        results.push(result);

        match case_verdict {
            Verdict::Accepted => {}
            Verdict::WrongAnswer => {
                if verdict == Verdict::Accepted {
                    verdict = Verdict::WrongAnswer;
                }
            }
            Verdict::InvalidInput | Verdict::TimeLimitExceeded => {
                verdict = case_verdict;
                warn!(%kernel, case = i + 1, verdict = %case_verdict, "stopping batch");
                break;
            }
        }
    }

    let report = JudgeReport {
        kernel,
        verdict,
        cases: results,
        total_elapsed_micros: as_micros(start.elapsed()),
        time_limit_micros: time_limit.map(as_micros),
    };
    info!(
        %kernel,
        verdict = %report.verdict,
        passed = report.passed_count(),
        total = report.cases.len(),
        "batch judged"
    );
    report
}
