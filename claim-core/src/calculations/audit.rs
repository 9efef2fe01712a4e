//! Exhaustive ordering audit.
//!
//! Walks every combination of a calculator's answers and checks that the
//! low bound never exceeds the high bound. Choice questions contribute each
//! of their options; number questions contribute [`NUMERIC_SAMPLES`]; optional
//! questions also contribute a blank answer.

use std::fmt;

use serde::Serialize;
use tracing::{info, warn};

use crate::calculations::engine::CalculatorDefinition;
use crate::models::{AnswerSet, EstimateRange, QuestionKind};

/// Inputs tried for every free-text number question: zero, typical ages and
/// amounts, a large amount, a negative number and text.
pub const NUMERIC_SAMPLES: &[&str] = &["0", "45", "250000", "-5000", "abc"];

/// At most this many violations are kept; the rest are only counted.
pub const MAX_REPORTED_VIOLATIONS: usize = 20;

/// An answer set whose estimate came out with `low > high`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderingViolation {
    pub answers: AnswerSet,
    pub range: EstimateRange,
}

/// Result of [`audit_ordering`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub calculator: String,
    /// Number of answer combinations evaluated.
    pub combinations: u64,
    /// Total number of violations found.
    pub violation_count: u64,
    /// The first [`MAX_REPORTED_VIOLATIONS`] violations.
    pub violations: Vec<OrderingViolation>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.violation_count == 0
    }
}

impl fmt::Display for AuditReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{}: {} combinations, {} ordering violations",
            self.calculator, self.combinations, self.violation_count
        )?;
        for violation in &self.violations {
            let answers: Vec<String> = violation
                .answers
                .iter()
                .map(|(question, value)| format!("{question}={value}"))
                .collect();
            write!(
                f,
                "\n  low {} > high {} for {}",
                violation.range.low,
                violation.range.high,
                answers.join(";")
            )?;
        }
        Ok(())
    }
}

/// Candidate answers for each question, in definition order.
fn candidates(definition: &CalculatorDefinition) -> Vec<(&str, Vec<&str>)> {
    definition
        .questions
        .iter()
        .map(|question| {
            let mut values: Vec<&str> = match &question.kind {
                QuestionKind::Choice(options) => {
                    options.iter().map(|option| option.key.as_str()).collect()
                }
                QuestionKind::Number { .. } => NUMERIC_SAMPLES.to_vec(),
            };
            if !question.required {
                values.insert(0, "");
            }
            (question.id.as_str(), values)
        })
        .collect()
}

/// Evaluates every answer combination of `definition` and reports the ones
/// whose range is inverted.
///
/// Combinations are enumerated like an odometer: the first question turns
/// fastest, and only the answers that changed are rewritten between
/// evaluations.
pub fn audit_ordering(definition: &CalculatorDefinition) -> AuditReport {
    let candidates = candidates(definition);
    let mut report = AuditReport {
        calculator: definition.slug.clone(),
        combinations: 0,
        violation_count: 0,
        violations: Vec::new(),
    };

    if candidates.iter().any(|(_, values)| values.is_empty()) {
        warn!(calculator = %definition.slug, "question without candidate answers; nothing to audit");
        return report;
    }

    let mut positions = vec![0usize; candidates.len()];
    let mut answers: AnswerSet = candidates
        .iter()
        .map(|(question, values)| (*question, values[0]))
        .collect();

    loop {
        let range = definition.estimate(&answers);
        report.combinations += 1;

        if !range.is_ordered() {
            report.violation_count += 1;
            if report.violations.len() < MAX_REPORTED_VIOLATIONS {
                report.violations.push(OrderingViolation {
                    answers: answers.clone(),
                    range,
                });
            }
        }

        if !advance(&candidates, &mut positions, &mut answers) {
            break;
        }
    }

    info!(
        calculator = %report.calculator,
        combinations = report.combinations,
        violations = report.violation_count,
        "ordering audit finished"
    );
    report
}

/// Moves to the next combination. Returns `false` once every combination
/// has been visited.
fn advance(
    candidates: &[(&str, Vec<&str>)],
    positions: &mut [usize],
    answers: &mut AnswerSet,
) -> bool {
    for (index, (question, values)) in candidates.iter().enumerate() {
        positions[index] += 1;
        if positions[index] < values.len() {
            answers.set(question, values[positions[index]]);
            return true;
        }
        positions[index] = 0;
        answers.set(question, values[0]);
    }
    false
}
