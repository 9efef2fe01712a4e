use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::CalculatorDefinition;
use crate::models::{AnswerSet, EstimateRange};

/// Where a form currently is: one of the 1-based input steps, or the
/// terminal results step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStep {
    Input(usize),
    Results,
}

impl fmt::Display for FormStep {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Input(step) => write!(f, "step {step}"),
            Self::Results => f.write_str("results"),
        }
    }
}

/// Holds the in-progress answers of one calculator session and moves
/// between steps.
///
/// Progression is gated rather than failing: `handle_next` on an
/// incomplete step leaves the form where it is.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use claim_core::calculations::calculators::medical_devices;
/// use claim_core::{FormController, FormStep};
///
/// let mut form = FormController::new(Arc::new(medical_devices::definition()));
///
/// form.update_field("deviceType", "hip-implant");
/// form.update_field("revisionSurgeries", "2");
/// assert_eq!(form.handle_next(), FormStep::Input(2));
///
/// form.update_field("medicalCosts", "40000");
/// form.update_field("painLevel", "7");
/// assert_eq!(form.handle_next(), FormStep::Results);
/// assert!(form.result().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct FormController {
    definition: Arc<CalculatorDefinition>,
    answers: AnswerSet,
    step: FormStep,
    result: Option<EstimateRange>,
}

impl FormController {
    pub fn new(definition: Arc<CalculatorDefinition>) -> Self {
        Self {
            definition,
            answers: AnswerSet::new(),
            step: FormStep::Input(1),
            result: None,
        }
    }

    pub fn definition(&self) -> &Arc<CalculatorDefinition> {
        &self.definition
    }

    pub fn step(&self) -> FormStep {
        self.step
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// The estimate computed when the form last reached results.
    pub fn result(&self) -> Option<&EstimateRange> {
        self.result.as_ref()
    }

    pub fn total_steps(&self) -> usize {
        self.definition.step_count()
    }

    /// Stores an answer. Ids the calculator does not define are ignored.
    pub fn update_field(
        &mut self,
        question: &str,
        value: impl Into<String>,
    ) {
        if self.definition.question(question).is_none() {
            warn!(
                calculator = %self.definition.slug,
                question,
                "ignoring answer for unknown question"
            );
            return;
        }
        self.answers.set(question, value);
    }

    /// Required questions of the 1-based `step` that are still blank.
    pub fn missing_answers(
        &self,
        step: usize,
    ) -> Vec<&str> {
        self.definition
            .questions_in_step(step)
            .into_iter()
            .filter(|question| question.required && !self.answers.is_answered(&question.id))
            .map(|question| question.id.as_str())
            .collect()
    }

    /// `true` when every required question of `step` is answered. Steps that
    /// do not exist are never valid.
    pub fn is_step_valid(
        &self,
        step: usize,
    ) -> bool {
        self.definition.step(step).is_some() && self.missing_answers(step).is_empty()
    }

    /// Whether the current step allows moving forward.
    pub fn is_current_step_valid(&self) -> bool {
        match self.step {
            FormStep::Input(step) => self.is_step_valid(step),
            FormStep::Results => true,
        }
    }

    /// Advances one step. From the last input step the estimate is computed
    /// and the form moves to results. An incomplete step stays put.
    pub fn handle_next(&mut self) -> FormStep {
        let FormStep::Input(step) = self.step else {
            return self.step;
        };

        if !self.is_step_valid(step) {
            debug!(
                calculator = %self.definition.slug,
                step,
                missing = ?self.missing_answers(step),
                "step incomplete; staying"
            );
            return self.step;
        }

        self.step = if step >= self.total_steps() {
            self.result = Some(self.definition.estimate(&self.answers));
            FormStep::Results
        } else {
            FormStep::Input(step + 1)
        };
        self.step
    }

    /// Goes back one step. A no-op on the first step; from results it
    /// returns to the last input step and drops the result.
    pub fn handle_back(&mut self) -> FormStep {
        self.step = match self.step {
            FormStep::Input(step) if step > 1 => FormStep::Input(step - 1),
            FormStep::Input(step) => FormStep::Input(step),
            FormStep::Results => {
                self.result = None;
                FormStep::Input(self.total_steps())
            }
        };
        self.step
    }

    /// Clears answers and result and returns to the first step.
    pub fn reset_form(&mut self) {
        self.answers.clear();
        self.result = None;
        self.step = FormStep::Input(1);
    }
}
