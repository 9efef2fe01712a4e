//! One visitor's pass through a calculator: the form, its analytics, and
//! the hand-off of a lead.

use std::sync::Arc;

use claim_core::form::CalculatorAnalytics;
use claim_core::leads::ContactDetails;
use claim_core::{
    CalculatorDefinition, EstimateRange, FormController, FormStep, LeadError, LeadSubmission,
    LeadSubmissionPort,
};
use tracing::info;

/// Wraps a [`FormController`] and records analytics as the visitor moves
/// through it.
#[derive(Debug)]
pub struct CalculatorSession {
    form: FormController,
    analytics: CalculatorAnalytics,
}

impl CalculatorSession {
    /// Starts a session on the first step and records `started`.
    pub fn new(definition: Arc<CalculatorDefinition>) -> Self {
        let mut analytics = CalculatorAnalytics::new(&definition.slug);
        analytics.track_start();
        Self {
            form: FormController::new(definition),
            analytics,
        }
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn analytics(&self) -> &CalculatorAnalytics {
        &self.analytics
    }

    pub fn definition(&self) -> &Arc<CalculatorDefinition> {
        self.form.definition()
    }

    pub fn step(&self) -> FormStep {
        self.form.step()
    }

    pub fn result(&self) -> Option<&EstimateRange> {
        self.form.result()
    }

    pub fn answer(
        &mut self,
        question: &str,
        value: impl Into<String>,
    ) {
        self.form.update_field(question, value);
    }

    /// Advances the form. Records `step_completed` when it moves, and
    /// `calculated` when it reaches results.
    pub fn next(&mut self) -> FormStep {
        let before = self.form.step();
        let after = self.form.handle_next();

        if let FormStep::Input(completed) = before
            && after != before
        {
            self.analytics.track_step_complete(completed);
            if let Some(range) = self.form.result() {
                self.analytics.track_calculation(range);
            }
        }
        after
    }

    pub fn back(&mut self) -> FormStep {
        self.form.handle_back()
    }

    /// Clears the form. Leaving before results counts as abandoning it.
    pub fn reset(&mut self) {
        self.record_abandonment();
        self.form.reset_form();
    }

    /// Ends the session, recording `abandoned` unless results were reached.
    pub fn close(mut self) -> CalculatorAnalytics {
        self.record_abandonment();
        self.analytics
    }

    fn record_abandonment(&mut self) {
        if let FormStep::Input(step) = self.form.step() {
            self.analytics.track_abandonment(step);
        }
    }

    /// The current answers and estimate, ready for a port.
    pub fn lead(
        &self,
        contact: Option<ContactDetails>,
    ) -> LeadSubmission {
        let lead = LeadSubmission::new(
            &self.definition().slug,
            self.form.answers().clone(),
            self.form.result().cloned(),
        );
        match contact {
            Some(contact) => lead.with_contact(contact),
            None => lead,
        }
    }

    /// Builds a lead and hands it to `port`.
    pub async fn submit_lead(
        &self,
        port: &dyn LeadSubmissionPort,
        contact: Option<ContactDetails>,
    ) -> Result<LeadSubmission, LeadError> {
        let lead = self.lead(contact);
        port.submit(&lead).await?;
        info!(
            session_id = self.analytics.session_id(),
            calculator = %lead.calculator,
            port = port.name(),
            "lead handed off"
        );
        Ok(lead)
    }
}
