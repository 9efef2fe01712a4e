use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{AnswerSet, EstimateRange};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeadError {
    /// The submission itself is unacceptable.
    #[error("Lead rejected: {0}")]
    Rejected(String),

    /// The destination could not be reached.
    #[error("Lead destination unavailable: {0}")]
    Unavailable(String),

    /// No port could be built from the configuration.
    #[error("Lead configuration error: {0}")]
    Configuration(String),
}

/// How the firm can reach the claimant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ContactDetails {
    /// `true` when there is a non-blank phone number or email address.
    pub fn is_reachable(&self) -> bool {
        let filled = |value: &Option<String>| {
            value
                .as_deref()
                .is_some_and(|value| !value.trim().is_empty())
        };
        filled(&self.phone) || filled(&self.email)
    }
}

/// Everything a calculator session hands over when the claimant asks for an
/// evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub calculator: String,
    pub answers: AnswerSet,
    pub estimate: Option<EstimateRange>,
    pub contact: Option<ContactDetails>,
    pub submitted_at: DateTime<Utc>,
}

impl LeadSubmission {
    pub fn new(
        calculator: &str,
        answers: AnswerSet,
        estimate: Option<EstimateRange>,
    ) -> Self {
        Self {
            calculator: calculator.to_string(),
            answers,
            estimate,
            contact: None,
            submitted_at: Utc::now(),
        }
    }

    pub fn with_contact(
        mut self,
        contact: ContactDetails,
    ) -> Self {
        self.contact = Some(contact);
        self
    }

    /// Checks the parts every destination relies on.
    ///
    /// # Errors
    ///
    /// [`LeadError::Rejected`] when the calculator slug is blank or contact
    /// details were given without any way to reach the claimant.
    pub fn check(&self) -> Result<(), LeadError> {
        if self.calculator.trim().is_empty() {
            return Err(LeadError::Rejected("missing calculator".to_string()));
        }
        if let Some(contact) = &self.contact
            && !contact.is_reachable()
        {
            return Err(LeadError::Rejected(
                "contact details need a phone number or email".to_string(),
            ));
        }
        Ok(())
    }
}

/// Destination for leads. Implementations may do I/O.
#[async_trait]
pub trait LeadSubmissionPort: Send + Sync {
    /// Name of the backend this port was built for.
    fn name(&self) -> &'static str;

    async fn submit(
        &self,
        lead: &LeadSubmission,
    ) -> Result<(), LeadError>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn contact(
        phone: Option<&str>,
        email: Option<&str>,
    ) -> ContactDetails {
        ContactDetails {
            name: "Jordan Rivera".to_string(),
            phone: phone.map(str::to_string),
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn contact_needs_phone_or_email() {
        assert!(contact(Some("(818) 555-0100"), None).is_reachable());
        assert!(contact(None, Some("jordan@example.com")).is_reachable());
        assert!(!contact(Some("  "), None).is_reachable());
        assert!(!contact(None, None).is_reachable());
    }

    #[test]
    fn check_accepts_anonymous_lead() {
        let lead = LeadSubmission::new("pfas", AnswerSet::new(), None);

        assert_eq!(lead.check(), Ok(()));
    }

    #[test]
    fn check_rejects_unreachable_contact() {
        let lead =
            LeadSubmission::new("pfas", AnswerSet::new(), None).with_contact(contact(None, None));

        assert!(matches!(lead.check(), Err(LeadError::Rejected(_))));
    }

    #[test]
    fn check_rejects_blank_calculator() {
        let lead = LeadSubmission::new(" ", AnswerSet::new(), None);

        assert_eq!(
            lead.check(),
            Err(LeadError::Rejected("missing calculator".to_string()))
        );
    }
}
