use async_trait::async_trait;
use tracing::info;

use super::factory::{LeadConfig, LeadPortFactory};
use super::port::{LeadError, LeadSubmission, LeadSubmissionPort};

/// Writes each lead as an `info` event on the `claim::leads` target.
#[derive(Debug, Clone)]
pub struct LogLeadPort {
    destination: String,
}

impl LogLeadPort {
    pub fn new(destination: &str) -> Self {
        Self {
            destination: destination.to_string(),
        }
    }
}

#[async_trait]
impl LeadSubmissionPort for LogLeadPort {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn submit(
        &self,
        lead: &LeadSubmission,
    ) -> Result<(), LeadError> {
        lead.check()?;

        let contact = lead.contact.as_ref();
        info!(
            target: "claim::leads",
            destination = %self.destination,
            calculator = %lead.calculator,
            answers = lead.answers.len(),
            low = ?lead.estimate.as_ref().map(|range| range.low),
            high = ?lead.estimate.as_ref().map(|range| range.high),
            name = ?contact.map(|c| c.name.as_str()),
            phone = ?contact.and_then(|c| c.phone.as_deref()),
            email = ?contact.and_then(|c| c.email.as_deref()),
            submitted_at = %lead.submitted_at.to_rfc3339(),
            "lead submitted"
        );
        Ok(())
    }
}

pub struct LogLeadPortFactory;

#[async_trait]
impl LeadPortFactory for LogLeadPortFactory {
    fn backend_name(&self) -> &'static str {
        "log"
    }

    async fn create(
        &self,
        config: &LeadConfig,
    ) -> Result<Box<dyn LeadSubmissionPort>, LeadError> {
        Ok(Box::new(LogLeadPort::new(&config.target)))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::leads::port::ContactDetails;
    use crate::models::{AnswerSet, EstimateRange};

    #[tokio::test]
    async fn accepts_complete_lead() {
        let port = LogLeadPort::new("intake");
        let lead = LeadSubmission::new(
            "bus-accident",
            AnswerSet::new().with("busOperator", "school-bus"),
            Some(EstimateRange::new(dec!(59000), dec!(172000))),
        )
        .with_contact(ContactDetails {
            name: "Jordan Rivera".to_string(),
            phone: Some("(818) 555-0100".to_string()),
            email: None,
        });

        assert!(port.submit(&lead).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_unreachable_contact() {
        let port = LogLeadPort::new("intake");
        let lead = LeadSubmission::new("pfas", AnswerSet::new(), None)
            .with_contact(ContactDetails::default());

        assert!(matches!(
            port.submit(&lead).await,
            Err(LeadError::Rejected(_))
        ));
    }

    #[tokio::test]
    async fn factory_builds_log_port() {
        let port = LogLeadPortFactory
            .create(&LeadConfig::default())
            .await
            .unwrap();

        assert_eq!(port.name(), "log");
    }
}
