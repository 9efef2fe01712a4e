use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use super::factory::{LeadConfig, LeadPortFactory};
use super::port::{LeadError, LeadSubmission, LeadSubmissionPort};

/// Shared list of accepted leads.
#[derive(Debug, Clone, Default)]
pub struct LeadStore {
    leads: Arc<Mutex<Vec<LeadSubmission>>>,
}

impl LeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LeadSubmission>> {
        // A panic while holding the lock cannot leave the Vec half-written.
        self.leads.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(
        &self,
        lead: LeadSubmission,
    ) {
        self.lock().push(lead);
    }

    /// A copy of every stored lead, oldest first.
    pub fn snapshot(&self) -> Vec<LeadSubmission> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

/// Keeps accepted leads in a [`LeadStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeadPort {
    store: LeadStore,
}

impl InMemoryLeadPort {
    pub fn new(store: LeadStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &LeadStore {
        &self.store
    }
}

#[async_trait]
impl LeadSubmissionPort for InMemoryLeadPort {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn submit(
        &self,
        lead: &LeadSubmission,
    ) -> Result<(), LeadError> {
        lead.check()?;
        self.store.push(lead.clone());
        debug!(calculator = %lead.calculator, stored = self.store.len(), "lead stored in memory");
        Ok(())
    }
}

/// Every port it creates shares the factory's [`LeadStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeadPortFactory {
    store: LeadStore,
}

impl InMemoryLeadPortFactory {
    pub fn new(store: LeadStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LeadPortFactory for InMemoryLeadPortFactory {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create(
        &self,
        _config: &LeadConfig,
    ) -> Result<Box<dyn LeadSubmissionPort>, LeadError> {
        Ok(Box::new(InMemoryLeadPort::new(self.store.clone())))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::leads::factory::LeadPortRegistry;
    use crate::leads::port::ContactDetails;
    use crate::models::AnswerSet;

    #[tokio::test]
    async fn submit_stores_lead() {
        let port = InMemoryLeadPort::default();
        let lead = LeadSubmission::new("pfas", AnswerSet::new().with("diagnosis", "kidney-cancer"), None);

        port.submit(&lead).await.unwrap();

        assert_eq!(port.store().snapshot(), vec![lead]);
    }

    #[tokio::test]
    async fn rejected_lead_is_not_stored() {
        let port = InMemoryLeadPort::default();
        let lead = LeadSubmission::new("pfas", AnswerSet::new(), None)
            .with_contact(ContactDetails::default());

        let result = port.submit(&lead).await;

        assert!(result.is_err());
        assert!(port.store().is_empty());
    }

    #[tokio::test]
    async fn ports_from_registry_share_the_store() {
        let store = LeadStore::new();
        let mut registry = LeadPortRegistry::new();
        registry.register(Box::new(InMemoryLeadPortFactory::new(store.clone())));
        let config = LeadConfig {
            backend: "memory".to_string(),
            target: String::new(),
        };

        let first = registry.create(&config).await.unwrap();
        let second = registry.create(&config).await.unwrap();
        first
            .submit(&LeadSubmission::new("pfas", AnswerSet::new(), None))
            .await
            .unwrap();
        second
            .submit(&LeadSubmission::new("camp-lejeune", AnswerSet::new(), None))
            .await
            .unwrap();

        assert_eq!(store.len(), 2);
    }
}
