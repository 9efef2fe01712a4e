use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::port::{LeadError, LeadSubmissionPort};

/// Where leads go.
///
/// `backend` must match the [`LeadPortFactory::backend_name`] of a
/// registered factory. `target` is passed through to that factory as-is.
///
/// | backend  | target                                  |
/// |----------|-----------------------------------------|
/// | `log`    | label recorded with each lead, e.g. `intake` |
/// | `memory` | ignored                                 |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadConfig {
    pub backend: String,
    pub target: String,
}

impl Default for LeadConfig {
    fn default() -> Self {
        Self {
            backend: "log".to_string(),
            target: "intake".to_string(),
        }
    }
}

/// Builds ports for one backend. Registered with a [`LeadPortRegistry`] at
/// startup.
#[async_trait]
pub trait LeadPortFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    async fn create(
        &self,
        config: &LeadConfig,
    ) -> Result<Box<dyn LeadSubmissionPort>, LeadError>;
}

/// [`LeadPortFactory`] instances keyed by backend name.
pub struct LeadPortRegistry {
    factories: HashMap<&'static str, Box<dyn LeadPortFactory>>,
}

impl LeadPortRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers a factory, replacing any previous one with the same name.
    pub fn register(
        &mut self,
        factory: Box<dyn LeadPortFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Builds a port with the factory matching `config.backend`.
    ///
    /// # Errors
    /// * [`LeadError::Configuration`] when no factory has that name.
    /// * Any error the chosen factory returns.
    pub async fn create(
        &self,
        config: &LeadConfig,
    ) -> Result<Box<dyn LeadSubmissionPort>, LeadError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                LeadError::Configuration(format!(
                    "unknown backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        factory.create(config).await
    }
}

impl Default for LeadPortRegistry {
    fn default() -> Self {
        Self::new()
    }
}
