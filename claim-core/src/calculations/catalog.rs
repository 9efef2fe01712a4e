//! The set of calculators the site serves, looked up by slug or route.

use std::sync::Arc;

use tracing::debug;

use crate::calculations::calculators;
use crate::calculations::engine::{CalculatorDefinition, DefinitionError};

/// Validated, shared calculator definitions.
///
/// # Example
///
/// ```
/// use claim_core::Catalog;
///
/// let catalog = Catalog::builtin().unwrap();
///
/// let by_route = catalog.by_route("/camp-lejeune-calculator").unwrap();
/// assert_eq!(by_route.slug, "camp-lejeune");
/// assert!(catalog.get("pfas").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    calculators: Vec<Arc<CalculatorDefinition>>,
}

impl Catalog {
    /// Validates every definition and builds the catalog.
    ///
    /// # Errors
    ///
    /// Returns the first [`DefinitionError`] found, or
    /// [`DefinitionError::DuplicateCalculator`] when two definitions share a
    /// slug or a route.
    pub fn new(definitions: Vec<CalculatorDefinition>) -> Result<Self, DefinitionError> {
        let mut catalog = Self::default();

        for definition in definitions {
            definition.validate()?;
            if catalog.get(&definition.slug).is_some() {
                return Err(DefinitionError::DuplicateCalculator(definition.slug));
            }
            if catalog.by_route(&definition.route).is_some() {
                return Err(DefinitionError::DuplicateCalculator(definition.route));
            }
            debug!(slug = %definition.slug, route = %definition.route, "registered calculator");
            catalog.calculators.push(Arc::new(definition));
        }

        Ok(catalog)
    }

    /// The built-in calculators.
    pub fn builtin() -> Result<Self, DefinitionError> {
        Self::new(calculators::all())
    }

    pub fn get(
        &self,
        slug: &str,
    ) -> Option<Arc<CalculatorDefinition>> {
        self.calculators
            .iter()
            .find(|definition| definition.slug == slug)
            .cloned()
    }

    /// Resolves a request path. A trailing slash is ignored.
    pub fn by_route(
        &self,
        route: &str,
    ) -> Option<Arc<CalculatorDefinition>> {
        let route = match route.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => route,
        };
        self.calculators
            .iter()
            .find(|definition| definition.route == route)
            .cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<CalculatorDefinition>> {
        self.calculators.iter()
    }

    pub fn slugs(&self) -> Vec<&str> {
        self.calculators
            .iter()
            .map(|definition| definition.slug.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.calculators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculators.is_empty()
    }
}
