//! Factor tables: per-question lookups from answer key to weight.
//!
//! A [`Weight`] carries one value for the low track and one for the high
//! track. Most tables use the same value for both; the asymmetric entries
//! are where a calculator treats the two bounds differently.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A pair of per-bound values used as multiplier or addend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weight {
    pub low: Decimal,
    pub high: Decimal,
}

impl Weight {
    /// Neutral multiplier.
    pub const ONE: Self = Self {
        low: Decimal::ONE,
        high: Decimal::ONE,
    };

    /// Neutral addend.
    pub const ZERO: Self = Self {
        low: Decimal::ZERO,
        high: Decimal::ZERO,
    };

    /// The same value on both bounds.
    pub const fn both(value: Decimal) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    /// Different values per bound.
    pub const fn split(
        low: Decimal,
        high: Decimal,
    ) -> Self {
        Self { low, high }
    }

    /// Applies only to the high bound; the low bound gets `1`.
    pub const fn high_only(value: Decimal) -> Self {
        Self {
            low: Decimal::ONE,
            high: value,
        }
    }

    pub fn is_symmetric(&self) -> bool {
        self.low == self.high
    }
}

/// Mapping from answer key to [`Weight`], with a documented default.
///
/// Lookups never fail: a missing, blank, or unknown answer resolves to the
/// default. Multiplier tables default to [`Weight::ONE`], addend tables to
/// [`Weight::ZERO`].
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use claim_core::calculations::{FactorTable, Weight};
///
/// let severity = FactorTable::multipliers(&[
///     ("minor", dec!(1.0)),
///     ("severe", dec!(4.0)),
/// ]);
///
/// assert_eq!(severity.weight_for(Some("severe")), Weight::both(dec!(4.0)));
/// assert_eq!(severity.weight_for(Some("unheard-of")), Weight::ONE);
/// assert_eq!(severity.weight_for(None), Weight::ONE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorTable {
    entries: Vec<(String, Weight)>,
    default: Weight,
}

impl FactorTable {
    /// A table of symmetric multipliers defaulting to `1`.
    pub fn multipliers(entries: &[(&str, Decimal)]) -> Self {
        Self::from_weights(
            entries
                .iter()
                .map(|(key, value)| (*key, Weight::both(*value))),
            Weight::ONE,
        )
    }

    /// A table of per-bound multipliers defaulting to `1`.
    pub fn split_multipliers(entries: &[(&str, Weight)]) -> Self {
        Self::from_weights(entries.iter().copied(), Weight::ONE)
    }

    /// A table of per-bound dollar addends defaulting to `0`.
    pub fn addends(entries: &[(&str, Weight)]) -> Self {
        Self::from_weights(entries.iter().copied(), Weight::ZERO)
    }

    fn from_weights<'a>(
        entries: impl Iterator<Item = (&'a str, Weight)>,
        default: Weight,
    ) -> Self {
        Self {
            entries: entries
                .map(|(key, weight)| (key.to_string(), weight))
                .collect(),
            default,
        }
    }

    /// Replaces the default weight.
    pub fn with_default(
        mut self,
        default: Weight,
    ) -> Self {
        self.default = default;
        self
    }

    pub fn default_weight(&self) -> Weight {
        self.default
    }

    /// The configured weight for `key`, if any.
    pub fn get(
        &self,
        key: &str,
    ) -> Option<Weight> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, weight)| *weight)
    }

    /// The weight for an answer, falling back to the default when the
    /// answer is missing or has no entry.
    pub fn weight_for(
        &self,
        answer: Option<&str>,
    ) -> Weight {
        if let Some(weight) = answer.and_then(|key| self.get(key)) {
            return weight;
        }

        debug!(
            answer = answer.unwrap_or(""),
            default_low = %self.default.low,
            default_high = %self.default.high,
            "no table entry for answer; using default weight"
        );
        self.default
    }

    /// Configured keys in definition order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn disability() -> FactorTable {
        FactorTable::split_multipliers(&[
            ("no", Weight::ONE),
            ("yes", Weight::split(dec!(1.8), dec!(2.5))),
        ])
    }

    #[test]
    fn get_returns_none_for_unknown_key() {
        assert_eq!(disability().get("perhaps"), None);
    }

    #[test]
    fn weight_for_returns_configured_weight() {
        assert_eq!(
            disability().weight_for(Some("yes")),
            Weight::split(dec!(1.8), dec!(2.5))
        );
    }

    #[test]
    fn multiplier_table_defaults_to_one() {
        assert_eq!(disability().weight_for(None), Weight::ONE);
        assert_eq!(disability().weight_for(Some("perhaps")), Weight::ONE);
    }

    #[test]
    fn addend_table_defaults_to_zero() {
        let medical = FactorTable::addends(&[("under-10k", Weight::split(dec!(5000), dec!(10000)))]);

        assert_eq!(medical.weight_for(None), Weight::ZERO);
    }

    #[test]
    fn with_default_overrides_fallback() {
        let table = FactorTable::multipliers(&[("mild", dec!(2))]).with_default(Weight::both(dec!(2)));

        assert_eq!(table.weight_for(Some("unknown")), Weight::both(dec!(2)));
    }

    #[test]
    fn keys_preserve_definition_order() {
        let table = disability();
        let keys: Vec<_> = table.keys().collect();

        assert_eq!(keys, vec!["no", "yes"]);
    }

    #[test]
    fn high_only_leaves_low_bound_neutral() {
        let weight = Weight::high_only(dec!(2.0));

        assert_eq!(weight.low, Decimal::ONE);
        assert_eq!(weight.high, dec!(2.0));
        assert!(!weight.is_symmetric());
    }
}
