use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Economic damage categories that some calculators itemize alongside the
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EconomicCategory {
    MedicalExpenses,
    FutureCare,
    LostIncome,
    PropertyDamage,
}

impl EconomicCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::MedicalExpenses => "Medical Expenses",
            Self::FutureCare => "Future Care",
            Self::LostIncome => "Lost Income",
            Self::PropertyDamage => "Property Damage",
        }
    }
}

impl fmt::Display for EconomicCategory {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One itemized amount of the economic breakdown, as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    pub category: EconomicCategory,
    pub amount: Decimal,
}

/// The estimated compensation range for one answer set.
///
/// Both bounds are whole dollars. The range is derived on demand and never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRange {
    pub low: Decimal,
    pub high: Decimal,
    /// Itemized economic amounts in the order the calculator applies them.
    /// Empty for calculators that do not itemize.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub breakdown: Vec<BreakdownLine>,
}

impl EstimateRange {
    pub fn new(
        low: Decimal,
        high: Decimal,
    ) -> Self {
        Self {
            low,
            high,
            breakdown: Vec::new(),
        }
    }

    /// `true` when the low bound does not exceed the high bound.
    pub fn is_ordered(&self) -> bool {
        self.low <= self.high
    }

    /// Midpoint of the range, rounded to whole dollars.
    pub fn midpoint(&self) -> Decimal {
        ((self.low + self.high) / Decimal::TWO)
            .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
    }

    /// Sum of the itemized economic amounts, or `None` when nothing is
    /// itemized.
    pub fn total_economic(&self) -> Option<Decimal> {
        if self.breakdown.is_empty() {
            return None;
        }
        Some(self.breakdown.iter().map(|line| line.amount).sum())
    }

    pub fn amount_for(
        &self,
        category: EconomicCategory,
    ) -> Option<Decimal> {
        self.breakdown
            .iter()
            .find(|line| line.category == category)
            .map(|line| line.amount)
    }
}
