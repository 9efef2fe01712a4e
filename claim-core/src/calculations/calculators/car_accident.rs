//! Car accident settlement calculator.
//!
//! Injury type and severity scale a $15,000 to $75,000 base, then the
//! economic amounts are added. Accident type, permanent impact, the other
//! driver's share of fault and their insurance scale everything after that,
//! so a shared-fault or uninsured case shrinks the economic damages too.

use rust_decimal_macros::dec;

use crate::calculations::engine::{CalculatorDefinition, Finish, Rule, StepDefinition};
use crate::calculations::factor_table::{FactorTable, Weight};
use crate::models::{EconomicCategory, Question};

pub const SLUG: &str = "car-accident";

pub fn definition() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: SLUG.into(),
        title: "Car Accident Settlement Calculator".into(),
        route: "/car-compensation-calculator".into(),
        evaluation_route: "/practice-areas/car-accidents/case-evaluation".into(),
        questions: vec![
            Question::choice(
                "injuryType",
                "Type of Injury",
                &[
                    ("whiplash", "Whiplash/Soft Tissue"),
                    ("broken-bones", "Broken Bones"),
                    ("head-injury", "Head/Brain Injury"),
                    ("spinal-injury", "Spinal Cord Injury"),
                    ("internal-injuries", "Internal Injuries"),
                    ("multiple", "Multiple Injuries"),
                ],
            ),
            Question::choice(
                "injurySeverity",
                "Injury Severity",
                &[
                    ("minor", "Minor"),
                    ("moderate", "Moderate"),
                    ("severe", "Severe"),
                    ("catastrophic", "Catastrophic"),
                ],
            ),
            Question::choice(
                "accidentType",
                "Accident Type",
                &[
                    ("rear-end", "Rear-End Collision"),
                    ("head-on", "Head-On Collision"),
                    ("t-bone", "T-Bone/Side Impact"),
                    ("rollover", "Rollover"),
                    ("hit-and-run", "Hit and Run"),
                    ("multi-vehicle", "Multi-Vehicle"),
                ],
            ),
            Question::number("medicalCosts", "Medical Expenses to Date ($)", "15000"),
            Question::number("futureMedical", "Future Medical Costs ($)", "25000").optional(),
            Question::number("lostWages", "Lost Wages ($)", "10000"),
            Question::number("vehicleDamage", "Vehicle Damage ($)", "8000"),
            Question::choice(
                "faultPercentage",
                "Fault Percentage",
                &[
                    ("100", "100% Other Driver"),
                    ("75-99", "75-99% Other Driver"),
                    ("50-74", "50-74% Other Driver"),
                    ("under-50", "Under 50% Other Driver"),
                ],
            ),
            Question::choice(
                "permanentImpact",
                "Permanent Impact",
                &[
                    ("none", "No Permanent Impact"),
                    ("minor", "Minor Permanent"),
                    ("significant", "Significant Permanent"),
                    ("total-disability", "Total Disability"),
                ],
            ),
            Question::choice(
                "insurance",
                "At-Fault Driver's Insurance",
                &[
                    ("full-coverage", "Full Coverage"),
                    ("minimum", "Minimum Coverage"),
                    ("uninsured", "Uninsured Driver"),
                    ("underinsured", "Underinsured"),
                ],
            ),
        ],
        steps: vec![
            StepDefinition::new(
                "Injury and Accident Details",
                &["injuryType", "injurySeverity", "accidentType"],
            ),
            StepDefinition::new(
                "Financial Impact & Case Details",
                &[
                    "medicalCosts",
                    "futureMedical",
                    "lostWages",
                    "vehicleDamage",
                    "faultPercentage",
                    "permanentImpact",
                    "insurance",
                ],
            ),
        ],
        base: Weight::split(dec!(15000), dec!(75000)),
        rules: vec![
            Rule::scale(
                "injuryType",
                FactorTable::multipliers(&[
                    ("whiplash", dec!(1.2)),
                    ("broken-bones", dec!(2.0)),
                    ("head-injury", dec!(4.0)),
                    ("spinal-injury", dec!(5.0)),
                    ("internal-injuries", dec!(3.5)),
                    ("multiple", dec!(3.2)),
                ]),
            ),
            Rule::scale(
                "injurySeverity",
                FactorTable::multipliers(&[
                    ("minor", dec!(1)),
                    ("moderate", dec!(2)),
                    ("severe", dec!(3.5)),
                    ("catastrophic", dec!(6)),
                ]),
            ),
            Rule::add_itemized(
                "medicalCosts",
                Weight::split(dec!(2), dec!(4)),
                EconomicCategory::MedicalExpenses,
            ),
            Rule::add_itemized(
                "futureMedical",
                Weight::split(dec!(1), dec!(2)),
                EconomicCategory::FutureCare,
            ),
            Rule::add_itemized(
                "lostWages",
                Weight::split(dec!(1), dec!(2)),
                EconomicCategory::LostIncome,
            ),
            Rule::add_itemized(
                "vehicleDamage",
                Weight::both(dec!(1)),
                EconomicCategory::PropertyDamage,
            ),
            Rule::scale(
                "accidentType",
                FactorTable::multipliers(&[
                    ("rear-end", dec!(1.1)),
                    ("head-on", dec!(1.8)),
                    ("t-bone", dec!(1.6)),
                    ("rollover", dec!(2.0)),
                    ("hit-and-run", dec!(1.3)),
                    ("multi-vehicle", dec!(1.4)),
                ]),
            ),
            Rule::scale(
                "permanentImpact",
                FactorTable::multipliers(&[
                    ("none", dec!(1)),
                    ("minor", dec!(1.4)),
                    ("significant", dec!(2.2)),
                    ("total-disability", dec!(3.5)),
                ]),
            ),
            // California comparative negligence.
            Rule::scale(
                "faultPercentage",
                FactorTable::multipliers(&[
                    ("100", dec!(1.0)),
                    ("75-99", dec!(0.85)),
                    ("50-74", dec!(0.65)),
                    ("under-50", dec!(0.4)),
                ]),
            ),
            Rule::scale(
                "insurance",
                FactorTable::multipliers(&[
                    ("full-coverage", dec!(1.0)),
                    ("minimum", dec!(0.7)),
                    ("uninsured", dec!(0.5)),
                    ("underinsured", dec!(0.6)),
                ]),
            ),
        ],
        finish: Finish::round(),
        disclaimer: "This estimate is based on typical car accident settlements. Actual \
            compensation depends on case specifics, evidence quality, insurance limits, and \
            negotiation. Non-economic damages (pain and suffering) are calculated using \
            multipliers based on injury severity."
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::audit::audit_ordering;
    use crate::models::{AnswerSet, BreakdownLine};

    fn rear_end_case() -> AnswerSet {
        AnswerSet::new()
            .with("injuryType", "whiplash")
            .with("injurySeverity", "moderate")
            .with("accidentType", "rear-end")
            .with("medicalCosts", "10000")
            .with("lostWages", "5000")
            .with("vehicleDamage", "8000")
            .with("faultPercentage", "100")
            .with("permanentImpact", "none")
            .with("insurance", "full-coverage")
    }

    #[test]
    fn definition_is_valid() {
        assert_eq!(definition().validate(), Ok(()));
    }

    #[test]
    fn rear_end_whiplash() {
        let result = definition().estimate(&rear_end_case());

        assert_eq!(result.low, dec!(75900));
        assert_eq!(result.high, dec!(261800));
    }

    #[test]
    fn shared_fault_and_underinsured_driver_reduce_everything() {
        let answers = AnswerSet::new()
            .with("injuryType", "head-injury")
            .with("injurySeverity", "severe")
            .with("accidentType", "head-on")
            .with("medicalCosts", "50000")
            .with("futureMedical", "100000")
            .with("lostWages", "40000")
            .with("vehicleDamage", "20000")
            .with("faultPercentage", "75-99")
            .with("permanentImpact", "significant")
            .with("insurance", "underinsured");

        let result = definition().estimate(&answers);

        assert_eq!(result.low, dec!(949212));
        assert_eq!(result.high, dec!(3130380));
        assert_eq!(result.total_economic(), Some(dec!(210000)));
    }

    #[test]
    fn vehicle_damage_is_itemized_as_property_damage() {
        let result = definition().estimate(&rear_end_case());

        assert_eq!(
            result.breakdown.last(),
            Some(&BreakdownLine {
                category: EconomicCategory::PropertyDamage,
                amount: dec!(8000),
            })
        );
    }

    #[test]
    fn every_combination_keeps_low_at_or_below_high() {
        let report = audit_ordering(&definition());

        assert!(report.is_clean(), "{report}");
    }
}
