//! Traumatic brain injury calculator.
//!
//! Two tracks from a single $100,000 base. Permanent disability widens the
//! high bound more than the low one, and pain only raises the high bound.
//! Lost wages are projected over twenty years, at 80% on the low track and
//! 150% on the high track.

use rust_decimal_macros::dec;

use crate::calculations::engine::{
    CalculatorDefinition, Finish, NumericBand, Rule, StepDefinition,
};
use crate::calculations::factor_table::{FactorTable, Weight};
use crate::models::{EconomicCategory, Question};

pub const SLUG: &str = "brain-injury";

pub fn definition() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: SLUG.into(),
        title: "Brain Injury Compensation Calculator".into(),
        route: "/brain-injury-compensation-calculator".into(),
        evaluation_route: "/brain-case-evaluation".into(),
        questions: vec![
            Question::choice(
                "injurySeverity",
                "Injury Severity",
                &[
                    ("mild", "Mild TBI/Concussion"),
                    ("moderate", "Moderate TBI"),
                    ("severe", "Severe TBI"),
                    ("catastrophic", "Catastrophic/Vegetative"),
                ],
            ),
            Question::choice(
                "permanentDisability",
                "Permanent Disability",
                &[("yes", "Yes - Permanent Disability"), ("no", "No Permanent Disability")],
            ),
            Question::choice(
                "painLevel",
                "Pain Level",
                &[
                    ("mild", "Mild - Occasional discomfort"),
                    ("moderate", "Moderate - Daily pain"),
                    ("severe", "Severe - Chronic, debilitating"),
                    ("extreme", "Extreme - Constant, disabling"),
                ],
            ),
            Question::number("medicalCosts", "Medical Expenses to Date ($)", "$50,000"),
            Question::number("lostWages", "Annual Income Lost ($)", "$75,000"),
            Question::number("age", "Your Age", "Enter your age"),
        ],
        steps: vec![
            StepDefinition::new(
                "Injury Details",
                &["injurySeverity", "permanentDisability", "painLevel"],
            ),
            StepDefinition::new("Economic Damages", &["medicalCosts", "lostWages", "age"]),
        ],
        base: Weight::both(dec!(100000)),
        rules: vec![
            Rule::scale(
                "injurySeverity",
                FactorTable::multipliers(&[
                    ("mild", dec!(2)),
                    ("moderate", dec!(4)),
                    ("severe", dec!(8)),
                    ("catastrophic", dec!(12)),
                ]),
            ),
            Rule::add_itemized(
                "medicalCosts",
                Weight::ONE,
                EconomicCategory::MedicalExpenses,
            ),
            Rule::scale(
                "permanentDisability",
                FactorTable::split_multipliers(&[
                    ("yes", Weight::split(dec!(1.8), dec!(2.5))),
                    ("no", Weight::ONE),
                ]),
            ),
            Rule::scale(
                "painLevel",
                FactorTable::split_multipliers(&[
                    ("mild", Weight::high_only(dec!(1.0))),
                    ("moderate", Weight::high_only(dec!(1.5))),
                    ("severe", Weight::high_only(dec!(2.0))),
                    ("extreme", Weight::high_only(dec!(2.5))),
                ]),
            ),
            Rule::band(
                "age",
                None,
                vec![NumericBand::below(40, Weight::both(dec!(1.3)))],
            ),
            // 20 years of wages: x0.8 low, x1.5 high
            Rule::add_itemized(
                "lostWages",
                Weight::split(dec!(16), dec!(30)),
                EconomicCategory::LostIncome,
            ),
        ],
        finish: Finish::round(),
        disclaimer: "This estimate is for informational purposes only and does not \
            constitute legal advice. Brain injury claims depend on medical evidence, \
            long-term prognosis, liability, and available insurance coverage. Actual \
            compensation may be higher or lower. Consult with a brain injury attorney \
            for an evaluation of your case."
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::audit::audit_ordering;
    use crate::models::AnswerSet;

    fn severe_case() -> AnswerSet {
        AnswerSet::new()
            .with("injurySeverity", "severe")
            .with("permanentDisability", "yes")
            .with("painLevel", "severe")
            .with("medicalCosts", "100000")
            .with("lostWages", "75000")
            .with("age", "45")
    }

    #[test]
    fn definition_is_valid() {
        assert_eq!(definition().validate(), Ok(()));
    }

    #[test]
    fn severe_case_with_permanent_disability() {
        let result = definition().estimate(&severe_case());

        assert_eq!(result.low, dec!(2820000));
        assert_eq!(result.high, dec!(6750000));
    }

    #[test]
    fn pain_only_moves_the_high_bound() {
        let mild = definition().estimate(&severe_case().with("painLevel", "mild"));
        let severe = definition().estimate(&severe_case());

        assert_eq!(mild.low, severe.low);
        assert!(mild.high < severe.high);
    }

    #[test]
    fn younger_claimants_get_age_adjustment() {
        let result = definition().estimate(&severe_case().with("age", "39"));

        // (900000 × 1.8 × 1.3) + 1200000
        assert_eq!(result.low, dec!(3306000));
    }

    #[test]
    fn breakdown_itemizes_medical_and_wages() {
        let result = definition().estimate(&severe_case());

        assert_eq!(
            result.amount_for(EconomicCategory::MedicalExpenses),
            Some(dec!(100000))
        );
        assert_eq!(
            result.amount_for(EconomicCategory::LostIncome),
            Some(dec!(75000))
        );
        assert_eq!(result.total_economic(), Some(dec!(175000)));
    }

    #[test]
    fn every_combination_keeps_low_at_or_below_high() {
        let report = audit_ordering(&definition());

        assert!(report.is_clean(), "{report}");
    }
}
