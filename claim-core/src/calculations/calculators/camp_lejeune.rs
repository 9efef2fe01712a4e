//! Camp Lejeune water contamination calculator.
//!
//! Illness and years of residence scale a $150,000 to $500,000 base.
//! Veterans get 1.2 on the low bound and 1.3 on the high bound. Claimants
//! under fifty gain 1.5% per year below fifty, with a missing age read as
//! forty. Economic amounts are added before the disability multiplier.

use rust_decimal_macros::dec;

use crate::calculations::engine::{CalculatorDefinition, Finish, Rule, StepDefinition};
use crate::calculations::factor_table::{FactorTable, Weight};
use crate::models::{EconomicCategory, Question};

pub const SLUG: &str = "camp-lejeune";

const DAMAGE_RANGES: &[(&str, &str)] = &[
    ("25000", "$0 - $50,000"),
    ("100000", "$50,000 - $150,000"),
    ("250000", "$150,000 - $350,000"),
    ("500000", "$350,000 - $650,000"),
    ("1000000", "Over $650,000"),
];

pub fn definition() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: SLUG.into(),
        title: "Camp Lejeune Calculator".into(),
        route: "/camp-lejeune-calculator".into(),
        evaluation_route: "/camp-lejeune-case-evaluation".into(),
        questions: vec![
            Question::choice(
                "illness",
                "Illness or Condition",
                &[
                    ("leukemia", "Leukemia"),
                    ("non-hodgkin", "Non-Hodgkin's Lymphoma"),
                    ("multiple-myeloma", "Multiple Myeloma"),
                    ("bladder-cancer", "Bladder Cancer"),
                    ("kidney-cancer", "Kidney Cancer"),
                    ("liver-cancer", "Liver Cancer"),
                    ("parkinsons", "Parkinson's Disease"),
                    ("kidney-disease", "Kidney Disease"),
                    ("hepatic-steatosis", "Hepatic Steatosis"),
                    ("female-infertility", "Female Infertility"),
                    ("miscarriage", "Miscarriage"),
                    ("scleroderma", "Scleroderma"),
                    ("birth-defects", "Birth Defects"),
                    ("other", "Other Condition"),
                ],
            ),
            Question::choice(
                "residenceYears",
                "Years at Camp Lejeune (1953-1987)",
                &[
                    ("10+", "10+ years"),
                    ("5-10", "5-10 years"),
                    ("2-5", "2-5 years"),
                    ("1-2", "1-2 years"),
                    ("under-1", "Under 1 year (30+ days)"),
                ],
            ),
            Question::choice(
                "veteranStatus",
                "Veteran Status",
                &[
                    ("veteran", "Veteran"),
                    ("family", "Family Member"),
                    ("civilian", "Civilian Worker"),
                ],
            ),
            Question::choice(
                "age",
                "Your Current Age",
                &[
                    ("30", "Under 40"),
                    ("45", "40-49"),
                    ("55", "50-59"),
                    ("65", "60-69"),
                    ("75", "70+"),
                ],
            ),
            Question::choice("medicalCosts", "Medical Costs to Date", DAMAGE_RANGES),
            Question::choice(
                "futureCareCosts",
                "Estimated Future Medical Care",
                &[
                    ("50000", "$0 - $100,000"),
                    ("200000", "$100,000 - $300,000"),
                    ("500000", "$300,000 - $700,000"),
                    ("1000000", "$700,000 - $1,300,000"),
                    ("2000000", "Over $1,300,000"),
                ],
            ),
            Question::choice("lostWages", "Lost Wages and Income", DAMAGE_RANGES),
            Question::choice(
                "disability",
                "Level of Disability",
                &[
                    ("none", "None/Minimal"),
                    ("partial", "Partial Disability"),
                    ("severe", "Severe Disability"),
                    ("total", "Total/Permanent Disability"),
                ],
            ),
        ],
        steps: vec![
            StepDefinition::new(
                "Exposure & Illness",
                &["illness", "residenceYears", "veteranStatus", "age"],
            ),
            StepDefinition::new(
                "Damages",
                &["medicalCosts", "futureCareCosts", "lostWages", "disability"],
            ),
        ],
        base: Weight::split(dec!(150000), dec!(500000)),
        rules: vec![
            Rule::scale(
                "illness",
                FactorTable::multipliers(&[
                    ("bladder-cancer", dec!(4.0)),
                    ("kidney-cancer", dec!(4.2)),
                    ("liver-cancer", dec!(4.5)),
                    ("leukemia", dec!(5.0)),
                    ("non-hodgkin", dec!(4.8)),
                    ("multiple-myeloma", dec!(4.5)),
                    ("parkinsons", dec!(3.5)),
                    ("kidney-disease", dec!(2.8)),
                    ("hepatic-steatosis", dec!(3.0)),
                    ("female-infertility", dec!(2.5)),
                    ("miscarriage", dec!(2.3)),
                    ("scleroderma", dec!(3.2)),
                    ("birth-defects", dec!(4.0)),
                    ("other", dec!(2.0)),
                ]),
            ),
            Rule::scale(
                "residenceYears",
                FactorTable::multipliers(&[
                    ("10+", dec!(2.5)),
                    ("5-10", dec!(2.0)),
                    ("2-5", dec!(1.6)),
                    ("1-2", dec!(1.3)),
                    ("under-1", dec!(1.1)),
                ]),
            ),
            Rule::scale(
                "veteranStatus",
                FactorTable::split_multipliers(&[
                    ("veteran", Weight::split(dec!(1.2), dec!(1.3))),
                    ("family", Weight::ONE),
                    ("civilian", Weight::ONE),
                ]),
            ),
            Rule::taper("age", Some(40), 50, dec!(0.015)),
            Rule::add_itemized(
                "medicalCosts",
                Weight::split(dec!(1), dec!(1.5)),
                EconomicCategory::MedicalExpenses,
            ),
            Rule::add_itemized(
                "futureCareCosts",
                Weight::split(dec!(0.8), dec!(1.5)),
                EconomicCategory::FutureCare,
            ),
            Rule::add_itemized(
                "lostWages",
                Weight::split(dec!(0.9), dec!(1.5)),
                EconomicCategory::LostIncome,
            ),
            Rule::scale(
                "disability",
                FactorTable::multipliers(&[
                    ("none", dec!(1.0)),
                    ("partial", dec!(1.0)),
                    ("severe", dec!(1.8)),
                    ("total", dec!(2.5)),
                ]),
            ),
        ],
        finish: Finish::round(),
        disclaimer: "This calculator provides a general estimate only and does not \
            constitute legal advice or a guarantee of compensation. Actual case values \
            depend on multiple factors including specific medical conditions, duration of \
            exposure, proof of residence, and individual circumstances. Camp Lejeune \
            Justice Act claims have specific eligibility requirements and filing deadlines. \
            Consult with an experienced attorney immediately to evaluate your case and \
            protect your rights."
            .into(),
    }
}
