//! PFAS ("forever chemicals") exposure calculator.
//!
//! Diagnosis, stage, exposure source and duration scale a $75,000 to
//! $350,000 base. The economic amounts are added in the middle of the
//! pipeline, so the age, water-source and occupational multipliers that
//! follow also scale them. Future medical costs and lost wages may be left
//! blank. The entered amounts are itemized in the breakdown.

use rust_decimal_macros::dec;

use crate::calculations::engine::{CalculatorDefinition, Finish, Rule, StepDefinition};
use crate::calculations::factor_table::{FactorTable, Weight};
use crate::models::{EconomicCategory, Question};

pub const SLUG: &str = "pfas";

pub fn definition() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: SLUG.into(),
        title: "PFAS Compensation Calculator".into(),
        route: "/pfas-calculator".into(),
        evaluation_route: "/pfas-case-evaluation".into(),
        questions: vec![
            Question::choice(
                "diagnosis",
                "Health Condition/Diagnosis",
                &[
                    ("kidney-cancer", "Kidney Cancer"),
                    ("testicular-cancer", "Testicular Cancer"),
                    ("thyroid-disease", "Thyroid Disease"),
                    ("liver-damage", "Liver Damage"),
                    ("ulcerative-colitis", "Ulcerative Colitis"),
                    ("pregnancy-complications", "Pregnancy Issues"),
                ],
            ),
            Question::choice(
                "severity",
                "Disease Severity/Stage",
                &[
                    ("stage-1", "Stage 1/Early"),
                    ("stage-2", "Stage 2/Moderate"),
                    ("stage-3", "Stage 3/Advanced"),
                    ("stage-4", "Stage 4/Metastatic"),
                ],
            ),
            Question::choice(
                "exposureSource",
                "Primary Exposure Source",
                &[
                    ("contaminated-water", "Contaminated Water"),
                    ("military-base", "Military Base"),
                    ("firefighter", "Firefighter/AFFF"),
                    ("manufacturing", "Manufacturing Plant"),
                    ("consumer-products", "Consumer Products"),
                    ("multiple", "Multiple Sources"),
                ],
            ),
            Question::choice(
                "exposureDuration",
                "Exposure Duration",
                &[
                    ("1-2-years", "1-2 Years"),
                    ("3-5-years", "3-5 Years"),
                    ("6-10-years", "6-10 Years"),
                    ("10plus-years", "10+ Years"),
                    ("lifetime", "Lifetime"),
                ],
            ),
            Question::number("medicalCosts", "Medical Expenses to Date ($)", "50000"),
            Question::number(
                "futureMedical",
                "Future Medical Costs - Treatment/Monitoring ($)",
                "75000",
            )
            .optional(),
            Question::number("lostWages", "Lost Wages & Income ($)", "25000").optional(),
            Question::choice(
                "age",
                "Your Age",
                &[
                    ("under-30", "Under 30"),
                    ("30-45", "30-45"),
                    ("46-60", "46-60"),
                    ("60plus", "60+"),
                ],
            ),
            Question::choice(
                "waterSource",
                "Water Source",
                &[
                    ("public-supply", "Public Water Supply"),
                    ("private-well", "Private Well"),
                    ("both", "Both Sources"),
                ],
            ),
            Question::choice(
                "occupationalExposure",
                "Occupational Exposure",
                &[
                    ("no", "No"),
                    ("yes-direct", "Direct Exposure"),
                    ("yes-secondary", "Secondary Exposure"),
                ],
            ),
        ],
        steps: vec![
            StepDefinition::new(
                "Diagnosis & Exposure Details",
                &["diagnosis", "severity", "exposureSource"],
            ),
            StepDefinition::new(
                "Exposure Duration & Financial Impact",
                &[
                    "exposureDuration",
                    "medicalCosts",
                    "futureMedical",
                    "lostWages",
                    "age",
                    "waterSource",
                    "occupationalExposure",
                ],
            ),
        ],
        base: Weight::split(dec!(75000), dec!(350000)),
        rules: vec![
            Rule::scale(
                "diagnosis",
                FactorTable::multipliers(&[
                    ("kidney-cancer", dec!(4.5)),
                    ("testicular-cancer", dec!(5.0)),
                    ("thyroid-disease", dec!(2.0)),
                    ("liver-damage", dec!(2.8)),
                    ("ulcerative-colitis", dec!(2.5)),
                    ("pregnancy-complications", dec!(2.2)),
                ]),
            ),
            Rule::scale(
                "severity",
                FactorTable::multipliers(&[
                    ("stage-1", dec!(1.0)),
                    ("stage-2", dec!(1.4)),
                    ("stage-3", dec!(2.0)),
                    ("stage-4", dec!(3.0)),
                ]),
            ),
            Rule::scale(
                "exposureSource",
                FactorTable::multipliers(&[
                    ("contaminated-water", dec!(1.8)),
                    ("military-base", dec!(2.2)),
                    ("firefighter", dec!(2.0)),
                    ("manufacturing", dec!(1.7)),
                    ("consumer-products", dec!(1.4)),
                    ("multiple", dec!(2.5)),
                ]),
            ),
            Rule::scale(
                "exposureDuration",
                FactorTable::multipliers(&[
                    ("1-2-years", dec!(1.0)),
                    ("3-5-years", dec!(1.3)),
                    ("6-10-years", dec!(1.7)),
                    ("10plus-years", dec!(2.2)),
                    ("lifetime", dec!(2.8)),
                ]),
            ),
            Rule::add_itemized(
                "medicalCosts",
                Weight::split(dec!(2), dec!(4)),
                EconomicCategory::MedicalExpenses,
            ),
            Rule::add_itemized(
                "futureMedical",
                Weight::split(dec!(1), dec!(2.5)),
                EconomicCategory::FutureCare,
            ),
            Rule::add_itemized(
                "lostWages",
                Weight::split(dec!(1), dec!(2)),
                EconomicCategory::LostIncome,
            ),
            Rule::scale(
                "age",
                FactorTable::multipliers(&[
                    ("under-30", dec!(1.8)),
                    ("30-45", dec!(1.5)),
                    ("46-60", dec!(1.2)),
                    ("60plus", dec!(1.0)),
                ]),
            ),
            Rule::scale(
                "waterSource",
                FactorTable::multipliers(&[
                    ("public-supply", dec!(1.4)),
                    ("private-well", dec!(1.2)),
                    ("both", dec!(1.6)),
                ]),
            ),
            Rule::scale(
                "occupationalExposure",
                FactorTable::multipliers(&[
                    ("no", dec!(1.0)),
                    ("yes-direct", dec!(1.8)),
                    ("yes-secondary", dec!(1.3)),
                ]),
            ),
        ],
        finish: Finish::round(),
        disclaimer: "PFAS litigation is evolving rapidly with ongoing settlement \
            negotiations and trials. Compensation depends on exposure documentation, \
            medical causation evidence, defendant identification, and settlement fund \
            participation. This estimate reflects current litigation trends but actual \
            amounts vary significantly by case. Many PFAS cases qualify for class action or \
            mass tort settlements. Statute of limitations varies by jurisdiction - act \
            quickly to preserve your rights."
            .into(),
    }
}
