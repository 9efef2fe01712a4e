//! Defective medical device calculator.
//!
//! The device type scales a $50,000 to $500,000 base. Medical costs are
//! added at three and six times their value, and each revision surgery adds
//! $50,000 low and $100,000 high. Pain level is collected but does not
//! change the estimate.

use rust_decimal_macros::dec;

use crate::calculations::engine::{CalculatorDefinition, Finish, Rule, StepDefinition};
use crate::calculations::factor_table::{FactorTable, Weight};
use crate::models::{EconomicCategory, Question};

pub const SLUG: &str = "medical-devices";

pub fn definition() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: SLUG.into(),
        title: "Medical Device Compensation Calculator".into(),
        route: "/medical-devices-compensation-calculator".into(),
        evaluation_route: "/medical-devices-case-evaluation".into(),
        questions: vec![
            Question::choice(
                "deviceType",
                "Device Type",
                &[
                    ("hip-implant", "Hip Implant"),
                    ("knee-implant", "Knee Implant"),
                    ("hernia-mesh", "Hernia Mesh"),
                    ("ivc-filter", "IVC Filter"),
                    ("pacemaker", "Pacemaker"),
                    ("spinal-device", "Spinal Device"),
                ],
            ),
            Question::number("revisionSurgeries", "Number of Revision Surgeries", "0"),
            Question::number("medicalCosts", "Total Medical Costs", "$"),
            Question::number("painLevel", "Pain Level (1-10)", "1-10"),
        ],
        steps: vec![
            StepDefinition::new("Device Information", &["deviceType", "revisionSurgeries"]),
            StepDefinition::new("Medical Impact", &["medicalCosts", "painLevel"]),
        ],
        base: Weight::split(dec!(50000), dec!(500000)),
        rules: vec![
            Rule::scale(
                "deviceType",
                FactorTable::multipliers(&[
                    ("hip-implant", dec!(2.5)),
                    ("knee-implant", dec!(2.0)),
                    ("hernia-mesh", dec!(3.0)),
                    ("ivc-filter", dec!(2.8)),
                    ("pacemaker", dec!(2.2)),
                    ("spinal-device", dec!(3.5)),
                ]),
            ),
            Rule::add_itemized(
                "medicalCosts",
                Weight::split(dec!(3), dec!(6)),
                EconomicCategory::MedicalExpenses,
            ),
            Rule::add_amount("revisionSurgeries", Weight::split(dec!(50000), dec!(100000))),
        ],
        finish: Finish::round(),
        disclaimer: "Based on similar device failure cases. Actual compensation varies by \
            device and complications. This estimate is for informational purposes only and \
            does not constitute legal advice."
            .into(),
    }
}
