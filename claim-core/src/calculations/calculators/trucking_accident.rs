//! Commercial trucking accident calculator.
//!
//! A single running total: $250,000 scaled by seven tables and an age band,
//! then spread to 60% and 150% for the low and high bounds.

use rust_decimal_macros::dec;

use crate::calculations::engine::{
    CalculatorDefinition, Finish, NumericBand, Rule, StepDefinition,
};
use crate::calculations::factor_table::{FactorTable, Weight};
use crate::models::Question;

pub const SLUG: &str = "trucking-accident";

pub fn definition() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: SLUG.into(),
        title: "Trucking Accident Calculator".into(),
        route: "/trucking-accident-calculator".into(),
        evaluation_route: "/free-consultation".into(),
        questions: vec![
            Question::choice(
                "truckType",
                "Type of Commercial Truck",
                &[
                    ("semiTruck", "Semi-Truck/18-Wheeler"),
                    ("tankerTruck", "Tanker Truck (hazardous materials)"),
                    ("cargoVan", "Cargo Van/Box Truck"),
                    ("deliveryTruck", "Delivery Truck (FedEx, UPS, Amazon)"),
                    ("dumpTruck", "Dump Truck/Construction Vehicle"),
                ],
            ),
            Question::choice(
                "accidentType",
                "Type of Accident",
                &[
                    ("rearEnd", "Rear-End Collision"),
                    ("headOn", "Head-On Collision"),
                    ("jackknife", "Jackknife Accident"),
                    ("underride", "Underride Accident (car under truck)"),
                    ("rollover", "Truck Rollover"),
                    ("blindSpot", "Blind Spot/Merge Accident"),
                ],
            ),
            Question::choice(
                "injurySeverity",
                "Injury Severity",
                &[
                    ("minor", "Minor (soft tissue, whiplash)"),
                    ("moderate", "Moderate (fractures, hospitalizations)"),
                    ("serious", "Serious (surgery, permanent injury)"),
                    ("catastrophic", "Catastrophic (paralysis, brain injury)"),
                    ("fatal", "Fatal (wrongful death)"),
                ],
            ),
            Question::choice(
                "fmcsaViolations",
                "FMCSA Violations",
                &[
                    ("multipleViolations", "Multiple Federal Violations"),
                    ("hoursOfService", "Hours of Service Violation (fatigued driving)"),
                    ("maintenanceIssues", "Maintenance/Inspection Violations"),
                    ("driverQualification", "Driver Qualification Issues"),
                    ("noViolations", "No Known Violations"),
                ],
            ),
            Question::choice(
                "driverConduct",
                "Driver Conduct",
                &[
                    ("impaired", "Impaired (DUI, drugs)"),
                    ("distracted", "Distracted (phone, eating)"),
                    ("fatigued", "Fatigued (hours of service violation)"),
                    ("speeding", "Speeding/Aggressive Driving"),
                    ("reckless", "Reckless Driving"),
                ],
            ),
            Question::choice(
                "age",
                "Your Age",
                &[("30", "Under 40"), ("50", "40-64"), ("70", "65 or older")],
            ),
            Question::choice(
                "medicalCosts",
                "Medical Costs",
                &[
                    ("under50k", "Under $50,000"),
                    ("50k-200k", "$50,000 - $200,000"),
                    ("200k-500k", "$200,000 - $500,000"),
                    ("500k-1m", "$500,000 - $1,000,000"),
                    ("over1m", "Over $1,000,000"),
                ],
            ),
            Question::choice(
                "employmentImpact",
                "Employment Impact",
                &[
                    ("totalDisability", "Total Disability (cannot work)"),
                    ("permanentRestrictions", "Permanent Work Restrictions"),
                    ("temporaryDisability", "Temporary Disability"),
                    ("minimalImpact", "Minimal Impact (returned to work)"),
                ],
            ),
        ],
        steps: vec![
            StepDefinition::new(
                "Accident Details",
                &["truckType", "accidentType", "injurySeverity", "fmcsaViolations"],
            ),
            StepDefinition::new(
                "Damages & Impact",
                &["driverConduct", "age", "medicalCosts", "employmentImpact"],
            ),
        ],
        base: Weight::both(dec!(250000)),
        rules: vec![
            Rule::scale(
                "truckType",
                FactorTable::multipliers(&[
                    ("semiTruck", dec!(2.5)),
                    ("tankerTruck", dec!(3.0)),
                    ("cargoVan", dec!(1.8)),
                    ("deliveryTruck", dec!(2.0)),
                    ("dumpTruck", dec!(2.3)),
                ]),
            ),
            Rule::scale(
                "accidentType",
                FactorTable::multipliers(&[
                    ("rearEnd", dec!(2.0)),
                    ("headOn", dec!(3.5)),
                    ("jackknife", dec!(3.0)),
                    ("underride", dec!(4.0)),
                    ("rollover", dec!(3.2)),
                    ("blindSpot", dec!(2.5)),
                ]),
            ),
            Rule::scale(
                "injurySeverity",
                FactorTable::multipliers(&[
                    ("minor", dec!(1.0)),
                    ("moderate", dec!(2.5)),
                    ("serious", dec!(4.0)),
                    ("catastrophic", dec!(6.0)),
                    ("fatal", dec!(7.0)),
                ]),
            ),
            Rule::scale(
                "fmcsaViolations",
                FactorTable::multipliers(&[
                    ("multipleViolations", dec!(2.0)),
                    ("hoursOfService", dec!(1.8)),
                    ("maintenanceIssues", dec!(1.7)),
                    ("driverQualification", dec!(1.6)),
                    ("noViolations", dec!(1.0)),
                ]),
            ),
            Rule::scale(
                "driverConduct",
                FactorTable::multipliers(&[
                    ("impaired", dec!(2.5)),
                    ("distracted", dec!(2.0)),
                    ("fatigued", dec!(2.2)),
                    ("speeding", dec!(1.8)),
                    ("reckless", dec!(2.3)),
                ]),
            ),
            Rule::scale(
                "medicalCosts",
                FactorTable::multipliers(&[
                    ("under50k", dec!(1.0)),
                    ("50k-200k", dec!(2.0)),
                    ("200k-500k", dec!(3.5)),
                    ("500k-1m", dec!(5.0)),
                    ("over1m", dec!(7.0)),
                ]),
            ),
            Rule::scale(
                "employmentImpact",
                FactorTable::multipliers(&[
                    ("totalDisability", dec!(2.0)),
                    ("permanentRestrictions", dec!(1.6)),
                    ("temporaryDisability", dec!(1.3)),
                    ("minimalImpact", dec!(1.0)),
                ]),
            ),
            Rule::band(
                "age",
                None,
                vec![
                    NumericBand::below(40, Weight::both(dec!(1.3))),
                    NumericBand::at_least(65, Weight::both(dec!(0.9))),
                ],
            ),
        ],
        finish: Finish::spread(dec!(0.6), dec!(1.5)),
        disclaimer: "This estimate is for informational purposes only. Trucking accidents \
            involve complex federal regulations (FMCSA), multiple liable parties (driver, \
            trucking company, maintenance company), and substantial insurance policies. \
            Actual compensation depends on liability, insurance coverage, and case-specific \
            factors. Consult a trucking accident attorney experienced in federal motor \
            carrier regulations."
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::audit::audit_ordering;
    use crate::models::AnswerSet;

    fn head_on_case() -> AnswerSet {
        AnswerSet::new()
            .with("truckType", "semiTruck")
            .with("accidentType", "headOn")
            .with("injurySeverity", "serious")
            .with("fmcsaViolations", "noViolations")
            .with("driverConduct", "distracted")
            .with("age", "30")
            .with("medicalCosts", "50k-200k")
            .with("employmentImpact", "temporaryDisability")
    }

    #[test]
    fn definition_is_valid() {
        assert_eq!(definition().validate(), Ok(()));
    }

    #[test]
    fn head_on_collision_with_young_claimant() {
        let result = definition().estimate(&head_on_case());

        assert_eq!(result.low, dec!(35490000));
        assert_eq!(result.high, dec!(88725000));
    }

    #[test]
    fn middle_age_band_is_neutral() {
        let result = definition().estimate(&head_on_case().with("age", "50"));

        // 45500000 × 0.6
        assert_eq!(result.low, dec!(27300000));
    }

    #[test]
    fn senior_band_reduces_estimate() {
        let result = definition().estimate(&head_on_case().with("age", "70"));

        assert_eq!(result.low, dec!(24570000));
        assert_eq!(result.high, dec!(61425000));
    }

    #[test]
    fn every_combination_keeps_low_at_or_below_high() {
        let report = audit_ordering(&definition());

        assert!(report.is_clean(), "{report}");
    }
}
