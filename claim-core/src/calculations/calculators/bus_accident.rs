//! Bus accident calculator.
//!
//! Common-carrier claims: nine multiplier tables applied to a $50,000 to
//! $150,000 base, then a medical-cost addend that doubles on the high track.

use rust_decimal_macros::dec;

use crate::calculations::engine::{CalculatorDefinition, Finish, Rule, StepDefinition};
use crate::calculations::factor_table::{FactorTable, Weight};
use crate::models::Question;

pub const SLUG: &str = "bus-accident";

/// Lowest published estimate, used when checking the bottom of the range.
pub const STATED_FLOOR: rust_decimal::Decimal = dec!(55000);

pub fn definition() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: SLUG.into(),
        title: "Bus Accident Compensation Calculator".into(),
        route: "/bus-accident-compensation-calculator".into(),
        evaluation_route: "/bus-accident/case-evaluation".into(),
        questions: vec![
            Question::choice(
                "busOperator",
                "Bus Operator Type",
                &[
                    ("municipal-public", "Municipal/Public Transit"),
                    ("private-charter", "Private Charter"),
                    ("school-bus", "School Bus"),
                    ("greyhound-interstate", "Greyhound/Interstate"),
                    ("tour-bus", "Tour Bus"),
                ],
            ),
            Question::choice(
                "passengerStatus",
                "Your Status at Time of Accident",
                &[
                    ("seated-passenger", "Seated Passenger"),
                    ("standing-passenger", "Standing Passenger"),
                    ("boarding-alighting", "Boarding/Alighting Bus"),
                    ("pedestrian-struck", "Pedestrian Struck by Bus"),
                    ("other-vehicle", "Other Vehicle Occupant"),
                ],
            ),
            Question::choice(
                "accidentType",
                "Type of Accident",
                &[
                    ("collision-vehicle", "Collision with Vehicle"),
                    ("rollover", "Bus Rollover"),
                    ("sudden-stop", "Sudden Stop/Braking"),
                    ("door-malfunction", "Door Malfunction"),
                    ("slip-fall-bus", "Slip and Fall on Bus"),
                    ("hit-by-bus", "Hit by Bus"),
                ],
            ),
            Question::choice(
                "injurySeverity",
                "Injury Severity",
                &[
                    ("minor", "Minor (bruises, minor cuts)"),
                    ("moderate", "Moderate (sprains, minor fractures)"),
                    ("serious", "Serious (major fractures, surgery needed)"),
                    ("severe", "Severe (multiple surgeries, long-term care)"),
                    ("catastrophic", "Catastrophic (life-altering injuries)"),
                ],
            ),
            Question::choice(
                "injuryType",
                "Type of Injury",
                &[
                    ("soft-tissue", "Soft Tissue (whiplash, strains)"),
                    ("fractures", "Fractures/Broken Bones"),
                    ("head-brain", "Head/Brain Injury"),
                    ("spinal-cord", "Spinal Cord Injury"),
                    ("internal-injuries", "Internal Injuries"),
                    ("multiple-injuries", "Multiple Injury Types"),
                ],
            ),
            Question::choice(
                "medicalCosts",
                "Total Medical Costs",
                &[
                    ("under-10k", "Under $10,000"),
                    ("10k-25k", "$10,000 - $25,000"),
                    ("25k-50k", "$25,000 - $50,000"),
                    ("50k-100k", "$50,000 - $100,000"),
                    ("100k-250k", "$100,000 - $250,000"),
                    ("over-250k", "Over $250,000"),
                ],
            ),
            Question::choice(
                "permanentDisability",
                "Permanent Disability",
                &[
                    ("none", "No Permanent Disability"),
                    ("partial-temporary", "Partial Temporary Disability"),
                    ("partial-permanent", "Partial Permanent Disability"),
                    ("total-permanent", "Total Permanent Disability"),
                ],
            ),
            Question::choice(
                "multipleVictims",
                "Multiple Victims in Accident?",
                &[("yes", "Yes - Multiple Victims"), ("no", "No - Single Victim")],
            ),
            Question::choice(
                "busDefect",
                "Bus Defect/Maintenance Issue Present?",
                &[("yes", "Yes - Defect or Poor Maintenance"), ("no", "No Apparent Defect")],
            ),
            Question::choice(
                "age",
                "Your Age",
                &[
                    ("under-18", "Under 18"),
                    ("18-40", "18-40"),
                    ("41-65", "41-65"),
                    ("over-65", "Over 65"),
                ],
            ),
        ],
        steps: vec![
            StepDefinition::new(
                "Accident Details",
                &["busOperator", "passengerStatus", "accidentType"],
            ),
            StepDefinition::new(
                "Injury & Damages",
                &[
                    "injurySeverity",
                    "injuryType",
                    "medicalCosts",
                    "permanentDisability",
                    "multipleVictims",
                    "busDefect",
                    "age",
                ],
            ),
        ],
        base: Weight::split(dec!(50000), dec!(150000)),
        rules: vec![
            Rule::scale(
                "busOperator",
                FactorTable::multipliers(&[
                    ("municipal-public", dec!(1.2)),
                    ("private-charter", dec!(1.3)),
                    ("school-bus", dec!(1.4)),
                    ("greyhound-interstate", dec!(1.5)),
                    ("tour-bus", dec!(1.3)),
                ]),
            ),
            Rule::scale(
                "passengerStatus",
                FactorTable::multipliers(&[
                    ("seated-passenger", dec!(1.0)),
                    ("standing-passenger", dec!(1.2)),
                    ("boarding-alighting", dec!(1.3)),
                    ("pedestrian-struck", dec!(1.5)),
                    ("other-vehicle", dec!(1.4)),
                ]),
            ),
            Rule::scale(
                "accidentType",
                FactorTable::multipliers(&[
                    ("collision-vehicle", dec!(1.2)),
                    ("rollover", dec!(1.8)),
                    ("sudden-stop", dec!(1.0)),
                    ("door-malfunction", dec!(1.3)),
                    ("slip-fall-bus", dec!(1.1)),
                    ("hit-by-bus", dec!(1.6)),
                ]),
            ),
            Rule::scale(
                "injurySeverity",
                FactorTable::multipliers(&[
                    ("minor", dec!(1.0)),
                    ("moderate", dec!(1.5)),
                    ("serious", dec!(2.5)),
                    ("severe", dec!(4.0)),
                    ("catastrophic", dec!(6.0)),
                ]),
            ),
            Rule::scale(
                "injuryType",
                FactorTable::multipliers(&[
                    ("soft-tissue", dec!(1.0)),
                    ("fractures", dec!(1.4)),
                    ("head-brain", dec!(2.0)),
                    ("spinal-cord", dec!(2.5)),
                    ("internal-injuries", dec!(1.8)),
                    ("multiple-injuries", dec!(1.6)),
                ]),
            ),
            Rule::scale(
                "permanentDisability",
                FactorTable::multipliers(&[
                    ("none", dec!(1.0)),
                    ("partial-temporary", dec!(1.3)),
                    ("partial-permanent", dec!(1.8)),
                    ("total-permanent", dec!(3.0)),
                ]),
            ),
            Rule::scale(
                "multipleVictims",
                FactorTable::multipliers(&[("yes", dec!(1.3)), ("no", dec!(1.0))]),
            ),
            Rule::scale(
                "busDefect",
                FactorTable::multipliers(&[("yes", dec!(1.4)), ("no", dec!(1.0))]),
            ),
            Rule::scale(
                "age",
                FactorTable::multipliers(&[
                    ("under-18", dec!(1.3)),
                    ("18-40", dec!(1.2)),
                    ("41-65", dec!(1.0)),
                    ("over-65", dec!(0.9)),
                ]),
            ),
            Rule::add(
                "medicalCosts",
                FactorTable::addends(&[
                    ("under-10k", Weight::split(dec!(5000), dec!(10000))),
                    ("10k-25k", Weight::split(dec!(15000), dec!(30000))),
                    ("25k-50k", Weight::split(dec!(35000), dec!(70000))),
                    ("50k-100k", Weight::split(dec!(75000), dec!(150000))),
                    ("100k-250k", Weight::split(dec!(175000), dec!(350000))),
                    ("over-250k", Weight::split(dec!(300000), dec!(600000))),
                ]),
            ),
        ],
        finish: Finish::round(),
        disclaimer: "This estimate is for informational purposes only and does not \
            constitute legal advice. Bus accident claims involve complex liability issues \
            including common carrier regulations, municipal immunity considerations, and \
            federal transportation laws. Actual compensation depends on factors such as \
            negligence, maintenance records, driver qualifications, and specific \
            circumstances. Consult with a bus accident attorney for evaluation of your case."
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::audit::audit_ordering;
    use crate::models::AnswerSet;

    fn lowest_tier() -> AnswerSet {
        AnswerSet::new()
            .with("busOperator", "municipal-public")
            .with("passengerStatus", "seated-passenger")
            .with("accidentType", "sudden-stop")
            .with("injurySeverity", "minor")
            .with("injuryType", "soft-tissue")
            .with("medicalCosts", "under-10k")
            .with("permanentDisability", "none")
            .with("multipleVictims", "no")
            .with("busDefect", "no")
            .with("age", "over-65")
    }

    #[test]
    fn definition_is_valid() {
        assert_eq!(definition().validate(), Ok(()));
    }

    #[test]
    fn lowest_tier_lands_near_stated_floor() {
        let result = definition().estimate(&lowest_tier());

        // 50000 × 1.2 × 0.9 + 5000
        assert_eq!(result.low, dec!(59000));
        assert_eq!(result.high, dec!(172000));
        assert!(result.low >= STATED_FLOOR);
    }

    #[test]
    fn serious_rollover_with_permanent_injury() {
        let answers = AnswerSet::new()
            .with("busOperator", "greyhound-interstate")
            .with("passengerStatus", "standing-passenger")
            .with("accidentType", "rollover")
            .with("injurySeverity", "serious")
            .with("injuryType", "fractures")
            .with("medicalCosts", "25k-50k")
            .with("permanentDisability", "partial-permanent")
            .with("multipleVictims", "yes")
            .with("busDefect", "no")
            .with("age", "18-40");

        let result = definition().estimate(&answers);

        assert_eq!(result.low, dec!(1627136));
        assert_eq!(result.high, dec!(4846408));
    }

    #[test]
    fn medical_addend_is_not_multiplied() {
        let cheap = definition().estimate(&lowest_tier());
        let costly = definition().estimate(&lowest_tier().with("medicalCosts", "over-250k"));

        assert_eq!(costly.low - cheap.low, dec!(295000));
        assert_eq!(costly.high - cheap.high, dec!(590000));
    }

    #[test]
    fn no_breakdown_is_itemized() {
        let result = definition().estimate(&lowest_tier());

        assert_eq!(result.total_economic(), None);
    }

    #[test]
    fn every_combination_keeps_low_at_or_below_high() {
        let report = audit_ordering(&definition());

        assert!(report.is_clean(), "{report}");
    }
}
