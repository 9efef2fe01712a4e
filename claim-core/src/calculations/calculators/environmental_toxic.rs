//! Environmental toxic exposure calculator.
//!
//! Seven multiplier tables combine into one factor over a $50,000 to
//! $250,000 base. The medical-cost addend is taken at 1.5 times on the high
//! track. After rounding the low bound is at least $30,000 and the high bound
//! at least twice the low bound.

use rust_decimal_macros::dec;

use crate::calculations::engine::{CalculatorDefinition, Finish, Rule, StepDefinition};
use crate::calculations::factor_table::{FactorTable, Weight};
use crate::models::Question;

pub const SLUG: &str = "environmental-toxic";

pub fn definition() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: SLUG.into(),
        title: "Environmental Toxic Exposure Compensation Calculator".into(),
        route: "/environmental-toxic-compensation-calculator".into(),
        evaluation_route: "/environmental-toxic-case-evaluation".into(),
        questions: vec![
            Question::choice(
                "contaminantType",
                "Type of Contaminant",
                &[
                    ("lead", "Lead (Paint, Water, Soil)"),
                    ("asbestos", "Asbestos"),
                    ("toxic-mold", "Toxic Mold"),
                    ("pesticides", "Pesticides/Herbicides"),
                    ("industrial-chemicals", "Industrial Chemicals"),
                    ("contaminated-water", "Contaminated Water (Non-Lead)"),
                    ("air-pollution", "Air Pollution/Emissions"),
                    ("radioactive", "Radioactive Materials"),
                    ("other", "Other Toxin"),
                ],
            ),
            Question::choice(
                "exposureSource",
                "Source of Exposure",
                &[
                    ("drinking-water", "Drinking Water Supply"),
                    ("industrial-facility", "Industrial Facility"),
                    ("landfill-dump", "Landfill/Dump Site"),
                    ("residential-property", "Residential Property"),
                    ("workplace", "Workplace"),
                    ("agricultural", "Agricultural Operation"),
                    ("military-base", "Military Base"),
                    ("superfund-site", "EPA Superfund Site"),
                    ("other", "Other Source"),
                ],
            ),
            Question::choice(
                "illnessType",
                "Type of Illness/Injury",
                &[
                    ("cancer", "Cancer (Various Types)"),
                    ("neurological", "Neurological Damage"),
                    ("respiratory", "Respiratory Disease"),
                    ("kidney-liver", "Kidney/Liver Damage"),
                    ("immune-system", "Immune System Damage"),
                    ("birth-defects", "Birth Defects"),
                    ("chronic-illness", "Chronic Illness"),
                    ("minor-symptoms", "Minor Symptoms"),
                    ("property-only", "Property Damage Only"),
                ],
            ),
            Question::choice(
                "exposureDuration",
                "Duration of Exposure",
                &[
                    ("under-1-year", "Under 1 Year"),
                    ("1-3-years", "1-3 Years"),
                    ("3-5-years", "3-5 Years"),
                    ("5-10-years", "5-10 Years"),
                    ("10-20-years", "10-20 Years"),
                    ("over-20-years", "Over 20 Years"),
                    ("lifetime", "Lifetime Exposure"),
                ],
            ),
            Question::choice(
                "numberOfVictims",
                "Number of Affected Individuals",
                &[
                    ("individual", "Individual/Family Only"),
                    ("2-10", "2-10 People"),
                    ("11-50", "11-50 People"),
                    ("51-100", "51-100 People"),
                    ("over-100", "Over 100 People"),
                    ("community-wide", "Entire Community"),
                ],
            ),
            Question::choice(
                "propertyDamage",
                "Property Damage",
                &[
                    ("none", "None"),
                    ("minor-devaluation", "Minor Property Devaluation"),
                    ("significant-devaluation", "Significant Devaluation"),
                    ("uninhabitable", "Uninhabitable Property"),
                    ("total-loss", "Total Property Loss"),
                    ("remediation-required", "Expensive Remediation Required"),
                ],
            ),
            Question::choice(
                "responsibleParty",
                "Responsible Party",
                &[
                    ("large-corporation", "Large Corporation"),
                    ("government-entity", "Government Entity"),
                    ("utility-company", "Utility Company"),
                    ("manufacturer", "Product Manufacturer"),
                    ("landlord", "Landlord/Property Owner"),
                    ("multiple-parties", "Multiple Parties"),
                    ("unknown", "Unknown/To Be Determined"),
                ],
            ),
            Question::choice(
                "medicalCosts",
                "Medical Costs to Date",
                &[
                    ("none-yet", "None Yet"),
                    ("under-50k", "Under $50,000"),
                    ("50k-100k", "$50,000 - $100,000"),
                    ("100k-250k", "$100,000 - $250,000"),
                    ("250k-500k", "$250,000 - $500,000"),
                    ("over-500k", "Over $500,000"),
                ],
            ),
        ],
        steps: vec![
            StepDefinition::new(
                "Exposure Details",
                &["contaminantType", "exposureSource", "illnessType", "exposureDuration"],
            ),
            StepDefinition::new(
                "Impact Assessment",
                &["numberOfVictims", "propertyDamage", "responsibleParty", "medicalCosts"],
            ),
        ],
        base: Weight::split(dec!(50000), dec!(250000)),
        rules: vec![
            Rule::scale(
                "contaminantType",
                FactorTable::multipliers(&[
                    ("lead", dec!(3.0)),
                    ("asbestos", dec!(3.5)),
                    ("toxic-mold", dec!(2.5)),
                    ("pesticides", dec!(2.8)),
                    ("industrial-chemicals", dec!(3.2)),
                    ("contaminated-water", dec!(3.0)),
                    ("air-pollution", dec!(2.3)),
                    ("radioactive", dec!(4.5)),
                    ("other", dec!(2.0)),
                ]),
            ),
            Rule::scale(
                "exposureSource",
                FactorTable::multipliers(&[
                    ("drinking-water", dec!(3.5)),
                    ("industrial-facility", dec!(3.2)),
                    ("landfill-dump", dec!(3.0)),
                    ("residential-property", dec!(2.5)),
                    ("workplace", dec!(2.8)),
                    ("agricultural", dec!(2.5)),
                    ("military-base", dec!(3.3)),
                    ("superfund-site", dec!(4.0)),
                    ("other", dec!(2.0)),
                ]),
            ),
            Rule::scale(
                "illnessType",
                FactorTable::multipliers(&[
                    ("cancer", dec!(5.5)),
                    ("neurological", dec!(4.5)),
                    ("respiratory", dec!(3.5)),
                    ("kidney-liver", dec!(4.0)),
                    ("immune-system", dec!(3.8)),
                    ("birth-defects", dec!(5.0)),
                    ("chronic-illness", dec!(3.5)),
                    ("minor-symptoms", dec!(1.5)),
                    ("property-only", dec!(1.0)),
                ]),
            ),
            Rule::scale(
                "exposureDuration",
                FactorTable::multipliers(&[
                    ("under-1-year", dec!(1.5)),
                    ("1-3-years", dec!(2.0)),
                    ("3-5-years", dec!(2.5)),
                    ("5-10-years", dec!(3.0)),
                    ("10-20-years", dec!(3.5)),
                    ("over-20-years", dec!(4.5)),
                    ("lifetime", dec!(5.0)),
                ]),
            ),
            Rule::scale(
                "numberOfVictims",
                FactorTable::multipliers(&[
                    ("individual", dec!(1.0)),
                    ("2-10", dec!(1.3)),
                    ("11-50", dec!(1.6)),
                    ("51-100", dec!(1.8)),
                    ("over-100", dec!(2.0)),
                    ("community-wide", dec!(2.5)),
                ]),
            ),
            Rule::scale(
                "propertyDamage",
                FactorTable::multipliers(&[
                    ("none", dec!(1.0)),
                    ("minor-devaluation", dec!(1.3)),
                    ("significant-devaluation", dec!(1.8)),
                    ("uninhabitable", dec!(2.5)),
                    ("total-loss", dec!(3.0)),
                    ("remediation-required", dec!(2.2)),
                ]),
            ),
            Rule::scale(
                "responsibleParty",
                FactorTable::multipliers(&[
                    ("large-corporation", dec!(2.5)),
                    ("government-entity", dec!(2.2)),
                    ("utility-company", dec!(2.3)),
                    ("manufacturer", dec!(2.4)),
                    ("landlord", dec!(1.8)),
                    ("multiple-parties", dec!(2.8)),
                    ("unknown", dec!(1.0)),
                ]),
            ),
            Rule::add(
                "medicalCosts",
                FactorTable::addends(&[
                    ("none-yet", Weight::ZERO),
                    ("under-50k", Weight::split(dec!(20000), dec!(30000))),
                    ("50k-100k", Weight::split(dec!(60000), dec!(90000))),
                    ("100k-250k", Weight::split(dec!(150000), dec!(225000))),
                    ("250k-500k", Weight::split(dec!(350000), dec!(525000))),
                    ("over-500k", Weight::split(dec!(600000), dec!(900000))),
                ]),
            ),
        ],
        finish: Finish::floored(dec!(30000), dec!(2)),
        disclaimer: "This is an educational estimate only and does not constitute legal \
            advice. Actual compensation depends on numerous factors including jurisdiction, \
            proof of causation (linking exposure to illness), statute of limitations, EPA \
            Superfund designations, responsible party solvency, class action vs individual \
            claims, and specific case circumstances. Environmental toxic tort cases are \
            extremely complex requiring extensive expert testimony from toxicologists, \
            epidemiologists, and environmental scientists. Time limits vary widely. Many \
            cases become class actions. Consult with an experienced environmental law \
            attorney immediately for proper case evaluation."
            .into(),
    }
}
