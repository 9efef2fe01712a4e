//! The estimate engine shared by every compensation calculator.
//!
//! A calculator is a [`CalculatorDefinition`]: its questions grouped into
//! steps, a base amount, an ordered list of [`Rule`]s, and a [`Finish`].
//!
//! # Pipeline
//!
//! | Stage  | What happens |
//! |--------|--------------|
//! | Base   | Low and high tracks start from `base.low` / `base.high` |
//! | Rules  | Each rule scales or adds to the tracks, in definition order |
//! | Spread | Optional: low × `spread.low`, high × `spread.high` |
//! | Round  | Both bounds rounded to whole dollars, half away from zero |
//! | Floors | Optional: `low ≥ low_floor`, then `high ≥ low × high_floor_ratio` |
//!
//! Calculators that work from a single running total use `Weight::both` for
//! the base and put their low/high ratios in the spread.
//!
//! The engine never fails on answers. Missing or unknown answers resolve to
//! the documented default of the rule that reads them.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use claim_core::AnswerSet;
//! use claim_core::calculations::{
//!     CalculatorDefinition, FactorTable, Finish, Rule, StepDefinition, Weight,
//! };
//! use claim_core::models::Question;
//!
//! let definition = CalculatorDefinition {
//!     slug: "demo".into(),
//!     title: "Demo Calculator".into(),
//!     route: "/demo-calculator".into(),
//!     evaluation_route: "/demo-case-evaluation".into(),
//!     questions: vec![Question::choice(
//!         "injurySeverity",
//!         "Injury Severity",
//!         &[("minor", "Minor"), ("severe", "Severe")],
//!     )],
//!     steps: vec![StepDefinition::new("Injury", &["injurySeverity"])],
//!     base: Weight::both(dec!(100000)),
//!     rules: vec![Rule::scale(
//!         "injurySeverity",
//!         FactorTable::multipliers(&[("minor", dec!(1.0)), ("severe", dec!(4.0))]),
//!     )],
//!     finish: Finish::spread(dec!(0.7), dec!(1.3)),
//!     disclaimer: "Estimate only.".into(),
//! };
//!
//! let answers = AnswerSet::new().with("injurySeverity", "severe");
//! let range = definition.estimate(&answers);
//!
//! assert_eq!(range.low, dec!(280000));
//! assert_eq!(range.high, dec!(520000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::{max, parse_amount, parse_whole_number, round_to_dollar};
use crate::calculations::factor_table::{FactorTable, Weight};
use crate::models::{AnswerSet, BreakdownLine, EconomicCategory, EstimateRange, Question};

/// Errors found when validating a calculator definition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DefinitionError {
    /// A calculator must have at least one input step.
    #[error("calculator '{calculator}' has no steps")]
    NoSteps { calculator: String },

    /// Every step must show at least one question.
    #[error("calculator '{calculator}' step {step} has no questions")]
    EmptyStep { calculator: String, step: usize },

    /// Two questions share an id.
    #[error("calculator '{calculator}' defines question '{question}' twice")]
    DuplicateQuestion {
        calculator: String,
        question: String,
    },

    /// A step or rule names a question that is not defined.
    #[error("calculator '{calculator}' references unknown question '{question}'")]
    UnknownQuestion {
        calculator: String,
        question: String,
    },

    /// A question is shown in no step, so it could never be answered.
    #[error("calculator '{calculator}' never shows question '{question}'")]
    UnplacedQuestion {
        calculator: String,
        question: String,
    },

    /// A question is shown in more than one step.
    #[error("calculator '{calculator}' shows question '{question}' in more than one step")]
    RepeatedQuestion {
        calculator: String,
        question: String,
    },

    /// A factor table names an answer key the question does not offer.
    #[error("calculator '{calculator}' table for '{question}' has unknown answer key '{key}'")]
    UnknownTableKey {
        calculator: String,
        question: String,
        key: String,
    },

    /// Two calculators in a catalog share a slug or a route.
    #[error("catalog already contains a calculator at '{0}'")]
    DuplicateCalculator(String),
}

/// A range of whole numbers with optional bounds.
///
/// `below` is exclusive, `at_least` inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericBand {
    pub at_least: Option<i64>,
    pub below: Option<i64>,
    pub factor: Weight,
}

impl NumericBand {
    /// Numbers strictly below `limit`.
    pub fn below(
        limit: i64,
        factor: Weight,
    ) -> Self {
        Self {
            at_least: None,
            below: Some(limit),
            factor,
        }
    }

    /// Numbers at or above `limit`.
    pub fn at_least(
        limit: i64,
        factor: Weight,
    ) -> Self {
        Self {
            at_least: Some(limit),
            below: None,
            factor,
        }
    }

    pub fn contains(
        &self,
        n: i64,
    ) -> bool {
        self.at_least.is_none_or(|lower| n >= lower) && self.below.is_none_or(|upper| n < upper)
    }
}

/// One step of the estimate pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rule {
    /// Multiply the tracks by the table weight of the answer.
    Scale { question: String, table: FactorTable },

    /// Add the table weight of the answer to the tracks.
    Add { question: String, table: FactorTable },

    /// Add a free-text amount times `factor`. Missing, unparsable, or
    /// negative input uses `default`. With a `category`, the entered amount
    /// is itemized in the breakdown.
    AddAmount {
        question: String,
        factor: Weight,
        default: Decimal,
        category: Option<EconomicCategory>,
    },

    /// Multiply by the factor of the first band containing the answer.
    /// Without a parsable answer `default` is used; with neither, nothing
    /// changes.
    Band {
        question: String,
        default: Option<i64>,
        bands: Vec<NumericBand>,
    },

    /// Multiply both tracks by `1 + (pivot - n) × per_unit` when `n` is
    /// below `pivot`.
    Taper {
        question: String,
        default: Option<i64>,
        pivot: i64,
        per_unit: Decimal,
    },
}

impl Rule {
    pub fn scale(
        question: &str,
        table: FactorTable,
    ) -> Self {
        Self::Scale {
            question: question.to_string(),
            table,
        }
    }

    pub fn add(
        question: &str,
        table: FactorTable,
    ) -> Self {
        Self::Add {
            question: question.to_string(),
            table,
        }
    }

    /// A free-text amount defaulting to zero and not itemized.
    pub fn add_amount(
        question: &str,
        factor: Weight,
    ) -> Self {
        Self::AddAmount {
            question: question.to_string(),
            factor,
            default: Decimal::ZERO,
            category: None,
        }
    }

    /// A free-text amount defaulting to zero and itemized under `category`.
    pub fn add_itemized(
        question: &str,
        factor: Weight,
        category: EconomicCategory,
    ) -> Self {
        Self::AddAmount {
            question: question.to_string(),
            factor,
            default: Decimal::ZERO,
            category: Some(category),
        }
    }

    pub fn band(
        question: &str,
        default: Option<i64>,
        bands: Vec<NumericBand>,
    ) -> Self {
        Self::Band {
            question: question.to_string(),
            default,
            bands,
        }
    }

    pub fn taper(
        question: &str,
        default: Option<i64>,
        pivot: i64,
        per_unit: Decimal,
    ) -> Self {
        Self::Taper {
            question: question.to_string(),
            default,
            pivot,
            per_unit,
        }
    }

    /// The question this rule reads.
    pub fn question(&self) -> &str {
        match self {
            Self::Scale { question, .. }
            | Self::Add { question, .. }
            | Self::AddAmount { question, .. }
            | Self::Band { question, .. }
            | Self::Taper { question, .. } => question,
        }
    }

    fn table(&self) -> Option<&FactorTable> {
        match self {
            Self::Scale { table, .. } | Self::Add { table, .. } => Some(table),
            _ => None,
        }
    }
}

/// How the tracks become the final range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finish {
    /// Ratios applied to the low and high tracks before rounding.
    pub spread: Option<Weight>,
    /// Minimum low bound, applied after rounding.
    pub low_floor: Option<Decimal>,
    /// The high bound is raised to at least `low × ratio`.
    pub high_floor_ratio: Option<Decimal>,
}

impl Finish {
    /// Round only.
    pub fn round() -> Self {
        Self::default()
    }

    /// Spread a single running total into a range.
    pub fn spread(
        low: Decimal,
        high: Decimal,
    ) -> Self {
        Self {
            spread: Some(Weight::split(low, high)),
            ..Self::default()
        }
    }

    /// Round, then enforce a minimum low bound and a minimum high/low ratio.
    pub fn floored(
        low_floor: Decimal,
        high_floor_ratio: Decimal,
    ) -> Self {
        Self {
            spread: None,
            low_floor: Some(low_floor),
            high_floor_ratio: Some(high_floor_ratio),
        }
    }
}

/// An ordinal group of questions shown together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    pub title: String,
    pub questions: Vec<String>,
}

impl StepDefinition {
    pub fn new(
        title: &str,
        questions: &[&str],
    ) -> Self {
        Self {
            title: title.to_string(),
            questions: questions.iter().map(|q| q.to_string()).collect(),
        }
    }
}

/// Running low/high totals while the rules are applied.
#[derive(Debug, Clone)]
struct Tracks {
    low: Decimal,
    high: Decimal,
    breakdown: Vec<BreakdownLine>,
}

impl Tracks {
    fn start(base: Weight) -> Self {
        Self {
            low: base.low,
            high: base.high,
            breakdown: Vec::new(),
        }
    }

    fn scale(
        &mut self,
        weight: Weight,
    ) {
        self.low *= weight.low;
        self.high *= weight.high;
    }

    fn add(
        &mut self,
        weight: Weight,
    ) {
        self.low += weight.low;
        self.high += weight.high;
    }
}

/// A complete, declarative compensation calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorDefinition {
    /// Stable identifier, e.g. `bus-accident`.
    pub slug: String,
    pub title: String,
    /// Path the calculator page is served at.
    pub route: String,
    /// Path of the case-evaluation page the results link to.
    pub evaluation_route: String,
    pub questions: Vec<Question>,
    pub steps: Vec<StepDefinition>,
    pub base: Weight,
    pub rules: Vec<Rule>,
    pub finish: Finish,
    /// Legal disclaimer shown with every estimate.
    pub disclaimer: String,
}

impl CalculatorDefinition {
    /// Validates the structure of the definition.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError`] if:
    /// - there are no steps, or a step is empty
    /// - two questions share an id
    /// - a step or rule names an unknown question
    /// - a question is shown in no step, or in more than one
    /// - a factor table on a choice question has a key the question does
    ///   not offer
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let calculator = || self.slug.clone();

        if self.steps.is_empty() {
            return Err(DefinitionError::NoSteps {
                calculator: calculator(),
            });
        }

        for (index, question) in self.questions.iter().enumerate() {
            if self.questions[..index].iter().any(|q| q.id == question.id) {
                return Err(DefinitionError::DuplicateQuestion {
                    calculator: calculator(),
                    question: question.id.clone(),
                });
            }
        }

        for (index, step) in self.steps.iter().enumerate() {
            if step.questions.is_empty() {
                return Err(DefinitionError::EmptyStep {
                    calculator: calculator(),
                    step: index + 1,
                });
            }
            for id in &step.questions {
                if self.question(id).is_none() {
                    return Err(DefinitionError::UnknownQuestion {
                        calculator: calculator(),
                        question: id.clone(),
                    });
                }
            }
        }

        for question in &self.questions {
            match self.placements(&question.id) {
                0 => {
                    return Err(DefinitionError::UnplacedQuestion {
                        calculator: calculator(),
                        question: question.id.clone(),
                    });
                }
                1 => {}
                _ => {
                    return Err(DefinitionError::RepeatedQuestion {
                        calculator: calculator(),
                        question: question.id.clone(),
                    });
                }
            }
        }

        for rule in &self.rules {
            let Some(question) = self.question(rule.question()) else {
                return Err(DefinitionError::UnknownQuestion {
                    calculator: calculator(),
                    question: rule.question().to_string(),
                });
            };
            let Some(table) = rule.table() else {
                continue;
            };
            if !question.is_choice() {
                continue;
            }
            if let Some(key) = table
                .keys()
                .find(|key| !question.options().iter().any(|option| option.key == *key))
            {
                return Err(DefinitionError::UnknownTableKey {
                    calculator: calculator(),
                    question: question.id.clone(),
                    key: key.to_string(),
                });
            }
        }

        Ok(())
    }

    fn placements(
        &self,
        question: &str,
    ) -> usize {
        self.steps
            .iter()
            .flat_map(|step| step.questions.iter())
            .filter(|id| *id == question)
            .count()
    }

    pub fn question(
        &self,
        id: &str,
    ) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    /// Number of input steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// The input step at the 1-based position `step`.
    pub fn step(
        &self,
        step: usize,
    ) -> Option<&StepDefinition> {
        step.checked_sub(1).and_then(|index| self.steps.get(index))
    }

    /// Questions of the 1-based `step`, in display order.
    pub fn questions_in_step(
        &self,
        step: usize,
    ) -> Vec<&Question> {
        self.step(step)
            .map(|step| {
                step.questions
                    .iter()
                    .filter_map(|id| self.question(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Computes the estimated range for `answers`.
    ///
    /// Pure and deterministic: the same answers always give the same range.
    /// Missing answers fall back to rule defaults; nothing here fails.
    pub fn estimate(
        &self,
        answers: &AnswerSet,
    ) -> EstimateRange {
        let mut tracks = Tracks::start(self.base);

        for rule in &self.rules {
            self.apply_rule(rule, answers, &mut tracks);
        }

        self.finish_range(tracks)
    }

    fn apply_rule(
        &self,
        rule: &Rule,
        answers: &AnswerSet,
        tracks: &mut Tracks,
    ) {
        match rule {
            Rule::Scale { question, table } => {
                tracks.scale(table.weight_for(answers.get(question)));
            }
            Rule::Add { question, table } => {
                tracks.add(table.weight_for(answers.get(question)));
            }
            Rule::AddAmount {
                question,
                factor,
                default,
                category,
            } => {
                let amount = self.amount(answers, question, *default);
                tracks.add(Weight::split(amount * factor.low, amount * factor.high));
                if let Some(category) = category {
                    tracks.breakdown.push(BreakdownLine {
                        category: *category,
                        amount,
                    });
                }
            }
            Rule::Band {
                question,
                default,
                bands,
            } => {
                let Some(n) = self.whole_number(answers, question).or(*default) else {
                    return;
                };
                if let Some(band) = bands.iter().find(|band| band.contains(n)) {
                    tracks.scale(band.factor);
                }
            }
            Rule::Taper {
                question,
                default,
                pivot,
                per_unit,
            } => {
                let Some(n) = self.whole_number(answers, question).or(*default) else {
                    return;
                };
                if n < *pivot {
                    let factor = Decimal::ONE + Decimal::from(pivot - n) * per_unit;
                    tracks.scale(Weight::both(factor));
                }
            }
        }
    }

    /// A non-negative free-text amount, or `default`.
    fn amount(
        &self,
        answers: &AnswerSet,
        question: &str,
        default: Decimal,
    ) -> Decimal {
        let Some(raw) = answers.get(question) else {
            debug!(calculator = %self.slug, question, %default, "amount unanswered; using default");
            return default;
        };

        match parse_amount(raw) {
            Some(amount) => amount,
            None => {
                warn!(
                    calculator = %self.slug,
                    question,
                    input = raw,
                    %default,
                    "amount is not a non-negative whole number; using default"
                );
                default
            }
        }
    }

    /// A non-negative whole-number answer, if there is one.
    fn whole_number(
        &self,
        answers: &AnswerSet,
        question: &str,
    ) -> Option<i64> {
        let raw = answers.get(question)?;
        let parsed = parse_whole_number(raw).filter(|n| *n >= 0);
        if parsed.is_none() {
            warn!(
                calculator = %self.slug,
                question,
                input = raw,
                "answer is not a non-negative whole number; ignoring it"
            );
        }
        parsed
    }

    fn finish_range(
        &self,
        tracks: Tracks,
    ) -> EstimateRange {
        let (mut low, mut high) = (tracks.low, tracks.high);

        if let Some(spread) = self.finish.spread {
            low *= spread.low;
            high *= spread.high;
        }

        let mut low = round_to_dollar(low);
        let mut high = round_to_dollar(high);

        if let Some(floor) = self.finish.low_floor {
            low = max(low, floor);
        }
        if let Some(ratio) = self.finish.high_floor_ratio {
            high = max(high, round_to_dollar(low * ratio));
        }

        if low > high {
            warn!(
                calculator = %self.slug,
                %low,
                %high,
                "estimate range is inverted"
            );
        }

        EstimateRange {
            low,
            high,
            breakdown: tracks.breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;

    /// Shows fallback warnings in the output of a failing test.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// A small two-step definition touching every rule kind.
    fn test_definition() -> CalculatorDefinition {
        CalculatorDefinition {
            slug: "test".into(),
            title: "Test Calculator".into(),
            route: "/test-calculator".into(),
            evaluation_route: "/test-case-evaluation".into(),
            questions: vec![
                Question::choice(
                    "severity",
                    "Severity",
                    &[("minor", "Minor"), ("severe", "Severe")],
                ),
                Question::choice("medical", "Medical", &[("low", "Low"), ("high", "High")]),
                Question::number("wages", "Lost Wages", "50000"),
                Question::number("age", "Age", "45").optional(),
            ],
            steps: vec![
                StepDefinition::new("Injury", &["severity", "medical"]),
                StepDefinition::new("Money", &["wages", "age"]),
            ],
            base: Weight::split(dec!(10000), dec!(20000)),
            rules: vec![
                Rule::scale(
                    "severity",
                    FactorTable::split_multipliers(&[
                        ("minor", Weight::ONE),
                        ("severe", Weight::split(dec!(2), dec!(3))),
                    ]),
                ),
                Rule::add(
                    "medical",
                    FactorTable::addends(&[
                        ("low", Weight::split(dec!(1000), dec!(2000))),
                        ("high", Weight::split(dec!(5000), dec!(10000))),
                    ]),
                ),
                Rule::add_itemized(
                    "wages",
                    Weight::split(dec!(1), dec!(1.5)),
                    EconomicCategory::LostIncome,
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
            finish: Finish::round(),
            disclaimer: "Estimate only.".into(),
        }
    }

    fn answers() -> AnswerSet {
        AnswerSet::new()
            .with("severity", "severe")
            .with("medical", "high")
            .with("wages", "10000")
            .with("age", "45")
    }

    // =========================================================================
    // validate tests
    // =========================================================================

    #[test]
    fn validate_accepts_valid_definition() {
        assert_eq!(test_definition().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_missing_steps() {
        let definition = CalculatorDefinition {
            steps: vec![],
            ..test_definition()
        };

        assert_eq!(
            definition.validate(),
            Err(DefinitionError::NoSteps {
                calculator: "test".into()
            })
        );
    }

    #[test]
    fn validate_rejects_empty_step() {
        let mut definition = test_definition();
        definition.steps.push(StepDefinition::new("Nothing", &[]));

        assert_eq!(
            definition.validate(),
            Err(DefinitionError::EmptyStep {
                calculator: "test".into(),
                step: 3
            })
        );
    }

    #[test]
    fn validate_rejects_duplicate_question() {
        let mut definition = test_definition();
        definition
            .questions
            .push(Question::number("wages", "Wages again", "0"));

        assert_eq!(
            definition.validate(),
            Err(DefinitionError::DuplicateQuestion {
                calculator: "test".into(),
                question: "wages".into()
            })
        );
    }

    #[test]
    fn validate_rejects_unknown_step_question() {
        let mut definition = test_definition();
        definition.steps[1].questions.push("income".into());

        assert_eq!(
            definition.validate(),
            Err(DefinitionError::UnknownQuestion {
                calculator: "test".into(),
                question: "income".into()
            })
        );
    }

    #[test]
    fn validate_rejects_unplaced_question() {
        let mut definition = test_definition();
        definition.steps[1].questions.retain(|q| q != "age");

        assert_eq!(
            definition.validate(),
            Err(DefinitionError::UnplacedQuestion {
                calculator: "test".into(),
                question: "age".into()
            })
        );
    }

    #[test]
    fn validate_rejects_repeated_question() {
        let mut definition = test_definition();
        definition.steps[1].questions.push("severity".into());

        assert_eq!(
            definition.validate(),
            Err(DefinitionError::RepeatedQuestion {
                calculator: "test".into(),
                question: "severity".into()
            })
        );
    }

    #[test]
    fn validate_rejects_rule_on_unknown_question() {
        let mut definition = test_definition();
        definition
            .rules
            .push(Rule::add_amount("income", Weight::ONE));

        assert_eq!(
            definition.validate(),
            Err(DefinitionError::UnknownQuestion {
                calculator: "test".into(),
                question: "income".into()
            })
        );
    }

    #[test]
    fn validate_rejects_table_key_not_offered() {
        let mut definition = test_definition();
        definition.rules.push(Rule::scale(
            "severity",
            FactorTable::multipliers(&[("catastrophic", dec!(6))]),
        ));

        assert_eq!(
            definition.validate(),
            Err(DefinitionError::UnknownTableKey {
                calculator: "test".into(),
                question: "severity".into(),
                key: "catastrophic".into()
            })
        );
    }

    // =========================================================================
    // step lookup tests
    // =========================================================================

    #[test]
    fn step_is_one_based() {
        let definition = test_definition();

        assert_eq!(definition.step(0), None);
        assert_eq!(definition.step(1).map(|s| s.title.as_str()), Some("Injury"));
        assert_eq!(definition.step(3), None);
    }

    #[test]
    fn questions_in_step_follow_display_order() {
        let definition = test_definition();

        let ids: Vec<_> = definition
            .questions_in_step(2)
            .iter()
            .map(|q| q.id.as_str())
            .collect();

        assert_eq!(ids, vec!["wages", "age"]);
    }

    // =========================================================================
    // estimate tests
    // =========================================================================

    #[test]
    fn estimate_applies_rules_in_order() {
        let result = test_definition().estimate(&answers());

        // low:  10000 × 2 + 5000 + 10000 × 1
        // high: 20000 × 3 + 10000 + 10000 × 1.5
        assert_eq!(result.low, dec!(35000));
        assert_eq!(result.high, dec!(85000));
    }

    #[test]
    fn estimate_itemizes_categorized_amounts() {
        let result = test_definition().estimate(&answers());

        assert_eq!(
            result.breakdown,
            vec![BreakdownLine {
                category: EconomicCategory::LostIncome,
                amount: dec!(10000),
            }]
        );
    }

    #[test]
    fn estimate_uses_defaults_for_empty_answers() {
        let result = test_definition().estimate(&AnswerSet::new());

        assert_eq!(result.low, dec!(10000));
        assert_eq!(result.high, dec!(20000));
        assert_eq!(result.total_economic(), Some(Decimal::ZERO));
    }

    #[test]
    fn estimate_treats_unknown_keys_as_default() {
        let answers = answers().with("severity", "legendary");

        let result = test_definition().estimate(&answers);

        assert_eq!(result.low, dec!(25000));
        assert_eq!(result.high, dec!(45000));
    }

    #[test]
    fn estimate_ignores_negative_amounts() {
        let _guard = init_test_tracing();
        let answers = answers().with("wages", "-10000");

        let result = test_definition().estimate(&answers);

        assert_eq!(result.low, dec!(25000));
        assert_eq!(result.high, dec!(70000));
    }

    #[test]
    fn band_applies_first_matching_band() {
        let young = test_definition().estimate(&answers().with("age", "30"));
        let senior = test_definition().estimate(&answers().with("age", "65"));

        assert_eq!(young.low, dec!(45500));
        assert_eq!(senior.low, dec!(31500));
    }

    #[test]
    fn band_without_number_or_default_changes_nothing() {
        let result = test_definition().estimate(&answers().with("age", "unknown"));

        assert_eq!(result.low, dec!(35000));
    }

    #[test]
    fn taper_scales_below_pivot_only() {
        let mut definition = test_definition();
        definition.rules = vec![Rule::taper("age", Some(40), 50, dec!(0.015))];

        let below = definition.estimate(&AnswerSet::new().with("age", "45"));
        let above = definition.estimate(&AnswerSet::new().with("age", "55"));
        let defaulted = definition.estimate(&AnswerSet::new());

        assert_eq!(below.low, dec!(10750));
        assert_eq!(above.low, dec!(10000));
        assert_eq!(defaulted.low, dec!(11500));
    }

    #[test]
    fn spread_applies_before_rounding() {
        let mut definition = test_definition();
        definition.base = Weight::both(dec!(10001));
        definition.rules.clear();
        definition.finish = Finish::spread(dec!(0.6), dec!(1.5));

        let result = definition.estimate(&AnswerSet::new());

        // 6000.6 and 15001.5
        assert_eq!(result.low, dec!(6001));
        assert_eq!(result.high, dec!(15002));
    }

    #[test]
    fn floors_raise_low_then_high() {
        let mut definition = test_definition();
        definition.rules.clear();
        definition.finish = Finish::floored(dec!(30000), dec!(2));

        let result = definition.estimate(&AnswerSet::new());

        assert_eq!(result.low, dec!(30000));
        assert_eq!(result.high, dec!(60000));
    }

    #[test]
    fn numeric_band_bounds() {
        let band = NumericBand {
            at_least: Some(40),
            below: Some(65),
            factor: Weight::ONE,
        };

        assert!(!band.contains(39));
        assert!(band.contains(40));
        assert!(band.contains(64));
        assert!(!band.contains(65));
    }
}
