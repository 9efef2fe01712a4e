use std::io::{Read, Write};

use claim_core::{AnswerSet, Catalog};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur when loading or running scenario sheets.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Scenario '{scenario}': unknown calculator '{calculator}'")]
    UnknownCalculator { scenario: String, calculator: String },

    #[error("Scenario '{scenario}': malformed answer '{entry}' (expected key=value)")]
    MalformedAnswers { scenario: String, entry: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for ScenarioError {
    fn from(err: csv::Error) -> Self {
        ScenarioError::CsvParse(err.to_string())
    }
}

/// A single row of a scenario sheet.
///
/// - `scenario`: a free-form name for the row
/// - `calculator`: the calculator slug, e.g. `bus-accident`
/// - `answers`: `key=value` pairs separated by `;`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScenarioRecord {
    pub scenario: String,
    pub calculator: String,
    #[serde(default)]
    pub answers: String,
}

impl ScenarioRecord {
    fn into_scenario(self) -> Result<Scenario, ScenarioError> {
        let mut answers = AnswerSet::new();

        for entry in self.answers.split(';').map(str::trim) {
            if entry.is_empty() {
                continue;
            }
            let (question, value) =
                AnswerSet::parse_pair(entry).ok_or_else(|| ScenarioError::MalformedAnswers {
                    scenario: self.scenario.clone(),
                    entry: entry.to_string(),
                })?;
            answers.set(question, value);
        }

        Ok(Scenario {
            name: self.scenario,
            calculator: self.calculator.trim().to_string(),
            answers,
        })
    }
}

/// A parsed scenario, ready to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub calculator: String,
    pub answers: AnswerSet,
}

/// Reads scenario sheets.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Parse scenarios from a CSV reader with the columns
    /// `scenario,calculator,answers`.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<Scenario>, ScenarioError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut scenarios = Vec::new();

        for result in csv_reader.deserialize() {
            let record: ScenarioRecord = result?;
            scenarios.push(record.into_scenario()?);
        }

        Ok(scenarios)
    }
}

/// The estimate for one scenario, as written to the output sheet.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScenarioOutcome {
    pub scenario: String,
    pub calculator: String,
    pub low: Decimal,
    pub high: Decimal,
    /// Answer ids the calculator has no question for. They do not reach the
    /// estimate, so the calculator's defaults apply in their place.
    #[serde(skip)]
    pub unknown_questions: Vec<String>,
}

/// Runs scenarios against a [`Catalog`].
pub struct ScenarioRunner<'a> {
    catalog: &'a Catalog,
}

impl<'a> ScenarioRunner<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Estimates every scenario in order. Stops at the first scenario that
    /// names a calculator the catalog does not have.
    ///
    /// Blank or unknown answers are not errors: the calculator's defaults
    /// apply, the same as in the form.
    pub fn run(
        &self,
        scenarios: &[Scenario],
    ) -> Result<Vec<ScenarioOutcome>, ScenarioError> {
        scenarios
            .iter()
            .map(|scenario| self.run_one(scenario))
            .collect()
    }

    fn run_one(
        &self,
        scenario: &Scenario,
    ) -> Result<ScenarioOutcome, ScenarioError> {
        let definition = self.catalog.get(&scenario.calculator).ok_or_else(|| {
            ScenarioError::UnknownCalculator {
                scenario: scenario.name.clone(),
                calculator: scenario.calculator.clone(),
            }
        })?;

        let mut unknown_questions = Vec::new();
        for (question, _) in scenario.answers.iter() {
            if definition.question(question).is_none() {
                warn!(scenario = %scenario.name, calculator = %definition.slug, question, "answer for unknown question ignored");
                unknown_questions.push(question.to_string());
            }
        }
        let blank: Vec<&str> = definition
            .questions
            .iter()
            .filter(|question| question.required && !scenario.answers.is_answered(&question.id))
            .map(|question| question.id.as_str())
            .collect();
        if !blank.is_empty() {
            debug!(scenario = %scenario.name, ?blank, "required answers missing; defaults apply");
        }

        let range = definition.estimate(&scenario.answers);
        Ok(ScenarioOutcome {
            scenario: scenario.name.clone(),
            calculator: definition.slug.clone(),
            low: range.low,
            high: range.high,
            unknown_questions,
        })
    }
}

/// Writes outcomes as CSV with the columns `scenario,calculator,low,high`.
pub struct ScenarioWriter;

impl ScenarioWriter {
    /// Returns the number of rows written, excluding the header.
    pub fn write<W: Write>(
        writer: W,
        outcomes: &[ScenarioOutcome],
    ) -> Result<usize, ScenarioError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for outcome in outcomes {
            csv_writer.serialize(outcome)?;
        }
        csv_writer.flush()?;

        Ok(outcomes.len())
    }
}
