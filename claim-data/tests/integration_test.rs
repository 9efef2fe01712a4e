//! Integration tests for scenario sheets against the built-in catalog.

use claim_core::Catalog;
use claim_data::{ScenarioError, ScenarioLoader, ScenarioOutcome, ScenarioRunner, ScenarioWriter};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const SAMPLE_CSV: &str = include_str!("fixtures/sample_scenarios.csv");

fn run_sample() -> Vec<ScenarioOutcome> {
    let catalog = Catalog::builtin().expect("Built-in catalog should be valid");
    let scenarios = ScenarioLoader::parse(SAMPLE_CSV.as_bytes()).expect("Failed to parse CSV");

    ScenarioRunner::new(&catalog)
        .run(&scenarios)
        .expect("Failed to run scenarios")
}

#[test]
fn test_sample_sheet_parses_every_row() {
    let scenarios = ScenarioLoader::parse(SAMPLE_CSV.as_bytes()).expect("Failed to parse CSV");

    let calculators: Vec<_> = scenarios.iter().map(|s| s.calculator.as_str()).collect();
    assert_eq!(
        calculators,
        vec!["brain-injury", "bus-accident", "bus-accident", "trucking-accident"]
    );
    assert_eq!(scenarios[1].answers.len(), 10);
}

#[test]
fn test_sample_sheet_estimates() {
    let outcomes = run_sample();

    let ranges: Vec<_> = outcomes
        .iter()
        .map(|o| (o.scenario.as_str(), o.low, o.high))
        .collect();
    assert_eq!(
        ranges,
        vec![
            ("severe adult brain injury", dec!(2820000), dec!(6750000)),
            ("bus lowest tier", dec!(59000), dec!(172000)),
            ("bus rollover", dec!(1627136), dec!(4846408)),
            ("head-on semi", dec!(35490000), dec!(88725000)),
        ]
    );
}

#[test]
fn test_sample_sheet_ranges_are_ordered() {
    for outcome in run_sample() {
        assert!(
            outcome.low <= outcome.high,
            "{}: low {} > high {}",
            outcome.scenario,
            outcome.low,
            outcome.high
        );
    }
}

#[test]
fn test_written_sheet_has_one_row_per_scenario() {
    let outcomes = run_sample();
    let mut buffer = Vec::new();

    let written = ScenarioWriter::write(&mut buffer, &outcomes).expect("Failed to write CSV");

    let text = String::from_utf8(buffer).expect("CSV should be UTF-8");
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(written, 4);
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "scenario,calculator,low,high");
    assert_eq!(lines[2], "bus lowest tier,bus-accident,59000,172000");
}

#[test]
fn test_unknown_calculator_stops_the_run() {
    let catalog = Catalog::builtin().expect("Built-in catalog should be valid");
    let csv = "scenario,calculator,answers\n\
        fine,pfas,age=60plus\n\
        wrong,slip-and-fall,\n";
    let scenarios = ScenarioLoader::parse(csv.as_bytes()).expect("Failed to parse CSV");

    let result = ScenarioRunner::new(&catalog).run(&scenarios);

    assert!(matches!(
        result,
        Err(ScenarioError::UnknownCalculator { ref calculator, .. }) if calculator == "slip-and-fall"
    ));
}

#[test]
fn test_missing_answers_fall_back_to_defaults() {
    let catalog = Catalog::builtin().expect("Built-in catalog should be valid");
    let csv = "scenario,calculator,answers\nblank,trucking-accident,\nagain,trucking-accident,\n";
    let scenarios = ScenarioLoader::parse(csv.as_bytes()).expect("Failed to parse CSV");

    let outcomes = ScenarioRunner::new(&catalog)
        .run(&scenarios)
        .expect("Blank answers should not be an error");

    assert_eq!(outcomes[0].low, outcomes[1].low);
    assert_eq!(outcomes[0].high, outcomes[1].high);
    assert!(outcomes[0].low <= outcomes[0].high);
}
