//! Scenario sheets: named answer sets kept in CSV, run through the
//! calculator catalog in bulk.

mod loader;

pub use loader::{
    Scenario, ScenarioError, ScenarioLoader, ScenarioOutcome, ScenarioRecord, ScenarioRunner,
    ScenarioWriter,
};
