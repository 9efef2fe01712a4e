pub mod audit;
pub mod calculators;
pub mod catalog;
pub mod common;
pub mod engine;
pub mod factor_table;

pub use audit::{AuditReport, OrderingViolation, audit_ordering};
pub use catalog::Catalog;
pub use engine::{
    CalculatorDefinition, DefinitionError, Finish, NumericBand, Rule, StepDefinition,
};
pub use factor_table::{FactorTable, Weight};
