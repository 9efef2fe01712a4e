pub mod calculations;
pub mod form;
pub mod leads;
pub mod models;

pub use calculations::{Catalog, CalculatorDefinition, DefinitionError};
pub use form::{FormController, FormStep};
pub use leads::{LeadError, LeadSubmission, LeadSubmissionPort};
pub use models::*;
