//! Lead submission: the boundary where a finished estimate and the
//! claimant's contact details leave the calculator.
//!
//! There is no intake backend. Ports are chosen by name through a
//! [`LeadPortRegistry`]; the built-in backends log the lead or keep it in
//! memory.

pub mod factory;
pub mod log_port;
pub mod memory_port;
pub mod port;

pub use factory::{LeadConfig, LeadPortFactory, LeadPortRegistry};
pub use log_port::{LogLeadPort, LogLeadPortFactory};
pub use memory_port::{InMemoryLeadPort, InMemoryLeadPortFactory, LeadStore};
pub use port::{ContactDetails, LeadError, LeadSubmission, LeadSubmissionPort};
