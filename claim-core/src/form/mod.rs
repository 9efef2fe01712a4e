//! Multi-step form state and calculator analytics.

pub mod analytics;
mod controller;

pub use analytics::{AnalyticsEvent, CalculatorAnalytics, TrackedEvent};
pub use controller::{FormController, FormStep};
