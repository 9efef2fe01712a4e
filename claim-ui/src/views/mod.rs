//! HTML and plain-text rendering of calculator forms and results.
//!
//! Pages are askama templates under `templates/`; output is HTML-escaped.

mod calculator_view;

pub use calculator_view::CalculatorView;
