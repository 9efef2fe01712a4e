pub mod app;
pub mod config;
pub mod currency;
pub mod logging;
pub mod session;
pub mod views;

pub use config::{ConfigError, SiteConfig};
pub use session::CalculatorSession;
pub use views::CalculatorView;
