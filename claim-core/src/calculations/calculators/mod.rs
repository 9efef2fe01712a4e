//! Built-in calculator definitions, one module per practice area.
//!
//! Each module exposes `definition()` building its [`CalculatorDefinition`]
//! and `SLUG`. Tables are kept exactly as published on the firm's pages,
//! including the places where the low and high bounds are treated
//! differently.

pub mod brain_injury;
pub mod bus_accident;
pub mod camp_lejeune;
pub mod car_accident;
pub mod environmental_toxic;
pub mod medical_devices;
pub mod pfas;
pub mod trucking_accident;

use crate::calculations::engine::CalculatorDefinition;

/// Every built-in calculator in catalog order.
pub fn all() -> Vec<CalculatorDefinition> {
    vec![
        brain_injury::definition(),
        bus_accident::definition(),
        medical_devices::definition(),
        camp_lejeune::definition(),
        environmental_toxic::definition(),
        pfas::definition(),
        trucking_accident::definition(),
        car_accident::definition(),
    ]
}
