//! Simulation engine and batch runner.

pub mod engine;
pub mod runner;

pub use engine::{PricingError, SimulationEngine};
pub use runner::{price, run_batch};
