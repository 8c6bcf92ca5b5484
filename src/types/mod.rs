//! Core types for the pricing engine.

pub mod contract;
pub mod config;
pub mod result;

pub use contract::{ContractError, OptionContract, OptionSide, OptionStyle, MAX_EXPIRY, MAX_VOLATILITY};
pub use config::{ConfigError, SimulationConfig, DEFAULT_STEPS, DEFAULT_TRIALS};
pub use result::{BatchPriceResult, ContractQuote, PriceEstimate};
