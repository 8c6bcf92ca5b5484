//! Monte Carlo option pricing in Rust
//!
//! Prices European and arithmetic-average Asian options by simulating
//! Geometric Brownian Motion under the risk-neutral measure, with the
//! closed-form Black-Scholes price as an independent check for European
//! contracts.
//!
//! ```no_run
//! use mc_option_rs::{OptionContract, OptionSide, SimulationConfig};
//!
//! let call = OptionContract::european(100.0, 100.0, 0.05, 0.2, 1.0, OptionSide::Call)?;
//! let estimate = call.price(&SimulationConfig::default().with_seed(42))?;
//! let reference = call.analytic_price()?;
//! assert!(estimate.within(reference, 4.0));
//! # Ok::<(), mc_option_rs::PricingError>(())
//! ```

pub mod types;
pub mod market;
pub mod payoff;
pub mod analytic;
pub mod simulation;

#[cfg(feature = "python")]
mod python;

pub use analytic::{black_scholes, black_scholes_price, normal_cdf, put_call_parity_residual};
pub use market::{generate_path, NormalSource, SamplePath};
pub use simulation::{run_batch, PricingError, SimulationEngine};
pub use types::{
    BatchPriceResult, ConfigError, ContractError, ContractQuote, OptionContract, OptionSide,
    OptionStyle, PriceEstimate, SimulationConfig,
};
