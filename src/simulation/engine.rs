//! Monte Carlo simulation driver.

use thiserror::Error;
use tracing::debug;

use crate::market::{generate_path, sample_terminal, NormalSource};
use crate::payoff;
use crate::types::config::{ConfigError, SimulationConfig};
use crate::types::contract::{ContractError, OptionContract, OptionStyle};
use crate::types::result::PriceEstimate;

/// Error type for pricing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error(transparent)]
    InvalidContract(#[from] ContractError),

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),

    #[error("Analytic price is not available for {0} options")]
    UnsupportedAnalytic(OptionStyle),
}

/// Monte Carlo pricing engine.
///
/// Owns the configuration and a single normal source. Each trial:
/// 1. Generate a GBM path under the risk-neutral drift r
/// 2. Evaluate the contract's payoff on it
/// 3. Accumulate the payoff
///
/// The price is e^(-rT) times the mean payoff. Draws are consumed strictly
/// in order, so no two trials ever share a draw.
pub struct SimulationEngine {
    config: SimulationConfig,
    source: NormalSource,
}

impl SimulationEngine {
    /// Create a new engine, seeding its source from `config.seed`.
    pub fn new(config: SimulationConfig) -> Self {
        let source = NormalSource::new(config.seed);
        Self { config, source }
    }

    /// Create an engine around an existing source.
    pub fn with_source(config: SimulationConfig, source: NormalSource) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Reseed the engine's normal source.
    pub fn set_seed(&mut self, seed: u64) {
        self.source.set_seed(seed);
    }

    /// Price `contract` by simulation.
    ///
    /// The config is validated before any draw is taken.
    pub fn price(&mut self, contract: &OptionContract) -> Result<PriceEstimate, PricingError> {
        self.config.validate()?;

        let n_trials = self.config.n_trials;
        let n_steps = self.config.n_steps;
        let terminal_only =
            self.config.terminal_sampling && contract.style() == OptionStyle::European;

        debug!(
            style = %contract.style(),
            side = %contract.side(),
            n_trials,
            n_steps,
            terminal_only,
            "starting Monte Carlo run"
        );

        let (s0, r, sigma, t) = (
            contract.s0(),
            contract.rate(),
            contract.volatility(),
            contract.expiry(),
        );

        let mut sum = 0.0f64;
        let mut sum_sq = 0.0f64;
        for _ in 0..n_trials {
            let payoff = if terminal_only {
                let s_t = sample_terminal(&mut self.source, s0, r, sigma, t);
                payoff::intrinsic(contract.side(), s_t, contract.strike())
            } else {
                let path = generate_path(&mut self.source, s0, r, sigma, t, n_steps);
                payoff::evaluate(contract, &path)
            };
            sum += payoff;
            sum_sq += payoff * payoff;
        }

        let estimate = summarize(sum, sum_sq, n_trials, contract.discount_factor());

        debug!(
            price = estimate.price,
            standard_error = estimate.standard_error,
            "finished Monte Carlo run"
        );

        Ok(estimate)
    }
}

/// Discounted mean and standard error from running payoff sums.
fn summarize(sum: f64, sum_sq: f64, n_trials: usize, discount: f64) -> PriceEstimate {
    let n = n_trials as f64;
    let mean = sum / n;

    let standard_error = if n_trials > 1 {
        let variance = ((sum_sq - sum * mean) / (n - 1.0)).max(0.0);
        discount * (variance / n).sqrt()
    } else {
        0.0
    };

    PriceEstimate {
        price: discount * mean,
        standard_error,
        n_trials,
    }
}
