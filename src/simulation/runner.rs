//! Sequential batch runner.

use tracing::{debug, info};

use crate::simulation::engine::{PricingError, SimulationEngine};
use crate::types::config::SimulationConfig;
use crate::types::contract::{OptionContract, OptionStyle};
use crate::types::result::{BatchPriceResult, ContractQuote, PriceEstimate};

/// Price a single contract with a fresh engine.
pub fn price(contract: &OptionContract, config: &SimulationConfig) -> Result<PriceEstimate, PricingError> {
    contract.price(config)
}

/// Price every contract through one engine, in order.
///
/// All contracts share the engine's stream, so with a fixed seed the whole
/// batch is reproducible and no two contracts reuse a draw. European
/// quotes carry their Black-Scholes reference.
pub fn run_batch(
    contracts: &[OptionContract],
    config: SimulationConfig,
) -> Result<BatchPriceResult, PricingError> {
    // Fail before pricing anything
    config.validate()?;

    info!(
        n_contracts = contracts.len(),
        n_trials = config.n_trials,
        n_steps = config.n_steps,
        seed = ?config.seed,
        "pricing batch"
    );

    let mut engine = SimulationEngine::new(config);
    let mut quotes = Vec::with_capacity(contracts.len());

    for contract in contracts {
        let estimate = engine.price(contract)?;
        let analytic = match contract.style() {
            OptionStyle::European => Some(contract.analytic_price()?),
            OptionStyle::Asian => None,
        };

        debug!(
            style = %contract.style(),
            side = %contract.side(),
            price = estimate.price,
            analytic = ?analytic,
            "priced contract"
        );

        quotes.push(ContractQuote {
            contract: *contract,
            estimate,
            analytic,
        });
    }

    Ok(BatchPriceResult { quotes })
}
