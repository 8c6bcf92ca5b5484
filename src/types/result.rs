//! Pricing result types.

use crate::types::contract::OptionContract;

/// Monte Carlo price estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceEstimate {
    /// Discounted mean payoff
    pub price: f64,

    /// Standard error of `price` (discounted sample std dev / sqrt(N))
    pub standard_error: f64,

    /// Number of trials behind the estimate
    pub n_trials: usize,
}

impl PriceEstimate {
    /// Symmetric interval `price ± z * standard_error`.
    pub fn confidence_interval(&self, z: f64) -> (f64, f64) {
        let half_width = z * self.standard_error;
        (self.price - half_width, self.price + half_width)
    }

    /// Whether `reference` lies within `n_se` standard errors of the estimate.
    pub fn within(&self, reference: f64, n_se: f64) -> bool {
        (self.price - reference).abs() <= n_se * self.standard_error
    }
}

/// A contract priced by simulation, with its analytic reference when one exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContractQuote {
    pub contract: OptionContract,
    pub estimate: PriceEstimate,
    /// Black-Scholes price (European only)
    pub analytic: Option<f64>,
}

impl ContractQuote {
    /// Absolute gap between the Monte Carlo and analytic prices.
    pub fn difference(&self) -> Option<f64> {
        self.analytic.map(|a| (self.estimate.price - a).abs())
    }
}

/// Batch result containing one quote per contract, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchPriceResult {
    pub quotes: Vec<ContractQuote>,
}

impl BatchPriceResult {
    /// Largest Monte Carlo vs analytic gap, expressed in standard errors.
    pub fn max_error_in_se(&self) -> Option<f64> {
        self.quotes
            .iter()
            .filter_map(|q| {
                let diff = q.difference()?;
                if q.estimate.standard_error > 0.0 {
                    Some(diff / q.estimate.standard_error)
                } else {
                    None
                }
            })
            .fold(None, |acc: Option<f64>, x| Some(acc.map_or(x, |a| a.max(x))))
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
