//! Geometric Brownian Motion path generation.

use crate::market::normal::NormalSource;

/// A discretized price path `[S_0, S_1, ..., S_steps]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePath {
    prices: Vec<f64>,
}

impl SamplePath {
    #[inline]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// First price on the path.
    #[inline]
    pub fn initial(&self) -> f64 {
        self.prices.first().copied().unwrap_or(f64::NAN)
    }

    /// Last price on the path.
    #[inline]
    pub fn terminal(&self) -> f64 {
        self.prices.last().copied().unwrap_or(f64::NAN)
    }

    /// Arithmetic mean over every sampled point, `S_0` included.
    pub fn average(&self) -> f64 {
        self.prices.iter().sum::<f64>() / self.prices.len() as f64
    }
}

impl From<Vec<f64>> for SamplePath {
    fn from(prices: Vec<f64>) -> Self {
        Self { prices }
    }
}

/// Exact lognormal GBM stepper.
///
/// The GBM model: dS = mu * S * dt + sigma * S * dW, stepped with
/// S_{i+1} = S_i * exp((mu - 0.5 * sigma^2) * dt + sigma * sqrt(dt) * Z),
/// which has no discretization bias for any dt.
pub struct GBMPriceProcess {
    /// Current price
    current_price: f64,
    /// Pre-computed drift term: (mu - 0.5 * sigma^2) * dt
    drift_term: f64,
    /// Pre-computed volatility term: sigma * sqrt(dt)
    vol_term: f64,
}

impl GBMPriceProcess {
    /// Create a new GBM price process.
    pub fn new(initial_price: f64, mu: f64, sigma: f64, dt: f64) -> Self {
        Self {
            current_price: initial_price,
            drift_term: (mu - 0.5 * sigma * sigma) * dt,
            vol_term: sigma * dt.sqrt(),
        }
    }

    /// Get current price.
    #[inline]
    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    /// Generate the next price, consuming one draw.
    #[inline]
    pub fn step(&mut self, source: &mut NormalSource) -> f64 {
        let z = source.draw();
        let exponent = self.drift_term + self.vol_term * z;
        self.current_price *= exponent.exp();
        self.current_price
    }

    /// Reset the process to a new starting price.
    pub fn reset(&mut self, initial_price: f64) {
        self.current_price = initial_price;
    }
}

/// Generate one GBM path of `steps + 1` prices over horizon `t`.
pub fn generate_path(
    source: &mut NormalSource,
    s0: f64,
    drift: f64,
    volatility: f64,
    t: f64,
    steps: usize,
) -> SamplePath {
    let dt = t / steps as f64;
    let mut process = GBMPriceProcess::new(s0, drift, volatility, dt);

    let mut prices = Vec::with_capacity(steps + 1);
    prices.push(s0);
    for _ in 0..steps {
        prices.push(process.step(source));
    }

    SamplePath { prices }
}

/// Draw a terminal price `S_T` directly with a single lognormal step.
///
/// Equal in distribution to the last element of [`generate_path`].
#[inline]
pub fn sample_terminal(source: &mut NormalSource, s0: f64, drift: f64, volatility: f64, t: f64) -> f64 {
    GBMPriceProcess::new(s0, drift, volatility, t).step(source)
}
