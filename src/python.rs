//! Python bindings, enabled with the `python` feature.

use pyo3::exceptions::{PyNotImplementedError, PyValueError};
use pyo3::prelude::*;

use crate::simulation::engine::PricingError;
use crate::types::config::SimulationConfig;
use crate::types::contract::{OptionContract, OptionSide, OptionStyle};

fn to_py_err(err: PricingError) -> PyErr {
    match err {
        PricingError::UnsupportedAnalytic(_) => PyNotImplementedError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

fn build_contract(
    style: &str,
    side: &str,
    s0: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    expiry: f64,
) -> Result<OptionContract, PricingError> {
    let style: OptionStyle = style.parse()?;
    let side: OptionSide = side.parse()?;
    Ok(OptionContract::new(s0, strike, rate, volatility, expiry, style, side)?)
}

/// Monte Carlo price of a single contract.
///
/// # Returns
/// `(price, standard_error)`
#[pyfunction]
#[pyo3(signature = (
    style,
    side,
    s0,
    strike,
    rate,
    volatility,
    expiry,
    n_trials = 100_000,
    n_steps = 252,
    seed = None,
    terminal_sampling = false
))]
#[allow(clippy::too_many_arguments)]
fn price_option(
    style: &str,
    side: &str,
    s0: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    expiry: f64,
    n_trials: usize,
    n_steps: usize,
    seed: Option<u64>,
    terminal_sampling: bool,
) -> PyResult<(f64, f64)> {
    let contract =
        build_contract(style, side, s0, strike, rate, volatility, expiry).map_err(to_py_err)?;
    let config = SimulationConfig::new(n_trials, n_steps, seed).with_terminal_sampling(terminal_sampling);

    let estimate = contract.price(&config).map_err(to_py_err)?;
    Ok((estimate.price, estimate.standard_error))
}

/// Black-Scholes price of a European contract.
#[pyfunction]
fn analytic_price(
    style: &str,
    side: &str,
    s0: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    expiry: f64,
) -> PyResult<f64> {
    build_contract(style, side, s0, strike, rate, volatility, expiry)
        .and_then(|c| c.analytic_price())
        .map_err(to_py_err)
}

/// Python module definition
#[pymodule]
fn mc_option_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(price_option, m)?)?;
    m.add_function(wrap_pyfunction!(analytic_price, m)?)?;
    Ok(())
}
