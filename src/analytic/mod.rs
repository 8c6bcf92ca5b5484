//! Analytic cross-check for European options.

pub mod black_scholes;

pub use black_scholes::{black_scholes, black_scholes_price, normal_cdf, put_call_parity_residual};
