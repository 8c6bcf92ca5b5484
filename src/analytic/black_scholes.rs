//! Closed-form Black-Scholes pricing for European options.

use crate::types::contract::{OptionContract, OptionSide};

// Abramowitz & Stegun 7.1.26
const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Standard normal CDF, |error| below about 1.5e-7.
///
/// Evaluated as 0.5 * (1 + erf(x / sqrt(2))) with the A&S rational
/// approximation of erf on x >= 0. Negative arguments use 1 - N(-x), so
/// N(x) + N(-x) == 1 up to rounding.
pub fn normal_cdf(x: f64) -> f64 {
    if x < 0.0 {
        return 1.0 - normal_cdf(-x);
    }

    let z = x / std::f64::consts::SQRT_2;
    let t = 1.0 / (1.0 + P * z);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    let erf = 1.0 - poly * (-z * z).exp();

    0.5 * (1.0 + erf)
}

/// Black-Scholes price of a European option from raw parameters.
///
/// Zero volatility collapses to the discounted intrinsic value of the
/// forward, which keeps put-call parity exact.
pub fn black_scholes(side: OptionSide, s0: f64, strike: f64, rate: f64, vol: f64, t: f64) -> f64 {
    let df = (-rate * t).exp();

    if vol == 0.0 {
        return match side {
            OptionSide::Call => (s0 - strike * df).max(0.0),
            OptionSide::Put => (strike * df - s0).max(0.0),
        };
    }

    let sqrt_t = t.sqrt();
    let d1 = ((s0 / strike).ln() + (rate + 0.5 * vol * vol) * t) / (vol * sqrt_t);
    let d2 = d1 - vol * sqrt_t;

    match side {
        OptionSide::Call => s0 * normal_cdf(d1) - strike * df * normal_cdf(d2),
        OptionSide::Put => strike * df * normal_cdf(-d2) - s0 * normal_cdf(-d1),
    }
}

/// Black-Scholes price of `contract`, treating it as European.
pub fn black_scholes_price(contract: &OptionContract) -> f64 {
    black_scholes(
        contract.side(),
        contract.s0(),
        contract.strike(),
        contract.rate(),
        contract.volatility(),
        contract.expiry(),
    )
}

/// Put-call parity residual `(C + K e^(-rT)) - (P + S0)` on analytic prices.
///
/// Both sides of the pair come from `contract`; its own side is ignored.
pub fn put_call_parity_residual(contract: &OptionContract) -> f64 {
    let call = black_scholes_price(&contract.with_side(OptionSide::Call));
    let put = black_scholes_price(&contract.with_side(OptionSide::Put));
    (call + contract.strike() * contract.discount_factor()) - (put + contract.s0())
}
