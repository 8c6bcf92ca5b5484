//! Option contract definition and construction-time validation.

use std::str::FromStr;

use derive_more::Display;
use thiserror::Error;

use crate::analytic::black_scholes_price;
use crate::simulation::engine::{PricingError, SimulationEngine};
use crate::types::config::SimulationConfig;
use crate::types::result::PriceEstimate;

/// Sanity ceiling on annualized volatility.
pub const MAX_VOLATILITY: f64 = 5.0;

/// Sanity ceiling on time to expiry, in years.
pub const MAX_EXPIRY: f64 = 10.0;

/// Errors raised when constructing an [`OptionContract`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractError {
    #[error("Initial price must be positive, got {0}")]
    NonPositiveSpot(f64),

    #[error("Strike must be positive, got {0}")]
    NonPositiveStrike(f64),

    #[error("Risk-free rate must be non-negative, got {0}")]
    NegativeRate(f64),

    #[error("Volatility must be in [0, 5], got {0}")]
    VolatilityOutOfRange(f64),

    #[error("Time to expiry must be in (0, 10], got {0}")]
    ExpiryOutOfRange(f64),

    #[error("Parameter '{0}' must be finite")]
    NonFinite(&'static str),

    #[error("Option side must be 'C' (Call) or 'P' (Put), got '{0}'")]
    InvalidSide(String),

    #[error("Option style must be 'european' or 'asian', got '{0}'")]
    InvalidStyle(String),
}

/// Exercise style of the option.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionStyle {
    /// Payoff on the terminal price only.
    #[display("European")]
    European,
    /// Payoff on the arithmetic average of the sampled path.
    #[display("Asian")]
    Asian,
}

/// Call or put.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionSide {
    #[display("Call")]
    Call,
    #[display("Put")]
    Put,
}

impl FromStr for OptionSide {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "call" => Ok(OptionSide::Call),
            "p" | "put" => Ok(OptionSide::Put),
            _ => Err(ContractError::InvalidSide(s.to_string())),
        }
    }
}

impl TryFrom<char> for OptionSide {
    type Error = ContractError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'C' | 'c' => Ok(OptionSide::Call),
            'P' | 'p' => Ok(OptionSide::Put),
            other => Err(ContractError::InvalidSide(other.to_string())),
        }
    }
}

impl FromStr for OptionStyle {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "e" | "european" => Ok(OptionStyle::European),
            "a" | "asian" => Ok(OptionStyle::Asian),
            _ => Err(ContractError::InvalidStyle(s.to_string())),
        }
    }
}

/// An immutable, validated option contract.
///
/// Fields are private so a contract can only exist in a valid state;
/// use [`OptionContract::new`] or the `european`/`asian` shorthands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionContract {
    /// Initial underlying price
    s0: f64,
    /// Strike
    strike: f64,
    /// Continuously compounded risk-free rate
    rate: f64,
    /// Annualized volatility
    volatility: f64,
    /// Time to expiry in years
    expiry: f64,
    style: OptionStyle,
    side: OptionSide,
}

impl OptionContract {
    /// Create a validated contract.
    pub fn new(
        s0: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        expiry: f64,
        style: OptionStyle,
        side: OptionSide,
    ) -> Result<Self, ContractError> {
        for (name, value) in [
            ("s0", s0),
            ("strike", strike),
            ("rate", rate),
            ("volatility", volatility),
            ("expiry", expiry),
        ] {
            if !value.is_finite() {
                return Err(ContractError::NonFinite(name));
            }
        }

        if s0 <= 0.0 {
            return Err(ContractError::NonPositiveSpot(s0));
        }
        if strike <= 0.0 {
            return Err(ContractError::NonPositiveStrike(strike));
        }
        if rate < 0.0 {
            return Err(ContractError::NegativeRate(rate));
        }
        if !(0.0..=MAX_VOLATILITY).contains(&volatility) {
            return Err(ContractError::VolatilityOutOfRange(volatility));
        }
        if expiry <= 0.0 || expiry > MAX_EXPIRY {
            return Err(ContractError::ExpiryOutOfRange(expiry));
        }

        Ok(Self {
            s0,
            strike,
            rate,
            volatility,
            expiry,
            style,
            side,
        })
    }

    /// Shorthand for a European contract.
    pub fn european(
        s0: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        expiry: f64,
        side: OptionSide,
    ) -> Result<Self, ContractError> {
        Self::new(s0, strike, rate, volatility, expiry, OptionStyle::European, side)
    }

    /// Shorthand for an arithmetic-average Asian contract.
    pub fn asian(
        s0: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        expiry: f64,
        side: OptionSide,
    ) -> Result<Self, ContractError> {
        Self::new(s0, strike, rate, volatility, expiry, OptionStyle::Asian, side)
    }

    #[inline]
    pub fn s0(&self) -> f64 {
        self.s0
    }

    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    #[inline]
    pub fn style(&self) -> OptionStyle {
        self.style
    }

    #[inline]
    pub fn side(&self) -> OptionSide {
        self.side
    }

    /// Discount factor e^(-rT) to expiry.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Same contract with a different side.
    pub fn with_side(&self, side: OptionSide) -> Self {
        Self { side, ..*self }
    }

    /// Same contract with a different style.
    pub fn with_style(&self, style: OptionStyle) -> Self {
        Self { style, ..*self }
    }

    /// Monte Carlo price using a fresh engine built from `config`.
    ///
    /// Reproducible when `config.seed` is set.
    pub fn price(&self, config: &SimulationConfig) -> Result<PriceEstimate, PricingError> {
        let mut engine = SimulationEngine::new(config.clone());
        engine.price(self)
    }

    /// Closed-form Black-Scholes price. European contracts only.
    pub fn analytic_price(&self) -> Result<f64, PricingError> {
        match self.style {
            OptionStyle::European => Ok(black_scholes_price(self)),
            OptionStyle::Asian => Err(PricingError::UnsupportedAnalytic(self.style)),
        }
    }
}
