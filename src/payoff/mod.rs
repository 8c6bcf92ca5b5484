//! Payoff evaluators for European and Asian options.
//!
//! Every payoff is undiscounted and non-negative:
//! - European Call: max(S_T - K, 0), Put: max(K - S_T, 0)
//! - Asian Call: max(A - K, 0), Put: max(K - A, 0), where A is the
//!   arithmetic mean of all sampled points including S_0

use crate::market::SamplePath;
use crate::types::contract::{OptionContract, OptionSide, OptionStyle};

/// Vanilla intrinsic value of `underlying` against `strike`.
#[inline]
pub fn intrinsic(side: OptionSide, underlying: f64, strike: f64) -> f64 {
    match side {
        OptionSide::Call => (underlying - strike).max(0.0),
        OptionSide::Put => (strike - underlying).max(0.0),
    }
}

/// The path statistic a style pays on.
#[inline]
pub fn settlement_price(style: OptionStyle, path: &SamplePath) -> f64 {
    match style {
        OptionStyle::European => path.terminal(),
        OptionStyle::Asian => path.average(),
    }
}

/// Undiscounted payoff of `contract` on one sample path.
#[inline]
pub fn evaluate(contract: &OptionContract, path: &SamplePath) -> f64 {
    intrinsic(
        contract.side(),
        settlement_price(contract.style(), path),
        contract.strike(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(style: OptionStyle, side: OptionSide, strike: f64) -> OptionContract {
        OptionContract::new(100.0, strike, 0.05, 0.2, 1.0, style, side).unwrap()
    }

    #[test]
    fn test_intrinsic() {
        assert_eq!(intrinsic(OptionSide::Call, 110.0, 100.0), 10.0);
        assert_eq!(intrinsic(OptionSide::Call, 90.0, 100.0), 0.0);
        assert_eq!(intrinsic(OptionSide::Put, 90.0, 100.0), 10.0);
        assert_eq!(intrinsic(OptionSide::Put, 110.0, 100.0), 0.0);
    }

    #[test]
    fn test_european_uses_terminal_only() {
        let path = SamplePath::from(vec![100.0, 150.0, 90.0, 105.0]);
        assert_eq!(evaluate(&contract(OptionStyle::European, OptionSide::Call, 100.0), &path), 5.0);
        assert_eq!(evaluate(&contract(OptionStyle::European, OptionSide::Put, 100.0), &path), 0.0);
    }

    #[test]
    fn test_asian_uses_full_average() {
        // mean(100, 150, 90, 140) = 120
        let path = SamplePath::from(vec![100.0, 150.0, 90.0, 140.0]);
        assert_eq!(evaluate(&contract(OptionStyle::Asian, OptionSide::Call, 110.0), &path), 10.0);
        assert_eq!(evaluate(&contract(OptionStyle::Asian, OptionSide::Put, 130.0), &path), 10.0);
        assert_eq!(evaluate(&contract(OptionStyle::Asian, OptionSide::Put, 110.0), &path), 0.0);
    }
}
