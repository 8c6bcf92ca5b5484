//! End-to-end pricing properties: convergence to Black-Scholes, determinism,
//! degenerate volatility and Asian vs European ordering.

use approx::assert_abs_diff_eq;
use mc_option_rs::{
    ContractError, OptionContract, OptionSide, OptionStyle, PricingError, SimulationConfig,
    SimulationEngine,
};

fn atm(style: OptionStyle, side: OptionSide) -> OptionContract {
    OptionContract::new(100.0, 100.0, 0.05, 0.2, 1.0, style, side).unwrap()
}

#[test]
fn reference_scenario_matches_black_scholes() {
    let call = atm(OptionStyle::European, OptionSide::Call);
    let config = SimulationConfig::new(100_000, 252, Some(42));

    let estimate = call.price(&config).unwrap();
    let reference = call.analytic_price().unwrap();

    assert_abs_diff_eq!(reference, 10.4506, epsilon = 1e-3);
    // standard error is about 0.047 at this trial count
    assert!(estimate.standard_error < 0.06);
    assert!(
        estimate.within(reference, 4.0),
        "MC {} vs BS {} (se {})",
        estimate.price,
        reference,
        estimate.standard_error
    );
}

#[test]
fn european_put_matches_black_scholes() {
    let put = atm(OptionStyle::European, OptionSide::Put);
    let config = SimulationConfig::new(50_000, 50, Some(2024));

    let estimate = put.price(&config).unwrap();
    assert!(estimate.within(put.analytic_price().unwrap(), 4.0));
}

#[test]
fn terminal_sampling_agrees_with_full_paths() {
    let call = OptionContract::european(90.0, 100.0, 0.03, 0.3, 2.0, OptionSide::Call).unwrap();
    let reference = call.analytic_price().unwrap();

    let full = call.price(&SimulationConfig::new(40_000, 24, Some(1))).unwrap();
    let terminal = call
        .price(&SimulationConfig::new(40_000, 24, Some(1)).with_terminal_sampling(true))
        .unwrap();

    assert!(full.within(reference, 4.0));
    assert!(terminal.within(reference, 4.0));
}

#[test]
fn error_shrinks_with_trial_count() {
    let call = atm(OptionStyle::European, OptionSide::Call);
    let reference = call.analytic_price().unwrap();

    let small = call
        .price(&SimulationConfig::new(1_000, 1, Some(42)).with_terminal_sampling(true))
        .unwrap();
    let large = call
        .price(&SimulationConfig::new(1_000_000, 1, Some(42)).with_terminal_sampling(true))
        .unwrap();

    // se scales as 1/sqrt(N): a 1000x increase is a ~31.6x reduction
    let ratio = small.standard_error / large.standard_error;
    assert!(ratio > 25.0 && ratio < 40.0, "ratio {}", ratio);

    assert!(small.within(reference, 4.0));
    assert!(large.within(reference, 4.0));
    assert!((large.price - reference).abs() < 0.07);
}

#[test]
fn seeded_runs_are_bit_identical() {
    let config = SimulationConfig::new(5_000, 52, Some(42));
    for contract in [
        atm(OptionStyle::European, OptionSide::Call),
        atm(OptionStyle::Asian, OptionSide::Put),
    ] {
        let a = contract.price(&config).unwrap();
        let b = contract.price(&config).unwrap();
        assert_eq!(a.price.to_bits(), b.price.to_bits());
    }
}

#[test]
fn engine_set_seed_reproduces_run() {
    let contract = atm(OptionStyle::Asian, OptionSide::Call);
    let mut engine = SimulationEngine::new(SimulationConfig::new(3_000, 52, None));

    engine.set_seed(99);
    let a = engine.price(&contract).unwrap();
    engine.set_seed(99);
    let b = engine.price(&contract).unwrap();

    assert_eq!(a.price.to_bits(), b.price.to_bits());
}

#[test]
fn zero_volatility_is_deterministic() {
    let (s0, k, r, t) = (100.0, 100.0, 0.05, 1.0);
    let call = OptionContract::european(s0, k, r, 0.0, t, OptionSide::Call).unwrap();
    let put = call.with_side(OptionSide::Put);
    let expected = s0 - k * (-r * t).exp();

    for n_trials in [1, 10, 1_000] {
        let config = SimulationConfig::new(n_trials, 252, Some(n_trials as u64));
        let estimate = call.price(&config).unwrap();
        assert_abs_diff_eq!(estimate.price, expected, epsilon = 1e-9);
        assert!(estimate.standard_error < 1e-6);

        assert_eq!(put.price(&config).unwrap().price, 0.0);
    }

    assert_abs_diff_eq!(call.analytic_price().unwrap(), expected, epsilon = 1e-12);
}

#[test]
fn asian_call_is_cheaper_than_european_call() {
    let european = atm(OptionStyle::European, OptionSide::Call);
    let asian = atm(OptionStyle::Asian, OptionSide::Call);

    for seed in [1, 2, 3] {
        let config = SimulationConfig::new(20_000, 52, Some(seed));
        let e = european.price(&config).unwrap();
        let a = asian.price(&config).unwrap();
        assert!(a.price < e.price, "seed {}: asian {} >= european {}", seed, a.price, e.price);
    }
}

#[test]
fn invalid_contracts_rejected_at_construction() {
    let side = OptionSide::Call;
    assert!(matches!(
        OptionContract::european(0.0, 100.0, 0.05, 0.2, 1.0, side),
        Err(ContractError::NonPositiveSpot(_))
    ));
    assert!(matches!(
        OptionContract::european(100.0, -5.0, 0.05, 0.2, 1.0, side),
        Err(ContractError::NonPositiveStrike(_))
    ));
    assert!(matches!(
        OptionContract::european(100.0, 100.0, -0.01, 0.2, 1.0, side),
        Err(ContractError::NegativeRate(_))
    ));
    assert!(matches!(
        OptionContract::european(100.0, 100.0, 0.05, 6.0, 1.0, side),
        Err(ContractError::VolatilityOutOfRange(_))
    ));
    assert!(matches!(
        OptionContract::european(100.0, 100.0, 0.05, 0.2, 11.0, side),
        Err(ContractError::ExpiryOutOfRange(_))
    ));
}

#[test]
fn invalid_config_rejected_at_pricing() {
    let call = atm(OptionStyle::European, OptionSide::Call);
    assert!(matches!(
        call.price(&SimulationConfig::new(0, 252, None)),
        Err(PricingError::InvalidConfig(_))
    ));
    assert!(matches!(
        call.price(&SimulationConfig::new(1_000, 0, None)),
        Err(PricingError::InvalidConfig(_))
    ));
}

#[test]
fn analytic_price_unsupported_for_asian() {
    let asian = atm(OptionStyle::Asian, OptionSide::Put);
    assert_eq!(
        asian.analytic_price(),
        Err(PricingError::UnsupportedAnalytic(OptionStyle::Asian))
    );
}
