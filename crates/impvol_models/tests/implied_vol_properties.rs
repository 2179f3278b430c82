//! Property and scenario tests for pricing and implied volatility inversion.

use approx::assert_abs_diff_eq;
use impvol_core::math::solvers::{RootFindMethod, RootFinder, SolverConfig};
use impvol_models::implied_vol::{ImpliedVolSolver, VolBracket};
use impvol_models::instruments::{
    create_instrument, InstrumentKind, OptionSide, VanillaOption, VolConvention,
};
use proptest::prelude::*;

const TOL: f64 = 1e-8;
const SPOT: f64 = 100.0;

fn option(
    kind: InstrumentKind,
    convention: VolConvention,
    side: OptionSide,
    market_price: f64,
    strike: f64,
    days: f64,
    rate: f64,
) -> VanillaOption {
    create_instrument(kind, market_price, SPOT, strike, days, rate, side, convention).unwrap()
}

/// Same option, with the market price set to the model price at `vol`.
fn priced_at(template: &VanillaOption, vol: f64) -> VanillaOption {
    VanillaOption::new(
        template.kind(),
        template.convention(),
        template.side(),
        template.price(vol).unwrap(),
        template.spot(),
        template.strike(),
        template.years_to_expiry(),
        template.rate(),
    )
    .unwrap()
}

fn solver(method: RootFindMethod) -> ImpliedVolSolver {
    ImpliedVolSolver::new(RootFinder::new(method, SolverConfig::new(TOL, 200)))
}

fn side_strategy() -> impl Strategy<Value = OptionSide> {
    prop_oneof![Just(OptionSide::Call), Just(OptionSide::Put)]
}

fn kind_strategy() -> impl Strategy<Value = InstrumentKind> {
    prop_oneof![Just(InstrumentKind::Stock), Just(InstrumentKind::Future)]
}

fn convention(normal: bool) -> VolConvention {
    if normal {
        VolConvention::Bachelier
    } else {
        VolConvention::BlackScholes
    }
}

fn method_strategy() -> impl Strategy<Value = RootFindMethod> {
    prop_oneof![Just(RootFindMethod::Bisection), Just(RootFindMethod::Dekker)]
}

/// Forward of the underlying under the given rate and expiry.
fn forward(kind: InstrumentKind, days: f64, rate: f64) -> f64 {
    match kind {
        InstrumentKind::Stock => SPOT * (rate * days / 365.0).exp(),
        InstrumentKind::Future => SPOT,
    }
}

/// Strike `z` standard deviations from the forward, so that lognormal prices
/// keep a usable vega at any volatility.
fn lognormal_strike(kind: InstrumentKind, days: f64, rate: f64, vol: f64, z: f64) -> f64 {
    forward(kind, days, rate) * (z * vol * (days / 365.0).sqrt()).exp()
}

/// Strike near the forward, so that normal-vol prices keep a usable vega.
fn normal_strike(kind: InstrumentKind, days: f64, rate: f64, offset: f64) -> f64 {
    match kind {
        InstrumentKind::Stock => SPOT * (rate * days / 365.0).exp() + offset,
        InstrumentKind::Future => SPOT + offset,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_lognormal_round_trip(
        kind in kind_strategy(),
        side in side_strategy(),
        method in method_strategy(),
        z in -1.0_f64..1.0,
        days in 60.0_f64..365.0,
        rate in 0.0_f64..0.05,
        vol in 0.01_f64..5.0,
    ) {
        let strike = lognormal_strike(kind, days, rate, vol, z);
        let template = option(kind, VolConvention::BlackScholes, side, 0.0, strike, days, rate);
        let implied = solver(method).solve(&priced_at(&template, vol)).unwrap();
        prop_assert!((implied - vol).abs() < 1e-6, "vol = {}, implied = {}", vol, implied);
    }

    #[test]
    fn prop_normal_round_trip(
        kind in kind_strategy(),
        side in side_strategy(),
        method in method_strategy(),
        offset in -0.5_f64..0.5,
        days in 60.0_f64..365.0,
        rate in 0.0_f64..0.05,
        vol in 1.0_f64..5.0,
    ) {
        let strike = normal_strike(kind, days, rate, offset);
        let template = option(kind, VolConvention::Bachelier, side, 0.0, strike, days, rate);
        let implied = solver(method).solve(&priced_at(&template, vol)).unwrap();
        prop_assert!((implied - vol).abs() < 1e-6, "vol = {}, implied = {}", vol, implied);
    }

    #[test]
    fn prop_put_call_parity(
        kind in kind_strategy(),
        normal in any::<bool>(),
        strike in 80.0_f64..120.0,
        days in 1.0_f64..730.0,
        rate in -0.01_f64..0.08,
        vol in 0.01_f64..5.0,
    ) {
        let convention = convention(normal);
        let call = option(kind, convention, OptionSide::Call, 0.0, strike, days, rate);
        let put = option(kind, convention, OptionSide::Put, 0.0, strike, days, rate);

        let diff = put.price(vol).unwrap() - call.price(vol).unwrap();
        prop_assert!((diff - put.parity_offset()).abs() < 1e-10);
        prop_assert_eq!(put.parity_offset(), call.parity_offset());
    }

    #[test]
    fn prop_price_monotone_in_volatility(
        kind in kind_strategy(),
        side in side_strategy(),
        normal in any::<bool>(),
        strike in 80.0_f64..120.0,
        days in 1.0_f64..730.0,
        rate in 0.0_f64..0.08,
    ) {
        let convention = convention(normal);
        let option = option(kind, convention, side, 0.0, strike, days, rate);

        let mut prev = option.zero_vol_price();
        for i in 1..=100 {
            let vol = i as f64 * 0.05;
            let price = option.price(vol).unwrap();
            prop_assert!(
                price >= prev - 1e-12,
                "price fell at vol = {}: {} < {}",
                vol,
                price,
                prev
            );
            prev = price;
        }
    }

    #[test]
    fn prop_methods_agree(
        kind in kind_strategy(),
        side in side_strategy(),
        strike in 95.0_f64..105.0,
        days in 90.0_f64..365.0,
        vol in 0.1_f64..1.0,
    ) {
        let template = option(kind, VolConvention::BlackScholes, side, 0.0, strike, days, 0.02);
        let target = priced_at(&template, vol);

        let bisection = solver(RootFindMethod::Bisection).solve(&target).unwrap();
        let dekker = solver(RootFindMethod::Dekker).solve(&target).unwrap();
        prop_assert!((bisection - dekker).abs() <= 2.0 * TOL);
    }

    #[test]
    fn prop_unreachable_price_is_nan(
        kind in kind_strategy(),
        normal in any::<bool>(),
        method in method_strategy(),
        excess in 1.0_f64..50.0,
    ) {
        // Above the price at the top of the bracket, nothing inside reprices it
        let convention = convention(normal);
        let template = option(kind, convention, OptionSide::Call, 0.0, SPOT, 30.0, 0.01);
        let ceiling = template.price(VolBracket::DEFAULT_HIGH).unwrap();
        let unreachable =
            option(kind, convention, OptionSide::Call, ceiling + excess, SPOT, 30.0, 0.01);

        let implied = solver(method).solve(&unreachable).unwrap();
        prop_assert!(implied.is_nan());
    }
}

#[test]
fn test_stock_black_scholes_scenario() {
    let template = option(
        InstrumentKind::Stock,
        VolConvention::BlackScholes,
        OptionSide::Call,
        0.0,
        100.0,
        30.0,
        0.01,
    );
    let target = priced_at(&template, 0.2);

    for method in RootFindMethod::ALL {
        let solver = ImpliedVolSolver::with_bracket(
            RootFinder::new(method, SolverConfig::new(1e-8, 200)),
            VolBracket::new(1e-6, 5.0).unwrap(),
        );
        let implied = solver.solve(&target).unwrap();
        assert!((implied - 0.2).abs() < 1e-6, "{}: {}", method, implied);
    }
}

#[test]
fn test_future_bachelier_scenario() {
    let option = create_instrument(
        InstrumentKind::Future,
        0.0,
        50.0,
        55.0,
        90.0,
        0.0,
        OptionSide::Call,
        VolConvention::Bachelier,
    )
    .unwrap();

    let std_dev = 10.0 * (90.0_f64 / 365.0).sqrt();
    let d = (50.0 - 55.0) / std_dev;
    let cdf = 0.5 * series_erfc(-d / std::f64::consts::SQRT_2);
    let pdf = (-0.5 * d * d).exp() / (2.0 * std::f64::consts::PI).sqrt();
    let closed_form = (50.0 - 55.0) * cdf + std_dev * pdf;

    let price = option.call_price(10.0).unwrap();
    assert_abs_diff_eq!(price, closed_form, epsilon = 5e-11);
    assert_abs_diff_eq!(price, 0.408_290_815_670_405_04, epsilon = 5e-11);
    assert_eq!(format!("{:.10}", price), format!("{:.10}", closed_form));
    assert_eq!(format!("{:.10}", price), "0.4082908157");
}

/// erfc from the Maclaurin series of erf, for moderate |x|.
fn series_erfc(x: f64) -> f64 {
    // erf(x) = 2/√π Σ (-1)^n x^(2n+1) / (n! (2n+1))
    let mut term = x;
    let mut sum = x;
    for n in 1..200 {
        term *= -x * x / n as f64;
        sum += term / (2 * n + 1) as f64;
    }
    1.0 - 2.0 / std::f64::consts::PI.sqrt() * sum
}

#[test]
fn test_zero_volatility_bracket_endpoint() {
    // Deep in-the-money call priced exactly at its zero-volatility value:
    // the root sits on the lower bracket endpoint
    let template = option(
        InstrumentKind::Future,
        VolConvention::BlackScholes,
        OptionSide::Call,
        0.0,
        50.0,
        30.0,
        0.03,
    );
    let at_limit = option(
        InstrumentKind::Future,
        VolConvention::BlackScholes,
        OptionSide::Call,
        template.zero_vol_price(),
        50.0,
        30.0,
        0.03,
    );
    let implied = solver(RootFindMethod::Dekker).solve(&at_limit).unwrap();
    assert!(implied.abs() < 1e-6, "implied = {}", implied);
}
