// Black-Scholes-Merton closed forms for European options, no dividend yield.
//
// Every price and Greek special-cases an expired option (T <= 0) so that the
// sigma * sqrt(T) denominator is never evaluated at zero time. A zero
// volatility with T > 0 is not guarded here: it divides by zero and the
// resulting inf/NaN propagates. `MarketParameters::new` rejects it upstream.

use crate::model_params::{MarketParameters, OptionSide};
use crate::models::normal::{normal_cdf, normal_pdf};

/// Calendar days used to express theta per day.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Vega and rho are quoted per one percentage point move.
const PERCENT: f64 = 100.0;

/// All five sensitivities for one side of the contract.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    pub delta: f64,
    pub gamma: f64,
    /// Per calendar day
    pub theta: f64,
    /// Per 1% volatility change
    pub vega: f64,
    /// Per 1% rate change
    pub rho: f64,
}

#[inline]
fn is_expired(p: &MarketParameters) -> bool {
    p.time_to_expiry <= 0.0
}

#[inline]
fn discount_factor(p: &MarketParameters) -> f64 {
    (-p.risk_free_rate * p.time_to_expiry).exp()
}

/// d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T). Requires T > 0 and σ > 0.
pub fn d1(p: &MarketParameters) -> f64 {
    let sigma = p.volatility;
    let t = p.time_to_expiry;
    ((p.spot / p.strike).ln() + (p.risk_free_rate + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt())
}

/// d2 = d1 - σ√T. Same preconditions as [`d1`].
pub fn d2(p: &MarketParameters) -> f64 {
    d1(p) - p.volatility * p.time_to_expiry.sqrt()
}

/// Price of a European call. Intrinsic value once expired.
pub fn call_price(p: &MarketParameters) -> f64 {
    if is_expired(p) {
        return (p.spot - p.strike).max(0.0);
    }
    p.spot * normal_cdf(d1(p)) - p.strike * discount_factor(p) * normal_cdf(d2(p))
}

/// Price of a European put. Intrinsic value once expired.
pub fn put_price(p: &MarketParameters) -> f64 {
    if is_expired(p) {
        return (p.strike - p.spot).max(0.0);
    }
    p.strike * discount_factor(p) * normal_cdf(-d2(p)) - p.spot * normal_cdf(-d1(p))
}

pub fn price(p: &MarketParameters, side: OptionSide) -> f64 {
    match side {
        OptionSide::Call => call_price(p),
        OptionSide::Put => put_price(p),
    }
}

/// ∂V/∂S.
///
/// At expiry the delta is a step function and S == K falls on the zero side
/// for both calls and puts.
pub fn delta(p: &MarketParameters, side: OptionSide) -> f64 {
    if is_expired(p) {
        return match side {
            OptionSide::Call if p.spot > p.strike => 1.0,
            OptionSide::Put if p.spot < p.strike => -1.0,
            _ => 0.0,
        };
    }
    let nd1 = normal_cdf(d1(p));
    match side {
        OptionSide::Call => nd1,
        OptionSide::Put => nd1 - 1.0,
    }
}

/// ∂²V/∂S², identical for calls and puts.
pub fn gamma(p: &MarketParameters) -> f64 {
    if is_expired(p) {
        return 0.0;
    }
    normal_pdf(d1(p)) / (p.spot * p.volatility * p.time_to_expiry.sqrt())
}

/// Time decay per calendar day (annual theta / 365).
pub fn theta(p: &MarketParameters, side: OptionSide) -> f64 {
    if is_expired(p) {
        return 0.0;
    }
    let decay = -(p.spot * normal_pdf(d1(p)) * p.volatility) / (2.0 * p.time_to_expiry.sqrt());
    let carry = p.risk_free_rate * p.strike * discount_factor(p);
    let annual = match side {
        OptionSide::Call => decay - carry * normal_cdf(d2(p)),
        OptionSide::Put => decay + carry * normal_cdf(-d2(p)),
    };
    annual / DAYS_PER_YEAR
}

/// Sensitivity to a one-point volatility move, identical for calls and puts.
pub fn vega(p: &MarketParameters) -> f64 {
    if is_expired(p) {
        return 0.0;
    }
    p.spot * normal_pdf(d1(p)) * p.time_to_expiry.sqrt() / PERCENT
}

/// Sensitivity to a one-point rate move.
pub fn rho(p: &MarketParameters, side: OptionSide) -> f64 {
    if is_expired(p) {
        return 0.0;
    }
    let scale = p.strike * p.time_to_expiry * discount_factor(p);
    match side {
        OptionSide::Call => scale * normal_cdf(d2(p)) / PERCENT,
        OptionSide::Put => -scale * normal_cdf(-d2(p)) / PERCENT,
    }
}

pub fn greeks(p: &MarketParameters, side: OptionSide) -> Greeks {
    Greeks {
        delta: delta(p, side),
        gamma: gamma(p),
        theta: theta(p, side),
        vega: vega(p),
        rho: rho(p, side),
    }
}
