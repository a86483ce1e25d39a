//! Market inputs consumed by the pricing engine.
//!
//! [`MarketParameters`] is a plain value: it is built once per pricing request,
//! read by the free functions in [`crate::models::bs`] and then dropped. The
//! fields are public so callers can evaluate the engine on arbitrary values,
//! but [`MarketParameters::new`] is the only path that enforces the domain
//! constraints.

use crate::error::{PricingError, Result};

/// Which side of the contract a side-dependent formula evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionSide {
    Call,
    Put,
}

/// The five scalar inputs of the Black-Scholes-Merton formula.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParameters {
    /// Current underlying price (S), > 0
    pub spot: f64,
    /// Option strike (K), > 0
    pub strike: f64,
    /// Years remaining until expiry (T), >= 0
    pub time_to_expiry: f64,
    /// Continuously-compounded annual rate as a decimal (r), any sign
    pub risk_free_rate: f64,
    /// Annualized volatility as a decimal (sigma), > 0
    pub volatility: f64,
}

impl MarketParameters {
    /// Build a validated parameter set.
    ///
    /// Rejects `spot <= 0`, `strike <= 0`, `time_to_expiry < 0`,
    /// `volatility <= 0` and any non-finite field. `time_to_expiry == 0` is
    /// accepted and priced at intrinsic value.
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        volatility: f64,
    ) -> Result<Self> {
        let params = Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the domain constraints, reporting the first violated field.
    pub fn validate(&self) -> Result<()> {
        check_positive("spot", self.spot)?;
        check_positive("strike", self.strike)?;
        if !self.time_to_expiry.is_finite() || self.time_to_expiry < 0.0 {
            return Err(PricingError::InvalidParameter {
                name: "time_to_expiry",
                value: self.time_to_expiry,
                constraint: ">= 0 and finite",
            });
        }
        if !self.risk_free_rate.is_finite() {
            return Err(PricingError::InvalidParameter {
                name: "risk_free_rate",
                value: self.risk_free_rate,
                constraint: "finite",
            });
        }
        check_positive("volatility", self.volatility)
    }

    /// Same market, different strike.
    pub fn with_strike(&self, strike: f64) -> Self {
        Self { strike, ..*self }
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<()> {
    // NaN fails `value > 0.0`, so this also rejects it
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::InvalidParameter {
            name,
            value,
            constraint: "> 0 and finite",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_params_validation() {
        assert!(MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).is_ok());
        assert!(MarketParameters::new(100.0, 100.0, 0.0, 0.05, 0.2).is_ok()); // T = 0 allowed
        assert!(MarketParameters::new(100.0, 100.0, 1.0, -0.01, 0.2).is_ok()); // negative rate

        assert!(MarketParameters::new(0.0, 100.0, 1.0, 0.05, 0.2).is_err()); // zero spot
        assert!(MarketParameters::new(100.0, -5.0, 1.0, 0.05, 0.2).is_err()); // negative strike
        assert!(MarketParameters::new(100.0, 100.0, -0.1, 0.05, 0.2).is_err()); // negative T
        assert!(MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.0).is_err()); // zero vol
        assert!(MarketParameters::new(f64::NAN, 100.0, 1.0, 0.05, 0.2).is_err());
        assert!(MarketParameters::new(100.0, 100.0, f64::INFINITY, 0.05, 0.2).is_err());
        assert!(MarketParameters::new(100.0, 100.0, 1.0, f64::NAN, 0.2).is_err());
    }

    #[test]
    fn test_invalid_parameter_names_field() {
        match MarketParameters::new(100.0, 100.0, 1.0, 0.05, -0.2) {
            Err(PricingError::InvalidParameter { name, value, .. }) => {
                assert_eq!(name, "volatility");
                assert_eq!(value, -0.2);
            }
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_with_strike_keeps_market() {
        let params = MarketParameters::new(100.0, 100.0, 0.5, 0.03, 0.25).unwrap();
        let shifted = params.with_strike(90.0);
        assert_eq!(shifted.strike, 90.0);
        assert_eq!(shifted.spot, params.spot);
        assert_eq!(shifted.time_to_expiry, params.time_to_expiry);
        assert_eq!(shifted.risk_free_rate, params.risk_free_rate);
        assert_eq!(shifted.volatility, params.volatility);
    }
}
