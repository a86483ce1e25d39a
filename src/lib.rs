//! # bsm-lib: Black-Scholes-Merton Option Pricing and Greeks
//!
//! `bsm-lib` prices European calls and puts under the Black-Scholes-Merton model
//! (no dividend yield) and computes their first- and second-order sensitivities.
//! The engine is a set of pure functions over an immutable [`MarketParameters`]
//! value; the report and session layers on top turn it into an interactive
//! calculator.
//!
//! ## Core Features
//!
//! - **Closed-form pricing**: call and put prices, intrinsic value at expiry
//! - **Greeks**: delta, gamma, theta (per day), vega and rho (per 1% move)
//! - **Scenario analysis**: re-pricing at configurable strike shifts
//! - **Interactive session**: prompt/validate/report loop over any reader and writer
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_lib::{models::bs, MarketParameters, OptionSide};
//!
//! let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.20)?;
//!
//! let call = bs::call_price(&params);
//! let put = bs::put_price(&params);
//! let delta = bs::delta(&params, OptionSide::Call);
//!
//! assert!((call - 10.4506).abs() < 1e-3);
//! assert!((put - 5.5735).abs() < 1e-3);
//! assert!(delta > 0.5);
//! # Ok::<(), bsm_lib::PricingError>(())
//! ```
//!
//! ## Input Domain
//!
//! [`MarketParameters::new`] rejects non-positive spot, strike or volatility,
//! negative time to expiry and non-finite values. A time to expiry of zero is
//! accepted: prices collapse to intrinsic value and every Greek except delta is
//! zero.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod analysis;
pub mod error;
pub mod model_params;
pub mod models;
pub mod session;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use analysis::{
    price_option, render_report, run_scenarios, PricingReport, ReportConfig, ScenarioConfig,
    ScenarioResult,
};
pub use error::PricingError;
pub use model_params::{MarketParameters, OptionSide};
pub use models::bs::Greeks;
pub use session::Session;

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured report layouts.
///
/// - [`standard()`]: four decimals, ATM plus calls 10% in and out of the money
/// - [`wide()`]: same, with the ITM/OTM strikes 20% from spot
pub mod default_configs {
    use crate::analysis::ReportConfig;

    /// The calculator's default output.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bsm_lib::default_configs;
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.precision, 4);
    /// assert_eq!(config.scenarios.len(), 3);
    /// ```
    pub fn standard() -> ReportConfig {
        ReportConfig::standard()
    }

    /// Scenario strikes at 0.8x and 1.2x spot instead of 0.9x and 1.1x.
    pub fn wide() -> ReportConfig {
        ReportConfig::wide()
    }
}
