pub mod config;
pub mod report;
pub mod scenario;
pub mod types;

use tracing::debug;

use crate::model_params::{MarketParameters, OptionSide};
use crate::models::bs::{call_price, greeks, put_price};

pub use config::{ReportConfig, ScenarioConfig};
pub use report::{render_report, ReportView};
pub use scenario::run_scenarios;
pub use types::{PricingReport, ScenarioResult};

/// Price both sides, compute both sets of Greeks and run the configured scenarios.
pub fn price_option(params: &MarketParameters, config: &ReportConfig) -> PricingReport {
    let report = PricingReport {
        params: *params,
        call_price: call_price(params),
        put_price: put_price(params),
        call_greeks: greeks(params, OptionSide::Call),
        put_greeks: greeks(params, OptionSide::Put),
        scenarios: run_scenarios(params, &config.scenarios),
    };
    debug!(
        spot = params.spot,
        strike = params.strike,
        t = params.time_to_expiry,
        call = report.call_price,
        put = report.put_price,
        "option priced"
    );
    report
}
