use tracing::debug;

use super::config::ScenarioConfig;
use super::types::ScenarioResult;
use crate::model_params::MarketParameters;
use crate::models::bs::{call_price, put_price};

/// Re-price the option at each scenario strike, keeping every other input.
pub fn run_scenarios(
    params: &MarketParameters,
    scenarios: &[ScenarioConfig],
) -> Vec<ScenarioResult> {
    scenarios
        .iter()
        .map(|scenario| {
            let shifted = params.with_strike(params.spot * scenario.strike_ratio);
            let result = ScenarioResult {
                label: scenario.label.clone(),
                strike: shifted.strike,
                call_price: call_price(&shifted),
                put_price: scenario.show_put.then(|| put_price(&shifted)),
                show_spot: scenario.show_spot,
            };
            debug!(
                label = %result.label,
                strike = result.strike,
                call = result.call_price,
                "scenario priced"
            );
            result
        })
        .collect()
}
