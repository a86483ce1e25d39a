use crate::model_params::MarketParameters;
use crate::models::bs::Greeks;

/// Re-priced call (and optionally put) for one strike shift.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioResult {
    pub label: String,
    /// Strike used for this scenario (ratio * spot)
    pub strike: f64,
    pub call_price: f64,
    /// Present only when the scenario asked for it
    pub put_price: Option<f64>,
    /// Header labels the strike as equal to spot
    pub show_spot: bool,
}

/// Everything shown for one pricing request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingReport {
    pub params: MarketParameters,
    pub call_price: f64,
    pub put_price: f64,
    pub call_greeks: Greeks,
    pub put_greeks: Greeks,
    pub scenarios: Vec<ScenarioResult>,
}
