use anyhow::{anyhow, Result};
#[cfg(feature = "serde")]
use {anyhow::Context, serde::Deserialize, std::path::Path};

/// Largest number of decimals the report will print.
pub const MAX_PRECISION: usize = 12;

/// One strike shift re-priced in the scenario analysis block.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, serde::Serialize))]
pub struct ScenarioConfig {
    /// Heading printed above the scenario, e.g. "At-the-Money"
    pub label: String,
    /// Scenario strike as a multiple of spot
    pub strike_ratio: f64,
    /// Also print the put price for this scenario
    #[cfg_attr(feature = "serde", serde(default))]
    pub show_put: bool,
    /// Print the header as `K = S = $x`; only meaningful when the ratio is 1
    #[cfg_attr(feature = "serde", serde(default))]
    pub show_spot: bool,
}

impl ScenarioConfig {
    pub fn new(label: &str, strike_ratio: f64, show_put: bool) -> Self {
        Self {
            label: label.to_string(),
            strike_ratio,
            show_put,
            show_spot: false,
        }
    }

    /// The at-the-money scenario: strike equal to spot, call and put shown.
    pub fn at_the_money() -> Self {
        Self {
            show_spot: true,
            ..Self::new("At-the-Money", 1.0, true)
        }
    }
}

/// Controls what the text report contains and how it is formatted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, serde::Serialize))]
pub struct ReportConfig {
    /// Decimals printed for every number
    #[cfg_attr(feature = "serde", serde(default = "default_precision"))]
    pub precision: usize,

    /// Echo the input parameters above the results
    #[cfg_attr(feature = "serde", serde(default = "default_show_parameters"))]
    pub show_parameters: bool,

    /// Strike shifts for the scenario analysis; empty disables the block
    #[cfg_attr(feature = "serde", serde(default = "default_scenarios"))]
    pub scenarios: Vec<ScenarioConfig>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl ReportConfig {
    /// ATM, 10% ITM call and 10% OTM call at four decimals.
    pub fn standard() -> Self {
        Self {
            precision: default_precision(),
            show_parameters: default_show_parameters(),
            scenarios: default_scenarios(),
        }
    }

    /// Same layout with the ITM/OTM strikes pushed out to 20% from spot.
    pub fn wide() -> Self {
        Self {
            scenarios: vec![
                ScenarioConfig::at_the_money(),
                ScenarioConfig::new("In-the-Money Call", 0.8, false),
                ScenarioConfig::new("Out-of-the-Money Call", 1.2, false),
            ],
            ..Self::standard()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(anyhow!(
                "ReportConfig validation: precision ({}) must be <= {}",
                self.precision,
                MAX_PRECISION
            ));
        }
        for scenario in &self.scenarios {
            if scenario.strike_ratio <= 0.0 || !scenario.strike_ratio.is_finite() {
                return Err(anyhow!(
                    "ReportConfig validation: scenario '{}' strike_ratio ({}) must be > 0 and finite",
                    scenario.label,
                    scenario.strike_ratio
                ));
            }
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).context("failed to parse report config")?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&source).with_context(|| format!("in {}", path.display()))
    }
}

fn default_precision() -> usize {
    4
}

fn default_show_parameters() -> bool {
    true
}

fn default_scenarios() -> Vec<ScenarioConfig> {
    vec![
        ScenarioConfig::at_the_money(),
        ScenarioConfig::new("In-the-Money Call", 0.9, false),
        ScenarioConfig::new("Out-of-the-Money Call", 1.1, false),
    ]
}
