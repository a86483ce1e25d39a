// Text rendering of a PricingReport, laid out like the calculator's console output.

use std::fmt;

use super::config::ReportConfig;
use super::types::PricingReport;

/// Borrowed view that formats a report with a given config.
pub struct ReportView<'a> {
    pub report: &'a PricingReport,
    pub config: &'a ReportConfig,
}

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.config.precision;
        let r = self.report;
        let params = &r.params;

        writeln!(f)?;
        writeln!(f, "=== Black-Scholes Option Pricing Results ===")?;
        if self.config.show_parameters {
            writeln!(f, "Parameters:")?;
            writeln!(f, "  Stock Price (S): ${:.p$}", params.spot)?;
            writeln!(f, "  Strike Price (K): ${:.p$}", params.strike)?;
            writeln!(f, "  Time to Expiry (T): {:.p$} years", params.time_to_expiry)?;
            writeln!(f, "  Risk-free Rate (r): {:.p$}%", params.risk_free_rate * 100.0)?;
            writeln!(f, "  Volatility (σ): {:.p$}%", params.volatility * 100.0)?;
        }

        writeln!(f)?;
        writeln!(f, "Option Prices:")?;
        writeln!(f, "  Call Price: ${:.p$}", r.call_price)?;
        writeln!(f, "  Put Price: ${:.p$}", r.put_price)?;

        writeln!(f)?;
        writeln!(f, "Greeks:")?;
        writeln!(f, "  Call Delta: {:.p$}", r.call_greeks.delta)?;
        writeln!(f, "  Put Delta: {:.p$}", r.put_greeks.delta)?;
        writeln!(f, "  Gamma: {:.p$}", r.call_greeks.gamma)?;
        writeln!(f, "  Call Theta: {:.p$} (per day)", r.call_greeks.theta)?;
        writeln!(f, "  Put Theta: {:.p$} (per day)", r.put_greeks.theta)?;
        writeln!(f, "  Vega: {:.p$} (per 1% vol change)", r.call_greeks.vega)?;
        writeln!(f, "  Call Rho: {:.p$} (per 1% rate change)", r.call_greeks.rho)?;
        writeln!(f, "  Put Rho: {:.p$} (per 1% rate change)", r.put_greeks.rho)?;

        if !r.scenarios.is_empty() {
            writeln!(f)?;
            writeln!(f, "=== Scenario Analysis ===")?;
            for scenario in &r.scenarios {
                let spot_eq = if scenario.show_spot { "S = " } else { "" };
                writeln!(f, "{} (K = {}${:.p$}):", scenario.label, spot_eq, scenario.strike)?;
                writeln!(f, "  Call Price: ${:.p$}", scenario.call_price)?;
                if let Some(put) = scenario.put_price {
                    writeln!(f, "  Put Price: ${:.p$}", put)?;
                }
            }
        }
        Ok(())
    }
}

/// Render the full results block as a string.
pub fn render_report(report: &PricingReport, config: &ReportConfig) -> String {
    ReportView { report, config }.to_string()
}
