//! Interactive calculator loop.
//!
//! [`Session`] drives one request/response cycle per iteration: prompt for the
//! five market inputs, validate them into a fresh [`MarketParameters`], print
//! the report, then ask whether to go again. It is generic over the reader and
//! writer so the same loop serves stdin/stdout and in-memory buffers in tests.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::analysis::{price_option, render_report, ReportConfig};
use crate::error::{PricingError, Result};
use crate::model_params::MarketParameters;

pub const BANNER: &str = "=== Black-Scholes Option Pricing Calculator ===";
pub const INVALID_PARAMETERS_MESSAGE: &str =
    "Error: Invalid input parameters. Please ensure all values are positive (T can be zero).";
pub const CONTINUE_PROMPT: &str = "Do you want to calculate another option? (y/n): ";
pub const FAREWELL: &str = "Thank you for using the Black-Scholes Calculator!";

/// Field name and prompt text, in the order they are asked.
const FIELDS: [(&str, &str); 5] = [
    ("spot", "Current Stock Price: $"),
    ("strike", "Strike Price: $"),
    ("time_to_expiry", "Time to Expiration (years): "),
    ("risk_free_rate", "Risk-free Rate (as decimal, e.g., 0.05 for 5%): "),
    ("volatility", "Volatility (as decimal, e.g., 0.20 for 20%): "),
];

pub struct Session<R, W> {
    input: R,
    output: W,
    config: ReportConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: ReportConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Run until the user declines to continue or input ends.
    ///
    /// Returns the number of options priced.
    pub fn run(&mut self) -> Result<usize> {
        let mut priced = 0;
        while let Some(params) = self.read_parameters()? {
            let report = price_option(&params, &self.config);
            write!(self.output, "{}", render_report(&report, &self.config))?;
            priced += 1;

            if !self.ask_continue()? {
                break;
            }
        }
        writeln!(self.output, "{}", FAREWELL)?;
        self.output.flush()?;
        debug!(priced, "session finished");
        Ok(priced)
    }

    /// Prompt for a full parameter batch until one validates.
    ///
    /// Malformed or out-of-domain input discards the whole batch and starts
    /// again from the first field. Returns `None` when input ends before a
    /// valid batch was read.
    pub fn read_parameters(&mut self) -> Result<Option<MarketParameters>> {
        'batch: loop {
            writeln!(self.output, "{}", BANNER)?;
            writeln!(self.output, "Enter the following parameters:")?;

            let mut values = [0.0; FIELDS.len()];
            for (slot, (field, prompt)) in values.iter_mut().zip(FIELDS) {
                write!(self.output, "{}", prompt)?;
                self.output.flush()?;

                let Some(line) = self.read_line()? else {
                    return Ok(None);
                };
                match parse_number(field, &line) {
                    Ok(value) => *slot = value,
                    Err(err) => {
                        warn!(error = %err, "malformed input");
                        writeln!(self.output, "Error: {}. Please re-enter all values.", err)?;
                        continue 'batch;
                    }
                }
            }

            let [spot, strike, time_to_expiry, risk_free_rate, volatility] = values;
            match MarketParameters::new(spot, strike, time_to_expiry, risk_free_rate, volatility) {
                Ok(params) => return Ok(Some(params)),
                Err(err) => {
                    warn!(error = %err, "rejected parameter batch");
                    writeln!(self.output, "{}", INVALID_PARAMETERS_MESSAGE)?;
                }
            }
        }
    }

    /// Blank lines are skipped; the first non-space character decides.
    fn ask_continue(&mut self) -> Result<bool> {
        writeln!(self.output)?;
        write!(self.output, "{}", CONTINUE_PROMPT)?;
        self.output.flush()?;

        while let Some(answer) = self.read_line()? {
            if let Some(c) = answer.trim().chars().next() {
                return Ok(c.eq_ignore_ascii_case(&'y'));
            }
        }
        Ok(false)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Parse one line of user input as a float.
pub fn parse_number(field: &'static str, line: &str) -> Result<f64> {
    let text = line.trim();
    text.parse::<f64>().map_err(|_| PricingError::MalformedInput {
        field,
        input: text.to_string(),
    })
}
