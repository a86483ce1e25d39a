//! bsm-calc - interactive Black-Scholes-Merton calculator
//!
//! Without pricing flags the calculator prompts for inputs on stdin until the
//! user stops. With all five of `--spot --strike --time --rate --vol` it prints
//! a single report and exits.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bsm_lib::{price_option, render_report, MarketParameters, ReportConfig, Session};

/// Black-Scholes-Merton European option calculator
#[derive(Parser)]
#[command(name = "bsm-calc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Report configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Current stock price
    #[arg(long)]
    spot: Option<f64>,

    /// Strike price
    #[arg(long)]
    strike: Option<f64>,

    /// Time to expiration in years
    #[arg(long)]
    time: Option<f64>,

    /// Risk-free rate as a decimal
    #[arg(long, allow_hyphen_values = true)]
    rate: Option<f64>,

    /// Volatility as a decimal
    #[arg(long)]
    vol: Option<f64>,
}

impl Cli {
    /// All five inputs when given on the command line, `None` when none are.
    fn one_shot_inputs(&self) -> Result<Option<[f64; 5]>> {
        match (self.spot, self.strike, self.time, self.rate, self.vol) {
            (Some(s), Some(k), Some(t), Some(r), Some(v)) => Ok(Some([s, k, t, r, v])),
            (None, None, None, None, None) => Ok(None),
            _ => bail!("--spot, --strike, --time, --rate and --vol must be given together"),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ReportConfig::from_file(path)?,
        None => ReportConfig::default(),
    };
    info!(?config, "report configuration loaded");

    match cli.one_shot_inputs()? {
        Some([spot, strike, time, rate, vol]) => {
            let params = MarketParameters::new(spot, strike, time, rate, vol)
                .context("invalid pricing inputs")?;
            let report = price_option(&params, &config);
            let mut stdout = io::stdout().lock();
            write!(stdout, "{}", render_report(&report, &config))?;
            stdout.flush()?;
        }
        None => {
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            let priced = Session::new(stdin, stdout, config).run()?;
            info!(priced, "interactive session ended");
        }
    }
    Ok(())
}
