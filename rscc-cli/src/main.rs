//! rscc command line calculator
//!
//! Compares GWP100 and Radiative Forcing Protocol credits for avoided CO2 and
//! CH4 emissions.
//!
//! # Usage
//!
//! ```bash
//! rscc --co2 10 --ch4 1 --time-horizon 20
//! rscc --scenario scenario.toml --format json
//! rscc --explain
//! ```
//!
//! Values given on the command line override those from `--scenario`, which in
//! turn override the default scenario.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rscc_core::report::{render_comparison, METHODOLOGY, WHY_173};
use rscc_core::{compare, Scenario};
use std::path::PathBuf;
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// CO2-equivalent credit calculator
#[derive(Parser, Debug)]
#[command(name = "rscc")]
#[command(about = "Compare GWP100 and Radiative Forcing Protocol credits for avoided CO2 and CH4")]
struct Args {
    /// TOML scenario file; missing values use the default scenario
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// CO2 emissions avoided (tonnes)
    #[arg(long)]
    co2: Option<f64>,

    /// CH4 emissions avoided (tonnes)
    #[arg(long)]
    ch4: Option<f64>,

    /// GWP100 factor
    #[arg(long)]
    gwp100: Option<f64>,

    /// Time horizon in whole years
    #[arg(short = 't', long, value_parser = clap::value_parser!(u32).range(1..))]
    time_horizon: Option<u32>,

    /// CH4 atmospheric lifetime (years)
    #[arg(long)]
    ch4_lifetime: Option<f64>,

    /// Radiative efficiency ratio, RE_CH4 / RE_CO2
    #[arg(long)]
    re_ratio: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also print the derivation of the 173 ratio and the methodology notes
    #[arg(long)]
    explain: bool,
}

impl Args {
    /// Load the base scenario and apply command line overrides.
    fn scenario(&self) -> Result<Scenario> {
        let mut scenario = match &self.scenario {
            Some(path) => Scenario::from_path(path)
                .with_context(|| format!("Failed to load scenario {}", path.display()))?,
            None => Scenario::default(),
        };

        if let Some(co2) = self.co2 {
            scenario.emissions.co2_avoided = co2;
        }
        if let Some(ch4) = self.ch4 {
            scenario.emissions.ch4_avoided = ch4;
        }
        if let Some(gwp100) = self.gwp100 {
            scenario.gwp100.gwp100 = gwp100;
        }
        if let Some(time_horizon) = self.time_horizon {
            scenario.rfp.time_horizon = f64::from(time_horizon);
        }
        if let Some(ch4_lifetime) = self.ch4_lifetime {
            scenario.rfp.ch4_lifetime = ch4_lifetime;
        }
        if let Some(re_ratio) = self.re_ratio {
            scenario.rfp.re_ratio = re_ratio;
        }

        debug!(?scenario, "Resolved scenario");
        Ok(scenario)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();
    let scenario = args.scenario()?;
    let comparison = compare(&scenario).context("Refusing to compute credits")?;

    match args.format {
        OutputFormat::Text => {
            print!("{}", render_comparison(&comparison));
            if args.explain {
                println!();
                print!("{}", WHY_173);
                println!();
                print!("{}", METHODOLOGY);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&comparison)?);
        }
    }

    Ok(())
}
