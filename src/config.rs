// src/config.rs

use anyhow::{Context, Result};
use clap::Parser;
use std::{path::PathBuf, time::Duration};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://vitibrasil.cnpuv.embrapa.br/";
pub const DEFAULT_OUTPUT_DIR: &str = "../data";
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(20);

/// Download Vitibrasil wine-export tables for a range of years into one CSV.
#[derive(Debug, Parser)]
#[command(name = "vitiscraper")]
#[command(about = "Vitibrasil wine export dataset generator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// First year to extract
    #[arg(long = "start_year", value_name = "YEAR")]
    pub start_year: i32,

    /// Last year to extract (defaults to start_year)
    #[arg(long = "end_year", value_name = "YEAR")]
    pub end_year: Option<i32>,

    // hidden: local mirrors and test runs
    /// Site root the report pages live under
    #[arg(long, hide = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory the CSV is written into
    #[arg(long, hide = true, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Pause before the single retry after a connection failure
    #[arg(long, hide = true, default_value_t = DEFAULT_RETRY_DELAY.as_secs())]
    pub retry_delay_secs: u64,
}

/// Runtime settings shared by the pipeline stages.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub output_dir: PathBuf,
    pub retry_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL should parse"),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl TryFrom<&Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: &Cli) -> Result<Self> {
        let base_url = Url::parse(&cli.base_url)
            .with_context(|| format!("parsing base URL {}", cli.base_url))?;
        Ok(Self {
            base_url,
            output_dir: cli.output_dir.clone(),
            retry_delay: Duration::from_secs(cli.retry_delay_secs),
        })
    }
}
