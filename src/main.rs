use anyhow::Result;
use clap::Parser;
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use vitiscraper::{
    assemble,
    config::{Cli, Config},
    dataset::output_path,
    write_csv, HttpSource, YearRange,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // ─── 1) parse args before anything touches the network ───────────
    let cli = Cli::parse();

    // ─── 2) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // a fatal error is reported once, by anyhow on the way out of main
    run(&cli).await
}

async fn run(cli: &Cli) -> Result<()> {
    let config = Config::try_from(cli)?;
    let range = YearRange::new(cli.start_year, cli.end_year)?;
    info!(start = range.min(), end = range.max(), "startup");

    // ─── 3) fetch + normalize every year ─────────────────────────────
    let source = HttpSource::new(Client::new());
    let dataset = assemble(&source, &config, &range).await?;

    // ─── 4) persist ──────────────────────────────────────────────────
    let path = output_path(&config.output_dir, &range);
    info!("storing dataset in {}", path.display());
    write_csv(&dataset, &path)?;

    info!("done");
    Ok(())
}
