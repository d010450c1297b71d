use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{
    config::{load_settings_from, parse_authority_url, DEFAULT_CONFIG_FILE},
    Driver, HttpMoveAuthority,
};
use shared::domain::Square;
use tracing_subscriber::EnvFilter;

/// Loads the board from a move authority, replays clicks and prints the result.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    authority_url: Option<String>,
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Square to click in authority coordinates, e.g. `5,2`. Repeatable.
    #[arg(long = "click", value_name = "X,Y")]
    clicks: Vec<Square>,
    /// Issue every click before waiting for any answer.
    #[arg(long)]
    overlap: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings_from(&args.config);
    if let Some(url) = args.authority_url {
        settings.authority_url = url;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_writer(std::io::stderr)
        .init();

    let authority_url = parse_authority_url(&settings.authority_url)
        .with_context(|| format!("loading authority url from {}", args.config.display()))?;
    let authority = Arc::new(HttpMoveAuthority::new(authority_url));
    tracing::info!(authority = %authority.base_url(), "loading board");

    let mut driver = Driver::new(authority);
    driver.load();
    driver.settle().await;

    for square in args.clicks {
        tracing::info!(%square, "click");
        driver.click(square);
        if !args.overlap {
            driver.settle().await;
        }
    }
    driver.settle().await;

    match driver.view() {
        Some(view) => println!("{}", view.to_text()),
        None => println!("board unavailable: the authority never returned a board"),
    }
    Ok(())
}
