mod backend_bridge;
mod controller;
mod ui;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::{
    config::{load_settings_from, parse_authority_url, DEFAULT_CONFIG_FILE},
    SyncRequest,
};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::controller::events::UiEvent;
use crate::ui::BoardApp;

#[derive(Parser, Debug)]
#[command(about = "Interactive chessboard backed by a remote move authority")]
struct Args {
    /// Base URL of the move authority; overrides the config file and environment.
    #[arg(long)]
    authority_url: Option<String>,
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings_from(&args.config);
    if let Some(url) = args.authority_url {
        settings.authority_url = url;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    let authority_url = parse_authority_url(&settings.authority_url)
        .with_context(|| format!("loading authority url from {}", args.config.display()))?;
    tracing::info!(authority = %authority_url, "starting board client");

    let (cmd_tx, cmd_rx) = bounded::<SyncRequest>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(authority_url.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Board Client")
            .with_inner_size([640.0, 720.0])
            .with_min_inner_size([360.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Board Client",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(BoardApp::new(
                cmd_tx,
                ui_rx,
                authority_url.to_string(),
            )))
        }),
    )
    .map_err(|err| anyhow!("board window failed: {err}"))
}
