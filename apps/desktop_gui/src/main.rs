use std::sync::Arc;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::HttpRecommendationsClient;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::{load_settings, prepare_base_url, StartupArgs};
use crate::controller::{events::UiEvent, orchestration::FormController};
use crate::ui::RecommendationsApp;

fn main() -> Result<()> {
    let args = StartupArgs::parse();
    let settings = load_settings(&args);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let base_url = prepare_base_url(&settings.base_url)?;
    let client = HttpRecommendationsClient::new(&base_url)
        .with_context(|| format!("failed to build http client for {base_url}"))?;
    tracing::info!(%base_url, "recommendations client ready");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, Arc::new(client));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Recommendations")
            .with_inner_size([960.0, 680.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Recommendations",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(RecommendationsApp::new(
                FormController::new(cmd_tx, ui_rx),
                base_url,
            )))
        }),
    )
    .map_err(|err| anyhow!("window event loop failed: {err}"))
}
