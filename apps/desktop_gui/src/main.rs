use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use client_core::HttpDashboardClient;
use crossbeam_channel::{bounded, unbounded};
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::DashboardApp;

#[derive(Parser, Debug)]
#[command(about = "Fetch users, create posts, and see comments")]
struct Args {
    /// Base URL of the REST API (overrides dashboard.toml and environment).
    #[arg(long)]
    api_base_url: Option<String>,
    /// How long a notification stays visible.
    #[arg(long)]
    notification_ttl_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut settings = client_core::load_settings();
    if let Some(url) = args.api_base_url {
        settings.api_base_url = url;
    }
    if let Some(ttl) = args.notification_ttl_ms {
        settings.notification_ttl_ms = ttl;
    }
    tracing::info!(api_base_url = %settings.api_base_url, "starting dashboard");

    let api = HttpDashboardClient::from_settings(&settings)
        .context("failed to configure api client")?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = unbounded::<UiEvent>();
    let _worker = backend_bridge::runtime::launch(cmd_rx, ui_tx, Arc::new(api))
        .context("backend worker startup failure")?;

    let notification_ttl = settings.notification_ttl();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("API Chaining Dashboard")
            .with_inner_size([960.0, 820.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "API Chaining Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(cmd_tx, ui_rx, notification_ttl)))),
    )
    .map_err(|err| anyhow::anyhow!("dashboard window failed: {err}"))
}
