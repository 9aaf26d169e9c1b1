mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;

use anyhow::Context;
use clap::Parser;
use eframe::egui;

use app::CampaignDashboardApp;
use config::Args;
use data::loader::Loader;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let loader = Loader::new(&args.data, args.load_policy());
    log::info!(
        "Starting dashboard with data={} policy={:?}",
        loader.path().display(),
        loader.policy()
    );

    let table = loader
        .load()
        .inspect_err(|e| log::error!("Failed to load phases: {e}"))
        .context("loading campaign lifecycle data")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([args.width, args.height])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Marketing Campaign Lifecycle",
        options,
        Box::new(move |_cc| Ok(Box::new(CampaignDashboardApp::new(table)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
