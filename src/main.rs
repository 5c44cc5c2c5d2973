mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use app::DashboardApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e:#}");
        return Err(e);
    }
    Ok(())
}

fn run() -> Result<()> {
    let mut config = DashboardConfig::from_env()?;
    if let Some(arg) = std::env::args_os().nth(1) {
        config.data_path = Some(PathBuf::from(arg));
    }

    // The window only opens once the table has loaded.
    let path = config
        .data_path
        .clone()
        .context("no data file: pass a CSV path or set data_path in the config")?;
    let table = data::loader::load_file(&path, &config.load_options())
        .with_context(|| format!("loading {}", path.display()))?;
    log::info!(
        "Loaded {} records from {} ({} indicators)",
        table.len(),
        path.display(),
        table.indicator_names().len()
    );

    if table.is_empty() {
        log::warn!("{} has a header but no data rows", path.display());
    }

    let state = AppState::new(table, &config, Some(path));
    let title = config.title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(title, state)))),
    )
    .map_err(|e| anyhow!("running dashboard: {e}"))
}
