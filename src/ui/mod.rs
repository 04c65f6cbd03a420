mod app;
mod charts;
mod control_panel;
pub(crate) mod data;
mod metrics_panel;
mod notices;
mod strategy_form;
mod tables;

pub use app::BasisMonitorApp;
pub use data::DashboardData;

use crossbeam_channel::unbounded;
use std::time::Instant;
use tracing::info;

use crate::api::{ApiClient, ReqwestTransport};
use crate::config::{DashboardConfig, WINDOW_SIZE};
use crate::controller::{DashboardController, FetchWorker, RefreshScheduler};

pub fn launch_dashboard(config: DashboardConfig) -> anyhow::Result<()> {
    let (command_tx, command_rx) = unbounded();
    let (response_tx, response_rx) = unbounded();

    let transport = ReqwestTransport::new(config.request_timeout)?;
    let client = ApiClient::new(transport, config.api_base_url.clone());
    let worker = FetchWorker::new(client, command_rx, response_tx)?.spawn()?;

    let scheduler = RefreshScheduler::new(
        config.auto_refresh,
        config.refresh_interval_secs,
        Instant::now(),
    );
    let controller = DashboardController::new(command_tx, response_rx, scheduler);

    info!(
        api = %config.api_base_url,
        auto_refresh = config.auto_refresh,
        interval_secs = config.refresh_interval_secs,
        "launching dashboard"
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title(format!("Basis Trading Monitor - {}", config.api_base_url)),
        ..Default::default()
    };

    eframe::run_native(
        "Basis Trading Monitor",
        options,
        Box::new(move |_cc| Ok(Box::new(BasisMonitorApp::new(controller, worker)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))
}
