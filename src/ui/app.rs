use eframe::egui;
use std::thread::JoinHandle;
use std::time::Instant;
use tracing::error;

use crate::config::{BASIS_CHART_HEIGHT, POSITION_CHART_HEIGHT, RECENT_TRADE_ROWS, SIDE_PANEL_WIDTH};
use crate::controller::DashboardController;
use super::charts::{BasisPanel, ChartRenderer, PositionBars};
use super::control_panel::ControlPanel;
use super::data::DashboardData;
use super::metrics_panel::MetricsPanel;
use super::notices::{render_notice, render_placeholder};
use super::strategy_form::StrategyForm;
use super::tables::{
    position_rows, render_table, strategy_rows, trade_rows, POSITION_COLUMNS, STRATEGY_COLUMNS,
    TRADE_COLUMNS,
};

pub struct BasisMonitorApp {
    controller: DashboardController,
    strategy_form: StrategyForm,
    worker: Option<JoinHandle<()>>,
}

impl BasisMonitorApp {
    pub fn new(mut controller: DashboardController, worker: JoinHandle<()>) -> Self {
        // initial page load
        controller.refresh_now(Instant::now());

        Self {
            controller,
            strategy_form: StrategyForm::default(),
            worker: Some(worker),
        }
    }

    fn check_worker_status(&mut self) {
        if let Some(handle) = self.worker.take() {
            if handle.is_finished() {
                if handle.join().is_err() {
                    error!("fetch worker panicked");
                } else {
                    error!("fetch worker exited");
                }
                self.controller.worker_lost();
            } else {
                self.worker = Some(handle);
            }
        }
    }

    fn render_basis_section(ui: &mut egui::Ui, data: Option<&DashboardData>) {
        ui.heading("📈 Basis Analysis");
        ui.add_space(6.0);

        let snapshots = data.map(|d| d.snapshots.as_slice()).unwrap_or_default();
        match BasisPanel::from_snapshots(snapshots) {
            BasisPanel::Placeholder(text) => render_placeholder(ui, text),
            BasisPanel::Chart(series) => ChartRenderer::render_basis_chart(ui, &series, BASIS_CHART_HEIGHT),
        }
    }

    fn render_positions_section(ui: &mut egui::Ui, data: Option<&DashboardData>) {
        ui.heading("📊 Active Positions");
        ui.add_space(6.0);

        let positions = data.map(|d| d.positions.as_slice()).unwrap_or_default();
        if positions.is_empty() {
            render_placeholder(ui, "No active positions");
            return;
        }

        ChartRenderer::render_position_chart(ui, &PositionBars::from_positions(positions), POSITION_CHART_HEIGHT);
        ui.add_space(8.0);
        render_table(ui, "positions_table", &POSITION_COLUMNS, &position_rows(positions));
    }

    fn render_strategies_section(ui: &mut egui::Ui, data: Option<&DashboardData>) {
        ui.heading("🎯 Active Strategies");
        ui.add_space(6.0);

        let strategies = data.map(|d| d.strategies.as_slice()).unwrap_or_default();
        if strategies.is_empty() {
            render_placeholder(ui, "No active strategies");
            return;
        }

        render_table(ui, "strategies_table", &STRATEGY_COLUMNS, &strategy_rows(strategies));
    }

    fn render_trades_section(ui: &mut egui::Ui, data: Option<&DashboardData>) {
        ui.heading("💹 Recent Trades");
        ui.add_space(6.0);

        let trades = data.map(|d| d.recent_trades(RECENT_TRADE_ROWS)).unwrap_or_default();
        if trades.is_empty() {
            render_placeholder(ui, "No trades executed yet");
            return;
        }

        render_table(ui, "trades_table", &TRADE_COLUMNS, &trade_rows(trades));
    }
}

impl eframe::App for BasisMonitorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if self.controller.tick(now) {
            ctx.request_repaint();
        }
        self.check_worker_status();

        if let Some(after) = self.controller.repaint_after(now) {
            ctx.request_repaint_after(after);
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🚀 Basis Trading Monitor");
                ui.label(
                    egui::RichText::new("Real-time monitoring dashboard for cryptocurrency basis trading strategies")
                        .weak(),
                );
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            let updated = match self.controller.data() {
                Some(data) => data.fetched_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                None => "never".to_string(),
            };
            ui.label(egui::RichText::new(format!("Last updated: {}", updated)).small().weak());
        });

        egui::SidePanel::left("control_panel")
            .default_width(SIDE_PANEL_WIDTH)
            .min_width(280.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ControlPanel::render(ui, &mut self.controller, now);
                    ui.add_space(10.0);

                    let request = self.strategy_form.render(
                        ui,
                        self.controller.is_submitting(),
                        self.controller.form_notice(),
                    );
                    if let Some(request) = request {
                        self.controller.submit_strategy(request);
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let data = self.controller.data();

                for notice in self.controller.fetch_notices() {
                    render_notice(ui, notice);
                }

                ui.add_space(10.0);
                MetricsPanel::render(ui, data);
                ui.add_space(15.0);
                ui.separator();

                Self::render_basis_section(ui, data);
                ui.add_space(15.0);
                ui.separator();

                ui.columns(2, |columns| {
                    Self::render_positions_section(&mut columns[0], data);
                    Self::render_strategies_section(&mut columns[1], data);
                });
                ui.add_space(15.0);
                ui.separator();

                Self::render_trades_section(ui, data);
                ui.add_space(20.0);
            });
        });
    }
}

impl Drop for BasisMonitorApp {
    fn drop(&mut self) {
        self.controller.shutdown();
    }
}
