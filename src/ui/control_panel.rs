use eframe::egui;
use std::time::Instant;

use crate::config::{MAX_REFRESH_SECS, MIN_REFRESH_SECS};
use crate::controller::DashboardController;

/// Auto-refresh controls
pub struct ControlPanel;

impl ControlPanel {
    pub fn render(ui: &mut egui::Ui, controller: &mut DashboardController, now: Instant) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.heading("🎮 Control Panel");

                let (color, status_text) = if controller.is_refreshing() {
                    (egui::Color32::YELLOW, "⟳ Refreshing")
                } else if controller.scheduler().is_enabled() {
                    (egui::Color32::GREEN, "▶ Live")
                } else {
                    (egui::Color32::LIGHT_GRAY, "⏸ Paused")
                };
                ui.label(egui::RichText::new(status_text).color(color).strong());
            });

            ui.separator();

            let mut auto_refresh = controller.scheduler().is_enabled();
            if ui.checkbox(&mut auto_refresh, "Auto Refresh").changed() {
                controller.scheduler_mut().set_enabled(auto_refresh);
            }

            ui.horizontal(|ui| {
                ui.label("Refresh Interval:");
                let mut interval = controller.scheduler().interval_secs();
                if ui
                    .add(egui::Slider::new(&mut interval, MIN_REFRESH_SECS..=MAX_REFRESH_SECS).text("s"))
                    .changed()
                {
                    controller.scheduler_mut().set_interval_secs(interval);
                }
            });

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!controller.is_refreshing(), egui::Button::new("🔄 Refresh Now"))
                    .clicked()
                {
                    controller.refresh_now(now);
                }

                if let Some(left) = controller.scheduler().time_until_due(now) {
                    ui.label(
                        egui::RichText::new(format!("next in {}s", left.as_secs_f64().ceil() as u64))
                            .small()
                            .weak(),
                    );
                }
            });
        });
    }
}
