use eframe::egui;

use crate::common::format::helpers::{format_percent, format_usd};
use super::data::DashboardData;

#[derive(Debug, Clone, PartialEq)]
pub struct MetricDelta {
    pub text: &'static str,
    pub positive: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
    pub delta: Option<MetricDelta>,
}

/// Headline metrics in four fixed slots: status, basis, spot, future.
/// A slot is empty when its source was not fetched.
pub fn metric_cards(data: &DashboardData) -> [Option<MetricCard>; 4] {
    let status = data.health.as_ref().map(|health| {
        let online = health.is_online();
        MetricCard {
            label: "System Status",
            value: health.display_status(),
            delta: Some(MetricDelta {
                text: if online { "Online" } else { "Offline" },
                positive: online,
            }),
        }
    });

    let Some(latest) = data.latest_snapshot() else {
        return [status, None, None, None];
    };

    [
        status,
        Some(MetricCard {
            label: "Latest Basis",
            value: format_percent(latest.basis_percent),
            delta: None,
        }),
        Some(MetricCard {
            label: "Spot Price",
            value: format_usd(latest.spot_price),
            delta: None,
        }),
        Some(MetricCard {
            label: "Future Price",
            value: format_usd(latest.future_price),
            delta: None,
        }),
    ]
}

pub struct MetricsPanel;

impl MetricsPanel {
    fn render_card(ui: &mut egui::Ui, card: &MetricCard) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(card.label).color(egui::Color32::LIGHT_GRAY));
                ui.label(egui::RichText::new(&card.value).size(24.0).strong());
                if let Some(delta) = &card.delta {
                    let (arrow, color) = if delta.positive {
                        ("⬆", egui::Color32::GREEN)
                    } else {
                        ("⬇", egui::Color32::RED)
                    };
                    ui.label(egui::RichText::new(format!("{} {}", arrow, delta.text)).color(color));
                }
            });
        });
    }

    pub fn render(ui: &mut egui::Ui, data: Option<&DashboardData>) {
        let Some(data) = data else {
            ui.label(egui::RichText::new("Waiting for data...").italics().weak());
            return;
        };

        let cards = metric_cards(data);
        ui.columns(cards.len(), |columns| {
            for (column, card) in columns.iter_mut().zip(cards.iter()) {
                if let Some(card) = card {
                    Self::render_card(column, card);
                }
            }
        });
    }
}
