use eframe::egui;

use crate::api::Notice;
use crate::config::{
    DEFAULT_FUTURE_SYMBOL, DEFAULT_MAX_POSITION, DEFAULT_MIN_TRADE_SIZE, DEFAULT_SPOT_SYMBOL,
    DEFAULT_TARGET_BASIS, MAX_POSITION_STEP, MIN_TRADE_SIZE_STEP, TARGET_BASIS_STEP,
};
use crate::models::NewStrategy;
use super::notices::render_notice;

/// "Add New Strategy" form.
///
/// Numeric inputs cannot go below zero; nothing else is validated locally,
/// the backend has the final word.
#[derive(Debug, Clone)]
pub struct StrategyForm {
    spot_symbol: String,
    future_symbol: String,
    target_basis: f64,
    max_position: f64,
    min_trade_size: f64,
    is_active: bool,
}

impl Default for StrategyForm {
    fn default() -> Self {
        Self {
            spot_symbol: DEFAULT_SPOT_SYMBOL.to_string(),
            future_symbol: DEFAULT_FUTURE_SYMBOL.to_string(),
            target_basis: DEFAULT_TARGET_BASIS,
            max_position: DEFAULT_MAX_POSITION,
            min_trade_size: DEFAULT_MIN_TRADE_SIZE,
            is_active: true,
        }
    }
}

impl StrategyForm {
    pub fn to_request(&self) -> NewStrategy {
        NewStrategy {
            spot_symbol: self.spot_symbol.clone(),
            future_symbol: self.future_symbol.clone(),
            target_basis: self.target_basis,
            max_position: self.max_position,
            min_trade_size: self.min_trade_size,
            is_active: self.is_active,
        }
    }

    fn number_row(ui: &mut egui::Ui, label: &str, value: &mut f64, step: f64, decimals: usize) {
        ui.label(label);
        ui.add(
            egui::DragValue::new(value)
                .speed(step)
                .range(0.0..=f64::INFINITY)
                .fixed_decimals(decimals),
        );
        ui.end_row();
    }

    /// Draw the form; returns the request when "Add Strategy" was clicked
    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        submitting: bool,
        last_outcome: Option<&Notice>,
    ) -> Option<NewStrategy> {
        let mut submitted = None;

        ui.group(|ui| {
            ui.heading("🎯 Strategy Management");
            ui.separator();
            ui.label(egui::RichText::new("Add New Strategy").strong());

            egui::Grid::new("strategy_form_grid")
                .num_columns(2)
                .spacing([10.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Spot Symbol");
                    ui.text_edit_singleline(&mut self.spot_symbol);
                    ui.end_row();

                    ui.label("Future Symbol");
                    ui.text_edit_singleline(&mut self.future_symbol);
                    ui.end_row();

                    Self::number_row(ui, "Target Basis (%)", &mut self.target_basis, TARGET_BASIS_STEP, 2);
                    Self::number_row(ui, "Max Position Size", &mut self.max_position, MAX_POSITION_STEP, 2);
                    Self::number_row(ui, "Min Trade Size", &mut self.min_trade_size, MIN_TRADE_SIZE_STEP, 3);

                    ui.label("Active");
                    ui.checkbox(&mut self.is_active, "");
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.add_enabled(!submitting, egui::Button::new("➕ Add Strategy")).clicked() {
                    submitted = Some(self.to_request());
                }
                if submitting {
                    ui.spinner();
                }
            });

            if let Some(notice) = last_outcome {
                ui.add_space(4.0);
                render_notice(ui, notice);
            }
        });

        submitted
    }
}
