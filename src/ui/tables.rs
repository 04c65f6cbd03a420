use eframe::egui;

use crate::common::format::helpers::format_thousands;
use crate::models::{Position, Strategy, Trade};

pub const POSITION_COLUMNS: [&str; 6] = ["Symbol", "Side", "Size", "Entry Price", "Mark Price", "Unrealized P/L"];
pub const STRATEGY_COLUMNS: [&str; 6] = ["ID", "Spot", "Future", "Target Basis", "Max Position", "Active"];
pub const TRADE_COLUMNS: [&str; 9] = [
    "ID", "Strategy", "Side", "Size", "Spot Price", "Future Price", "Basis", "Status", "Created At",
];

pub fn position_rows(positions: &[Position]) -> Vec<Vec<String>> {
    positions
        .iter()
        .map(|p| {
            vec![
                p.symbol.clone(),
                p.side.to_string(),
                format!("{:.4}", p.size),
                format_thousands(p.entry_price, 2),
                format_thousands(p.mark_price, 2),
                format!("{:+.2}", p.unrealized_pl),
            ]
        })
        .collect()
}

pub fn strategy_rows(strategies: &[Strategy]) -> Vec<Vec<String>> {
    strategies
        .iter()
        .map(|s| {
            vec![
                s.id.clone(),
                s.spot_symbol.clone(),
                s.future_symbol.clone(),
                format!("{:.2}%", s.target_basis),
                format!("{:.4}", s.max_position),
                if s.is_active { "✔".to_string() } else { "✘".to_string() },
            ]
        })
        .collect()
}

pub fn trade_rows(trades: &[Trade]) -> Vec<Vec<String>> {
    trades
        .iter()
        .map(|t| {
            vec![
                t.id.clone(),
                t.strategy_id.clone(),
                t.side.clone(),
                format!("{:.4}", t.size),
                format_thousands(t.spot_price, 2),
                format_thousands(t.future_price, 2),
                format!("{:.2}", t.basis),
                t.status.clone(),
                t.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            ]
        })
        .collect()
}

/// Striped grid with a bold header row
pub fn render_table(ui: &mut egui::Ui, id: &str, columns: &[&str], rows: &[Vec<String>]) {
    egui::ScrollArea::horizontal().id_salt(format!("{}_scroll", id)).show(ui, |ui| {
        egui::Grid::new(id)
            .striped(true)
            .num_columns(columns.len())
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for column in columns {
                    ui.label(egui::RichText::new(*column).strong());
                }
                ui.end_row();

                for row in rows {
                    for cell in row {
                        ui.label(egui::RichText::new(cell).monospace());
                    }
                    ui.end_row();
                }
            });
    });
}
