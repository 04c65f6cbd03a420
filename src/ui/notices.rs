use eframe::egui;

use crate::api::{Notice, NoticeLevel};

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 100, 100);

fn framed(ui: &mut egui::Ui, color: egui::Color32, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, color))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal_wrapped(add_contents);
        });
}

pub fn render_notice(ui: &mut egui::Ui, notice: &Notice) {
    let (icon, color) = match notice.level {
        NoticeLevel::Success => ("✅", egui::Color32::LIGHT_GREEN),
        NoticeLevel::Error => ("⚠", ERROR_COLOR),
    };

    framed(ui, color, |ui| {
        ui.label(egui::RichText::new(icon).color(color));
        ui.label(egui::RichText::new(&notice.message).color(color));
        ui.label(
            egui::RichText::new(notice.at.format("%H:%M:%S").to_string())
                .small()
                .weak(),
        );
    });
}

/// Informational placeholder shown instead of an empty chart or table
pub fn render_placeholder(ui: &mut egui::Ui, text: &str) {
    framed(ui, egui::Color32::LIGHT_BLUE, |ui| {
        ui.label(egui::RichText::new("ℹ").color(egui::Color32::LIGHT_BLUE));
        ui.label(egui::RichText::new(text).color(egui::Color32::LIGHT_BLUE));
    });
}
