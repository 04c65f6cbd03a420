use chrono::{Local, TimeZone};
use eframe::egui;
use egui_plot::{AxisHints, Bar, BarChart, Corner, Legend, Line, Plot, PlotPoints, Points};

use super::basis::BasisSeries;
use super::positions::PositionBars;

/// Series palette for basis pairs
const PAIR_COLORS: [egui::Color32; 6] = [
    egui::Color32::from_rgb(0, 150, 255),
    egui::Color32::from_rgb(255, 150, 0),
    egui::Color32::from_rgb(150, 100, 255),
    egui::Color32::from_rgb(0, 200, 100),
    egui::Color32::from_rgb(255, 100, 150),
    egui::Color32::from_rgb(100, 200, 220),
];

pub struct ChartRenderer;

impl ChartRenderer {
    /// Unix seconds to local wall-clock time for the x-axis
    fn format_time_axis(seconds: f64) -> String {
        let secs = seconds.floor();
        let nanos = ((seconds - secs) * 1e9) as u32;
        match Local.timestamp_opt(secs as i64, nanos).single() {
            Some(time) => time.format("%H:%M:%S").to_string(),
            None => String::new(),
        }
    }

    /// Symbol name under an integer bar slot, blank between slots
    fn format_symbol_axis(symbols: &[String], value: f64) -> String {
        let slot = value.round();
        if (value - slot).abs() > 1e-6 || slot < 0.0 {
            return String::new();
        }
        symbols.get(slot as usize).cloned().unwrap_or_default()
    }

    pub fn render_basis_chart(ui: &mut egui::Ui, series: &[BasisSeries], height: f32) {
        ui.label(egui::RichText::new("Basis Percentage Over Time").strong().size(14.0));

        let x_axis = AxisHints::new_x()
            .label("Time")
            .formatter(|mark, _range| Self::format_time_axis(mark.value));
        let y_axis = AxisHints::new_y().label("Basis %");

        Plot::new("basis_plot")
            .legend(Legend::default().position(Corner::LeftTop))
            .height(height)
            .show_axes([true, true])
            .custom_x_axes(vec![x_axis])
            .custom_y_axes(vec![y_axis])
            .label_formatter(|name, value| {
                let time = Self::format_time_axis(value.x);
                if name.is_empty() {
                    format!("{}\n{:.4}%", time, value.y)
                } else {
                    format!("{}\n{}\n{:.4}%", name, time, value.y)
                }
            })
            .show(ui, |plot_ui| {
                for (idx, s) in series.iter().enumerate() {
                    let color = PAIR_COLORS[idx % PAIR_COLORS.len()];
                    let line_points: PlotPoints = s.points.clone().into();
                    let marker_points: PlotPoints = s.points.clone().into();

                    plot_ui.line(Line::new(line_points).color(color).name(&s.pair).width(2.0));
                    plot_ui.points(Points::new(marker_points).color(color).name(&s.pair).radius(3.0));
                }
            });
    }

    pub fn render_position_chart(ui: &mut egui::Ui, chart: &PositionBars, height: f32) {
        ui.label(egui::RichText::new("Current Positions").strong().size(14.0));

        let symbols = chart.symbols.clone();
        let x_axis = AxisHints::new_x()
            .label("Symbol")
            .formatter(move |mark, _range| Self::format_symbol_axis(&symbols, mark.value));
        let y_axis = AxisHints::new_y().label("Size");

        let mut bar_charts: Vec<BarChart> = Vec::with_capacity(chart.groups.len());
        for group in &chart.groups {
            let bars: Vec<Bar> = group
                .bars
                .iter()
                .map(|(slot, size)| {
                    Bar::new(*slot as f64, *size)
                        .width(0.6)
                        .fill(group.color)
                        .name(&chart.symbols[*slot])
                })
                .collect();

            let below: Vec<&BarChart> = bar_charts.iter().collect();
            let bar_chart = BarChart::new(bars)
                .color(group.color)
                .name(group.side.to_string())
                .stack_on(&below);
            bar_charts.push(bar_chart);
        }

        Plot::new("position_plot")
            .legend(Legend::default().position(Corner::RightTop))
            .height(height)
            .show_axes([true, true])
            .custom_x_axes(vec![x_axis])
            .custom_y_axes(vec![y_axis])
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                for bar_chart in bar_charts {
                    plot_ui.bar_chart(bar_chart);
                }
            });
    }
}
