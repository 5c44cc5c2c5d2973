use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Plot};

use crate::color::DecadePalette;
use crate::data::model::{AMOUNT_COLUMN, YEAR_COLUMN};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Amount-by-year bar chart (central panel, top half)
// ---------------------------------------------------------------------------

/// Render the selected indicator as one bar per year.
pub fn amount_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let indicator = state.selected_indicator.as_deref().unwrap_or("");
    if !state.table.has_amount_column() {
        placeholder(ui, height, "This file has no amount values".to_string());
        return;
    }

    let points = state.chart_points();
    if points.is_empty() {
        placeholder(
            ui,
            height,
            format!("No data for {indicator} in {}", state.selected_range),
        );
        return;
    }

    let palette = match state.ranges.get(&state.selected_range) {
        Some(range) => DecadePalette::new(range.first, range.last),
        None => DecadePalette::new(0, 0),
    };

    let bars: Vec<Bar> = points
        .iter()
        .map(|&(year, amount)| {
            Bar::new(year as f64, amount)
                .width(0.8)
                .fill(palette.color_for(year))
                .name(year.to_string())
        })
        .collect();

    Plot::new("amount_chart")
        .height(height)
        .x_axis_label(YEAR_COLUMN)
        .y_axis_label(AMOUNT_COLUMN)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(indicator));
        });
}

fn placeholder(ui: &mut Ui, height: f32, text: String) {
    ui.allocate_ui(eframe::egui::vec2(ui.available_width(), height), |ui: &mut Ui| {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(text);
        });
    });
}
