use eframe::egui;

use crate::state::AppState;
use crate::ui::{grid, panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub title: String,
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(title: String, state: AppState) -> Self {
        Self { title, state }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar + title ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
            ui.vertical_centered(|ui| {
                ui.heading(&self.title);
            });
        });

        // ---- Left side panel: selectors ----
        egui::SidePanel::left("selection_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: chart above grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let chart_height = ui.available_height() * 0.45;
            plot::amount_chart(ui, &self.state, chart_height);
            ui.separator();
            grid::data_grid(ui, &self.state);
        });
    }
}
