use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::loader::load_file;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Render the indicator and year-range selectors.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Indicator");
    ui.separator();

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Search");
        ui.text_edit_singleline(&mut state.indicator_search);
    });

    let current = state.selected_indicator.clone().unwrap_or_default();
    let mut chosen: Option<String> = None;
    egui::ComboBox::from_id_salt("indicator")
        .selected_text(&current)
        .width(ui.available_width())
        .height(400.0)
        .show_ui(ui, |ui: &mut Ui| {
            for name in state.matching_indicators() {
                if ui.selectable_label(current == name, name).clicked() {
                    chosen = Some(name.to_string());
                }
            }
        });
    if let Some(name) = chosen {
        state.select_indicator(&name);
    }

    ui.add_space(8.0);
    ui.heading("Years");
    ui.separator();

    if state.range_selector {
        let current = state.selected_range.clone();
        let labels: Vec<String> = state.ranges.labels().map(str::to_string).collect();
        egui::ComboBox::from_id_salt("year_range")
            .selected_text(&current)
            .show_ui(ui, |ui: &mut Ui| {
                for label in &labels {
                    if ui.selectable_label(current == *label, label).clicked() {
                        state.select_range(label);
                    }
                }
            });
    } else {
        ui.label(&state.selected_range);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the menu bar, counts and status line.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(path) = &state.source_path {
            ui.label(path.display().to_string());
            ui.separator();
        }
        ui.label(format!(
            "{} records, {} selected",
            state.table.len(),
            state.visible_indices.len()
        ));

        ui.separator();

        if ui
            .selectable_label(state.grid_selection_only, "Selection only")
            .clicked()
        {
            state.grid_selection_only = !state.grid_selection_only;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Replace the table with another file. A failed load keeps the current table.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open indicator data")
        .add_filter("CSV", &["csv", "txt"])
        .pick_file();

    if let Some(path) = file {
        match load_file(&path, &state.load_options) {
            Ok(table) => {
                log::info!(
                    "Loaded {} records from {} ({} indicators)",
                    table.len(),
                    path.display(),
                    table.indicator_names().len()
                );
                state.set_table(table, Some(path));
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
