use eframe::egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::AMOUNT_HIGHLIGHT;
use crate::data::model::ColumnKind;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Data grid (central panel, bottom half)
// ---------------------------------------------------------------------------

/// Render every column of the table; the amount column is highlighted.
pub fn data_grid(ui: &mut Ui, state: &AppState) {
    let columns = state.table.columns();
    let rows = state.grid_rows();
    let records = state.table.records();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .auto_shrink([false, false])
        .columns(Column::auto().at_least(60.0).clip(true), columns.len())
        .header(22.0, |mut header| {
            for col in &columns {
                header.col(|ui: &mut Ui| {
                    ui.strong(&col.name);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let record = &records[rows[row.index()]];
                for col in &columns {
                    row.col(|ui: &mut Ui| {
                        let text = record.display(col.kind);
                        if col.kind == ColumnKind::Amount {
                            ui.painter().rect_filled(ui.max_rect(), 0.0, AMOUNT_HIGHLIGHT);
                            ui.label(RichText::new(text).color(Color32::BLACK));
                        } else {
                            ui.label(text);
                        }
                    });
                }
            });
        });
}
