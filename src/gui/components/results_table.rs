// src/gui/components/results_table.rs

use eframe::egui::{self, Label};
use egui_extras::{Column, TableBuilder};

use crate::{config::consts::HEADERS, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.label(format!("Results: {} book(s)", app.items.len()));

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::initial(180.0).resizable(true).clip(true)) // Name
        .column(Column::auto())                                    // Price
        .column(Column::auto())                                    // Rating
        .column(Column::initial(150.0).resizable(true).clip(true)) // Stock
        .column(Column::remainder().clip(true))                    // Description
        .header(20.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, app.items.len(), |mut row| {
                let Some(item) = app.items.get(row.index()) else { return };
                for cell in [&item.name, &item.price, &item.rating, &item.stock, &item.description] {
                    row.col(|ui| {
                        ui.add(Label::new(cell.as_str()).truncate());
                    });
                }
            });
        });
}
