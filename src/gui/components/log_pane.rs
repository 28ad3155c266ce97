// src/gui/components/log_pane.rs

use eframe::egui::{self, RichText, ScrollArea};

use crate::gui::app::App;

/// Read-only, follows the tail while new lines arrive.
pub fn draw(ui: &mut egui::Ui, app: &App) {
    ScrollArea::vertical()
        .id_salt("log_pane")
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for line in &app.log {
                ui.label(RichText::new(line).monospace());
            }
        });
}
