// src/gui/components/controls.rs

use eframe::egui::{self, widgets::Spinner, Button, ProgressBar};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.vertical_centered(|ui| {
        ui.add_space(6.0);
        ui.heading("Web Scraper for books.toscrape.com");
        ui.add_space(4.0);
    });

    let mut start_clicked = false;
    let mut open_clicked = false;

    ui.horizontal(|ui| {
        start_clicked = ui
            .add_enabled(!app.running, Button::new("Start Scraping"))
            .clicked();

        open_clicked = ui
            .add_enabled(!app.running && app.last_file.is_some(), Button::new("Open Last CSV File"))
            .on_disabled_hover_text("No CSV file from the last run")
            .clicked();

        if app.running {
            ui.add(Spinner::new());
        }
    });

    if app.running || app.attempted > 0 {
        let limit = app.options.scrape.item_limit.max(1);
        let frac = app.attempted as f32 / limit as f32;
        ui.add(ProgressBar::new(frac.min(1.0)).text(format!("{}/{} books", app.attempted, limit)));
    }

    ui.add_space(4.0);

    // Handle clicks after the layout borrows end
    if start_clicked {
        actions::scrape(app, ui.ctx());
    }
    if open_clicked {
        actions::open(app);
    }
}
