// src/gui/actions/scrape.rs
use std::{sync::mpsc, thread};

use eframe::egui;

use crate::{
    gui::{
        app::App,
        progress::{ChannelProgress, WorkerEvent},
    },
    runner,
};

/// Kick off a run on a worker thread. The UI hears back through `app.events`.
pub fn scrape(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }

    app.running = true;
    app.attempted = 0;
    app.log.clear();
    app.items.clear();
    app.last_file = None;

    let (tx, rx) = mpsc::channel::<WorkerEvent>();
    app.events = Some(rx);

    let opts = app.options.clone();
    let ctx = ctx.clone();

    tracing::info!("Scrape: Begin");

    let spawned = thread::Builder::new()
        .name(s!("scrape-worker"))
        .spawn(move || {
            let mut progress = ChannelProgress::new(tx.clone(), ctx.clone());
            // → This is where the scrape happens ←
            let summary = runner::run_default(&opts, &mut progress);
            let _ = tx.send(WorkerEvent::Finished(summary));
            ctx.request_repaint();
        });

    if let Err(e) = spawned {
        tracing::error!("Scrape: could not spawn worker: {e}");
        app.push_line(format!("Could not start scraping: {e}"));
        app.complete(None, Vec::new());
    }
}
