// src/gui/progress.rs
use std::sync::mpsc::Sender;

use eframe::egui;

use crate::{progress::Progress, runner::RunSummary};

/// What the scrape worker sends back to the UI thread, in order.
/// `Finished` is always the last event of a run.
pub enum WorkerEvent {
    Line(String),
    Attempted(usize),
    Finished(RunSummary),
}

/// Forwards progress over the channel and wakes the UI.
pub struct ChannelProgress {
    tx: Sender<WorkerEvent>,
    ctx: egui::Context,
}

impl ChannelProgress {
    pub fn new(tx: Sender<WorkerEvent>, ctx: egui::Context) -> Self {
        Self { tx, ctx }
    }

    fn send(&self, ev: WorkerEvent) {
        // UI gone → nobody to tell
        let _ = self.tx.send(ev);
        self.ctx.request_repaint();
    }
}

impl Progress for ChannelProgress {
    fn log(&mut self, msg: &str) {
        self.send(WorkerEvent::Line(s!(msg)));
    }
    fn item_done(&mut self, attempted: usize) {
        self.send(WorkerEvent::Attempted(attempted));
    }
}
