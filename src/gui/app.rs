// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use eframe::egui;

use crate::{
    config::options::AppOptions,
    core::open::{system_opener, Opener},
    data::CatalogueItem,
};

use super::{
    components::{controls, log_pane, results_table},
    progress::WorkerEvent,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Book Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppOptions::default())))),
    )?;
    Ok(())
}

pub struct App {
    pub options: AppOptions,
    pub opener: Box<dyn Opener>,

    // log pane, append-only during a run
    pub log: Vec<String>,

    // last run's records for the preview table
    pub items: Vec<CatalogueItem>,

    // set only when the run produced a file that exists
    pub last_file: Option<PathBuf>,

    // worker state
    pub running: bool,
    pub attempted: usize,
    pub events: Option<Receiver<WorkerEvent>>,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        Self::with_opener(options, system_opener())
    }

    pub fn with_opener(options: AppOptions, opener: Box<dyn Opener>) -> Self {
        tracing::info!(?options, "Init");
        Self {
            options,
            opener,
            log: Vec::new(),
            items: Vec::new(),
            last_file: None,
            running: false,
            attempted: 0,
            events: None,
        }
    }

    #[inline]
    pub fn push_line<T: Into<String>>(&mut self, line: T) {
        self.log.push(line.into());
    }

    /// Pull everything the worker has sent since the last frame.
    pub fn drain_events(&mut self) {
        let Some(rx) = self.events.take() else { return };

        loop {
            match rx.try_recv() {
                Ok(WorkerEvent::Line(line)) => self.log.push(line),
                Ok(WorkerEvent::Attempted(n)) => self.attempted = n,
                Ok(WorkerEvent::Finished(summary)) => {
                    tracing::info!(stop = %summary.stop, kept = summary.items.len(), "Worker: finished");
                    self.complete(summary.output, summary.items);
                    return;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::error!("Worker: channel closed without a result");
                    self.push_line("Scrape worker stopped unexpectedly.");
                    self.complete(None, Vec::new());
                    return;
                }
            }
        }
        self.events = Some(rx);
    }

    /// Terminal state of a run. The open button keys off `last_file`.
    pub fn complete(&mut self, output: Option<PathBuf>, items: Vec<CatalogueItem>) {
        self.running = false;
        self.events = None;
        self.items = items;
        self.last_file = output.filter(|p| p.exists());
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            controls::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("results")
            .resizable(true)
            .show_animated(ctx, !self.items.is_empty(), |ui| {
                results_table::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            log_pane::draw(ui, self);
        });

        if self.running {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
