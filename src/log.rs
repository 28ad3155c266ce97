// src/log.rs
use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing::Level;
use tracing_subscriber::{filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::consts::{LOG_FILE, STORE_DIR},
    error::LogError,
};

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

/// Our own events at DEBUG; dependencies (html5ever, reqwest, hyper, …) only from WARN.
pub fn targets() -> Targets {
    Targets::new()
        .with_default(Level::WARN)
        .with_target(env!("CARGO_CRATE_NAME"), Level::DEBUG)
}

/// Route `tracing` events to `.store/debug.log`, appending across runs.
pub fn init() -> Result<(), LogError> {
    init_in(Path::new(STORE_DIR))
}

/// Same as `init`, with the log file placed in `dir`.
pub fn init_in(dir: &Path) -> Result<(), LogError> {
    fs::create_dir_all(dir)?;
    let file = OpenOptions::new().create(true).append(true).open(dir.join(LOG_FILE))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(targets())
        .try_init()
        .map_err(|_| LogError::AlreadySet)
}
