// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },
}

/// Why a single listing entry produced no record. Never fatal to the run.
#[derive(Error, Debug)]
pub enum ItemError {
    #[error("listing entry has no detail link")]
    MissingLink,

    #[error("bad detail link {href:?}: {source}")]
    BadLink {
        href: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Error, Debug)]
pub enum OpenError {
    #[error("file does not exist: {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum LogError {
    #[error("cannot open log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("logger already installed")]
    AlreadySet,
}
