// src/core/mod.rs

pub mod html;
pub mod net;
pub mod open;

pub use net::{Fetch, HttpFetcher};
pub use open::{Opener, system_opener};
