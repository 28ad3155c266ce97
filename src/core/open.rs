// src/core/open.rs

// Hand a file to the host's default application.
// The platform launcher is picked once, at startup.

use std::path::Path;
use std::process::Command;

use crate::error::OpenError;

pub trait Opener: Send + Sync {
    fn open(&self, path: &Path) -> Result<(), OpenError>;
}

/// Spawns `program [lead_args..] <path>` and does not wait for it.
pub struct CommandOpener {
    program: &'static str,
    lead_args: &'static [&'static str],
}

impl CommandOpener {
    #[cfg(target_os = "windows")]
    pub const fn platform() -> Self {
        // `start` treats the first quoted argument as the window title
        Self { program: "cmd", lead_args: &["/C", "start", ""] }
    }

    #[cfg(target_os = "macos")]
    pub const fn platform() -> Self {
        Self { program: "open", lead_args: &[] }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    pub const fn platform() -> Self {
        Self { program: "xdg-open", lead_args: &[] }
    }
}

impl Opener for CommandOpener {
    fn open(&self, path: &Path) -> Result<(), OpenError> {
        if !path.exists() {
            return Err(OpenError::Missing(path.to_path_buf()));
        }
        Command::new(self.program)
            .args(self.lead_args)
            .arg(path)
            .spawn()
            .map(|_| ())
            .map_err(|source| OpenError::Spawn { program: self.program, source })
    }
}

pub fn system_opener() -> Box<dyn Opener> {
    Box::new(CommandOpener::platform())
}
