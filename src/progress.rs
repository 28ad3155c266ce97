// src/progress.rs
/// Lightweight progress reporting used by the scrape run.
/// Frontends (GUI/CLI) implement this to surface status to users.
/// Lines arrive in emission order and are meant to be appended, never reordered.
pub trait Progress {
    /// Called at the start with the item ceiling for this run.
    fn begin(&mut self, _limit: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each counted item attempt, successful or not.
    fn item_done(&mut self, _attempted: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints each line to stdout. Used by the CLI.
pub struct StdoutProgress;
impl Progress for StdoutProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}

/// Keeps every line in memory.
#[derive(Default)]
pub struct LineBuffer {
    pub lines: Vec<String>,
}

impl Progress for LineBuffer {
    fn log(&mut self, msg: &str) {
        self.lines.push(s!(msg));
    }
}

/// Emit a line to the sink and mirror it into the debug log.
pub(crate) fn note(progress: &mut dyn Progress, msg: impl AsRef<str>) {
    let msg = msg.as_ref();
    tracing::info!("{msg}");
    progress.log(msg);
}
