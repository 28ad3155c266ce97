// src/gui/actions/open.rs
use crate::gui::app::App;

/// Open the last produced CSV in the system's default application.
/// Failures go to the log pane.
pub fn open(app: &mut App) {
    let Some(path) = app.last_file.clone() else { return };

    match app.opener.open(&path) {
        Ok(()) => tracing::info!("Opened file: {}", path.display()),
        Err(e) => {
            tracing::error!("Failed to open file: {e}");
            app.push_line(format!("Error opening file: {e}"));
        }
    }
}
