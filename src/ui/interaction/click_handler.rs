//! Click action handler.
//!
//! Processes click actions dispatched from the hit area registry,
//! translating them into App state mutations or spawned uploads.

use super::hit_area::ClickAction;
use crate::app::App;
use crate::upload::UploadOutcome;
use tokio::task::JoinHandle;

/// Handle a click action.
///
/// Called from the event loop when a mouse click lands on a registered hit
/// area. Returns the join handle of the spawned upload when the action fired
/// one, so tests can await settlement; the event loop ignores it.
pub fn handle_click_action(app: &mut App, action: ClickAction) -> Option<JoinHandle<UploadOutcome>> {
    // Any click action likely changes state
    app.mark_dirty();

    match action {
        ClickAction::Upload => {
            tracing::debug!("Click: Upload");
            Some(app.handle_upload_click())
        }
        ClickAction::Quit => {
            tracing::debug!("Click: Quit");
            app.quit();
            None
        }
    }
}
