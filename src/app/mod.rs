//! Application state.
//!
//! [`App`] owns everything the event loop touches: the dirty/quit flags, the
//! hit area registry, and the handle used to fire uploads. Uploads
//! themselves are stateless with respect to the app: each click spawns an
//! independent task and the app keeps no record of it beyond a counter of
//! how many were fired.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::traits::HttpClient;
use crate::ui::interaction::HitAreaRegistry;
use crate::upload::{spawn_upload, UploadOutcome, UploadRequest};

/// Top-level application state.
pub struct App {
    /// Whether the event loop should exit
    pub should_quit: bool,
    /// Whether the UI needs a redraw on the next loop iteration
    pub needs_redraw: bool,
    /// Tick counter for animations
    pub tick_count: u64,
    /// Terminal width in columns
    pub terminal_width: u16,
    /// Terminal height in rows
    pub terminal_height: u16,
    /// Registry of clickable regions, rebuilt every render
    pub hit_registry: HitAreaRegistry,
    /// Last known mouse position, so hover survives redraws that are not
    /// caused by a mouse move (clicks, resizes)
    pub last_mouse: Option<(u16, u16)>,
    /// Number of uploads fired since startup (fired, not settled)
    pub uploads_fired: u64,
    /// HTTP client shared by all spawned uploads
    client: Arc<dyn HttpClient>,
    /// The request each click sends
    request: UploadRequest,
}

impl App {
    /// Create a new App around an HTTP client and a resolved upload request.
    pub fn new(client: Arc<dyn HttpClient>, request: UploadRequest) -> Self {
        Self {
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            terminal_width: 0,
            terminal_height: 0,
            hit_registry: HitAreaRegistry::new(),
            last_mouse: None,
            uploads_fired: 0,
            client,
            request,
        }
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Request the event loop to exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance the animation tick.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    /// Record new terminal dimensions after a resize.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    /// Fire one upload for one click.
    ///
    /// Spawns a detached task that performs the POST and logs the outcome.
    /// Nothing about the outcome flows back into the UI; the returned handle
    /// exists so tests can await settlement.
    pub fn handle_upload_click(&mut self) -> JoinHandle<UploadOutcome> {
        self.uploads_fired += 1;
        tracing::debug!(
            fired = self.uploads_fired,
            url = %self.request.url,
            "upload click"
        );
        spawn_upload(self.client.clone(), self.request.clone())
    }
}
