use mosaiq::adapters::ReqwestHttpClient;
use mosaiq::app::App;
use mosaiq::config::UploadConfig;
use mosaiq::upload::UploadRequest;
use mosaiq::{logging, terminal, ui};

use color_eyre::Result;
use crossterm::event::{
    Event, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    terminal::setup_panic_hook();

    let log_path = logging::init(None)?;
    tracing::info!(version = VERSION, "mosaiq starting");

    // The endpoint and body are integration configuration; without an
    // endpoint there is nothing the Upload button could do, so fail fast
    // with a readable message instead of entering the TUI.
    let config = UploadConfig::load()?;
    let request = match UploadRequest::from_config(&config) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("mosaiq: {err}");
            std::process::exit(2);
        }
    };
    tracing::info!(url = %request.url, log = %log_path.display(), "upload target configured");

    let mut builder = reqwest::Client::builder();
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = ReqwestHttpClient::with_client(builder.build()?);

    let mut app = App::new(Arc::new(client), request);

    let mut stdout = io::stdout();
    terminal::enter_tui_mode(&mut stdout)?;
    let backend = CrosstermBackend::new(stdout);
    let mut term = Terminal::new(backend)?;

    let result = run_app(&mut term, &mut app).await;

    terminal::leave_tui_mode(term.backend_mut());
    tracing::info!(fired = app.uploads_fired, "mosaiq exiting");
    result
}

/// Main event loop.
///
/// Redraws when dirty, then waits on either the animation tick or the next
/// terminal event. Upload tasks spawned from here run detached; their
/// completions land in the log in whatever order the network produces.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                let Some(Ok(event)) = event_result else {
                    // Event stream closed: terminal is gone
                    return Ok(());
                };

                match event {
                    Event::Resize(width, height) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        match key.code {
                            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                app.quit();
                            }
                            KeyCode::Char('q') | KeyCode::Esc => {
                                app.quit();
                            }
                            // Keyboard parity with the mouse click
                            KeyCode::Enter | KeyCode::Char(' ') => {
                                let _ = ui::handle_click_action(
                                    app,
                                    ui::interaction::ClickAction::Upload,
                                );
                            }
                            _ => {}
                        }
                    }
                    Event::Mouse(mouse_event) => {
                        match mouse_event.kind {
                            MouseEventKind::Down(MouseButton::Left) => {
                                app.last_mouse = Some((mouse_event.column, mouse_event.row));
                                if let Some(action) = app
                                    .hit_registry
                                    .hit_test(mouse_event.column, mouse_event.row)
                                {
                                    let _ = ui::handle_click_action(app, action);
                                }
                            }
                            MouseEventKind::Moved => {
                                app.last_mouse = Some((mouse_event.column, mouse_event.row));
                                if app
                                    .hit_registry
                                    .update_hover(mouse_event.column, mouse_event.row)
                                {
                                    app.mark_dirty();
                                }
                            }
                            _ => {}
                        }
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
