use std::future::Future;
use std::io;
use std::time::Duration;

use anyhow::{Context as _, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, EventStream};
use futures_util::StreamExt;
use ratatui::layout::Rect;
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use crate::core::session::Session;
use crate::core::words::WordSource;
use crate::window::app::WindowApp;
use crate::window::renderer::WindowRenderer;

const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Takes over the terminal until the player quits, restoring it on every exit path.
pub async fn run<S: WordSource>(session: Session<S>) -> Result<()> {
    let mut app = WindowApp::new(session);
    let mut terminal = ratatui::init();

    let result = guarded(
        || crossterm::execute!(io::stdout(), EnableMouseCapture),
        event_loop(&mut app, &mut terminal),
        restore_terminal,
    )
    .await;

    info!(rounds = app.rounds(), "window closed");
    result
}

/// Runs `body` once `setup` succeeds. `teardown` runs either way.
async fn guarded<F>(
    setup: impl FnOnce() -> io::Result<()>,
    body: F,
    teardown: impl FnOnce(),
) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    let result = match setup() {
        Ok(()) => body.await,
        Err(err) => Err(err).context("failed to enable mouse capture"),
    };
    teardown();
    result
}

fn restore_terminal() {
    if let Err(err) = crossterm::execute!(io::stdout(), DisableMouseCapture) {
        warn!(%err, "failed to disable mouse capture");
    }
    ratatui::restore();
}

async fn event_loop<S: WordSource>(
    app: &mut WindowApp<S>,
    terminal: &mut DefaultTerminal,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut render_timer = tokio::time::interval(FRAME_INTERVAL);

    while !app.should_quit() {
        tokio::select! {
            _ = render_timer.tick() => {
                let mut board_area = Rect::default();
                terminal.draw(|f| board_area = WindowRenderer::render(f, app))?;
                app.set_board_area(board_area);
            }

            event = events.next() => match event {
                Some(Ok(event)) => app.handle_event(&event)?,
                Some(Err(err)) => return Err(err).context("failed to read terminal events"),
                None => break,
            },
        }
    }
    Ok(())
}
