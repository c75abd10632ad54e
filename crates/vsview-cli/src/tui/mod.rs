//! TUI Renderer for the column browser
//!
//! This module implements the event loop and screen rendering.
//!
//! ## Design:
//! - `NavigationController` owns the navigation state; the renderer only
//!   forwards commands to it and draws what it exposes
//! - Renderer owns pure UI state (data pane scroll offset)
//! - Fetches run on the `FetchWorker`; results are drained from the
//!   channel between frames so input stays live while a request is out

mod keymap;
mod ui;
pub mod views;

use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use vsview_runtime::{Effect, FetchRequest, FetchResponse, FetchWorker, NavigationController};
use vsview_types::Error;

pub use keymap::{map_key, Action, PAGE_LINES};
pub use ui::draw;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct BrowserRenderer {
    controller: NavigationController,

    /// UI State: data pane scroll offset
    data_scroll: u16,

    /// UI State: Should quit flag
    should_quit: bool,
}

impl BrowserRenderer {
    pub fn new(controller: NavigationController) -> Self {
        Self {
            controller,
            data_scroll: 0,
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    pub fn data_scroll(&self) -> u16 {
        self.data_scroll
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set up the terminal, run the event loop, restore the terminal.
    ///
    /// Failing to take over the terminal is fatal and reported as
    /// [`Error::DisplaySurfaceFailed`].
    pub fn run(mut self, worker: &FetchWorker, responses: Receiver<FetchResponse>) -> Result<()> {
        install_panic_hook();
        let mut terminal = setup_terminal().map_err(|e| {
            tracing::error!(error = %e, "cannot initialize terminal");
            Error::DisplaySurfaceFailed(e.to_string())
        })?;

        let result = self.event_loop(&mut terminal, worker, &responses);
        let restored = restore_terminal(&mut terminal);
        first_error(result, restored)
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        worker: &FetchWorker,
        responses: &Receiver<FetchResponse>,
    ) -> Result<()> {
        loop {
            terminal
                .draw(|f| ui::draw(f, &self.controller, self.data_scroll))
                .map_err(|e| Error::DisplaySurfaceFailed(e.to_string()))?;

            if event::poll(POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
                && let Some(request) = self.handle_key_event(key)
            {
                worker.submit(request)?;
            }

            self.drain_responses(responses)?;

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Apply input; returns a fetch the caller must submit.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<FetchRequest> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let action = map_key(key, self.controller.focus())?;
        match action {
            Action::Nav(command) => match self.controller.handle(command) {
                Effect::None => None,
                Effect::Fetch(request) => Some(request),
                Effect::Exit => {
                    self.should_quit = true;
                    None
                }
            },
            Action::ScrollUp(lines) => {
                self.data_scroll = self.data_scroll.saturating_sub(lines);
                None
            }
            Action::ScrollDown(lines) => {
                self.data_scroll = self.data_scroll.saturating_add(lines);
                None
            }
            Action::ScrollTop => {
                self.data_scroll = 0;
                None
            }
        }
    }

    /// Apply every response waiting on the channel.
    pub fn drain_responses(&mut self, responses: &Receiver<FetchResponse>) -> Result<()> {
        loop {
            match responses.try_recv() {
                Ok(response) => {
                    if self.controller.complete(response) {
                        self.data_scroll = 0;
                    }
                }
                Err(TryRecvError::Empty) => return Ok(()),
                Err(TryRecvError::Disconnected) => {
                    return Err(vsview_runtime::Error::WorkerStopped)
                        .context("fetch results channel closed");
                }
            }
        }
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let entered = execute!(stdout, EnterAlternateScreen);
    let terminal = entered.and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));
    if terminal.is_err() {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
    terminal
}

/// Put the terminal back before the default hook prints the panic message.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        previous(info);
    }));
}

/// The event loop's error wins over a failure to restore the terminal.
fn first_error(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(e), Err(restore)) => {
            tracing::warn!(error = %restore, "failed to restore terminal");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => restored,
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::mpsc::channel;
    use vsview_runtime::NavState;
    use vsview_testing::fixtures::SMALLCAPS_RECORD;
    use vsview_testing::ScriptedTreeClient;
    use vsview_types::StoragePath;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn started(client: &ScriptedTreeClient) -> BrowserRenderer {
        let mut controller = NavigationController::new(StoragePath::default(), 3);
        let request = controller.start();
        controller.complete(request.run(client));
        BrowserRenderer::new(controller)
    }

    #[test]
    fn test_enter_issues_fetch_and_response_applies() {
        let client = ScriptedTreeClient::new()
            .with_children("published", &["a"])
            .with_leaf("published.a", SMALLCAPS_RECORD);
        let mut renderer = started(&client);
        renderer.data_scroll = 4;

        let request = renderer.handle_key_event(press(KeyCode::Enter)).unwrap();
        let (tx, rx) = channel();
        tx.send(request.run(&client)).unwrap();
        renderer.drain_responses(&rx).unwrap();

        assert_eq!(renderer.controller().mode(), NavState::LeafDisplay(0));
        assert_eq!(renderer.data_scroll(), 0);
    }

    #[test]
    fn test_closed_channel_is_an_error() {
        let client = ScriptedTreeClient::new().with_children("published", &["a"]);
        let mut renderer = started(&client);
        let (tx, rx) = channel::<FetchResponse>();
        drop(tx);

        assert!(renderer.drain_responses(&rx).is_err());
    }

    #[test]
    fn test_quit_keys() {
        let client = ScriptedTreeClient::new().with_children("published", &["a"]);
        let mut renderer = started(&client);

        renderer.handle_key_event(press(KeyCode::Char('q')));
        assert!(renderer.should_quit());

        let mut renderer = started(&client);
        renderer.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(renderer.should_quit());
    }

    #[test]
    fn test_loop_error_outranks_restore_error() {
        let result = first_error(
            Err(anyhow::anyhow!("fetch results channel closed")),
            Err(anyhow::anyhow!("tty gone")),
        );
        assert_eq!(result.unwrap_err().to_string(), "fetch results channel closed");

        let result = first_error(Ok(()), Err(anyhow::anyhow!("tty gone")));
        assert_eq!(result.unwrap_err().to_string(), "tty gone");
        assert!(first_error(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_data_pane_scrolls_only_with_focus() {
        let client = ScriptedTreeClient::new().with_children("published", &["a"]);
        let mut renderer = started(&client);

        renderer.handle_key_event(press(KeyCode::Char('j')));
        assert_eq!(renderer.data_scroll(), 0);

        renderer.handle_key_event(press(KeyCode::Char('s')));
        renderer.handle_key_event(press(KeyCode::Char('j')));
        renderer.handle_key_event(press(KeyCode::PageDown));
        assert_eq!(renderer.data_scroll(), 1 + PAGE_LINES);

        renderer.handle_key_event(press(KeyCode::Home));
        assert_eq!(renderer.data_scroll(), 0);
    }
}
