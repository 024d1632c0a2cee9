//! Background render thread for non-blocking UI rendering.
//!
//! The render thread owns the Terminal and draws snapshots of AppState
//! sent from the main event loop, so the loop stays responsive to
//! generation events and user input.

use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::thread::{self, JoinHandle};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use super::state::AppState;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Command sent to the render thread.
pub enum RenderCommand {
    /// Render this state snapshot
    Render(Box<AppState>),
    /// Shutdown the render thread
    Shutdown,
}

/// Handle to the background render thread.
pub struct RenderThread {
    /// Channel to send render commands
    cmd_tx: SyncSender<RenderCommand>,
    /// Thread join handle
    handle: Option<JoinHandle<()>>,
}

fn setup_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode().ok();
        return Err(e);
    }
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Term) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
}

fn render_loop(cmd_rx: Receiver<RenderCommand>) {
    let mut terminal = match setup_terminal() {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("Failed to set up terminal: {}", e);
            return;
        }
    };

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            RenderCommand::Render(state) => {
                if let Err(e) = terminal.draw(|f| crate::ui::render(f, &state)) {
                    tracing::error!("Render error: {}", e);
                }
            }
            RenderCommand::Shutdown => break,
        }
    }

    restore_terminal(&mut terminal);
}

impl RenderThread {
    /// Spawn a new render thread.
    ///
    /// The render thread takes ownership of terminal setup/teardown.
    /// Returns the handle for sending render commands.
    pub fn spawn() -> io::Result<Self> {
        // Channel with capacity 1 - only the latest state matters
        let (cmd_tx, cmd_rx) = mpsc::sync_channel::<RenderCommand>(1);

        let handle = thread::spawn(move || render_loop(cmd_rx));

        Ok(Self {
            cmd_tx,
            handle: Some(handle),
        })
    }

    /// Request a render of the given state (non-blocking).
    ///
    /// If the render thread is busy, the frame is skipped; the event loop
    /// sends a fresh snapshot on the next tick.
    pub fn render(&self, state: AppState) {
        match self.cmd_tx.try_send(RenderCommand::Render(Box::new(state))) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::trace!("Render thread busy, skipping frame");
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::error!("Render thread disconnected");
            }
        }
    }

    /// Shutdown the render thread and wait for it to finish.
    pub fn shutdown(mut self) {
        let _ = self.cmd_tx.send(RenderCommand::Shutdown);

        if let Some(handle) = self.handle.take() {
            handle.join().ok();
        }
    }
}
