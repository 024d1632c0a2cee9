//! Main event loop and generation event processing

use anyhow::Result;
use crossterm::event;
use std::time::Duration;

use crate::ai::AiEvent;
use crate::constants::{POLL_IDLE_MS, POLL_LOADING_MS};
use crate::input::{InputResult, handle_input};

use super::App;
use super::render_thread::RenderThread;

impl App {
    pub(crate) async fn event_loop(&mut self, render_thread: &RenderThread) -> Result<()> {
        loop {
            // Process settlement events from the generation actor (non-blocking)
            if self.process_ai_events() {
                self.dirty = true;
            }

            // Clear expired errors
            if self.state.clear_error_if_expired() {
                self.dirty = true;
            }

            // Render only when dirty (non-blocking - sends to render thread)
            if self.dirty {
                render_thread.render(self.state.clone());
                self.dirty = false;
            }

            // Handle input (faster poll while loading so the spinner animates)
            let poll_timeout = if self.state.status.loading {
                POLL_LOADING_MS
            } else {
                POLL_IDLE_MS
            };
            if event::poll(Duration::from_millis(poll_timeout))? {
                let evt = event::read()?;
                // Any input event (including resize) requires re-render
                self.dirty = true;
                match handle_input(evt, &self.state, &self.bindings) {
                    InputResult::Quit => break,
                    InputResult::Action(action) => {
                        self.state.acknowledge_error();
                        self.handle_action(action).await?;
                    }
                    InputResult::Char(c) => {
                        self.state.acknowledge_error();
                        self.handle_char(c);
                    }
                    InputResult::Backspace => {
                        self.state.acknowledge_error();
                        self.handle_backspace();
                    }
                    InputResult::Continue => {}
                }
            }

            // Keep repainting while an attempt is in flight
            if self.state.status.loading {
                self.dirty = true;
            }
        }

        Ok(())
    }

    /// Process events from the generation actor. Returns true if any events
    /// were processed.
    pub(crate) fn process_ai_events(&mut self) -> bool {
        let Some(ref mut ai) = self.ai_actor else {
            return false;
        };

        let mut had_events = false;
        while let Ok(event) = ai.event_rx.try_recv() {
            had_events = true;
            match event {
                AiEvent::Reply { seq, text } => {
                    if self.state.settle_attempt(seq, Ok(text)) {
                        self.state.set_status("Reply ready");
                    } else {
                        tracing::debug!("discarded stale reply for attempt {}", seq);
                    }
                }
                AiEvent::Failed { seq, error } => {
                    if !self.state.settle_attempt(seq, Err(error)) {
                        tracing::debug!("discarded stale failure for attempt {}", seq);
                    }
                }
            }
        }
        had_events
    }
}
