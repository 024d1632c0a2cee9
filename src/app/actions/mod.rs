//! Action handlers for user input
//!
//! This module is split into focused submodules:
//! - `generate`: Generation attempts and clipboard copy
//! - `draft`: Saving and browsing drafts
//! - `input`: Text input handling

mod draft;
mod generate;
mod input;

use anyhow::Result;

use crate::app::state::{Field, ModalState, View};
use crate::constants::PAGE_SCROLL_LINES;
use crate::input::Action;

use super::App;

impl App {
    pub(crate) async fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            // Navigation
            Action::Up => {
                if self.state.modal.is_help() {
                    self.help_scroll_up();
                } else if matches!(self.state.view, View::Drafts) {
                    self.state.drafts_move_up();
                } else if self.state.focus == Field::Tone {
                    self.state.cycle_tone_prev();
                } else {
                    self.state.scroll_reply_by(-1);
                }
            }
            Action::Down => {
                if self.state.modal.is_help() {
                    self.help_scroll_down();
                } else if matches!(self.state.view, View::Drafts) {
                    self.state.drafts_move_down();
                } else if self.state.focus == Field::Tone {
                    self.state.cycle_tone_next();
                } else {
                    self.state.scroll_reply_by(1);
                }
            }
            Action::PageUp => self.state.scroll_reply_by(-(PAGE_SCROLL_LINES as i32)),
            Action::PageDown => self.state.scroll_reply_by(PAGE_SCROLL_LINES as i32),
            Action::NextField => {
                if matches!(self.state.view, View::Compose) {
                    self.state.focus = self.state.focus.next();
                }
            }
            Action::PrevField => {
                if matches!(self.state.view, View::Compose) {
                    self.state.focus = self.state.focus.prev();
                }
            }

            // Generation
            Action::Generate => self.start_generation().await,
            Action::Regenerate => self.regenerate().await,

            // Reply handling
            Action::SaveDraft => self.save_current_draft(),
            Action::CopyReply => self.copy_to_clipboard(),

            // Views
            Action::ToggleDrafts => self.toggle_drafts_view(),
            Action::Back => self.go_back(),
            Action::Help => self.toggle_help(),
            Action::Quit => {} // Handled in event loop
        }
        Ok(())
    }

    fn toggle_drafts_view(&mut self) {
        if matches!(self.state.view, View::Drafts) {
            self.state.view = View::Compose;
        } else {
            self.state.view = View::Drafts;
            self.state
                .set_status(format!("{} draft(s)", self.state.drafts.len()));
        }
    }

    fn go_back(&mut self) {
        if self.state.modal.is_active() {
            self.state.modal = ModalState::None;
        } else if matches!(self.state.view, View::Drafts) {
            self.state.view = View::Compose;
        } else {
            // Esc on the compose view dismisses the current error early
            self.state.status.clear_error();
        }
    }

    fn toggle_help(&mut self) {
        if self.state.modal.is_help() {
            self.state.modal = ModalState::None;
        } else if !self.state.modal.is_active() {
            self.state.modal = ModalState::Help {
                keybindings: self.bindings.all_bindings(),
                scroll: 0,
            };
        }
    }

    pub(crate) fn help_scroll_down(&mut self) {
        if let ModalState::Help { scroll, keybindings } = &mut self.state.modal {
            // Each keybinding is 1 line plus category headers (2 lines each)
            let mut categories = 0;
            let mut last_category = "";
            for kb in keybindings.iter() {
                if kb.category != last_category {
                    categories += 1;
                    last_category = kb.category;
                }
            }
            let content_lines = keybindings.len() + categories * 2;
            let max_scroll = content_lines.saturating_sub(10); // Approx visible area

            if *scroll < max_scroll {
                *scroll = scroll.saturating_add(1);
            }
        }
    }

    pub(crate) fn help_scroll_up(&mut self) {
        if let ModalState::Help { scroll, .. } = &mut self.state.modal {
            *scroll = scroll.saturating_sub(1);
        }
    }
}
