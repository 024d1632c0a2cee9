//! Generation attempt handlers

use crate::ai::{AiCommand, GenError};
use crate::app::state::View;
use crate::clipboard;

use super::super::App;

impl App {
    /// Start a generation attempt with the current input and tone.
    ///
    /// Preconditions are enforced here, at the trigger boundary: non-empty
    /// input, no attempt already in flight, and a configured credential.
    pub(crate) async fn start_generation(&mut self) {
        if !matches!(self.state.view, View::Compose) {
            return;
        }

        if !self.state.can_generate() {
            if self.state.status.loading {
                self.state.set_status("Already generating...");
            } else {
                self.state.set_status("Paste an email first");
            }
            return;
        }

        // Credential check happens before any network traffic so a missing
        // token reads as a config problem, not a network one.
        let Some(ref ai) = self.ai_actor else {
            self.state.set_error(GenError::MissingToken);
            return;
        };

        let seq = self.state.begin_attempt();
        self.dirty = true;
        self.state
            .set_status(format!("Generating {} reply...", self.state.tone));

        let _ = ai
            .cmd_tx
            .send(AiCommand::GenerateReply {
                seq,
                email: self.state.email_input.clone(),
                tone: self.state.tone,
            })
            .await;
    }

    /// Re-run generation with whatever the input and tone are right now.
    pub(crate) async fn regenerate(&mut self) {
        self.start_generation().await;
    }

    /// Copy the current reply (or the selected draft in the drafts view)
    /// to the system clipboard.
    pub(crate) fn copy_to_clipboard(&mut self) {
        let text = match self.state.view {
            View::Drafts => self.state.selected_draft().map(|d| d.reply.clone()),
            View::Compose => self.state.reply.clone(),
        };

        let Some(text) = text.filter(|t| !t.is_empty()) else {
            self.state.set_status("Nothing to copy");
            return;
        };

        match clipboard::copy_text(&text) {
            Ok(()) => self.state.set_status("Copied to clipboard"),
            Err(e) => {
                tracing::warn!("clipboard copy failed: {:#}", e);
                self.state.set_error("Could not access the clipboard");
            }
        }
    }
}
