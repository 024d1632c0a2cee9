//! Application state types
//!
//! All state types live here to maintain clean dependency:
//! UI layer imports from app layer, not vice versa.

use crate::ai::Tone;
use crate::constants::ERROR_TTL_SECS;
use crate::input::KeybindingEntry;

/// A saved snapshot of a generated reply. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub reply: String,
    /// Formatted local timestamp taken when the draft was saved
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Compose,
    /// Saved drafts list
    Drafts,
}

/// Focusable field on the compose view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Email,
    Tone,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Self::Email => Self::Tone,
            Self::Tone => Self::Email,
        }
    }

    pub fn prev(self) -> Self {
        // Two fields, so prev == next
        self.next()
    }
}

/// Modal overlay state - only one can be active at a time
#[derive(Debug, Clone, Default)]
pub enum ModalState {
    #[default]
    None,
    Help {
        keybindings: Vec<KeybindingEntry>,
        scroll: usize,
    },
}

impl ModalState {
    pub fn is_help(&self) -> bool {
        matches!(self, Self::Help { .. })
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Loading, error, and status message state
#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub loading: bool,
    pub error: Option<String>,
    pub error_time: Option<std::time::Instant>,
    pub message: String,
    /// Persists after error bar expires - shown as indicator in status bar
    pub has_unacknowledged_error: bool,
}

impl StatusState {
    pub fn set_error(&mut self, error: impl ToString) {
        self.error = Some(error.to_string());
        self.error_time = Some(std::time::Instant::now());
        self.has_unacknowledged_error = true;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
        self.error_time = None;
    }

    /// Acknowledge the error indicator (clear the persistent flag)
    /// Call this on user input to dismiss the status bar indicator
    pub fn acknowledge_error(&mut self) {
        self.has_unacknowledged_error = false;
    }

    /// Clear error if TTL expired. Returns true if error was cleared.
    pub fn clear_error_if_expired(&mut self) -> bool {
        if let Some(time) = self.error_time
            && time.elapsed().as_secs() >= ERROR_TTL_SECS
        {
            self.clear_error();
            true
        } else {
            false
        }
    }

    pub fn set_message(&mut self, msg: impl ToString) {
        self.message = msg.to_string();
    }
}

/// Drafts view state
#[derive(Debug, Clone, Default)]
pub struct DraftsViewState {
    pub selected: usize,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub view: View,
    pub focus: Field,

    /// The pasted email text being replied to
    pub email_input: String,
    /// Selected reply tone; always valid
    pub tone: Tone,
    /// Last generated reply; present only after a successful attempt
    pub reply: Option<String>,
    /// Monotonically increasing attempt counter. Settlement events carry
    /// the sequence they belong to; mismatches are stale and dropped.
    pub attempt_seq: u64,

    // Status state (loading, error, status message)
    pub status: StatusState,

    /// Saved drafts, insertion order, append-only
    pub drafts: Vec<Draft>,
    pub drafts_view: DraftsViewState,

    /// Scroll position in the reply pane
    pub reply_scroll: usize,

    // Modal overlay state (help)
    pub modal: ModalState,

    /// Whether an API token was resolved at startup
    pub token_configured: bool,
}

impl AppState {
    /// Whether the generate trigger is currently usable.
    /// Whitespace-only input counts as empty; a running attempt blocks a
    /// second one.
    pub fn can_generate(&self) -> bool {
        !self.status.loading && !self.email_input.trim().is_empty()
    }

    /// Start a generation attempt: flip to loading, drop the previous
    /// reply and error, and return the new attempt sequence.
    pub fn begin_attempt(&mut self) -> u64 {
        self.status.loading = true;
        self.status.clear_error();
        self.reply = None;
        self.reply_scroll = 0;
        self.attempt_seq += 1;
        self.attempt_seq
    }

    /// Settle a generation attempt. Returns false (and changes nothing)
    /// when `seq` does not match the current attempt - a superseded
    /// request whose response arrived late.
    ///
    /// After a matching settlement exactly one of `reply`/`error` is set
    /// and `loading` is false.
    pub fn settle_attempt(&mut self, seq: u64, outcome: Result<String, String>) -> bool {
        if seq != self.attempt_seq {
            return false;
        }
        match outcome {
            Ok(text) => {
                self.reply = Some(text);
                self.status.clear_error();
            }
            Err(message) => {
                self.reply = None;
                self.status.set_error(message);
            }
        }
        self.status.loading = false;
        true
    }

    /// Append the current reply to the draft list. Returns false when
    /// there is no reply to save. Duplicates are appended, not merged.
    pub fn save_draft(&mut self, date: String) -> bool {
        match &self.reply {
            Some(reply) if !reply.is_empty() => {
                self.drafts.push(Draft {
                    reply: reply.clone(),
                    date,
                });
                true
            }
            _ => false,
        }
    }

    pub fn cycle_tone_next(&mut self) {
        self.tone = self.tone.next();
    }

    pub fn cycle_tone_prev(&mut self) {
        self.tone = self.tone.prev();
    }

    /// Move drafts selection down (bounded)
    pub fn drafts_move_down(&mut self) {
        if !self.drafts.is_empty() && self.drafts_view.selected < self.drafts.len() - 1 {
            self.drafts_view.selected += 1;
        }
    }

    /// Move drafts selection up
    pub fn drafts_move_up(&mut self) {
        self.drafts_view.selected = self.drafts_view.selected.saturating_sub(1);
    }

    /// Currently selected draft, if any
    pub fn selected_draft(&self) -> Option<&Draft> {
        self.drafts.get(self.drafts_view.selected)
    }

    /// Get maximum reply scroll value based on current content
    pub fn max_reply_scroll(&self) -> usize {
        match &self.reply {
            Some(reply) => reply.lines().count().saturating_sub(1),
            None => 0,
        }
    }

    /// Scroll the reply pane by delta (bounded)
    pub fn scroll_reply_by(&mut self, delta: i32) {
        let max = self.max_reply_scroll();
        let new_scroll = (self.reply_scroll as i32 + delta).clamp(0, max as i32);
        self.reply_scroll = new_scroll as usize;
    }

    // Delegate methods to StatusState
    pub fn set_error(&mut self, error: impl ToString) {
        self.status.set_error(error);
    }

    pub fn clear_error_if_expired(&mut self) -> bool {
        self.status.clear_error_if_expired()
    }

    pub fn acknowledge_error(&mut self) {
        self.status.acknowledge_error();
    }

    pub fn set_status(&mut self, msg: impl ToString) {
        self.status.set_message(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_input(input: &str) -> AppState {
        AppState {
            email_input: input.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_can_generate_requires_non_whitespace_input() {
        assert!(!state_with_input("").can_generate());
        assert!(!state_with_input("   \n\t").can_generate());
        assert!(state_with_input("Hello there").can_generate());
    }

    #[test]
    fn test_can_generate_blocked_while_loading() {
        let mut state = state_with_input("Hello");
        state.begin_attempt();
        assert!(!state.can_generate());
    }

    #[test]
    fn test_begin_attempt_clears_prior_cycle() {
        let mut state = state_with_input("Hello");
        state.reply = Some("old reply".to_string());
        state.set_error("old error");
        state.reply_scroll = 3;

        let seq = state.begin_attempt();

        assert_eq!(seq, 1);
        assert!(state.status.loading);
        assert_eq!(state.reply, None);
        assert_eq!(state.status.error, None);
        assert_eq!(state.reply_scroll, 0);
    }

    #[test]
    fn test_settlement_sets_exactly_one_of_reply_or_error() {
        for tone in Tone::ALL {
            let mut state = state_with_input("Hello");
            state.tone = tone;

            let seq = state.begin_attempt();
            assert!(state.settle_attempt(seq, Ok("Dear sender".to_string())));
            assert!(!state.status.loading);
            assert!(state.reply.is_some() != state.status.error.is_some());

            let seq = state.begin_attempt();
            assert!(state.settle_attempt(seq, Err("boom".to_string())));
            assert!(!state.status.loading);
            assert!(state.reply.is_some() != state.status.error.is_some());
        }
    }

    #[test]
    fn test_stale_settlement_is_discarded() {
        let mut state = state_with_input("Hello");
        let old_seq = state.begin_attempt();
        // A second attempt supersedes the first before it settles
        let new_seq = state.begin_attempt();

        assert!(!state.settle_attempt(old_seq, Ok("stale".to_string())));
        assert!(state.status.loading); // still waiting on the live attempt
        assert_eq!(state.reply, None);

        assert!(state.settle_attempt(new_seq, Ok("fresh".to_string())));
        assert_eq!(state.reply.as_deref(), Some("fresh"));
    }

    #[test]
    fn test_loading_true_strictly_between_begin_and_settle() {
        let mut state = state_with_input("Hello");
        assert!(!state.status.loading);
        let seq = state.begin_attempt();
        assert!(state.status.loading);
        state.settle_attempt(seq, Err("network".to_string()));
        assert!(!state.status.loading);
    }

    #[test]
    fn test_save_draft_noop_without_reply() {
        let mut state = AppState::default();
        assert!(!state.save_draft("2026-08-07 12:00".to_string()));
        assert!(state.drafts.is_empty());
    }

    #[test]
    fn test_save_draft_twice_appends_two_entries_in_order() {
        let mut state = AppState::default();
        state.reply = Some("Same reply".to_string());

        assert!(state.save_draft("2026-08-07 12:00".to_string()));
        assert!(state.save_draft("2026-08-07 12:01".to_string()));

        assert_eq!(state.drafts.len(), 2);
        assert_eq!(state.drafts[0].reply, "Same reply");
        assert_eq!(state.drafts[1].reply, "Same reply");
        assert_eq!(state.drafts[0].date, "2026-08-07 12:00");
        assert_eq!(state.drafts[1].date, "2026-08-07 12:01");
    }

    #[test]
    fn test_failed_attempt_preserves_input_and_drafts() {
        let mut state = state_with_input("Please review the attached.");
        state.reply = Some("Draft text".to_string());
        state.save_draft("2026-08-07 09:00".to_string());

        let seq = state.begin_attempt();
        state.settle_attempt(seq, Err("service down".to_string()));

        assert_eq!(state.email_input, "Please review the attached.");
        assert_eq!(state.drafts.len(), 1);
    }

    #[test]
    fn test_drafts_navigation_bounded() {
        let mut state = AppState::default();
        state.reply = Some("a".to_string());
        state.save_draft("d1".to_string());
        state.save_draft("d2".to_string());

        state.drafts_move_up();
        assert_eq!(state.drafts_view.selected, 0);
        state.drafts_move_down();
        assert_eq!(state.drafts_view.selected, 1);
        state.drafts_move_down();
        assert_eq!(state.drafts_view.selected, 1);
    }
}
