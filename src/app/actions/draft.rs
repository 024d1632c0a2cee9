//! Draft handling

use chrono::Local;

use super::super::App;

impl App {
    /// Save the current reply as a draft with a local timestamp.
    /// No-op when there is no reply.
    pub(crate) fn save_current_draft(&mut self) {
        let date = Local::now()
            .format(&self.config.ui.date_format)
            .to_string();

        if self.state.save_draft(date) {
            self.state
                .set_status(format!("Draft saved ({} total)", self.state.drafts.len()));
        } else {
            self.state.set_status("No reply to save");
        }
    }
}
