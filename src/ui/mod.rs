mod compose;
mod drafts;
mod help;
mod status_bar;
pub mod theme;
mod widgets;

use ratatui::Frame;

use crate::app::state::{AppState, ModalState, View};

pub fn render(frame: &mut Frame, state: &AppState) {
    match state.view {
        View::Compose => compose::render_compose(frame, state),
        View::Drafts => drafts::render_drafts(frame, state),
    }

    // Modal overlays render on top of the active view
    if let ModalState::Help {
        ref keybindings,
        scroll,
    } = state.modal
    {
        help::render_help(frame, keybindings, scroll);
    }
}
